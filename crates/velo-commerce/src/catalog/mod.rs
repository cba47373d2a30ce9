//! Product catalog types.
//!
//! The catalog is an in-memory list of [`Product`] records, fetched once
//! from the remote endpoint and never mutated afterwards.

mod product;

pub use product::Product;
