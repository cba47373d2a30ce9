//! Observability for VeloShop: structured console logging.
//!
//! A client-rendered page has one sink worth writing to, the browser
//! console, so this crate provides a level-filtered structured logger that
//! formats entries as JSON or human-readable text and writes them through
//! `web_sys::console` on wasm32 (stderr elsewhere).

mod logging;

pub use logging::{LogBuilder, LogEntry, LogFormat, LogLevel, StructuredLogger};
