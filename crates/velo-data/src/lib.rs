//! HTTP fetch client for VeloShop.
//!
//! Provides a small builder API over the browser's `fetch` for
//! client-rendered WASM applications, with automatic JSON handling. Off
//! wasm32 the transport is inert (requests resolve to an empty `200`), so
//! crates that depend on this one still compile and test on the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use velo_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product {
//!     id: u64,
//!     title: String,
//! }
//!
//! let client = FetchClient::new();
//! let catalog: Vec<Product> = client
//!     .get("https://api.example.com/products")
//!     .accept("application/json")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

use std::collections::HashMap;

/// HTTP client for making outbound requests.
///
/// A lightweight wrapper around the platform fetch primitive with a
/// convenient builder API for constructing and sending requests.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client.
    pub fn new() -> Self {
        Self {
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative
    /// request paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Get, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> ClientRequestBuilder {
        self.request(Method::Post, url)
    }

    /// Create a request with the given method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }

        ClientRequestBuilder { builder }
    }
}

/// A request builder bound to a client.
#[derive(Debug, Clone)]
pub struct ClientRequestBuilder {
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Send the request through the browser's `fetch` and buffer the response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, FetchError> {
        use js_sys::Uint8Array;
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, RequestMode};

        let opts = RequestInit::new();
        opts.set_method(self.builder.method.as_str());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &self.builder.body {
            opts.set_body(&Uint8Array::from(body.as_slice()).into());
        }

        let request = Request::new_with_str_and_init(&self.builder.url, &opts)
            .map_err(|e| FetchError::RequestError(format!("{e:?}")))?;
        for (key, value) in &self.builder.headers {
            request
                .headers()
                .set(key, value)
                .map_err(|e| FetchError::RequestError(format!("{e:?}")))?;
        }

        let window = web_sys::window()
            .ok_or_else(|| FetchError::RequestError("no window object".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| FetchError::RequestError(format!("{e:?}")))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| FetchError::RequestError("fetch did not return a Response".to_string()))?;

        let status = response.status();
        let headers = collect_headers(&response);

        let text_promise = response
            .text()
            .map_err(|e| FetchError::RequestError(format!("{e:?}")))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|e| FetchError::RequestError(format!("{e:?}")))?;
        let body = text.as_string().unwrap_or_default().into_bytes();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request (non-WASM stub used by host-side tests).
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        Ok(Response::new(200, HashMap::new(), Vec::new()))
    }
}

/// Copy the response headers into a plain map.
#[cfg(target_arch = "wasm32")]
fn collect_headers(response: &web_sys::Response) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if let Ok(Some(iter)) = js_sys::try_iter(response.headers().as_ref()) {
        for entry in iter.flatten() {
            let pair = js_sys::Array::from(&entry);
            if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                headers.insert(key, value);
            }
        }
    }
    headers
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Method, Response};
}
