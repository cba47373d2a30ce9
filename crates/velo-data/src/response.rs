//! HTTP response handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// An HTTP response, fully buffered.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Get a header value. Lookup is case-insensitive.
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "Unknown error".to_string());
            Err(FetchError::HttpError {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    fn response_with_header(key: &str, value: &str) -> Response {
        let mut headers = HashMap::new();
        headers.insert(key.to_string(), value.to_string());
        Response::new(200, headers, Vec::new())
    }

    #[test]
    fn test_is_success() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(301, b"").is_success());
        assert!(!response(404, b"").is_success());
        assert!(!response(500, b"").is_success());
    }

    #[test]
    fn test_text() {
        assert_eq!(response(200, b"hello").text().unwrap(), "hello");
        assert!(response(200, &[0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn test_json() {
        #[derive(Deserialize, Debug, PartialEq)]
        struct Record {
            id: u64,
            title: String,
        }

        let resp = response(200, br#"{"id": 1, "title": "Red Shoe"}"#);
        let record: Record = resp.json().unwrap();
        assert_eq!(
            record,
            Record {
                id: 1,
                title: "Red Shoe".to_string()
            }
        );
    }

    #[test]
    fn test_json_rejects_non_json_body() {
        let resp = response(200, b"<html>oops</html>");
        let result: Result<serde_json::Value, _> = resp.json();
        assert!(matches!(result, Err(FetchError::ParseError(_))));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let resp = response_with_header("Content-Type", "application/json");
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.content_type(), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
    }

    #[test]
    fn test_error_for_status() {
        assert!(response(200, b"ok").error_for_status().is_ok());

        let err = response(500, b"boom").error_for_status().unwrap_err();
        match err {
            FetchError::HttpError { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
