//! Authenticated GET + JSON decode
//!
//! The `Transport` trait is the one network primitive the client is built on.
//! `HttpTransport` implements it over a blocking reqwest client.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use super::{ApiError, Credentials};

/// Issues a GET with Basic auth and decodes the body as JSON
pub trait Transport {
    /// Fetches `url` and returns the decoded body
    ///
    /// The HTTP status is not inspected: whatever body comes back is decoded,
    /// and a non-JSON body surfaces as `ApiError::ParseError`.
    fn get_json(&self, url: &str, credentials: &Credentials) -> Result<Value, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_json(&self, url: &str, credentials: &Credentials) -> Result<Value, ApiError> {
        (**self).get_json(url, credentials)
    }
}

/// Transport backed by `reqwest::blocking::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around a preconfigured HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str, credentials: &Credentials) -> Result<Value, ApiError> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .basic_auth(&credentials.key, Some(&credentials.secret))
            .send()?;
        debug!(url, status = %response.status(), "response received");

        let body = response.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
