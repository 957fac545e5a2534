//! HTTP client and API bindings for Grocer.
//!
//! Provides a small builder API over a pluggable [`Transport`] and the four
//! calls of the grocery comparison API.
//!
//! # Example
//!
//! ```rust,ignore
//! use grocer_data::{FetchClient, GroceryApi, ReqwestTransport};
//! use std::time::Duration;
//!
//! let transport = ReqwestTransport::new(Duration::from_secs(10), "grocer/0.1")?;
//! let client = FetchClient::new(transport).with_base_url("http://localhost:8081");
//! let api = GroceryApi::new(client);
//!
//! let deals = api.top_deals(50).await?;
//! ```

mod api;
mod envelope;
mod error;
mod request;
mod response;
mod transport;

pub use api::GroceryApi;
pub use envelope::products_from_body;
pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;
pub use transport::Transport;

#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;

use std::sync::Arc;

/// HTTP client for making outbound requests.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FetchClient {
    /// Create a new HTTP client over the given transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_shared(Arc::new(transport))
    }

    /// Create a client over an already shared transport.
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
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

    /// Create a request with a custom method.
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

        ClientRequestBuilder {
            transport: Arc::clone(&self.transport),
            builder: RequestBuilder::new(method, full_url),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    transport: Arc<dyn Transport>,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Append a percent-encoded query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.builder = self.builder.query(key, value);
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        self.builder = self.builder.json(value)?;
        Ok(self)
    }

    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// The request as it will be sent.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and return the response.
    pub async fn send(self) -> Result<Response, FetchError> {
        self.transport.send(self.builder).await
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, GroceryApi, Method, Response, Transport};
}
