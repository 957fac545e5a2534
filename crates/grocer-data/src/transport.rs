//! Pluggable request transports.
//!
//! Native builds send through `reqwest`; `wasm32` builds go through Spin's
//! outbound HTTP. Tests substitute their own [`Transport`].

use crate::{FetchError, RequestBuilder, Response};
use async_trait::async_trait;

/// Something that can carry a request to the API and bring back a response.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;

#[cfg(target_arch = "wasm32")]
pub use spin::SpinTransport;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use crate::Method;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Transport backed by a shared `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .user_agent(user_agent)
                .build()
                .map_err(|e| FetchError::RequestError(format!("failed to build http client: {e}")))?;
            Ok(Self { client })
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            let method = match request.method() {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
            };

            let mut outgoing = self.client.request(method, request.url());
            for (key, value) in request.headers() {
                outgoing = outgoing.header(key.as_str(), value.as_str());
            }
            if let Some(body) = request.body() {
                outgoing = outgoing.body(body.to_vec());
            }

            let response = outgoing.send().await?;
            let status = response.status().as_u16();
            let headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
                .collect();
            let body = response.bytes().await?.to_vec();

            Ok(Response::new(status, headers, body))
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod spin {
    use super::*;
    use crate::Method;
    use std::collections::HashMap;

    /// Transport over Spin's outbound HTTP.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SpinTransport;

    #[async_trait(?Send)]
    impl Transport for SpinTransport {
        async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
            use spin_sdk::http::{Method as SpinMethod, Request};

            let method = match request.method() {
                Method::Get => SpinMethod::Get,
                Method::Post => SpinMethod::Post,
            };

            let mut builder = Request::builder();
            builder.method(method);
            builder.uri(request.url());
            for (key, value) in request.headers() {
                builder.header(key.as_str(), value.as_str());
            }
            if let Some(body) = request.body() {
                builder.body(body.to_vec());
            }

            let response: spin_sdk::http::Response = spin_sdk::http::send(builder.build())
                .await
                .map_err(|e| FetchError::RequestError(e.to_string()))?;

            let status = *response.status();
            let headers: HashMap<String, String> = response
                .headers()
                .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
                .collect();
            let body = response.into_body();

            Ok(Response::new(status, headers, body))
        }
    }
}
