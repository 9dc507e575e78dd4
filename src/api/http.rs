use async_trait::async_trait;
use serde_json::Value;

use super::{ApiError, ApiRequest, Transport};

/// `fetch`-backed transport rooted at the configured API base
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), request.path)
    }
}

/// Empty bodies (204, bare DELETE answers) decode to `Null`
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        use super::Method;
        use gloo_net::http::Request;

        let url = self.url(request);
        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Content-Type", "application/json");

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::from_response(status, &text));
        }
        decode_body(&text)
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        Err(ApiError::Network(format!(
            "{} unavailable: HTTP transport needs a browser",
            self.url(request)
        )))
    }
}
