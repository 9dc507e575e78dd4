//! Wishlist Service API
//!
//! Requests are plain data (`ApiRequest`) built by the endpoint modules and
//! sent through a `Transport`, so the view logic never touches `fetch`.

mod error;
mod http;
mod item;
mod wishlist;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use std::fmt;

pub use error::{ApiError, GENERIC_ERROR};
pub use http::HttpTransport;
pub use item::*;
pub use wishlist::*;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped inside a query value
const QUERY_VALUE: &AsciiSet = &PATH_SEGMENT.add(b'&').add(b'=').add(b'+');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// One HTTP call against the service, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: String) -> Self {
        Self { method: Method::Get, path, body: None }
    }

    pub fn delete(path: String) -> Self {
        Self { method: Method::Delete, path, body: None }
    }

    pub fn post(path: String, body: Value) -> Self {
        Self { method: Method::Post, path, body: Some(body) }
    }

    pub fn put(path: String, body: Value) -> Self {
        Self { method: Method::Put, path, body: Some(body) }
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Sends requests and yields the decoded JSON body (`Null` when empty)
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError>;
}

/// Encode a form value for use as one path segment
pub fn segment(value: &str) -> String {
    utf8_percent_encode(value.trim(), PATH_SEGMENT).to_string()
}

/// Encode a form value for use in a query string
pub fn query_value(value: &str) -> String {
    utf8_percent_encode(value.trim(), QUERY_VALUE).to_string()
}

/// Service health probe
pub fn healthcheck() -> ApiRequest {
    ApiRequest::get("/healthcheck".to_string())
}
