//! # Request utility — the single path every backend call goes through
//!
//! API wrappers never talk to `reqwest` directly. They build an [`ApiRequest`]
//! (method, path relative to the API base, optional JSON body) and hand it to
//! an [`ApiClient`], which forwards it to a [`Transport`] and decodes the reply
//! into an [`ApiResponse`].
//!
//! ## [`Transport`] trait
//!
//! One async method, `send`, returning the raw response body. Implementations:
//!
//! | Type | Use |
//! |------|-----|
//! | [`HttpTransport`] | `reqwest` client against the real backend (native and WASM). Adds the bearer token when one is set and maps non-2xx statuses to [`ApiError::Status`]. |
//! | [`RecordingTransport`] | In-memory transport that records requests and replays queued bodies. Lets tests check the exact method, path and body of a call. |

use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::ApiResponse;

/// HTTP verb of an [`ApiRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call to the backend, before any transport is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, always starting with `/`.
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::with_body(Method::Post, path.into(), body)
    }

    pub fn put<B: Serialize + ?Sized>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Self::with_body(Method::Put, path.into(), body)
    }

    fn with_body<B: Serialize + ?Sized>(
        method: Method,
        path: String,
        body: &B,
    ) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        Ok(Self {
            method,
            path,
            body: Some(body),
        })
    }
}

/// Async trait for delivering an [`ApiRequest`] and returning the raw body.
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<String, ApiError>>;
}

/// `reqwest`-backed transport.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Builder method to send `Authorization: Bearer <token>` with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a request path.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        let url = self.url_for(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!("{} {} returned {}", request.method, url, status);
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

/// In-memory transport for tests and offline rendering.
///
/// Every request is recorded; replies are served first in, first out.
#[derive(Clone, Debug, Default)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<ApiRequest>>>,
    replies: Arc<Mutex<VecDeque<String>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body.
    pub fn push_reply(&self, body: impl Into<String>) {
        self.replies.lock().unwrap().push_back(body.into());
    }

    /// Queue a response envelope.
    pub fn push_response<T: Serialize>(&self, response: &ApiResponse<T>) {
        let body = serde_json::to_string(response).expect("response envelope serializes");
        self.push_reply(body);
    }

    /// All requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<String, ApiError> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ApiError::Http(format!("no reply queued for {path}")))
    }
}

/// Entry point for API wrappers: sends requests and decodes the envelope.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Send a request and decode the body as `ApiResponse<R>`.
    pub async fn request<R: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<ApiResponse<R>, ApiError> {
        tracing::debug!("{} {}", request.method, request.path);
        let body = self.transport.send(request).await?;
        serde_json::from_str(&body).map_err(ApiError::Decode)
    }
}
