//! # Development proxy
//!
//! During local development the browser talks to the Dioxus server only. Calls
//! under the prefixes below are forwarded to the backend with the leading
//! `/api` segment removed, so `/api/user/5` reaches `<backend>/user/5`.
//!
//! | Prefix | Backend area |
//! |--------|--------------|
//! | `/api/user` | accounts and profiles |
//! | `/api/admin` | administration |
//! | `/api/fitness` | fitness plans |
//! | `/api/diet` | diet plans |
//! | `/api/ai` | assistant |
//!
//! [`DevProxy::rewrite`] holds the mapping. With the `server` feature,
//! [`router`] mounts an axum handler that performs the forwarding.

pub const BACKEND_URL_VAR: &str = "FITTRACK_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";
const STRIPPED_SEGMENT: &str = "/api";

/// Path prefixes forwarded to the backend.
pub const PROXY_PREFIXES: [&str; 5] = [
    "/api/user",
    "/api/admin",
    "/api/fitness",
    "/api/diet",
    "/api/ai",
];

/// A single forwarded path prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyRule {
    pub prefix: &'static str,
}

impl ProxyRule {
    /// Whether `path` (optionally with a query string) falls under this prefix.
    /// `/api/users` does not match `/api/user`.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DevProxy {
    backend: String,
    rules: Vec<ProxyRule>,
}

impl Default for DevProxy {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl DevProxy {
    pub fn new(backend: impl Into<String>) -> Self {
        let backend: String = backend.into();
        Self {
            backend: backend.trim_end_matches('/').to_string(),
            rules: PROXY_PREFIXES
                .iter()
                .map(|&prefix| ProxyRule { prefix })
                .collect(),
        }
    }

    /// Backend origin from `FITTRACK_BACKEND_URL`, or the local default.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var(BACKEND_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn backend(&self) -> &str {
        &self.backend
    }

    pub fn rules(&self) -> &[ProxyRule] {
        &self.rules
    }

    /// Map a request path and query onto the backend URL, or `None` when no
    /// rule covers it.
    pub fn rewrite(&self, path_and_query: &str) -> Option<String> {
        self.rules.iter().find(|rule| rule.matches(path_and_query))?;
        let stripped = path_and_query.strip_prefix(STRIPPED_SEGMENT)?;
        Some(format!("{}{}", self.backend, stripped))
    }
}

#[cfg(feature = "server")]
pub use server::{forward, router, ProxyState};

#[cfg(feature = "server")]
mod server {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::extract::{Request, State};
    use axum::http::{header, StatusCode};
    use axum::response::{IntoResponse, Response};
    use axum::routing::any;
    use axum::Router;

    use super::DevProxy;
    use crate::error::ApiError;

    const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

    /// Shared state of the forwarding handler.
    #[derive(Clone, Debug)]
    pub struct ProxyState {
        proxy: Arc<DevProxy>,
        client: reqwest::Client,
    }

    impl ProxyState {
        /// The client never follows redirects, so a backend 3xx reaches the
        /// browser as is.
        pub fn new(proxy: DevProxy) -> Result<Self, ApiError> {
            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?;
            Ok(Self {
                proxy: Arc::new(proxy),
                client,
            })
        }
    }

    /// Router that forwards `/api/*` to the backend.
    pub fn router(proxy: DevProxy) -> Result<Router, ApiError> {
        Ok(Router::new()
            .route("/api/{*path}", any(forward))
            .with_state(ProxyState::new(proxy)?))
    }

    /// Forward one request to the backend and relay its response.
    pub async fn forward(State(state): State<ProxyState>, request: Request) -> Response {
        let (parts, body) = request.into_parts();
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let Some(target) = state.proxy.rewrite(path_and_query) else {
            return StatusCode::NOT_FOUND.into_response();
        };

        let body = match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Proxy could not read request body: {}", e);
                return StatusCode::PAYLOAD_TOO_LARGE.into_response();
            }
        };

        let mut headers = parts.headers;
        headers.remove(header::HOST);

        tracing::debug!("Proxy {} {} -> {}", parts.method, path_and_query, target);

        let upstream = match state
            .client
            .request(parts.method, &target)
            .headers(headers)
            .body(body)
            .send()
            .await
        {
            Ok(upstream) => upstream,
            Err(e) => {
                tracing::error!("Proxy to {} failed: {}", target, e);
                return StatusCode::BAD_GATEWAY.into_response();
            }
        };

        let status = upstream.status();
        let mut headers = upstream.headers().clone();
        headers.remove(header::TRANSFER_ENCODING);
        headers.remove(header::CONTENT_LENGTH);
        headers.remove(header::CONNECTION);

        match upstream.bytes().await {
            Ok(bytes) => {
                let mut response = Response::new(Body::from(bytes));
                *response.status_mut() = status;
                *response.headers_mut() = headers;
                response
            }
            Err(e) => {
                tracing::error!("Proxy response from {} failed: {}", target, e);
                StatusCode::BAD_GATEWAY.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_strips_api_segment() {
        let proxy = DevProxy::new("http://localhost:8081/");
        assert_eq!(proxy.backend(), "http://localhost:8081");
        assert_eq!(
            proxy.rewrite("/api/user/5").as_deref(),
            Some("http://localhost:8081/user/5")
        );
        assert_eq!(
            proxy.rewrite("/api/user/check/email/a@b.c").as_deref(),
            Some("http://localhost:8081/user/check/email/a@b.c")
        );
        assert_eq!(
            proxy.rewrite("/api/diet/plans?page=2").as_deref(),
            Some("http://localhost:8081/diet/plans?page=2")
        );
        assert_eq!(proxy.rewrite("/api/ai").as_deref(), Some("http://localhost:8081/ai"));
    }

    #[test]
    fn test_every_prefix_is_forwarded() {
        let proxy = DevProxy::default();
        assert_eq!(proxy.rules().len(), PROXY_PREFIXES.len());
        for prefix in PROXY_PREFIXES {
            let rewritten = proxy.rewrite(&format!("{prefix}/x")).unwrap();
            assert!(rewritten.starts_with("http://localhost:8081/"));
            assert!(!rewritten.contains("/api/"));
        }
    }

    #[test]
    fn test_unmatched_paths() {
        let proxy = DevProxy::default();
        assert!(proxy.rewrite("/api/users/1").is_none());
        assert!(proxy.rewrite("/api/other").is_none());
        assert!(proxy.rewrite("/user/1").is_none());
        assert!(proxy.rewrite("/").is_none());
    }

    #[cfg(feature = "server")]
    mod forwarding {
        use axum::body::{to_bytes, Body};
        use axum::extract::{Path, RawQuery, Request, State};
        use axum::http::{header, HeaderMap, StatusCode};
        use axum::response::{Redirect, Response};
        use axum::routing::{get, post};
        use axum::Router;

        use super::super::{forward, DevProxy, ProxyState};

        /// Serve `app` on an ephemeral local port and return its origin.
        async fn spawn_backend(app: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });
            format!("http://{addr}")
        }

        fn backend() -> Router {
            Router::new()
                .route(
                    "/user/{id}",
                    get(
                        |Path(id): Path<String>, RawQuery(query): RawQuery, headers: HeaderMap| async move {
                            let host = headers
                                .get(header::HOST)
                                .and_then(|h| h.to_str().ok())
                                .unwrap_or_default()
                                .to_string();
                            (
                                StatusCode::CREATED,
                                [("x-backend", "fittrack")],
                                format!("id={id} query={} host={host}", query.unwrap_or_default()),
                            )
                        },
                    ),
                )
                .route("/user/login", get(|| async { Redirect::to("/user/elsewhere") }))
                .route("/user/elsewhere", get(|| async { "followed" }))
                .route("/diet/echo", post(|body: String| async move { body }))
        }

        async fn send(proxy: DevProxy, request: Request) -> Response {
            let state = ProxyState::new(proxy).unwrap();
            forward(State(state), request).await
        }

        async fn body_text(response: Response) -> String {
            let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            String::from_utf8(bytes.to_vec()).unwrap()
        }

        #[tokio::test]
        async fn test_forward_rejects_unknown_prefix() {
            let request = Request::builder()
                .uri("/api/unknown/1")
                .body(Body::empty())
                .unwrap();
            let response = send(DevProxy::default(), request).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }

        #[tokio::test]
        async fn test_forward_relays_status_headers_and_query() {
            let origin = spawn_backend(backend()).await;
            let request = Request::builder()
                .uri("/api/user/5?fields=all")
                .header(header::HOST, "frontend.local")
                .body(Body::empty())
                .unwrap();

            let response = send(DevProxy::new(origin.clone()), request).await;
            assert_eq!(response.status(), StatusCode::CREATED);
            assert_eq!(response.headers()["x-backend"], "fittrack");

            let text = body_text(response).await;
            let backend_host = origin.trim_start_matches("http://");
            assert_eq!(text, format!("id=5 query=fields=all host={backend_host}"));
        }

        #[tokio::test]
        async fn test_forward_passes_request_body() {
            let origin = spawn_backend(backend()).await;
            let request = Request::builder()
                .method("POST")
                .uri("/api/diet/echo")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"a":1}"#))
                .unwrap();

            let response = send(DevProxy::new(origin), request).await;
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_text(response).await, r#"{"a":1}"#);
        }

        #[tokio::test]
        async fn test_forward_does_not_follow_redirects() {
            let origin = spawn_backend(backend()).await;
            let request = Request::builder()
                .uri("/api/user/login")
                .body(Body::empty())
                .unwrap();

            let response = send(DevProxy::new(origin), request).await;
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/user/elsewhere");
        }

        #[tokio::test]
        async fn test_forward_reports_unreachable_backend() {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let request = Request::builder()
                .uri("/api/user/5")
                .body(Body::empty())
                .unwrap();
            let response = send(DevProxy::new(format!("http://{addr}")), request).await;
            assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        }
    }
}
