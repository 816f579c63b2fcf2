//! Integration tests for the TradeHub storefront.
//!
//! The tests drive the fully layered application in-process with
//! [`tower::ServiceExt::oneshot`]; no server or network is involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tradehub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `locale` - language selection and persistence
//! - `access_gate` - route guards, denial views and the loading state
//! - `chat` - the simulated support chat
//! - `forms` - validation and mock registration flows

use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use tower::ServiceExt;
use tradehub_storefront::config::{MockBackendConfig, StorefrontConfig};
use tradehub_storefront::middleware::DEFERRED_HEADER;
use tradehub_storefront::state::AppState;

/// Response bodies are never larger than this in tests.
const BODY_LIMIT: usize = 1024 * 1024;

/// Configuration with no artificial latency and no rate limiting.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        mock: MockBackendConfig::instant(),
        rate_limit: false,
        ..StorefrontConfig::default()
    }
}

/// A buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    /// Whether the body contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.body.contains(needle)
    }
}

/// One browser: the application plus a cookie jar holding the session.
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
    accept_language: Option<String>,
}

impl TestClient {
    /// A client against the default test configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        Self {
            app: tradehub_storefront::app(AppState::new(config)),
            cookie: None,
            accept_language: None,
        }
    }

    /// Send `Accept-Language` on every following request.
    #[must_use]
    pub fn accept_language(mut self, value: &str) -> Self {
        self.accept_language = Some(value.to_string());
        self
    }

    /// GET a page.
    ///
    /// # Panics
    ///
    /// Panics if the application fails to respond.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None, &[]).await
    }

    /// GET a deferred section the way `storefront.js` does.
    ///
    /// # Panics
    ///
    /// Panics if the application fails to respond.
    pub async fn get_deferred(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None, &[(DEFERRED_HEADER, "1")])
            .await
    }

    /// POST an url-encoded form.
    ///
    /// # Panics
    ///
    /// Panics if the application fails to respond.
    pub async fn post_form(&mut self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.send(Method::POST, path, Some(body), &[]).await
    }

    #[allow(clippy::unwrap_used)]
    async fn send(
        &mut self,
        method: Method,
        path: &str,
        form: Option<String>,
        extra: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(lang) = &self.accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, lang);
        }
        for (name, value) in extra {
            builder = builder.header(*name, *value);
        }

        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            && let Some(pair) = set_cookie.split(';').next()
        {
            self.cookie = Some(pair.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), BODY_LIMIT).await.unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A configuration whose access lookup always outlives its timeout.
#[must_use]
pub fn slow_access_config() -> StorefrontConfig {
    let mut config = test_config();
    config.mock.access_load_delay = Duration::from_millis(500);
    config.mock.access_load_timeout = Duration::from_millis(10);
    config
}

/// Pull the chat conversation id out of a rendered page.
#[must_use]
pub fn conversation_id(body: &str) -> Option<&str> {
    let marker = "name=\"conversation_id\" value=\"";
    let start = body.find(marker)? + marker.len();
    let rest = body.get(start..)?;
    rest.find('"').and_then(|end| rest.get(..end))
}
