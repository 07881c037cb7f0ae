//! HTTP mock server helpers for testing outbound HTTP calls.
//!
//! This module provides a thin wrapper around `wiremock` for declarative
//! HTTP stubbing. Use it to stand in for the savings backend in integration
//! tests.
//!
//! # Quick Start
//!
//! ```ignore
//! use crate::common::http_mock::MockHttpServer;
//!
//! #[tokio::test]
//! async fn test_external_api_call() {
//!     let server = MockHttpServer::start().await;
//!
//!     server.expect_get("/plans")
//!         .respond_with_json(json!([]))
//!         .mount()
//!         .await;
//!
//!     let api = ApiClient::new(server.url());
//! }
//! ```
//!
//! # Patterns
//!
//! - **Success response**: `.respond_with_json(value)` or `.respond_with_body(string)`
//! - **Error response**: `.respond_with_status(500)`
//! - **Timeout simulation**: `.respond_with_delay(Duration::from_secs(30))`
//! - **Request verification**: `.with_json_body(value)` and `.expect_times(1)`

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer as WiremockServer, ResponseTemplate};

/// Running stub server.
pub struct MockHttpServer {
    inner: WiremockServer,
}

impl MockHttpServer {
    pub async fn start() -> Self {
        Self {
            inner: WiremockServer::start().await,
        }
    }

    /// Base URL to hand to the client under test.
    pub fn url(&self) -> String {
        self.inner.uri()
    }

    pub fn expect_get(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.inner, "GET", route)
    }

    pub fn expect_post(&self, route: &str) -> StubBuilder<'_> {
        StubBuilder::new(&self.inner, "POST", route)
    }

    /// Number of requests the server has seen.
    pub async fn request_count(&self) -> usize {
        self.inner
            .received_requests()
            .await
            .map_or(0, |requests| requests.len())
    }
}

/// Declarative description of one stubbed route.
pub struct StubBuilder<'a> {
    server: &'a WiremockServer,
    method: &'static str,
    route: String,
    expected_body: Option<Value>,
    status: u16,
    body: Option<ResponseBody>,
    delay: Option<Duration>,
    times: Option<u64>,
}

enum ResponseBody {
    Json(Value),
    Raw(String),
}

impl<'a> StubBuilder<'a> {
    fn new(server: &'a WiremockServer, method: &'static str, route: &str) -> Self {
        Self {
            server,
            method,
            route: route.to_string(),
            expected_body: None,
            status: 200,
            body: None,
            delay: None,
            times: None,
        }
    }

    /// Only match requests carrying exactly this JSON body.
    pub fn with_json_body(mut self, body: Value) -> Self {
        self.expected_body = Some(body);
        self
    }

    pub fn respond_with_json(mut self, body: Value) -> Self {
        self.body = Some(ResponseBody::Json(body));
        self
    }

    pub fn respond_with_body(mut self, body: &str) -> Self {
        self.body = Some(ResponseBody::Raw(body.to_string()));
        self
    }

    pub fn respond_with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// JSON body to pair with a non-default status.
    pub fn with_json_response(self, body: Value) -> Self {
        self.respond_with_json(body)
    }

    pub fn respond_with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fail the test on drop unless the route is hit exactly `times` times.
    pub fn expect_times(mut self, times: u64) -> Self {
        self.times = Some(times);
        self
    }

    pub async fn mount(self) {
        let mut template = ResponseTemplate::new(self.status);
        template = match self.body {
            Some(ResponseBody::Json(body)) => template.set_body_json(body),
            Some(ResponseBody::Raw(body)) => template.set_body_string(body),
            None => template,
        };
        if let Some(delay) = self.delay {
            template = template.set_delay(delay);
        }

        let mut builder = Mock::given(method(self.method)).and(path(self.route));
        if let Some(body) = self.expected_body {
            builder = builder.and(body_json(body));
        }

        let mut mock = builder.respond_with(template);
        if let Some(times) = self.times {
            mock = mock.expect(times);
        }
        mock.mount(self.server).await;
    }
}
