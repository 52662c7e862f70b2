//! Shared fakes for unit tests: a routed mock transport, a recording page,
//! and a token builder.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use data_encoding::BASE64URL_NOPAD;

use crate::config::ClientConfig;
use crate::dom::{Display, PageHost};
use crate::error::ClientError;
use crate::net::transport::{ApiRequest, ApiResponse, Method, Transport};

pub const BASE: &str = "http://api.test/v1";

pub fn test_config() -> ClientConfig {
    ClientConfig::default().with_api_base(BASE)
}

pub fn url(path: &str) -> String {
    format!("{BASE}{path}")
}

/// Unsigned JWT-shaped token carrying `claims`.
pub fn make_token(claims: &serde_json::Value) -> String {
    let header = BASE64URL_NOPAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = BASE64URL_NOPAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.signature")
}

// =============================================================
// MockTransport
// =============================================================

/// Answers requests from a route table and records every request sent.
/// Unrouted requests fail with a network error.
#[derive(Default)]
pub struct MockTransport {
    routes: RefCell<Vec<(Method, String, Result<ApiResponse, ClientError>)>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes
            .borrow_mut()
            .push((method, url(path), Ok(ApiResponse { status, body: body.to_owned() })));
        self
    }

    pub fn route_json(self, method: Method, path: &str, status: u16, body: &serde_json::Value) -> Self {
        self.route(method, path, status, &body.to_string())
    }

    pub fn fail(self, method: Method, path: &str, err: ClientError) -> Self {
        self.routes.borrow_mut().push((method, url(path), Err(err)));
        self
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }

    pub fn sent_urls(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let result = self
            .routes
            .borrow()
            .iter()
            .find(|(method, url, _)| *method == request.method && *url == request.url)
            .map(|(_, _, result)| result.clone())
            .unwrap_or_else(|| Err(ClientError::Network(format!("no route for {}", request.url))));
        self.sent.borrow_mut().push(request);
        result
    }
}

// =============================================================
// FakePage
// =============================================================

/// In-memory page: a set of element ids plus recorded side effects.
#[derive(Default)]
pub struct FakePage {
    elements: HashSet<String>,
    pub html: RefCell<HashMap<String, String>>,
    pub display: RefCell<HashMap<String, Display>>,
    pub values: RefCell<HashMap<String, String>>,
    pub alerts: RefCell<Vec<String>>,
    pub navigations: RefCell<Vec<String>>,
    pub cookie: RefCell<String>,
    pub cookie_writes: RefCell<Vec<String>>,
    pub resets: RefCell<Vec<String>>,
    query: HashMap<String, String>,
    path: String,
}

impl FakePage {
    pub fn with_elements(ids: &[&str]) -> Self {
        Self {
            elements: ids.iter().map(|id| (*id).to_owned()).collect(),
            path: "/index.html".to_owned(),
            ..Self::default()
        }
    }

    pub fn with_cookie(self, cookie: &str) -> Self {
        *self.cookie.borrow_mut() = cookie.to_owned();
        self
    }

    pub fn with_query(mut self, name: &str, value: &str) -> Self {
        self.query.insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        path.clone_into(&mut self.path);
        self
    }

    pub fn with_value(self, id: &str, value: &str) -> Self {
        self.values.borrow_mut().insert(id.to_owned(), value.to_owned());
        self
    }

    pub fn html_of(&self, selector: &str) -> Option<String> {
        self.html.borrow().get(selector).cloned()
    }

    pub fn display_of(&self, id: &str) -> Option<Display> {
        self.display.borrow().get(id).copied()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    fn owns(&self, selector: &str) -> bool {
        // `#id` or `#id .class`: the slot exists when its root id does.
        selector
            .strip_prefix('#')
            .and_then(|rest| rest.split_whitespace().next())
            .is_some_and(|id| self.elements.contains(id))
    }
}

impl PageHost for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains(id)
    }

    fn set_inner_html(&self, selector: &str, html: &str) -> bool {
        if !self.owns(selector) {
            return false;
        }
        self.html.borrow_mut().insert(selector.to_owned(), html.to_owned());
        true
    }

    fn set_display(&self, id: &str, display: Display) {
        if self.has_element(id) {
            self.display.borrow_mut().insert(id.to_owned(), display);
        }
    }

    fn field_value(&self, id: &str) -> Option<String> {
        if !self.has_element(id) {
            return None;
        }
        Some(self.values.borrow().get(id).cloned().unwrap_or_default())
    }

    fn set_field_value(&self, id: &str, value: &str) {
        if self.has_element(id) {
            self.values.borrow_mut().insert(id.to_owned(), value.to_owned());
        }
    }

    fn reset_form(&self, id: &str) {
        self.resets.borrow_mut().push(id.to_owned());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn navigate(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_owned());
    }

    fn cookies(&self) -> String {
        self.cookie.borrow().clone()
    }

    fn set_cookie(&self, cookie: &str) {
        self.cookie_writes.borrow_mut().push(cookie.to_owned());
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.query.get(name).cloned()
    }

    fn pathname(&self) -> String {
        self.path.clone()
    }
}
