//! HTTP seam between the API layer and the browser.
//!
//! `Transport` sends one request and hands back the raw status and body; it
//! never interprets either. Under `hydrate` the [`FetchTransport`] uses
//! `gloo-net` (browser `fetch`). Tests plug in a scripted implementation.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::ApiErrorBody;
use crate::error::ClientError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A single outgoing API call.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Sent as `Authorization: Bearer <token>` when present.
    pub bearer: Option<String>,
    /// JSON body; sets `Content-Type: application/json`.
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(url: String) -> Self {
        Self { method: Method::Get, url, bearer: None, body: None }
    }

    /// Build a POST carrying `body` as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if `body` cannot be serialized.
    pub fn post_json<B: Serialize>(url: String, body: &B) -> Result<Self, ClientError> {
        Ok(Self { method: Method::Post, url, bearer: None, body: Some(serde_json::to_value(body)?) })
    }

    #[must_use]
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }
}

/// Raw response: status code and unparsed body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    /// `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// The backend's non-empty `error` field, if the body is a JSON error object.
    pub fn error_message(&self) -> Option<String> {
        self.json::<ApiErrorBody>().ok().and_then(|body| body.error).filter(|message| !message.is_empty())
    }

    /// Turn a non-2xx response into [`ClientError::Status`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Status`] carrying the server message when the
    /// status is not 2xx.
    pub fn error_for_status(self) -> Result<Self, ClientError> {
        if self.ok() {
            Ok(self)
        } else {
            Err(ClientError::Status { status: self.status, message: self.error_message() })
        }
    }
}

/// Sends API requests. Futures are `!Send`: the browser is single-threaded.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Perform the request and return whatever the server answered.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Network`] when no response was received. HTTP
    /// error statuses are *not* errors at this layer.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// Browser `fetch` transport.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body).map_err(|e| ClientError::Parse(e.to_string()))?,
            None => builder.build().map_err(|e| ClientError::Network(e.to_string()))?,
        };

        let resp = prepared.send().await.map_err(|e| ClientError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
