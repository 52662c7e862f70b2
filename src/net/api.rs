//! Typed calls against the HBnB REST API.
//!
//! ERROR HANDLING
//! ==============
//! The read helpers (`fetch_*`) never fail: any transport, status or parse
//! problem is logged and collapses to an empty list or `None`, which callers
//! render as "nothing to show". `list_places` is the strict variant for pages
//! that alert on failure. Writes (`login`, `submit_review`) return `Result`
//! so handlers can tell the user what went wrong.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, Transport};
use super::types::{LoginRequest, LoginResponse, NewReview, Place, Review, User};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Display name used when an author lookup fails.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

pub struct Api<T> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn get_json<R: DeserializeOwned>(&self, url: String) -> Result<R, ClientError> {
        let resp = self.transport.send(ApiRequest::get(url)).await?.error_for_status()?;
        resp.json()
    }

    /// `GET /places`, propagating failures.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] on network failure, non-2xx status or an
    /// unparsable body.
    pub async fn list_places(&self) -> Result<Vec<Place>, ClientError> {
        self.get_json(self.config.places_url()).await
    }

    /// `GET /places`; empty on failure.
    pub async fn fetch_places(&self) -> Vec<Place> {
        self.list_places().await.unwrap_or_else(|err| {
            log::error!("failed to fetch places: {err}");
            Vec::new()
        })
    }

    /// `GET /places/{id}`; `None` on failure, including 404.
    pub async fn fetch_place(&self, place_id: &str) -> Option<Place> {
        match self.get_json(self.config.place_url(place_id)).await {
            Ok(place) => Some(place),
            Err(err) => {
                log::error!("failed to fetch place {place_id}: {err}");
                None
            }
        }
    }

    /// `GET /places/{id}/reviews`; empty on failure.
    pub async fn fetch_reviews(&self, place_id: &str) -> Vec<Review> {
        self.get_json(self.config.place_reviews_url(place_id)).await.unwrap_or_else(|err| {
            log::error!("failed to fetch reviews for place {place_id}: {err}");
            Vec::new()
        })
    }

    /// `GET /users/{id}`; `None` on failure.
    pub async fn fetch_user(&self, user_id: &str) -> Option<User> {
        match self.get_json(self.config.user_url(user_id)).await {
            Ok(user) => Some(user),
            Err(err) => {
                log::error!("failed to fetch user {user_id}: {err}");
                None
            }
        }
    }

    /// Author display name, or [`UNKNOWN_AUTHOR`] when the lookup fails.
    pub async fn fetch_user_name(&self, user_id: &str) -> String {
        self.fetch_user(user_id)
            .await
            .map_or_else(|| UNKNOWN_AUTHOR.to_owned(), |user| user.display_name())
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] if the request could not be sent.
    /// - [`ClientError::Parse`] if the body is not JSON or lacks a token.
    /// - [`ClientError::Status`] with the server's `error` text on non-2xx.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = ApiRequest::post_json(self.config.login_url(), credentials)?;
        let resp = self.transport.send(request).await?;
        let body = json_body(&resp)?;
        if !resp.ok() {
            return Err(status_error(&resp, &body));
        }
        Ok(serde_json::from_value(body)?)
    }

    /// `POST /reviews` with the bearer token.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Network`] if the request could not be sent.
    /// - [`ClientError::Parse`] if the response body is not JSON.
    /// - [`ClientError::Status`] with the server's `error` text on non-2xx.
    pub async fn submit_review(&self, token: &str, review: &NewReview) -> Result<(), ClientError> {
        let request = ApiRequest::post_json(self.config.reviews_url(), review)?.with_bearer(token);
        let resp = self.transport.send(request).await?;
        let body = json_body(&resp)?;
        if !resp.ok() {
            return Err(status_error(&resp, &body));
        }
        Ok(())
    }
}

fn json_body(resp: &ApiResponse) -> Result<serde_json::Value, ClientError> {
    resp.json().map_err(|err| {
        log::error!("invalid JSON response (status {}): {}", resp.status, resp.body);
        err
    })
}

fn status_error(resp: &ApiResponse, body: &serde_json::Value) -> ClientError {
    let message = body
        .get("error")
        .and_then(serde_json::Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_owned);
    ClientError::Status { status: resp.status, message }
}
