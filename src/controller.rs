//! Per-page orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `PageController` exists per page load. [`PageController::prepare`]
//! does the synchronous setup (auth-dependent visibility, hidden field
//! pre-fill, the add-review guard) and reports which event handlers the host
//! should bind. [`PageController::load_initial`] then performs the page's
//! first fetches. The handler methods are what the bound events call.
//!
//! Awaits inside a handler are sequential; in particular the review list
//! looks up each author one request at a time.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ClientConfig;
use crate::dom::{Display, PLACE_ID_PARAM, PageHost, ids, slots};
use crate::error::ClientError;
use crate::forms::{self, ReviewForm};
use crate::net::api::Api;
use crate::net::transport::Transport;
use crate::render::{self, ReviewCard};
use crate::session::{self, Session};

pub const PLACES_LOAD_FAILED: &str = "Could not load places.";
pub const LOGIN_ERROR: &str = "Login error. Please try again.";
pub const DEFAULT_LOGIN_FAILURE: &str = "Invalid credentials";
pub const REVIEW_SUBMITTED: &str = "Review submitted successfully!";
pub const REVIEW_FAILED: &str = "Failed to submit review.";
pub const REVIEW_BAD_RESPONSE: &str = "Unexpected server response.";
pub const REVIEW_ERROR: &str = "An error occurred while submitting the review.";

/// Which event handlers the host should attach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    /// `click` on `#logout-link` → [`PageController::logout`].
    pub logout: bool,
    /// `submit` on `#login-form` → [`PageController::submit_login`].
    pub login_form: bool,
    /// `change` on `#price-filter` → [`PageController::change_price_filter`].
    pub price_filter: bool,
    /// `submit` on `#review-form` → [`PageController::submit_review`].
    pub review_form: bool,
}

pub struct PageController<P, T> {
    page: P,
    api: Api<T>,
    session: Session,
}

impl<P: PageHost, T: Transport> PageController<P, T> {
    /// Read the session from the page's cookies and wire up the API.
    pub fn new(page: P, transport: T, config: ClientConfig) -> Self {
        let session = Session::from_cookies(&page.cookies(), &config.token_cookie);
        Self { page, api: Api::new(transport, config), session }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn config(&self) -> &ClientConfig {
        self.api.config()
    }

    // --- Setup ---

    /// Synchronous page setup. Returns the handlers to bind.
    pub fn prepare(&self) -> Bindings {
        self.apply_auth_visibility();

        let place_id = self.place_id_from_url();
        if let Some(id) = &place_id {
            self.page.set_field_value(ids::PLACE_ID, id);
        }
        if place_id.is_some() && self.is_place_page() {
            self.page.set_display(ids::ADD_REVIEW, self.review_section_display());
        }

        Bindings {
            logout: self.page.has_element(ids::LOGOUT_LINK),
            login_form: self.page.has_element(ids::LOGIN_FORM),
            price_filter: self.page.has_element(ids::PRICE_FILTER),
            review_form: self.guard_review_form(),
        }
    }

    /// First fetches: the place list on the index page, details and reviews
    /// on a place page.
    pub async fn load_initial(&self) {
        if self.page.has_element(ids::PLACES_LIST) {
            self.load_places(None).await;
        }
        if let Some(place_id) = self.place_id_from_url() {
            if self.is_place_page() {
                self.load_place_details(&place_id).await;
                self.load_reviews(&place_id).await;
            }
        }
    }

    /// Toggle login/logout links for the current session.
    pub fn apply_auth_visibility(&self) {
        let (login, logout) = if self.session.is_logged_in() {
            (Display::None, Display::InlineBlock)
        } else {
            (Display::InlineBlock, Display::None)
        };
        self.page.set_display(ids::LOGIN_LINK, login);
        self.page.set_display(ids::LOGOUT_LINK, logout);
    }

    fn review_section_display(&self) -> Display {
        if self.session.is_logged_in() { Display::Block } else { Display::None }
    }

    fn place_id_from_url(&self) -> Option<String> {
        self.page.query_param(PLACE_ID_PARAM).filter(|id| !id.is_empty())
    }

    fn is_place_page(&self) -> bool {
        self.page.has_element(ids::PLACE_DETAILS) && self.page.has_element(ids::REVIEWS)
    }

    /// Keep anonymous users away from the review form. Returns whether the
    /// submit handler should be bound.
    fn guard_review_form(&self) -> bool {
        let has_form = [ids::REVIEW_FORM, ids::REVIEW_TEXT, ids::RATING, ids::PLACE_ID]
            .iter()
            .all(|id| self.page.has_element(id));
        if !has_form {
            return false;
        }
        if self.session.is_logged_in() {
            return true;
        }

        if self.page.pathname().contains(&self.config().add_review_page) {
            log::debug!("anonymous visit to add-review page, redirecting");
            self.page.navigate(&self.config().index_page);
        } else {
            self.page.set_display(ids::ADD_REVIEW, Display::None);
        }
        false
    }

    // --- Loaders ---

    /// Fetch all places and render those under `ceiling`.
    pub async fn load_places(&self, ceiling: Option<f64>) {
        let places = match self.api.list_places().await {
            Ok(places) => places,
            Err(err) => {
                log::error!("failed to load places: {err}");
                self.page.alert(PLACES_LOAD_FAILED);
                Vec::new()
            }
        };
        self.page.set_inner_html(slots::PLACES_LIST, &render::place_cards(&places, ceiling));
    }

    pub async fn load_place_details(&self, place_id: &str) {
        let place = self.api.fetch_place(place_id).await;
        self.page.set_inner_html(slots::PLACE_INFO, &render::place_details(place.as_ref()));
    }

    /// Fetch reviews, then each author's name in turn, and render the list.
    pub async fn load_reviews(&self, place_id: &str) {
        if !self.page.has_element(ids::REVIEWS) {
            return;
        }
        let reviews = self.api.fetch_reviews(place_id).await;

        let mut cards = Vec::with_capacity(reviews.len());
        for review in &reviews {
            let author = self.api.fetch_user_name(&review.user_id).await;
            cards.push(ReviewCard { review, author });
        }
        self.page.set_inner_html(slots::REVIEWS, &render::review_cards(&cards));
    }

    // --- Handlers ---

    /// Clear the token cookie and return to the index page.
    pub fn logout(&self) {
        self.page.set_cookie(&session::logout_cookie(&self.config().token_cookie));
        self.page.navigate(&self.config().index_page);
    }

    /// Re-fetch places and apply the price filter's current value.
    pub async fn change_price_filter(&self) {
        let raw = self.page.field_value(ids::PRICE_FILTER).unwrap_or_default();
        let ceiling = forms::parse_price_ceiling(&raw);
        log::debug!("price filter changed to {raw:?} (ceiling {ceiling:?})");
        self.load_places(ceiling).await;
    }

    /// Post the login form; store the token and go to the index on success.
    pub async fn submit_login(&self) {
        let email = self.page.field_value(ids::EMAIL).unwrap_or_default();
        let password = self.page.field_value(ids::PASSWORD).unwrap_or_default();

        match self.api.login(&forms::login_request(&email, &password)).await {
            Ok(resp) => {
                log::debug!("login succeeded");
                self.page.set_cookie(&session::login_cookie(&self.config().token_cookie, &resp.access_token));
                self.page.navigate(&self.config().index_page);
            }
            Err(err @ ClientError::Status { .. }) => {
                log::warn!("login rejected: {err}");
                let reason = err.server_message().unwrap_or(DEFAULT_LOGIN_FAILURE);
                self.page.alert(&format!("Login failed: {reason}"));
            }
            Err(err) => {
                log::error!("login error: {err}");
                self.page.alert(LOGIN_ERROR);
            }
        }
    }

    /// Validate and post the review form, then refresh the review list.
    ///
    /// Nothing is sent unless every field is filled in.
    pub async fn submit_review(&self) {
        let Some(token) = self.session.token() else {
            log::warn!("review submit without a session");
            return;
        };

        let form = ReviewForm {
            text: self.page.field_value(ids::REVIEW_TEXT).unwrap_or_default(),
            rating: self.page.field_value(ids::RATING).unwrap_or_default(),
            place_id: self.page.field_value(ids::PLACE_ID).unwrap_or_default(),
            user_id: self.session.subject(),
        };
        log::debug!("review form values: {form:?}");

        let review = match form.validate() {
            Ok(review) => review,
            Err(err) => {
                log::warn!("review form incomplete: {err}");
                self.page.alert(&err.to_string());
                return;
            }
        };

        match self.api.submit_review(token, &review).await {
            Ok(()) => {
                self.page.alert(REVIEW_SUBMITTED);
                self.page.reset_form(ids::REVIEW_FORM);
                self.load_reviews(&review.place_id).await;
            }
            Err(err) => {
                log::error!("review submission failed: {err}");
                let message = match &err {
                    ClientError::Status { .. } => err.server_message().unwrap_or(REVIEW_FAILED),
                    ClientError::Parse(_) => REVIEW_BAD_RESPONSE,
                    ClientError::Network(_) | ClientError::Validation(_) => REVIEW_ERROR,
                };
                self.page.alert(message);
            }
        }
    }
}
