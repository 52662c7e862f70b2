//! Client configuration: where the API lives and which pages to route to.
//!
//! The base URL defaults to the local development backend. It can be baked in
//! at build time with `HBNB_API_BASE`, and a page can override it at runtime
//! with `<meta name="hbnb-api-base" content="...">`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000/api/v1";
pub const DEFAULT_TOKEN_COOKIE: &str = "token";
pub const INDEX_PAGE: &str = "index.html";
pub const ADD_REVIEW_PAGE: &str = "add_review.html";

/// `<meta>` names consulted by [`ClientConfig::from_lookup`].
pub const META_API_BASE: &str = "hbnb-api-base";
pub const META_LOG_LEVEL: &str = "hbnb-log-level";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `http://host/api/v1`.
    pub api_base: String,
    pub token_cookie: String,
    /// Landing page after login, logout and unauthenticated add-review visits.
    pub index_page: String,
    /// Path fragment identifying the standalone add-review page.
    pub add_review_page: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: normalize_base(option_env!("HBNB_API_BASE").unwrap_or(DEFAULT_API_BASE)),
            token_cookie: DEFAULT_TOKEN_COOKIE.to_owned(),
            index_page: INDEX_PAGE.to_owned(),
            add_review_page: ADD_REVIEW_PAGE.to_owned(),
            log_level: log::Level::Debug,
        }
    }
}

impl ClientConfig {
    /// Build config from defaults plus page-provided overrides.
    ///
    /// `lookup` resolves a `<meta>` name to its content; blank values are
    /// ignored and an unparsable log level keeps the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = non_blank(lookup(META_API_BASE)) {
            config.api_base = normalize_base(&base);
        }
        if let Some(level) = non_blank(lookup(META_LOG_LEVEL)).and_then(|raw| raw.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    #[must_use]
    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = normalize_base(base);
        self
    }

    pub fn login_url(&self) -> String {
        format!("{}/login", self.api_base)
    }

    pub fn places_url(&self) -> String {
        format!("{}/places", self.api_base)
    }

    pub fn place_url(&self, place_id: &str) -> String {
        format!("{}/places/{place_id}", self.api_base)
    }

    pub fn place_reviews_url(&self, place_id: &str) -> String {
        format!("{}/places/{place_id}/reviews", self.api_base)
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{user_id}", self.api_base)
    }

    pub fn reviews_url(&self) -> String {
        format!("{}/reviews", self.api_base)
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
