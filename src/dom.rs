//! The page contract.
//!
//! Pages are static HTML; features switch on when their element ids are
//! present and silently do nothing otherwise. [`PageHost`] is the narrow set
//! of DOM, cookie and location operations the controller needs, implemented
//! over `web-sys` in the browser and by a recording fake in tests.

/// Element ids the pages are expected to carry.
pub mod ids {
    pub const LOGIN_LINK: &str = "login-link";
    pub const LOGOUT_LINK: &str = "logout-link";
    pub const LOGIN_FORM: &str = "login-form";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const PLACES_LIST: &str = "places-list";
    pub const PRICE_FILTER: &str = "price-filter";
    pub const PLACE_DETAILS: &str = "place-details";
    pub const PLACE_ID: &str = "place-id";
    pub const REVIEWS: &str = "reviews";
    pub const ADD_REVIEW: &str = "add-review";
    pub const REVIEW_FORM: &str = "review-form";
    pub const REVIEW_TEXT: &str = "review";
    pub const RATING: &str = "rating";
}

/// Render targets, as CSS selectors.
pub mod slots {
    pub const PLACES_LIST: &str = "#places-list";
    pub const PLACE_INFO: &str = "#place-details .place-info";
    pub const REVIEWS: &str = "#reviews";
}

/// Query-string key carrying the place id on detail pages.
pub const PLACE_ID_PARAM: &str = "id";

/// CSS `display` values the controller toggles between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    None,
    Block,
    InlineBlock,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::InlineBlock => "inline-block",
        }
    }
}

/// DOM, cookie and location access for one page.
///
/// Mutating methods are no-ops when their target is missing.
pub trait PageHost {
    fn has_element(&self, id: &str) -> bool;

    /// Replace the content of the first element matching `selector`.
    /// Returns `false` when nothing matched.
    fn set_inner_html(&self, selector: &str, html: &str) -> bool;

    fn set_display(&self, id: &str, display: Display);

    /// Current value of an input, textarea or select.
    fn field_value(&self, id: &str) -> Option<String>;

    fn set_field_value(&self, id: &str, value: &str);

    fn reset_form(&self, id: &str);

    /// Blocking user-facing message.
    fn alert(&self, message: &str);

    fn navigate(&self, href: &str);

    /// The raw `document.cookie` string.
    fn cookies(&self) -> String;

    /// Write one cookie (`document.cookie = ...`).
    fn set_cookie(&self, cookie: &str);

    fn query_param(&self, name: &str) -> Option<String>;

    fn pathname(&self) -> String;
}
