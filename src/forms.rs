//! Form input collection and validation.
//!
//! Numeric inputs follow the browser's `parseInt`: leading whitespace, an
//! optional sign, then as many decimal digits as present. Anything else
//! (including zero for the price filter) means "no value".

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::error::ClientError;
use crate::net::types::{LoginRequest, NewReview};

pub const FILL_ALL_FIELDS: &str = "Please fill out all fields.";

/// Leading-integer parse. `None` when no digits lead the string.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Price ceiling from the filter select. Empty, non-numeric and zero values
/// all mean "show everything".
#[allow(clippy::cast_precision_loss)]
pub fn parse_price_ceiling(raw: &str) -> Option<f64> {
    parse_leading_int(raw).filter(|value| *value != 0).map(|value| value as f64)
}

/// Raw values from the add-review form plus the session subject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub text: String,
    pub rating: String,
    pub place_id: String,
    pub user_id: Option<String>,
}

impl ReviewForm {
    /// Check every required field and build the request body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] with [`FILL_ALL_FIELDS`] when the
    /// trimmed text is empty, the rating does not parse to a non-zero integer,
    /// the place id is empty or there is no user id.
    pub fn validate(&self) -> Result<NewReview, ClientError> {
        let text = self.text.trim();
        let rating = parse_leading_int(&self.rating).filter(|r| *r != 0);
        let user_id = self.user_id.as_deref().filter(|id| !id.is_empty());

        match (text.is_empty(), rating, self.place_id.is_empty(), user_id) {
            (false, Some(rating), false, Some(user_id)) => Ok(NewReview {
                text: text.to_owned(),
                rating,
                place_id: self.place_id.clone(),
                user_id: user_id.to_owned(),
            }),
            _ => Err(ClientError::Validation(FILL_ALL_FIELDS)),
        }
    }
}

/// Login body from the form fields, passed through untouched.
pub fn login_request(email: &str, password: &str) -> LoginRequest {
    LoginRequest { email: email.to_owned(), password: password.to_owned() }
}
