//! HTML projections of fetched data.
//!
//! Every function here is pure: input data is borrowed, never modified, and
//! the returned markup replaces a slot's previous content wholesale. Prices
//! and ratings are printed as received. Text is entity-escaped on output.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use crate::net::types::{Place, Review};

pub const PLACE_NOT_FOUND: &str = "<p>Place not found.</p>";
pub const NO_REVIEWS: &str = "<p>No reviews yet.</p>";
const NO_DESCRIPTION: &str = "No description available";
const NO_AMENITIES: &str = "None";
const UNKNOWN_HOST: &str = "Unknown";

/// A review joined with its author's display name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewCard<'a> {
    pub review: &'a Review,
    pub author: String,
}

/// Places at or under `ceiling`, in source order. `None` keeps everything.
pub fn visible_places(places: &[Place], ceiling: Option<f64>) -> impl Iterator<Item = &Place> {
    places.iter().filter(move |place| ceiling.is_none_or(|max| place.price <= max))
}

/// One `.place-card` per visible place.
pub fn place_cards(places: &[Place], ceiling: Option<f64>) -> String {
    visible_places(places, ceiling).fold(String::new(), |mut html, place| {
        let _ = write!(
            html,
            "<div class=\"place-card\">\
             <h3>{title}</h3>\
             <p>${price}/night</p>\
             <a href=\"place.html?id={id}\" class=\"details-button\">View Details</a>\
             </div>",
            title = escape_html(&place.title),
            price = place.price,
            id = escape_html(&place.id),
        );
        html
    })
}

/// Detail block for the place page, or a not-found notice.
pub fn place_details(place: Option<&Place>) -> String {
    let Some(place) = place else {
        return PLACE_NOT_FOUND.to_owned();
    };

    let host = place
        .owner
        .as_ref()
        .map_or_else(|| UNKNOWN_HOST.to_owned(), |o| format!("{} {}", o.first_name, o.last_name));
    let description = place.description.as_deref().filter(|d| !d.is_empty()).unwrap_or(NO_DESCRIPTION);
    let amenities = place.amenities.iter().map(|a| a.name.as_str()).collect::<Vec<_>>().join(", ");
    let amenities = if amenities.is_empty() { NO_AMENITIES } else { amenities.as_str() };

    format!(
        "<h2>{title}</h2>\
         <p>Host: {host}</p>\
         <p>Price: ${price}/night</p>\
         <p>Description: {description}</p>\
         <p>Amenities: {amenities}</p>",
        title = escape_html(&place.title),
        host = escape_html(&host),
        price = place.price,
        description = escape_html(description),
        amenities = escape_html(amenities),
    )
}

/// One `.review-card` per review, or the empty notice.
pub fn review_cards(cards: &[ReviewCard<'_>]) -> String {
    if cards.is_empty() {
        return NO_REVIEWS.to_owned();
    }
    cards.iter().fold(String::new(), |mut html, card| {
        let _ = write!(
            html,
            "<div class=\"review-card\">\
             <p>Posted by: {author}</p>\
             <p>Review: \"{text}\"</p>\
             <p class=\"rating\">Rating: {rating} Stars</p>\
             </div>",
            author = escape_html(&card.author),
            text = escape_html(&card.review.text),
            rating = card.review.rating,
        );
        html
    })
}

/// Escape the five HTML-significant characters.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
