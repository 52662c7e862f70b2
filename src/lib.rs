//! # hbnb-client
//!
//! WASM page client for the HBnB vacation-rental site.
//!
//! The static pages (index, place detail, login, add-review) load this crate
//! and call [`start`] on `DOMContentLoaded`. Everything that decides *what*
//! happens on a page lives in browser-independent modules so it can be tested
//! on the host; the `browser` module binds it to `web-sys` and `gloo-net`
//! behind the `hydrate` feature.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | API base URL, cookie name and page paths |
//! | [`error`] | [`error::ClientError`] shared by every fallible path |
//! | [`session`] | Token cookie access and claim decoding |
//! | [`net`] | Wire types, the [`net::transport::Transport`] seam and [`net::api::Api`] |
//! | [`render`] | Pure HTML projections of places and reviews |
//! | [`forms`] | Price ceiling parsing and form validation |
//! | [`dom`] | The [`dom::PageHost`] contract and element ids |
//! | [`controller`] | [`controller::PageController`], one per page load |

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod forms;
pub mod net;
pub mod render;
pub mod session;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(feature = "hydrate")]
pub use browser::start;
