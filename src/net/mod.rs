//! Networking modules for the HBnB REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` is the HTTP seam (browser
//! fetch in production, scripted responses in tests), and `api` turns
//! endpoints into typed calls.

pub mod api;
pub mod transport;
pub mod types;
