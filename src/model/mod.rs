//! API data transfer objects shared at the HTTP boundary.

pub mod api;
pub mod attestation;
pub mod auth;
pub mod chatbot;
pub mod request;
pub mod type_attestation;
pub mod user;
