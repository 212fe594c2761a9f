//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into parameter types, call the
//! matching service and convert the domain result back into a DTO.

pub mod attestation;
pub mod auth;
pub mod chatbot;
pub mod request;
pub mod type_attestation;
pub mod user;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub(crate) const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub(crate) const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Builds a download response carrying `bytes` as an attachment named `filename`.
pub(crate) fn attachment(content_type: &str, filename: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
