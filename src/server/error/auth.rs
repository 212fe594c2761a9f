use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request did not carry a bearer token")]
    MissingToken,

    /// The bearer token failed signature, format or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(String),

    /// The token refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// Username or password did not match during sign-in.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid credentials for user {0}")]
    InvalidCredentials(String),

    /// The user's role does not grant access to the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Password hashing or verification could not run.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes with user-facing messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 "Full authentication is required"
/// - `InvalidCredentials` → 401 "Error: Bad credentials"
/// - `AccessDenied` → 403 "Access denied"
/// - `PasswordHash` → 500 with a generic message
///
/// Details are logged at debug level while the client receives a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                "Full authentication is required to access this resource",
            ),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Error: Bad credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::PasswordHash(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
