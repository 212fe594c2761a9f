use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{ChangePasswordDto, JwtResponseDto, SigninDto},
        user::CreateUserDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CreateUserParams, User},
        service::auth::AuthService,
        state::AppState,
        util::validate,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

fn credentials(user: User, token: Option<String>) -> JwtResponseDto {
    JwtResponseDto {
        token,
        token_type: "Bearer".to_string(),
        id: user.id,
        username: user.username,
        email: user.email,
        role: user.role.as_str().to_string(),
    }
}

/// Sign in with a username and password.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Bearer token plus the user's identity and role
/// - `401 Unauthorized` - Unknown username or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    tag = AUTH_TAG,
    request_body = SigninDto,
    responses(
        (status = 200, description = "Signed in", body = JwtResponseDto),
        (status = 401, description = "Bad credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signin(
    State(state): State<AppState>,
    Json(payload): Json<SigninDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .signin(&payload.username, payload.password)
        .await?;

    Ok((StatusCode::OK, Json(credentials(user, Some(token)))))
}

/// Identity of the caller, without a token.
///
/// # Access Control
/// - Any authenticated user
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = JwtResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(credentials(user, None))))
}

/// Change the caller's password.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - New password is not 6 to 40 characters
/// - `401 Unauthorized` - Not authenticated
#[utoipa::path(
    post,
    path = "/api/auth/change-password",
    tag = AUTH_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    validate::password(&payload.new_password)?;

    AuthService::new(&state.db, &state.tokens)
        .change_password(user.id, payload.new_password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Password changed successfully")),
    ))
}

/// Register a new account.
///
/// The requested role is mapped leniently: unknown or missing values register a
/// front-desk account.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Account created
/// - `400 Bad Request` - Validation failed, or username or email already taken
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = AUTH_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "Account created", body = MessageDto),
        (status = 400, description = "Invalid or duplicate user data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateUserParams::from_dto(payload)?;

    AuthService::new(&state.db, &state.tokens)
        .signup(params)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User registered successfully!")),
    ))
}
