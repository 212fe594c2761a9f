use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{CreateUserDto, ReassignQuery, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{CreateUserParams, Role, UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user administration endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Error: User not found with id: {id}"))
}

/// List every user.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let users = UserService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(User::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get one user by ID.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create a user with any role.
///
/// Applies the same validation and duplicate checks as public sign-up.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - User created
/// - `400 Bad Request` - Validation failed, or username or email already taken
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 200, description = "User created", body = MessageDto),
        (status = 400, description = "Invalid or duplicate user data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = CreateUserParams::from_dto(payload)?;
    UserService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User created successfully!")),
    ))
}

/// Update the fields present in the body.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - User updated
/// - `400 Bad Request` - Validation failed, or new username or email already taken
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = MessageDto),
        (status = 400, description = "Invalid or duplicate user data", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let params = UpdateUserParams::from_dto(payload)?;
    UserService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User updated successfully!")),
    ))
}

/// Delete a user nothing refers to.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - User is still referenced by requests or attestations
/// - `404 Not Found` - No user with that ID
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "User still referenced", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    if !UserService::new(&state.db).delete(id).await? {
        return Err(user_not_found(id));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User deleted successfully!")),
    ))
}

/// Move a user's request and attestation references to another user, then delete them.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - User deleted, with the number of request references moved
/// - `400 Bad Request` - Either user missing, or the target is the user being deleted
#[utoipa::path(
    delete,
    path = "/api/users/reassign-and-delete/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User to delete"),
        ("reassignToUserId" = i32, Query, description = "User receiving the references")
    ),
    responses(
        (status = 200, description = "User deleted after reassignment", body = MessageDto),
        (status = 400, description = "Unknown user or invalid target", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn reassign_and_delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Query(query): Query<ReassignQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Admin])
        .await?;

    let outcome = UserService::new(&state.db)
        .reassign_and_delete(id, query.reassign_to_user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!(
            "User deleted successfully after reassigning {} requests to user {}",
            outcome.requests_reassigned, outcome.target.username
        ))),
    ))
}
