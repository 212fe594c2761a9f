use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, SearchQuery},
        type_attestation::{TypeAttestationDto, TypeAttestationPayloadDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            type_attestation::{TypeAttestation, TypeAttestationParams},
            user::Role,
        },
        service::type_attestation::TypeAttestationService,
        state::AppState,
    },
};

/// Tag for grouping attestation type endpoints in OpenAPI documentation
pub static TYPE_ATTESTATION_TAG: &str = "type-attestation";

fn type_not_found() -> AppError {
    AppError::NotFound("Type d'attestation non trouvé".to_string())
}

fn into_dtos(types: Vec<TypeAttestation>) -> Json<Vec<TypeAttestationDto>> {
    Json(types.into_iter().map(TypeAttestation::into_dto).collect())
}

/// List every attestation type, ordered by label.
///
/// # Access Control
/// - `Frontdesk`, `Processing`, `Manager`
#[utoipa::path(
    get,
    path = "/api/type-attestations",
    tag = TYPE_ATTESTATION_TAG,
    responses(
        (status = 200, description = "All attestation types", body = Vec<TypeAttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_type_attestations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Frontdesk, Role::Processing, Role::Manager])
        .await?;

    let types = TypeAttestationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, into_dtos(types)))
}

#[utoipa::path(
    get,
    path = "/api/type-attestations/search",
    tag = TYPE_ATTESTATION_TAG,
    params(("query" = String, Query, description = "Substring of the label, any case")),
    responses(
        (status = 200, description = "Matching attestation types", body = Vec<TypeAttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_type_attestations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let types = TypeAttestationService::new(&state.db)
        .search(&search.query)
        .await?;

    Ok((StatusCode::OK, into_dtos(types)))
}

#[utoipa::path(
    get,
    path = "/api/type-attestations/{id}",
    tag = TYPE_ATTESTATION_TAG,
    params(("id" = i32, Path, description = "Attestation type ID")),
    responses(
        (status = 200, description = "The attestation type", body = TypeAttestationDto),
        (status = 404, description = "Attestation type not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_type_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let type_attestation = TypeAttestationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(type_not_found)?;

    Ok((StatusCode::OK, Json(type_attestation.into_dto())))
}

/// Create an attestation type.
///
/// # Access Control
/// - `Manager`
///
/// # Returns
/// - `201 Created` - The new type
/// - `400 Bad Request` - Label not 3 to 255 characters after trimming
/// - `409 Conflict` - Label already in use
#[utoipa::path(
    post,
    path = "/api/type-attestations",
    tag = TYPE_ATTESTATION_TAG,
    request_body = TypeAttestationPayloadDto,
    responses(
        (status = 201, description = "Attestation type created", body = TypeAttestationDto),
        (status = 400, description = "Invalid label", body = ErrorDto),
        (status = 409, description = "Label already in use", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_type_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TypeAttestationPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let params = TypeAttestationParams::from_dto(payload)?;
    let type_attestation = TypeAttestationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(type_attestation.into_dto())))
}

/// Rename an attestation type.
///
/// # Access Control
/// - `Manager`
///
/// # Returns
/// - `200 OK` - The renamed type
/// - `404 Not Found` - No type with that ID
/// - `409 Conflict` - Another type holds the label
#[utoipa::path(
    put,
    path = "/api/type-attestations/{id}",
    tag = TYPE_ATTESTATION_TAG,
    params(("id" = i32, Path, description = "Attestation type ID")),
    request_body = TypeAttestationPayloadDto,
    responses(
        (status = 200, description = "Attestation type renamed", body = TypeAttestationDto),
        (status = 404, description = "Attestation type not found", body = ErrorDto),
        (status = 409, description = "Label already in use", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_type_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<TypeAttestationPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let params = TypeAttestationParams::from_dto(payload)?;
    let type_attestation = TypeAttestationService::new(&state.db)
        .update(id, params)
        .await?
        .ok_or_else(type_not_found)?;

    Ok((StatusCode::OK, Json(type_attestation.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/type-attestations/{id}",
    tag = TYPE_ATTESTATION_TAG,
    params(("id" = i32, Path, description = "Attestation type ID")),
    responses(
        (status = 200, description = "Attestation type deleted", body = MessageDto),
        (status = 404, description = "Attestation type not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_type_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    if !TypeAttestationService::new(&state.db).delete(id).await? {
        return Err(type_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Type d'attestation supprimé avec succès")),
    ))
}
