use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SearchQuery},
        attestation::{AttestationDto, CreateAttestationDto},
    },
    server::{
        controller::{attachment, PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            attestation::{Attestation, CreateAttestationParams},
            user::Role,
        },
        service::{
            attestation::AttestationService,
            export::{excel, pdf},
        },
        state::AppState,
    },
};

/// Tag for grouping attestation endpoints in OpenAPI documentation
pub static ATTESTATION_TAG: &str = "attestation";

const DESK: [Role; 2] = [Role::Frontdesk, Role::Manager];

fn attestation_not_found() -> AppError {
    AppError::NotFound("Attestation non trouvée".to_string())
}

fn into_dtos(attestations: Vec<Attestation>) -> Json<Vec<AttestationDto>> {
    Json(attestations.into_iter().map(Attestation::into_dto).collect())
}

/// File a new attestation.
///
/// The attestation starts as `déposé` with the caller as creator.
///
/// # Access Control
/// - `Frontdesk`, `Manager`
///
/// # Returns
/// - `201 Created` - The filed attestation
/// - `400 Bad Request` - Required field blank or malformed email
#[utoipa::path(
    post,
    path = "/api/attestations/create",
    tag = ATTESTATION_TAG,
    request_body = CreateAttestationDto,
    responses(
        (status = 201, description = "Attestation filed", body = AttestationDto),
        (status = 400, description = "Invalid attestation data", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateAttestationDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let params = CreateAttestationParams::from_dto(payload)?;
    let attestation = AttestationService::new(&state.db)
        .create(params, &user)
        .await?;

    Ok((StatusCode::CREATED, Json(attestation.into_dto())))
}

/// List every attestation.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/attestations",
    tag = ATTESTATION_TAG,
    responses(
        (status = 200, description = "All attestations", body = Vec<AttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_attestations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let attestations = AttestationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, into_dtos(attestations)))
}

#[utoipa::path(
    get,
    path = "/api/attestations/track",
    tag = ATTESTATION_TAG,
    responses(
        (status = 200, description = "All attestations", body = Vec<AttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn track_attestations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let attestations = AttestationService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, into_dtos(attestations)))
}

/// Attestations filed by the caller.
///
/// # Access Control
/// - `Frontdesk`
#[utoipa::path(
    get,
    path = "/api/attestations/my-attestations",
    tag = ATTESTATION_TAG,
    responses(
        (status = 200, description = "Caller's attestations", body = Vec<AttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_attestations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Frontdesk])
        .await?;

    let attestations = AttestationService::new(&state.db)
        .get_created_by(&user)
        .await?;

    Ok((StatusCode::OK, into_dtos(attestations)))
}

#[utoipa::path(
    get,
    path = "/api/attestations/type/{type}",
    tag = ATTESTATION_TAG,
    params(("type" = String, Path, description = "Attestation type code")),
    responses(
        (status = 200, description = "Attestations of that type", body = Vec<AttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_attestations_by_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(attestation_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let attestations = AttestationService::new(&state.db)
        .get_by_type(&attestation_type)
        .await?;

    Ok((StatusCode::OK, into_dtos(attestations)))
}

#[utoipa::path(
    get,
    path = "/api/attestations/search/nom",
    tag = ATTESTATION_TAG,
    params(("query" = String, Query, description = "Substring of the last name, any case")),
    responses(
        (status = 200, description = "Matching attestations", body = Vec<AttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_attestations_by_nom(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let attestations = AttestationService::new(&state.db)
        .search_by_nom(&search.query)
        .await?;

    Ok((StatusCode::OK, into_dtos(attestations)))
}

#[utoipa::path(
    get,
    path = "/api/attestations/search/cin",
    tag = ATTESTATION_TAG,
    params(("query" = String, Query, description = "Substring of the CIN, any case")),
    responses(
        (status = 200, description = "Matching attestations", body = Vec<AttestationDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_attestations_by_cin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let attestations = AttestationService::new(&state.db)
        .search_by_cin(&search.query)
        .await?;

    Ok((StatusCode::OK, into_dtos(attestations)))
}

#[utoipa::path(
    get,
    path = "/api/attestations/{id}",
    tag = ATTESTATION_TAG,
    params(("id" = i32, Path, description = "Attestation ID")),
    responses(
        (status = 200, description = "The attestation", body = AttestationDto),
        (status = 404, description = "Attestation not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let attestation = AttestationService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(attestation_not_found)?;

    Ok((StatusCode::OK, Json(attestation.into_dto())))
}

/// Mark an attestation as handed over to the applicant.
///
/// # Access Control
/// - `Frontdesk`, `Manager`
///
/// # Returns
/// - `200 OK` - The attestation, now `livré`
/// - `400 Bad Request` - Already delivered
/// - `404 Not Found` - No attestation with that ID
#[utoipa::path(
    put,
    path = "/api/attestations/{id}/deliver",
    tag = ATTESTATION_TAG,
    params(("id" = i32, Path, description = "Attestation ID")),
    responses(
        (status = 200, description = "Attestation delivered", body = AttestationDto),
        (status = 400, description = "Already delivered", body = ErrorDto),
        (status = 404, description = "Attestation not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn deliver_attestation(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let attestation = AttestationService::new(&state.db)
        .deliver(id, &user)
        .await?
        .ok_or_else(attestation_not_found)?;

    Ok((StatusCode::OK, Json(attestation.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/attestations/{id}/receipt",
    tag = ATTESTATION_TAG,
    params(("id" = i32, Path, description = "Attestation ID")),
    responses(
        (status = 200, description = "PDF receipt attachment"),
        (status = 404, description = "Attestation not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn attestation_receipt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let bytes = AttestationService::new(&state.db)
        .receipt(id)
        .await?
        .ok_or_else(attestation_not_found)?;

    Ok(attachment(
        PDF_CONTENT_TYPE,
        &pdf::attestation_receipt_filename(id),
        bytes,
    ))
}

/// Download every attestation as a spreadsheet.
///
/// # Access Control
/// - `Frontdesk`, `Manager`
#[utoipa::path(
    get,
    path = "/api/attestations/exportExcel",
    tag = ATTESTATION_TAG,
    responses(
        (status = 200, description = "Spreadsheet attachment"),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn export_attestations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&DESK)
        .await?;

    let bytes = AttestationService::new(&state.db).export_workbook().await?;

    Ok(attachment(
        XLSX_CONTENT_TYPE,
        excel::ATTESTATIONS_FILENAME,
        bytes,
    ))
}
