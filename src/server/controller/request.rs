use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, SearchQuery},
        request::{BulkUpdateResultDto, CreateRequestDto, RequestDto, UpdateRequestDto},
    },
    server::{
        controller::{attachment, PDF_CONTENT_TYPE, XLSX_CONTENT_TYPE},
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            request::{ProcessRequestParams, Request, RequestFieldsParams},
            user::Role,
        },
        service::{
            export::{excel, pdf},
            request::RequestService,
        },
        state::AppState,
    },
};

/// Tag for grouping request endpoints in OpenAPI documentation
pub static REQUEST_TAG: &str = "request";

const FRONT_OFFICE: [Role; 3] = [Role::Frontdesk, Role::Processing, Role::Manager];
const PROCESSORS: [Role; 2] = [Role::Processing, Role::Manager];

fn request_not_found() -> AppError {
    AppError::NotFound("Error: Request not found".to_string())
}

fn into_dtos(requests: Vec<Request>) -> Json<Vec<RequestDto>> {
    Json(requests.into_iter().map(Request::into_dto).collect())
}

/// File a new request.
///
/// The request starts in state `NOUVEAU` with the caller as creator. The entry date
/// defaults to today.
///
/// # Access Control
/// - `Frontdesk`, `Processing`, `Manager`
///
/// # Returns
/// - `201 Created` - The filed request
/// - `400 Bad Request` - Name missing or too long, field too long, or no identifier given
/// - `401 Unauthorized` / `403 Forbidden` - Caller not allowed
#[utoipa::path(
    post,
    path = "/api/requests",
    tag = REQUEST_TAG,
    request_body = CreateRequestDto,
    responses(
        (status = 201, description = "Request filed", body = RequestDto),
        (status = 400, description = "Invalid request data", body = ErrorDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let params = RequestFieldsParams::from_dto(payload)?;
    let request = RequestService::new(&state.db).create(params, &user).await?;

    Ok((StatusCode::CREATED, Json(request.into_dto())))
}

/// Record processing of a request.
///
/// Processing fields are always overwritten; basic fields only when present. The caller
/// becomes the processing agent and the processing date defaults to today.
///
/// # Access Control
/// - `Processing`, `Manager`
///
/// # Returns
/// - `200 OK` - The updated request
/// - `404 Not Found` - No request with that ID
#[utoipa::path(
    put,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestDto,
    responses(
        (status = 200, description = "Request processed", body = RequestDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn process_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&PROCESSORS)
        .await?;

    let request = RequestService::new(&state.db)
        .process(id, ProcessRequestParams::from_dto(payload), &user)
        .await?
        .ok_or_else(request_not_found)?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Overwrite the basic fields of a request.
///
/// Front-desk callers may only edit requests they filed, and only on the day they filed
/// them.
///
/// # Access Control
/// - `Frontdesk`, `Processing`, `Manager`
///
/// # Returns
/// - `200 OK` - The edited request
/// - `400 Bad Request` - Invalid fields, or a front-desk caller past the filing day
/// - `403 Forbidden` - Front-desk caller did not file the request
/// - `404 Not Found` - No request with that ID
#[utoipa::path(
    put,
    path = "/api/requests/edit/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    request_body = CreateRequestDto,
    responses(
        (status = 200, description = "Request edited", body = RequestDto),
        (status = 400, description = "Invalid data or edit window closed", body = ErrorDto),
        (status = 403, description = "Not the creator", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn edit_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let params = RequestFieldsParams::from_dto(payload)?;
    let request = RequestService::new(&state.db).edit(id, params, &user).await?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Hand every request the caller filed today over to processing.
///
/// # Access Control
/// - `Frontdesk`
#[utoipa::path(
    put,
    path = "/api/requests/bulk-update-today",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "Number of requests handed over", body = BulkUpdateResultDto),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn bulk_update_today(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Frontdesk])
        .await?;

    let updated_count = RequestService::new(&state.db).hand_off_today(&user).await?;

    let message = if updated_count == 0 {
        "No new requests found for today".to_string()
    } else {
        format!("Successfully updated {updated_count} requests")
    };

    Ok((
        StatusCode::OK,
        Json(BulkUpdateResultDto {
            updated_count,
            message,
        }),
    ))
}

/// List every request.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/requests",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "All requests", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let requests = RequestService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

/// Requests filed by the caller.
///
/// # Access Control
/// - `Frontdesk`
#[utoipa::path(
    get,
    path = "/api/requests/my-submissions",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "Caller's requests", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_submissions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Frontdesk])
        .await?;

    let requests = RequestService::new(&state.db)
        .get_submitted_by(&user)
        .await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

/// Requests the caller processed.
///
/// # Access Control
/// - `Processing`, `Manager`
#[utoipa::path(
    get,
    path = "/api/requests/my-processed",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "Requests processed by the caller", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_my_processed(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&PROCESSORS)
        .await?;

    let requests = RequestService::new(&state.db)
        .get_processed_by(&user)
        .await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

/// Tracking view over every request.
///
/// # Access Control
/// - `Frontdesk`, `Processing`, `Manager`
#[utoipa::path(
    get,
    path = "/api/requests/track",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "All requests", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn track_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let requests = RequestService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

/// Requests waiting in `EN_TRAITEMENT`.
///
/// # Access Control
/// - `Processing`, `Manager`
#[utoipa::path(
    get,
    path = "/api/requests/processing-queue",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "Requests awaiting processing", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_processing_queue(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&PROCESSORS)
        .await?;

    let requests = RequestService::new(&state.db)
        .get_processing_queue()
        .await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

#[utoipa::path(
    get,
    path = "/api/requests/state/{state}",
    tag = REQUEST_TAG,
    params(("state" = String, Path, description = "Exact workflow state")),
    responses(
        (status = 200, description = "Requests in that state", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_requests_by_state(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(etat): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let requests = RequestService::new(&state.db).get_by_state(&etat).await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

#[utoipa::path(
    get,
    path = "/api/requests/search/name",
    tag = REQUEST_TAG,
    params(("query" = String, Query, description = "Substring of the name, any case")),
    responses(
        (status = 200, description = "Matching requests", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_requests_by_name(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let requests = RequestService::new(&state.db)
        .search_by_name(&search.query)
        .await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

#[utoipa::path(
    get,
    path = "/api/requests/search/cin",
    tag = REQUEST_TAG,
    params(("query" = String, Query, description = "Substring of the CIN, any case")),
    responses(
        (status = 200, description = "Matching requests", body = Vec<RequestDto>),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn search_requests_by_cin(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(search): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let requests = RequestService::new(&state.db)
        .search_by_cin(&search.query)
        .await?;

    Ok((StatusCode::OK, into_dtos(requests)))
}

/// Get one request by ID.
///
/// # Access Control
/// - `Frontdesk`, `Processing`, `Manager`
#[utoipa::path(
    get,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "The request", body = RequestDto),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let request = RequestService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(request_not_found)?;

    Ok((StatusCode::OK, Json(request.into_dto())))
}

/// Delete a request.
///
/// # Access Control
/// - `Manager`
///
/// # Returns
/// - `200 OK` - Request deleted
/// - `404 Not Found` - No request with that ID
#[utoipa::path(
    delete,
    path = "/api/requests/{id}",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted", body = MessageDto),
        (status = 403, description = "Role not allowed", body = ErrorDto),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_request(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    if !RequestService::new(&state.db).delete(id).await? {
        return Err(request_not_found());
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Request deleted successfully")),
    ))
}

/// Download every request as a spreadsheet.
///
/// # Access Control
/// - `Manager`
#[utoipa::path(
    get,
    path = "/api/requests/export-excel",
    tag = REQUEST_TAG,
    responses(
        (status = 200, description = "Spreadsheet attachment"),
        (status = 403, description = "Role not allowed", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn export_requests(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Role::Manager])
        .await?;

    let bytes = RequestService::new(&state.db).export_workbook().await?;

    Ok(attachment(XLSX_CONTENT_TYPE, excel::REQUESTS_FILENAME, bytes))
}

/// Download the deposit receipt of a request.
///
/// # Access Control
/// - `Frontdesk`, `Processing`, `Manager`
#[utoipa::path(
    get,
    path = "/api/requests/{id}/receipt",
    tag = REQUEST_TAG,
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "PDF receipt attachment"),
        (status = 404, description = "Request not found", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn request_receipt(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&FRONT_OFFICE)
        .await?;

    let bytes = RequestService::new(&state.db)
        .receipt(id)
        .await?
        .ok_or_else(request_not_found)?;

    Ok(attachment(
        PDF_CONTENT_TYPE,
        &pdf::request_receipt_filename(id),
        bytes,
    ))
}
