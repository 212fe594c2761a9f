use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{attestation, auth, chatbot, request, type_attestation, user},
    doc::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(request_routes())
        .merge(attestation_routes())
        .merge(type_attestation_routes())
        .route("/api/chatbot/ask", post(chatbot::ask))
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signin", post(auth::signin))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/profile", get(auth::profile))
        .route("/api/auth/change-password", post(auth::change_password))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(user::get_users).post(user::create_user))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route(
            "/api/users/reassign-and-delete/{id}",
            delete(user::reassign_and_delete_user),
        )
}

fn request_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/requests",
            get(request::get_requests).post(request::create_request),
        )
        .route(
            "/api/requests/{id}",
            get(request::get_request)
                .put(request::process_request)
                .delete(request::delete_request),
        )
        .route("/api/requests/edit/{id}", put(request::edit_request))
        .route(
            "/api/requests/bulk-update-today",
            put(request::bulk_update_today),
        )
        .route(
            "/api/requests/my-submissions",
            get(request::get_my_submissions),
        )
        .route("/api/requests/my-processed", get(request::get_my_processed))
        .route("/api/requests/track", get(request::track_requests))
        .route(
            "/api/requests/processing-queue",
            get(request::get_processing_queue),
        )
        .route(
            "/api/requests/state/{state}",
            get(request::get_requests_by_state),
        )
        .route(
            "/api/requests/search/name",
            get(request::search_requests_by_name),
        )
        .route(
            "/api/requests/search/cin",
            get(request::search_requests_by_cin),
        )
        .route("/api/requests/export-excel", get(request::export_requests))
        .route("/api/requests/{id}/receipt", get(request::request_receipt))
}

fn attestation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/attestations", get(attestation::get_attestations))
        .route(
            "/api/attestations/create",
            post(attestation::create_attestation),
        )
        .route("/api/attestations/track", get(attestation::track_attestations))
        .route(
            "/api/attestations/my-attestations",
            get(attestation::get_my_attestations),
        )
        .route(
            "/api/attestations/type/{type}",
            get(attestation::get_attestations_by_type),
        )
        .route(
            "/api/attestations/search/nom",
            get(attestation::search_attestations_by_nom),
        )
        .route(
            "/api/attestations/search/cin",
            get(attestation::search_attestations_by_cin),
        )
        .route(
            "/api/attestations/exportExcel",
            get(attestation::export_attestations),
        )
        .route("/api/attestations/{id}", get(attestation::get_attestation))
        .route(
            "/api/attestations/{id}/deliver",
            put(attestation::deliver_attestation),
        )
        .route(
            "/api/attestations/{id}/receipt",
            get(attestation::attestation_receipt),
        )
}

fn type_attestation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/type-attestations",
            get(type_attestation::get_type_attestations)
                .post(type_attestation::create_type_attestation),
        )
        .route(
            "/api/type-attestations/search",
            get(type_attestation::search_type_attestations),
        )
        .route(
            "/api/type-attestations/{id}",
            get(type_attestation::get_type_attestation)
                .put(type_attestation::update_type_attestation)
                .delete(type_attestation::delete_type_attestation),
        )
}
