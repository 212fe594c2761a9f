//! OpenAPI documentation served through Swagger UI at `/swagger-ui`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        attestation::{AttestationDto, CreateAttestationDto},
        auth::{ChangePasswordDto, JwtResponseDto, SigninDto},
        chatbot::{ChatbotAnswerDto, ChatbotQuestionDto},
        request::{BulkUpdateResultDto, CreateRequestDto, RequestDto, UpdateRequestDto},
        type_attestation::{TypeAttestationDto, TypeAttestationPayloadDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::controller::{attestation, auth, chatbot, request, type_attestation, user},
};

/// Registers the bearer token scheme referenced by the secured paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token returned by POST /api/auth/signin"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "DGI front-office API",
        description = "Taxpayer requests, attestations and the records assistant."
    ),
    paths(
        auth::signin,
        auth::profile,
        auth::change_password,
        auth::signup,
        user::get_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        user::reassign_and_delete_user,
        request::create_request,
        request::process_request,
        request::edit_request,
        request::bulk_update_today,
        request::get_requests,
        request::get_my_submissions,
        request::get_my_processed,
        request::track_requests,
        request::get_processing_queue,
        request::get_requests_by_state,
        request::search_requests_by_name,
        request::search_requests_by_cin,
        request::get_request,
        request::delete_request,
        request::export_requests,
        request::request_receipt,
        attestation::create_attestation,
        attestation::get_attestations,
        attestation::track_attestations,
        attestation::get_my_attestations,
        attestation::get_attestations_by_type,
        attestation::search_attestations_by_nom,
        attestation::search_attestations_by_cin,
        attestation::get_attestation,
        attestation::deliver_attestation,
        attestation::attestation_receipt,
        attestation::export_attestations,
        type_attestation::get_type_attestations,
        type_attestation::search_type_attestations,
        type_attestation::get_type_attestation,
        type_attestation::create_type_attestation,
        type_attestation::update_type_attestation,
        type_attestation::delete_type_attestation,
        chatbot::ask,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        SigninDto,
        JwtResponseDto,
        ChangePasswordDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        RequestDto,
        CreateRequestDto,
        UpdateRequestDto,
        BulkUpdateResultDto,
        AttestationDto,
        CreateAttestationDto,
        TypeAttestationDto,
        TypeAttestationPayloadDto,
        ChatbotQuestionDto,
        ChatbotAnswerDto,
    )),
    tags(
        (name = "auth", description = "Sign-in, sign-up and credentials"),
        (name = "user", description = "User administration"),
        (name = "request", description = "Taxpayer request workflow"),
        (name = "attestation", description = "Attestation filing and delivery"),
        (name = "type-attestation", description = "Attestation type catalogue"),
        (name = "chatbot", description = "Records assistant")
    )
)]
pub struct ApiDoc;
