use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        chatbot::{ChatbotAnswerDto, ChatbotQuestionDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::chatbot::ChatbotService,
        state::AppState,
    },
};

/// Tag for grouping assistant endpoints in OpenAPI documentation
pub static CHATBOT_TAG: &str = "chatbot";

/// Ask the assistant a question about the stored records.
///
/// The answer comes back in the language of the question. Generation failures are
/// reported as apologetic answers with status 200.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The answer
/// - `400 Bad Request` - Question empty or blank
#[utoipa::path(
    post,
    path = "/api/chatbot/ask",
    tag = CHATBOT_TAG,
    request_body = ChatbotQuestionDto,
    responses(
        (status = 200, description = "Assistant answer", body = ChatbotAnswerDto),
        (status = 400, description = "Question missing", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto)
    ),
    security(("bearer_auth" = []))
)]
pub async fn ask(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChatbotQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let answer = ChatbotService::new(&state.db, &state.ollama)
        .ask(&payload.question)
        .await?;

    Ok((StatusCode::OK, Json(ChatbotAnswerDto { answer })))
}
