use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChatbotQuestionDto {
    #[serde(default)]
    pub question: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ChatbotAnswerDto {
    pub answer: String,
}
