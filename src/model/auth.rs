use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct SigninDto {
    pub username: String,
    pub password: String,
}

/// Credentials issued on sign-in, also used (without token) for the profile endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct JwtResponseDto {
    pub token: Option<String>,
    #[serde(rename = "type")]
    pub token_type: String,
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub new_password: String,
}
