use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeAttestationDto {
    pub id: i32,
    pub label: String,
    /// Formatted as `yyyy-MM-dd HH:mm:ss`.
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TypeAttestationPayloadDto {
    pub label: String,
}
