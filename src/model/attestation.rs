use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttestationDto {
    pub id: i32,
    pub if_value: String,
    pub cin: String,
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type")]
    pub attestation_type: String,
    pub status: String,
    /// Formatted as `yyyy-MM-dd HH:mm:ss`.
    pub created_at: String,
    /// Formatted as `yyyy-MM-dd HH:mm:ss`.
    pub updated_at: String,
    pub creator_id: Option<i32>,
    pub creator_username: Option<String>,
    pub delivered_by_id: Option<i32>,
    pub delivered_by_username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttestationDto {
    #[serde(default)]
    pub if_value: String,
    #[serde(default)]
    pub cin: String,
    #[serde(default)]
    pub nom: String,
    #[serde(default)]
    pub prenom: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "type", default)]
    pub attestation_type: String,
}
