use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestDto {
    pub id: i32,
    pub date_entree: Option<NaiveDate>,
    pub raison_sociale_noms_prenom: String,
    pub cin: Option<String>,
    pub pm_pp: Option<String>,
    pub objet: Option<String>,
    pub date_traitement: Option<NaiveDate>,
    pub etat: Option<String>,
    pub if_value: Option<String>,
    pub ice: Option<String>,
    pub secteur: Option<String>,
    pub motif_rejet: Option<String>,
    pub tp: Option<String>,
    pub email: Option<String>,
    pub gsm: Option<String>,
    pub fix: Option<String>,
    pub remarque: Option<String>,
    pub agent_id: Option<i32>,
    pub agent_username: Option<String>,
    pub creator_id: i32,
    pub creator_username: Option<String>,
    /// Formatted as `yyyy-MM-dd HH:mm:ss`.
    pub created_at: String,
    /// Formatted as `yyyy-MM-dd HH:mm:ss`.
    pub updated_at: String,
}

/// Body for creating a request and for the basic-field edit.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestDto {
    /// Defaults to today when omitted.
    pub date_entree: Option<NaiveDate>,
    #[serde(default)]
    pub raison_sociale_noms_prenom: String,
    pub cin: Option<String>,
    pub if_value: Option<String>,
    pub ice: Option<String>,
    /// `PM` (legal entity) or `PP` (natural person).
    pub pm_pp: Option<String>,
    pub objet: Option<String>,
}

/// Body for the processing update.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestDto {
    /// Defaults to today when omitted.
    pub date_traitement: Option<NaiveDate>,
    pub etat: Option<String>,
    pub if_value: Option<String>,
    pub secteur: Option<String>,
    pub motif_rejet: Option<String>,
    pub tp: Option<String>,
    pub email: Option<String>,
    pub gsm: Option<String>,
    pub fix: Option<String>,
    pub remarque: Option<String>,
    pub cin: Option<String>,
    pub ice: Option<String>,
    pub raison_sociale_noms_prenom: Option<String>,
    pub pm_pp: Option<String>,
    pub objet: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResultDto {
    pub updated_count: u64,
    pub message: String,
}
