//! Request domain models and parameters.
//!
//! A request tracks a taxpayer's TP registration from front-desk intake through
//! processing. The domain model carries the usernames of its creator and agent, resolved
//! at the repository boundary, so controllers and formatters never touch the user table.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::request::{CreateRequestDto, RequestDto, UpdateRequestDto},
    server::{
        error::AppError,
        util::{format::format_timestamp, validate},
    },
};

/// State written on creation.
pub const ETAT_NOUVEAU: &str = "NOUVEAU";
/// State written by the front-desk bulk hand-off to processing.
pub const ETAT_EN_TRAITEMENT: &str = "EN_TRAITEMENT";

const MISSING_IDENTIFIER: &str = "Error: At least one identifier (CIN, IF, or ICE) must be provided";

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Request {
    /// Converts an entity model to a request domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `usernames` - Usernames keyed by user ID, covering the creator and agent
    pub fn from_entity(entity: entity::request::Model, usernames: &HashMap<i32, String>) -> Self {
        Self {
            id: entity.id,
            date_entree: entity.date_entree,
            raison_sociale_noms_prenom: entity.raison_sociale_noms_prenom,
            cin: entity.cin,
            pm_pp: entity.pm_pp,
            objet: entity.objet,
            date_traitement: entity.date_traitement,
            etat: entity.etat,
            if_value: entity.if_value,
            ice: entity.ice,
            secteur: entity.secteur,
            motif_rejet: entity.motif_rejet,
            tp: entity.tp,
            email: entity.email,
            gsm: entity.gsm,
            fix: entity.fix,
            remarque: entity.remarque,
            agent_username: entity.agent_id.and_then(|id| usernames.get(&id).cloned()),
            agent_id: entity.agent_id,
            creator_username: usernames.get(&entity.creator_id).cloned(),
            creator_id: entity.creator_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> RequestDto {
        RequestDto {
            id: self.id,
            date_entree: self.date_entree,
            raison_sociale_noms_prenom: self.raison_sociale_noms_prenom,
            cin: self.cin,
            pm_pp: self.pm_pp,
            objet: self.objet,
            date_traitement: self.date_traitement,
            etat: self.etat,
            if_value: self.if_value,
            ice: self.ice,
            secteur: self.secteur,
            motif_rejet: self.motif_rejet,
            tp: self.tp,
            email: self.email,
            gsm: self.gsm,
            fix: self.fix,
            remarque: self.remarque,
            agent_id: self.agent_id,
            agent_username: self.agent_username,
            creator_id: self.creator_id,
            creator_username: self.creator_username,
            created_at: format_timestamp(&self.created_at),
            updated_at: format_timestamp(&self.updated_at),
        }
    }

    /// First present identifier in CIN, IF, ICE order.
    pub fn primary_identifier(&self) -> Option<&str> {
        [&self.cin, &self.if_value, &self.ice]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|v| !v.trim().is_empty())
    }
}

/// Validated basic fields of a request, used for creation and the basic-field edit.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestFieldsParams {
    /// `None` on creation means today.
    pub date_entree: Option<NaiveDate>,
    pub raison_sociale_noms_prenom: String,
    pub cin: Option<String>,
    pub if_value: Option<String>,
    pub ice: Option<String>,
    pub pm_pp: Option<String>,
    pub objet: Option<String>,
}

impl RequestFieldsParams {
    /// Validates and converts a create/edit request DTO.
    ///
    /// Only per-field limits are checked here. The identifier rule is applied by the
    /// service through [`RequestFieldsParams::require_identifier`], after the lookup and
    /// permission checks of an edit.
    ///
    /// # Returns
    /// - `Ok(RequestFieldsParams)` - All field limits hold
    /// - `Err(AppError::BadRequest)` - Blank or oversized name, oversized CIN/ICE/PM-PP/objet
    pub fn from_dto(dto: CreateRequestDto) -> Result<Self, AppError> {
        if dto.raison_sociale_noms_prenom.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Error: raisonSocialeNomsPrenom is required".to_string(),
            ));
        }
        validate::max_length(
            "raisonSocialeNomsPrenom",
            Some(&dto.raison_sociale_noms_prenom),
            200,
        )?;
        validate::max_length("cin", dto.cin.as_deref(), 50)?;
        validate::max_length("ice", dto.ice.as_deref(), 50)?;
        validate::max_length("pmPp", dto.pm_pp.as_deref(), 2)?;
        validate::max_length("objet", dto.objet.as_deref(), 1000)?;

        Ok(Self {
            date_entree: dto.date_entree,
            raison_sociale_noms_prenom: dto.raison_sociale_noms_prenom,
            cin: dto.cin,
            if_value: dto.if_value,
            ice: dto.ice,
            pm_pp: dto.pm_pp,
            objet: dto.objet,
        })
    }

    /// Rejects fields whose CIN, IF and ICE are all absent or blank.
    pub fn require_identifier(&self) -> Result<(), AppError> {
        require_identifier(
            self.cin.as_deref(),
            self.if_value.as_deref(),
            self.ice.as_deref(),
        )
    }
}

/// Processing update applied by processing staff and managers.
///
/// The processing fields are always written (absent values clear the column); the basic
/// fields in the second group are applied only when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessRequestParams {
    /// `None` means today.
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

impl ProcessRequestParams {
    pub fn from_dto(dto: UpdateRequestDto) -> Self {
        Self {
            date_traitement: dto.date_traitement,
            etat: dto.etat,
            if_value: dto.if_value,
            secteur: dto.secteur,
            motif_rejet: dto.motif_rejet,
            tp: dto.tp,
            email: dto.email,
            gsm: dto.gsm,
            fix: dto.fix,
            remarque: dto.remarque,
            cin: dto.cin,
            ice: dto.ice,
            raison_sociale_noms_prenom: dto.raison_sociale_noms_prenom,
            pm_pp: dto.pm_pp,
            objet: dto.objet,
        }
    }
}

/// Rejects a request whose CIN, IF and ICE are all absent or blank.
pub fn require_identifier(
    cin: Option<&str>,
    if_value: Option<&str>,
    ice: Option<&str>,
) -> Result<(), AppError> {
    if validate::is_blank(cin) && validate::is_blank(if_value) && validate::is_blank(ice) {
        return Err(AppError::BadRequest(MISSING_IDENTIFIER.to_string()));
    }
    Ok(())
}
