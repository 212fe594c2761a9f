//! Attestation domain models and parameters.
//!
//! Attestations follow a two-step lifecycle: they are filed as `déposé` and move once to
//! `livré` when handed over to the taxpayer.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{
    model::attestation::{AttestationDto, CreateAttestationDto},
    server::{
        error::AppError,
        util::{format::format_timestamp, validate},
    },
};

pub const STATUS_DEPOSE: &str = "déposé";
pub const STATUS_LIVRE: &str = "livré";

#[derive(Debug, Clone, PartialEq)]
pub struct Attestation {
    pub id: i32,
    pub if_value: String,
    pub cin: String,
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Type code such as `revenu_globale`.
    pub attestation_type: String,
    pub status: String,
    pub creator_id: Option<i32>,
    pub creator_username: Option<String>,
    pub delivered_by_id: Option<i32>,
    pub delivered_by_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Attestation {
    /// Converts an entity model to an attestation domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    /// - `usernames` - Usernames keyed by user ID, covering the creator and deliverer
    pub fn from_entity(
        entity: entity::attestation::Model,
        usernames: &HashMap<i32, String>,
    ) -> Self {
        let username = |id: Option<i32>| id.and_then(|id| usernames.get(&id).cloned());

        Self {
            id: entity.id,
            if_value: entity.if_value,
            cin: entity.cin,
            nom: entity.nom,
            prenom: entity.prenom,
            email: entity.email,
            phone: entity.phone,
            attestation_type: entity.r#type,
            status: entity.status,
            creator_username: username(entity.creator_id),
            creator_id: entity.creator_id,
            delivered_by_username: username(entity.delivered_by_id),
            delivered_by_id: entity.delivered_by_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AttestationDto {
        AttestationDto {
            id: self.id,
            if_value: self.if_value,
            cin: self.cin,
            nom: self.nom,
            prenom: self.prenom,
            email: self.email,
            phone: self.phone,
            attestation_type: self.attestation_type,
            status: self.status,
            created_at: format_timestamp(&self.created_at),
            updated_at: format_timestamp(&self.updated_at),
            creator_id: self.creator_id,
            creator_username: self.creator_username,
            delivered_by_id: self.delivered_by_id,
            delivered_by_username: self.delivered_by_username,
        }
    }
}

/// Validated input for filing an attestation.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAttestationParams {
    pub if_value: String,
    pub cin: String,
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub attestation_type: String,
}

impl CreateAttestationParams {
    /// Validates and converts a create-attestation DTO.
    ///
    /// # Returns
    /// - `Ok(CreateAttestationParams)` - Required fields are non-blank and the email, if any,
    ///   is well-formed. A blank email is treated as absent.
    /// - `Err(AppError::BadRequest)` - French message naming the first failing field
    pub fn from_dto(dto: CreateAttestationDto) -> Result<Self, AppError> {
        let required = [
            (&dto.if_value, "Le numéro IF est obligatoire"),
            (&dto.cin, "Le CIN est obligatoire"),
            (&dto.nom, "Le nom est obligatoire"),
            (&dto.prenom, "Le prénom est obligatoire"),
            (&dto.attestation_type, "Le type d'attestation est obligatoire"),
        ];
        if let Some((_, message)) = required.iter().find(|(v, _)| v.trim().is_empty()) {
            return Err(AppError::BadRequest(message.to_string()));
        }

        let email = dto.email.filter(|e| !e.trim().is_empty());
        if let Some(email) = &email {
            if !validate::is_email(email) {
                return Err(AppError::BadRequest("Format d'email invalide".to_string()));
            }
        }

        Ok(Self {
            if_value: dto.if_value,
            cin: dto.cin,
            nom: dto.nom,
            prenom: dto.prenom,
            email,
            phone: dto.phone,
            attestation_type: dto.attestation_type,
        })
    }
}
