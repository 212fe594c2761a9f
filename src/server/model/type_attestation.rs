use chrono::{DateTime, Utc};

use crate::{
    model::type_attestation::{TypeAttestationDto, TypeAttestationPayloadDto},
    server::{
        error::AppError,
        util::{format::format_timestamp, validate},
    },
};

/// Reference entry listing an attestation kind offered at the front desk.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAttestation {
    pub id: i32,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl TypeAttestation {
    pub fn from_entity(entity: entity::type_attestation::Model) -> Self {
        Self {
            id: entity.id,
            label: entity.label,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TypeAttestationDto {
        TypeAttestationDto {
            id: self.id,
            label: self.label,
            created_at: format_timestamp(&self.created_at),
        }
    }
}

/// Trimmed label for creating or renaming a type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAttestationParams {
    pub label: String,
}

impl TypeAttestationParams {
    /// # Returns
    /// - `Ok(TypeAttestationParams)` - Label holds 3 to 255 characters after trimming
    /// - `Err(AppError::BadRequest)` - Label too short or too long
    pub fn from_dto(dto: TypeAttestationPayloadDto) -> Result<Self, AppError> {
        let label = dto.label.trim().to_string();
        validate::length("label", &label, 3, 255)?;

        Ok(Self { label })
    }
}
