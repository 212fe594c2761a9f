//! Attestation factory for creating test attestation entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test attestations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::attestation::AttestationFactory;
///
/// let attestation = AttestationFactory::new(&db, creator.id)
///     .attestation_type("depart_definitif")
///     .status("livré")
///     .build()
///     .await?;
/// ```
pub struct AttestationFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    nom: String,
    cin: String,
    attestation_type: String,
    status: String,
}

impl<'a> AttestationFactory<'a> {
    /// Creates a new AttestationFactory with default values.
    ///
    /// Defaults:
    /// - nom: `"Nom{id}"`, cin: `"CD{id}"`
    /// - attestation_type: `"revenu_globale"`
    /// - status: `"déposé"`
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            nom: format!("Nom{}", id),
            cin: format!("CD{}", id),
            attestation_type: "revenu_globale".to_string(),
            status: "déposé".to_string(),
        }
    }

    /// Sets the applicant last name.
    pub fn nom(mut self, nom: impl Into<String>) -> Self {
        self.nom = nom.into();
        self
    }

    /// Sets the CIN identifier.
    pub fn cin(mut self, cin: impl Into<String>) -> Self {
        self.cin = cin.into();
        self
    }

    /// Sets the attestation type key.
    pub fn attestation_type(mut self, attestation_type: impl Into<String>) -> Self {
        self.attestation_type = attestation_type.into();
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the attestation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attestation::Model)` - Created attestation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attestation::Model, DbErr> {
        let now = Utc::now();
        entity::attestation::ActiveModel {
            if_value: ActiveValue::Set("12345678".to_string()),
            cin: ActiveValue::Set(self.cin),
            nom: ActiveValue::Set(self.nom),
            prenom: ActiveValue::Set("Amina".to_string()),
            email: ActiveValue::Set(Some("amina@example.com".to_string())),
            phone: ActiveValue::Set(Some("0600000000".to_string())),
            r#type: ActiveValue::Set(self.attestation_type),
            status: ActiveValue::Set(self.status),
            creator_id: ActiveValue::Set(Some(self.creator_id)),
            delivered_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deposited attestation with default values for the given creator.
pub async fn create_attestation(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::attestation::Model, DbErr> {
    AttestationFactory::new(db, creator_id).build().await
}
