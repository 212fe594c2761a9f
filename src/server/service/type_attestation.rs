use sea_orm::DatabaseConnection;

use crate::server::{
    data::type_attestation::TypeAttestationRepository,
    error::AppError,
    model::type_attestation::{TypeAttestation, TypeAttestationParams},
};

const LABEL_TAKEN: &str = "Un type d'attestation avec ce label existe déjà";

pub struct TypeAttestationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TypeAttestationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TypeAttestation>, AppError> {
        Ok(TypeAttestationRepository::new(self.db).get_all().await?)
    }

    pub async fn search(&self, query: &str) -> Result<Vec<TypeAttestation>, AppError> {
        Ok(TypeAttestationRepository::new(self.db)
            .search_by_label(query)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TypeAttestation>, AppError> {
        Ok(TypeAttestationRepository::new(self.db)
            .find_by_id(id)
            .await?)
    }

    /// Creates a type with a label no other type holds.
    ///
    /// # Returns
    /// - `Ok(TypeAttestation)` - Created type
    /// - `Err(AppError::Conflict)` - Label already in use
    pub async fn create(&self, params: TypeAttestationParams) -> Result<TypeAttestation, AppError> {
        let repo = TypeAttestationRepository::new(self.db);

        if repo.label_taken(&params.label, None).await? {
            return Err(AppError::Conflict(LABEL_TAKEN.to_string()));
        }

        Ok(repo.create(params).await?)
    }

    /// Renames a type.
    ///
    /// # Returns
    /// - `Ok(Some(TypeAttestation))` - Renamed type
    /// - `Ok(None)` - No type with that ID
    /// - `Err(AppError::Conflict)` - Another type already holds the label
    pub async fn update(
        &self,
        id: i32,
        params: TypeAttestationParams,
    ) -> Result<Option<TypeAttestation>, AppError> {
        let repo = TypeAttestationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        if repo.label_taken(&params.label, Some(id)).await? {
            return Err(AppError::Conflict(LABEL_TAKEN.to_string()));
        }

        Ok(repo.update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TypeAttestationRepository::new(self.db).delete(id).await?)
    }
}
