use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::attestation::AttestationRepository,
    error::AppError,
    model::{
        attestation::{Attestation, CreateAttestationParams, STATUS_DEPOSE, STATUS_LIVRE},
        user::User,
    },
    service::export::{excel, pdf},
};

pub struct AttestationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttestationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files an attestation as `déposé` on behalf of `creator`.
    pub async fn create(
        &self,
        params: CreateAttestationParams,
        creator: &User,
    ) -> Result<Attestation, AppError> {
        let attestation = AttestationRepository::new(self.db)
            .create(params, STATUS_DEPOSE, creator.id, Utc::now())
            .await?;

        tracing::info!(
            "User {} filed attestation {} ({})",
            creator.username,
            attestation.id,
            attestation.attestation_type
        );

        Ok(attestation)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Attestation>, AppError> {
        Ok(AttestationRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Attestation>, AppError> {
        Ok(AttestationRepository::new(self.db).get_all().await?)
    }

    pub async fn get_created_by(&self, user: &User) -> Result<Vec<Attestation>, AppError> {
        Ok(AttestationRepository::new(self.db)
            .get_by_creator(user.id)
            .await?)
    }

    pub async fn get_by_type(&self, attestation_type: &str) -> Result<Vec<Attestation>, AppError> {
        Ok(AttestationRepository::new(self.db)
            .get_by_type(attestation_type)
            .await?)
    }

    pub async fn search_by_nom(&self, query: &str) -> Result<Vec<Attestation>, AppError> {
        Ok(AttestationRepository::new(self.db)
            .search_by_nom(query)
            .await?)
    }

    pub async fn search_by_cin(&self, query: &str) -> Result<Vec<Attestation>, AppError> {
        Ok(AttestationRepository::new(self.db)
            .search_by_cin(query)
            .await?)
    }

    /// Marks an attestation as handed over by `deliverer`.
    ///
    /// # Returns
    /// - `Ok(Some(Attestation))` - Attestation now `livré`
    /// - `Ok(None)` - No attestation with that ID
    /// - `Err(AppError::BadRequest)` - Attestation was already delivered
    pub async fn deliver(
        &self,
        id: i32,
        deliverer: &User,
    ) -> Result<Option<Attestation>, AppError> {
        let repo = AttestationRepository::new(self.db);

        if repo.find_by_id(id).await?.is_none() {
            return Ok(None);
        }
        if !repo
            .mark_delivered(id, STATUS_DEPOSE, STATUS_LIVRE, deliverer.id)
            .await?
        {
            return Err(AppError::BadRequest(
                "L'attestation a déjà été livrée".to_string(),
            ));
        }

        tracing::info!("User {} delivered attestation {}", deliverer.username, id);

        Ok(repo.find_by_id(id).await?)
    }

    pub async fn export_workbook(&self) -> Result<Vec<u8>, AppError> {
        let attestations = AttestationRepository::new(self.db).get_all().await?;

        Ok(excel::attestations_workbook(&attestations)?)
    }

    /// Renders the filing receipt for one attestation.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - PDF receipt
    /// - `Ok(None)` - No attestation with that ID
    pub async fn receipt(&self, id: i32) -> Result<Option<Vec<u8>>, AppError> {
        let Some(attestation) = AttestationRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(pdf::attestation_receipt(&attestation)?))
    }
}
