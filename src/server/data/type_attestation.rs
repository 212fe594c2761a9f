use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::type_attestation::{TypeAttestation, TypeAttestationParams},
    util::search::contains_ignore_case,
};

pub struct TypeAttestationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TypeAttestationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TypeAttestationParams) -> Result<TypeAttestation, DbErr> {
        let entity = entity::type_attestation::ActiveModel {
            label: ActiveValue::Set(params.label),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TypeAttestation::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TypeAttestation>, DbErr> {
        let entity = entity::prelude::TypeAttestation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TypeAttestation::from_entity))
    }

    /// Gets every type ordered by label.
    pub async fn get_all(&self) -> Result<Vec<TypeAttestation>, DbErr> {
        let entities = entity::prelude::TypeAttestation::find()
            .order_by_asc(entity::type_attestation::Column::Label)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TypeAttestation::from_entity).collect())
    }

    /// Substring search on label, ignoring case.
    pub async fn search_by_label(&self, query: &str) -> Result<Vec<TypeAttestation>, DbErr> {
        let entities = entity::prelude::TypeAttestation::find()
            .order_by_asc(entity::type_attestation::Column::Label)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|t| contains_ignore_case(&t.label, query))
            .map(TypeAttestation::from_entity)
            .collect())
    }

    /// Checks whether a type other than `exclude_id` already holds `label`.
    ///
    /// # Arguments
    /// - `label` - Label to look for, compared exactly
    /// - `exclude_id` - Type to ignore, used when renaming
    pub async fn label_taken(&self, label: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::TypeAttestation::find()
            .filter(entity::type_attestation::Column::Label.eq(label));
        if let Some(id) = exclude_id {
            query = query.filter(entity::type_attestation::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Renames a type.
    ///
    /// # Returns
    /// - `Ok(Some(TypeAttestation))` - The renamed type
    /// - `Ok(None)` - No type with that ID
    pub async fn update(
        &self,
        id: i32,
        params: TypeAttestationParams,
    ) -> Result<Option<TypeAttestation>, DbErr> {
        let Some(existing) = entity::prelude::TypeAttestation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::type_attestation::ActiveModel = existing.into();
        active.label = ActiveValue::Set(params.label);

        let entity = active.update(self.db).await?;
        Ok(Some(TypeAttestation::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TypeAttestation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
