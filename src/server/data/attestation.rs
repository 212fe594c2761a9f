//! Attestation data repository for database operations.
//!
//! Provides `AttestationRepository` for filing, querying and delivering attestations.
//! Creator and deliverer usernames are resolved alongside every read.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user::UserRepository,
    model::attestation::{Attestation, CreateAttestationParams},
    util::search::contains_ignore_case,
};

pub struct AttestationRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttestationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an attestation with the given initial status.
    ///
    /// # Returns
    /// - `Ok(Attestation)` - The created attestation with creator username resolved
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateAttestationParams,
        status: &str,
        creator_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Attestation, DbErr> {
        let entity = entity::attestation::ActiveModel {
            if_value: ActiveValue::Set(params.if_value),
            cin: ActiveValue::Set(params.cin),
            nom: ActiveValue::Set(params.nom),
            prenom: ActiveValue::Set(params.prenom),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            r#type: ActiveValue::Set(params.attestation_type),
            status: ActiveValue::Set(status.to_string()),
            creator_id: ActiveValue::Set(Some(creator_id)),
            delivered_by_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.single(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Attestation>, DbErr> {
        match entity::prelude::Attestation::find_by_id(id)
            .one(self.db)
            .await?
        {
            Some(entity) => self.single(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Gets every attestation, newest first.
    pub async fn get_all(&self) -> Result<Vec<Attestation>, DbErr> {
        let entities = entity::prelude::Attestation::find()
            .order_by_desc(entity::attestation::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    /// Gets the `limit` most recently filed attestations.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Attestation>, DbErr> {
        let entities = entity::prelude::Attestation::find()
            .order_by_desc(entity::attestation::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    pub async fn get_by_creator(&self, creator_id: i32) -> Result<Vec<Attestation>, DbErr> {
        let entities = entity::prelude::Attestation::find()
            .filter(entity::attestation::Column::CreatorId.eq(creator_id))
            .order_by_desc(entity::attestation::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    /// Gets attestations whose type code equals `attestation_type` exactly.
    pub async fn get_by_type(&self, attestation_type: &str) -> Result<Vec<Attestation>, DbErr> {
        let entities = entity::prelude::Attestation::find()
            .filter(entity::attestation::Column::Type.eq(attestation_type))
            .order_by_desc(entity::attestation::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    /// Substring search on last name, ignoring case.
    pub async fn search_by_nom(&self, query: &str) -> Result<Vec<Attestation>, DbErr> {
        let entities = entity::prelude::Attestation::find()
            .order_by_desc(entity::attestation::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|a| contains_ignore_case(&a.nom, query))
            .collect();

        self.with_usernames(entities).await
    }

    /// Substring search on CIN, ignoring case.
    pub async fn search_by_cin(&self, query: &str) -> Result<Vec<Attestation>, DbErr> {
        let entities = entity::prelude::Attestation::find()
            .order_by_desc(entity::attestation::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|a| contains_ignore_case(&a.cin, query))
            .collect();

        self.with_usernames(entities).await
    }

    /// Records delivery: moves `status` from `from` to `to`, sets the deliverer and
    /// `updated_at`.
    ///
    /// The status check and the write are a single statement, so concurrent deliveries
    /// cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(true)` - The attestation was in `from` and is now in `to`
    /// - `Ok(false)` - No attestation with that ID is in `from`
    pub async fn mark_delivered(
        &self,
        id: i32,
        from: &str,
        to: &str,
        delivered_by_id: i32,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Attestation::update_many()
            .col_expr(entity::attestation::Column::Status, Expr::value(to))
            .col_expr(
                entity::attestation::Column::DeliveredById,
                Expr::value(delivered_by_id),
            )
            .col_expr(entity::attestation::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::attestation::Column::Id.eq(id))
            .filter(entity::attestation::Column::Status.eq(from))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts attestations the user either filed or delivered.
    pub async fn count_referencing_user(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Attestation::find()
            .filter(
                Condition::any()
                    .add(entity::attestation::Column::CreatorId.eq(user_id))
                    .add(entity::attestation::Column::DeliveredById.eq(user_id)),
            )
            .count(self.db)
            .await
    }

    /// Moves creator and deliverer references from `from_user` to `to_user`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of references moved
    pub async fn reassign_user(&self, from_user: i32, to_user: i32) -> Result<u64, DbErr> {
        let created = entity::prelude::Attestation::update_many()
            .col_expr(entity::attestation::Column::CreatorId, Expr::value(to_user))
            .filter(entity::attestation::Column::CreatorId.eq(from_user))
            .exec(self.db)
            .await?;

        let delivered = entity::prelude::Attestation::update_many()
            .col_expr(
                entity::attestation::Column::DeliveredById,
                Expr::value(to_user),
            )
            .filter(entity::attestation::Column::DeliveredById.eq(from_user))
            .exec(self.db)
            .await?;

        Ok(created.rows_affected + delivered.rows_affected)
    }

    async fn single(&self, entity: entity::attestation::Model) -> Result<Attestation, DbErr> {
        let mut attestations = self.with_usernames(vec![entity]).await?;
        attestations
            .pop()
            .ok_or_else(|| DbErr::Custom("Attestation conversion yielded no row".to_string()))
    }

    async fn with_usernames(
        &self,
        entities: Vec<entity::attestation::Model>,
    ) -> Result<Vec<Attestation>, DbErr> {
        let mut user_ids: Vec<i32> = entities
            .iter()
            .flat_map(|a| a.creator_id.into_iter().chain(a.delivered_by_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let usernames = UserRepository::new(self.db)
            .usernames_by_ids(&user_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| Attestation::from_entity(entity, &usernames))
            .collect())
    }
}
