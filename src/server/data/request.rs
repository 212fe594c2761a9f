//! Request data repository for database operations.
//!
//! Provides `RequestRepository` for creating, querying, updating and deleting taxpayer
//! requests. Every read resolves creator and agent usernames in one extra query so the
//! returned domain models are ready for DTO conversion and export.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::user::UserRepository,
    model::request::{ProcessRequestParams, Request, RequestFieldsParams},
    util::search::contains_ignore_case,
};

pub struct RequestRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RequestRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new request filed by `creator_id`.
    ///
    /// # Arguments
    /// - `params` - Validated basic fields; `date_entree` must already be defaulted
    /// - `etat` - Initial workflow state
    /// - `creator_id` - User filing the request
    /// - `now` - Value for both `created_at` and `updated_at`
    ///
    /// # Returns
    /// - `Ok(Request)` - The created request with creator username resolved
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: RequestFieldsParams,
        etat: &str,
        creator_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Request, DbErr> {
        let entity = entity::request::ActiveModel {
            date_entree: ActiveValue::Set(params.date_entree),
            raison_sociale_noms_prenom: ActiveValue::Set(params.raison_sociale_noms_prenom),
            cin: ActiveValue::Set(params.cin),
            pm_pp: ActiveValue::Set(params.pm_pp),
            objet: ActiveValue::Set(params.objet),
            date_traitement: ActiveValue::Set(None),
            etat: ActiveValue::Set(Some(etat.to_string())),
            if_value: ActiveValue::Set(params.if_value),
            ice: ActiveValue::Set(params.ice),
            secteur: ActiveValue::Set(None),
            agent_id: ActiveValue::Set(None),
            motif_rejet: ActiveValue::Set(None),
            tp: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            gsm: ActiveValue::Set(None),
            fix: ActiveValue::Set(None),
            remarque: ActiveValue::Set(None),
            creator_id: ActiveValue::Set(creator_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.single(entity).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Request>, DbErr> {
        match entity::prelude::Request::find_by_id(id).one(self.db).await? {
            Some(entity) => self.single(entity).await.map(Some),
            None => Ok(None),
        }
    }

    /// Gets every request, newest first.
    pub async fn get_all(&self) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    /// Gets the `limit` most recently created requests.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .order_by_desc(entity::request::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    pub async fn get_by_creator(&self, creator_id: i32) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::CreatorId.eq(creator_id))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    pub async fn get_by_agent(&self, agent_id: i32) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::AgentId.eq(agent_id))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    /// Gets requests whose `etat` equals `etat` exactly.
    pub async fn get_by_etat(&self, etat: &str) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::Etat.eq(etat))
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_usernames(entities).await
    }

    /// Substring search on the company or person name, ignoring case.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|r| contains_ignore_case(&r.raison_sociale_noms_prenom, query))
            .collect();

        self.with_usernames(entities).await
    }

    /// Substring search on CIN, ignoring case. Requests without a CIN never match.
    pub async fn search_by_cin(&self, query: &str) -> Result<Vec<Request>, DbErr> {
        let entities = entity::prelude::Request::find()
            .filter(entity::request::Column::Cin.is_not_null())
            .order_by_desc(entity::request::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .filter(|r| {
                r.cin
                    .as_deref()
                    .is_some_and(|cin| contains_ignore_case(cin, query))
            })
            .collect();

        self.with_usernames(entities).await
    }

    /// Overwrites the basic fields of a request.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - The updated request
    /// - `Ok(None)` - No request with that ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update_fields(
        &self,
        id: i32,
        params: RequestFieldsParams,
    ) -> Result<Option<Request>, DbErr> {
        let Some(existing) = entity::prelude::Request::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::request::ActiveModel = existing.into();
        active.date_entree = ActiveValue::Set(params.date_entree);
        active.raison_sociale_noms_prenom = ActiveValue::Set(params.raison_sociale_noms_prenom);
        active.cin = ActiveValue::Set(params.cin);
        active.pm_pp = ActiveValue::Set(params.pm_pp);
        active.objet = ActiveValue::Set(params.objet);
        active.if_value = ActiveValue::Set(params.if_value);
        active.ice = ActiveValue::Set(params.ice);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        self.single(entity).await.map(Some)
    }

    /// Applies a processing update and assigns the request to `agent_id`.
    ///
    /// Processing fields are always written. Basic fields in `params` are only written when
    /// present.
    ///
    /// # Arguments
    /// - `id` - Request to update
    /// - `params` - Processing update
    /// - `date_traitement` - Processing date, already defaulted by the caller
    /// - `agent_id` - User recorded as the processing agent
    pub async fn update_processing(
        &self,
        id: i32,
        params: ProcessRequestParams,
        date_traitement: NaiveDate,
        agent_id: i32,
    ) -> Result<Option<Request>, DbErr> {
        let Some(existing) = entity::prelude::Request::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::request::ActiveModel = existing.into();
        active.date_traitement = ActiveValue::Set(Some(date_traitement));
        active.etat = ActiveValue::Set(params.etat);
        active.if_value = ActiveValue::Set(params.if_value);
        active.secteur = ActiveValue::Set(params.secteur);
        active.motif_rejet = ActiveValue::Set(params.motif_rejet);
        active.tp = ActiveValue::Set(params.tp);
        active.email = ActiveValue::Set(params.email);
        active.gsm = ActiveValue::Set(params.gsm);
        active.fix = ActiveValue::Set(params.fix);
        active.remarque = ActiveValue::Set(params.remarque);

        if let Some(cin) = params.cin {
            active.cin = ActiveValue::Set(Some(cin));
        }
        if let Some(ice) = params.ice {
            active.ice = ActiveValue::Set(Some(ice));
        }
        if let Some(name) = params.raison_sociale_noms_prenom {
            active.raison_sociale_noms_prenom = ActiveValue::Set(name);
        }
        if let Some(pm_pp) = params.pm_pp {
            active.pm_pp = ActiveValue::Set(Some(pm_pp));
        }
        if let Some(objet) = params.objet {
            active.objet = ActiveValue::Set(Some(objet));
        }

        active.agent_id = ActiveValue::Set(Some(agent_id));
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;
        self.single(entity).await.map(Some)
    }

    /// Moves every request `creator_id` filed on `day` from state `from` to state `to`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests updated
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn advance_state_for_creator_on(
        &self,
        creator_id: i32,
        day: NaiveDate,
        from: &str,
        to: &str,
    ) -> Result<u64, DbErr> {
        let ids: Vec<i32> = entity::prelude::Request::find()
            .filter(entity::request::Column::CreatorId.eq(creator_id))
            .filter(entity::request::Column::Etat.eq(from))
            .all(self.db)
            .await?
            .into_iter()
            .filter(|r| r.created_at.date_naive() == day)
            .map(|r| r.id)
            .collect();

        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Request::update_many()
            .col_expr(entity::request::Column::Etat, Expr::value(to))
            .col_expr(entity::request::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::request::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a request by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No request with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Request::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_by_agent(&self, agent_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Request::find()
            .filter(entity::request::Column::AgentId.eq(agent_id))
            .count(self.db)
            .await
    }

    pub async fn count_by_creator(&self, creator_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Request::find()
            .filter(entity::request::Column::CreatorId.eq(creator_id))
            .count(self.db)
            .await
    }

    /// Moves every agent reference from `from_user` to `to_user`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests reassigned
    pub async fn reassign_agent(&self, from_user: i32, to_user: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Request::update_many()
            .col_expr(entity::request::Column::AgentId, Expr::value(to_user))
            .filter(entity::request::Column::AgentId.eq(from_user))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Moves every creator reference from `from_user` to `to_user`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests reassigned
    pub async fn reassign_creator(&self, from_user: i32, to_user: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Request::update_many()
            .col_expr(entity::request::Column::CreatorId, Expr::value(to_user))
            .filter(entity::request::Column::CreatorId.eq(from_user))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn single(&self, entity: entity::request::Model) -> Result<Request, DbErr> {
        let mut requests = self.with_usernames(vec![entity]).await?;
        requests
            .pop()
            .ok_or_else(|| DbErr::Custom("Request conversion yielded no row".to_string()))
    }

    /// Converts entities to domain models, resolving creator and agent usernames.
    async fn with_usernames(
        &self,
        entities: Vec<entity::request::Model>,
    ) -> Result<Vec<Request>, DbErr> {
        let mut user_ids: Vec<i32> = entities
            .iter()
            .flat_map(|r| std::iter::once(r.creator_id).chain(r.agent_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();

        let usernames = UserRepository::new(self.db)
            .usernames_by_ids(&user_ids)
            .await?;

        Ok(entities
            .into_iter()
            .map(|entity| Request::from_entity(entity, &usernames))
            .collect())
    }
}
