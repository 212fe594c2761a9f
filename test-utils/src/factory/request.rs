//! Request factory for creating test request entities.
//!
//! Requests default to a natural person with a CIN, state `NOUVEAU` and timestamps set to
//! now, so they fall inside the front-desk edit window unless `created_at` is overridden.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test requests with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::request::RequestFactory;
///
/// let request = RequestFactory::new(&db, creator.id)
///     .name("ACME SARL")
///     .etat("EN_TRAITEMENT")
///     .created_at(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    creator_id: i32,
    agent_id: Option<i32>,
    name: String,
    cin: Option<String>,
    if_value: Option<String>,
    ice: Option<String>,
    pm_pp: Option<String>,
    objet: Option<String>,
    etat: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Contribuable {id}"`
    /// - cin: `Some("AB{id}")`, if_value and ice: `None`
    /// - pm_pp: `Some("PP")`, objet: `Some("Inscription")`
    /// - etat: `Some("NOUVEAU")`, agent: `None`
    /// - created_at / updated_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `creator_id` - ID of the user who filed the request
    pub fn new(db: &'a DatabaseConnection, creator_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            creator_id,
            agent_id: None,
            name: format!("Contribuable {}", id),
            cin: Some(format!("AB{}", id)),
            if_value: None,
            ice: None,
            pm_pp: Some("PP".to_string()),
            objet: Some("Inscription".to_string()),
            etat: Some("NOUVEAU".to_string()),
            created_at: Utc::now(),
        }
    }

    /// Sets the company or person name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the CIN identifier.
    pub fn cin(mut self, cin: Option<&str>) -> Self {
        self.cin = cin.map(str::to_string);
        self
    }

    /// Sets the IF identifier.
    pub fn if_value(mut self, if_value: Option<&str>) -> Self {
        self.if_value = if_value.map(str::to_string);
        self
    }

    /// Sets the ICE identifier.
    pub fn ice(mut self, ice: Option<&str>) -> Self {
        self.ice = ice.map(str::to_string);
        self
    }

    /// Sets the PM/PP marker.
    pub fn pm_pp(mut self, pm_pp: Option<&str>) -> Self {
        self.pm_pp = pm_pp.map(str::to_string);
        self
    }

    /// Sets the workflow state.
    pub fn etat(mut self, etat: impl Into<String>) -> Self {
        self.etat = Some(etat.into());
        self
    }

    /// Sets the processing agent.
    pub fn agent(mut self, agent_id: i32) -> Self {
        self.agent_id = Some(agent_id);
        self
    }

    /// Sets both `created_at` and `updated_at`.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            date_entree: ActiveValue::Set(Some(self.created_at.date_naive())),
            raison_sociale_noms_prenom: ActiveValue::Set(self.name),
            cin: ActiveValue::Set(self.cin),
            pm_pp: ActiveValue::Set(self.pm_pp),
            objet: ActiveValue::Set(self.objet),
            date_traitement: ActiveValue::Set(None),
            etat: ActiveValue::Set(self.etat),
            if_value: ActiveValue::Set(self.if_value),
            ice: ActiveValue::Set(self.ice),
            secteur: ActiveValue::Set(None),
            agent_id: ActiveValue::Set(self.agent_id),
            motif_rejet: ActiveValue::Set(None),
            tp: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            gsm: ActiveValue::Set(None),
            fix: ActiveValue::Set(None),
            remarque: ActiveValue::Set(None),
            creator_id: ActiveValue::Set(self.creator_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a request with default values for the given creator.
pub async fn create_request(
    db: &DatabaseConnection,
    creator_id: i32,
) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db, creator_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{builder::TestBuilder, factory::user::create_user};

    #[tokio::test]
    async fn creates_request_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;
        let request = create_request(db, user.id).await?;

        assert_eq!(request.creator_id, user.id);
        assert_eq!(request.etat.as_deref(), Some("NOUVEAU"));
        assert!(request.cin.is_some());
        assert!(request.agent_id.is_none());

        Ok(())
    }
}
