//! Request workflow: intake, processing, front-desk edits and exports.
//!
//! Front-desk staff may only edit their own requests, and only on the UTC calendar day the
//! request was filed. Processing staff and managers edit without restriction.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::request::RequestRepository,
    error::AppError,
    model::{
        request::{
            ProcessRequestParams, Request, RequestFieldsParams, ETAT_EN_TRAITEMENT, ETAT_NOUVEAU,
        },
        user::{Role, User},
    },
    service::export::{excel, pdf},
};

pub struct RequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a new request as `NOUVEAU`, with today as the default entry date.
    ///
    /// # Returns
    /// - `Ok(Request)` - Created request
    /// - `Err(AppError::BadRequest)` - None of CIN, IF and ICE is set
    pub async fn create(
        &self,
        mut params: RequestFieldsParams,
        creator: &User,
    ) -> Result<Request, AppError> {
        params.require_identifier()?;

        let now = Utc::now();
        params.date_entree.get_or_insert(now.date_naive());

        let request = RequestRepository::new(self.db)
            .create(params, ETAT_NOUVEAU, creator.id, now)
            .await?;

        tracing::info!("User {} filed request {}", creator.username, request.id);

        Ok(request)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Request>, AppError> {
        Ok(RequestRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Request>, AppError> {
        Ok(RequestRepository::new(self.db).get_all().await?)
    }

    /// Requests filed by `user`.
    pub async fn get_submitted_by(&self, user: &User) -> Result<Vec<Request>, AppError> {
        Ok(RequestRepository::new(self.db)
            .get_by_creator(user.id)
            .await?)
    }

    /// Requests `user` has processed.
    pub async fn get_processed_by(&self, user: &User) -> Result<Vec<Request>, AppError> {
        Ok(RequestRepository::new(self.db).get_by_agent(user.id).await?)
    }

    /// Requests handed off to processing and not yet picked up.
    pub async fn get_processing_queue(&self) -> Result<Vec<Request>, AppError> {
        self.get_by_state(ETAT_EN_TRAITEMENT).await
    }

    pub async fn get_by_state(&self, etat: &str) -> Result<Vec<Request>, AppError> {
        Ok(RequestRepository::new(self.db).get_by_etat(etat).await?)
    }

    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Request>, AppError> {
        Ok(RequestRepository::new(self.db)
            .search_by_name(query)
            .await?)
    }

    pub async fn search_by_cin(&self, query: &str) -> Result<Vec<Request>, AppError> {
        Ok(RequestRepository::new(self.db).search_by_cin(query).await?)
    }

    /// Applies a processing update and records `agent` as the processing agent.
    ///
    /// # Returns
    /// - `Ok(Some(Request))` - Updated request
    /// - `Ok(None)` - No request with that ID
    pub async fn process(
        &self,
        id: i32,
        params: ProcessRequestParams,
        agent: &User,
    ) -> Result<Option<Request>, AppError> {
        let date_traitement = params
            .date_traitement
            .unwrap_or_else(|| Utc::now().date_naive());

        let request = RequestRepository::new(self.db)
            .update_processing(id, params, date_traitement, agent.id)
            .await?;

        if let Some(request) = &request {
            tracing::info!(
                "User {} processed request {} to state {:?}",
                agent.username,
                request.id,
                request.etat
            );
        }

        Ok(request)
    }

    /// Overwrites the basic fields of a request on behalf of `editor`.
    ///
    /// # Returns
    /// - `Ok(Request)` - Updated request
    /// - `Err(AppError::NotFound)` - No request with that ID
    /// - `Err(AppError::Forbidden)` - Front-desk editor did not file the request
    /// - `Err(AppError::BadRequest)` - Front-desk editor is past the filing day, or none of
    ///   CIN, IF and ICE is set
    pub async fn edit(
        &self,
        id: i32,
        params: RequestFieldsParams,
        editor: &User,
    ) -> Result<Request, AppError> {
        let repo = RequestRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Error: Request not found".to_string()))?;

        if editor.role == Role::Frontdesk {
            if existing.creator_id != editor.id {
                return Err(AppError::Forbidden(
                    "Error: You are not authorized to edit this request".to_string(),
                ));
            }
            if existing.created_at.date_naive() != Utc::now().date_naive() {
                return Err(AppError::BadRequest(
                    "Error: Frontdesk users can only edit requests on the day of creation"
                        .to_string(),
                ));
            }
        }

        params.require_identifier()?;

        repo.update_fields(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Error: Request not found".to_string()))
    }

    /// Hands every request `user` filed today and still `NOUVEAU` over to processing.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of requests moved to `EN_TRAITEMENT`
    pub async fn hand_off_today(&self, user: &User) -> Result<u64, AppError> {
        let count = RequestRepository::new(self.db)
            .advance_state_for_creator_on(
                user.id,
                Utc::now().date_naive(),
                ETAT_NOUVEAU,
                ETAT_EN_TRAITEMENT,
            )
            .await?;

        tracing::info!("User {} handed {} requests to processing", user.username, count);

        Ok(count)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(RequestRepository::new(self.db).delete(id).await?)
    }

    /// Renders every request as an `.xlsx` workbook.
    pub async fn export_workbook(&self) -> Result<Vec<u8>, AppError> {
        let requests = RequestRepository::new(self.db).get_all().await?;

        Ok(excel::requests_workbook(&requests)?)
    }

    /// Renders the deposit receipt for one request.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - PDF receipt
    /// - `Ok(None)` - No request with that ID
    pub async fn receipt(&self, id: i32) -> Result<Option<Vec<u8>>, AppError> {
        let Some(request) = RequestRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(pdf::request_receipt(&request)?))
    }
}
