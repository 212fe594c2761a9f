//! Assistant that answers free-text questions about the stored records.
//!
//! A question is answered in the language it was asked in. The service picks a small
//! snapshot of records the question seems to be about, wraps it in a language-specific
//! prompt and forwards it to the generation endpoint. Replies that do not read as the
//! expected language are replaced by a greeting, and endpoint failures become apologetic
//! answers rather than errors.

pub mod client;
pub mod language;
pub mod prompt;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        attestation::AttestationRepository, request::RequestRepository,
        type_attestation::TypeAttestationRepository, user::UserRepository,
    },
    error::AppError,
    service::chatbot::{
        client::{GenerationError, OllamaClient},
        language::Language,
        prompt::{build_prompt, Snapshot, SnapshotScope},
    },
};

/// Records per table included when the question targets no specific ID.
const SNAPSHOT_LIMIT: u64 = 5;

pub struct ChatbotService<'a> {
    db: &'a DatabaseConnection,
    client: &'a OllamaClient,
}

impl<'a> ChatbotService<'a> {
    pub fn new(db: &'a DatabaseConnection, client: &'a OllamaClient) -> Self {
        Self { db, client }
    }

    /// Answers `question`.
    ///
    /// # Returns
    /// - `Ok(String)` - Model answer, fallback greeting, or localized failure message
    /// - `Err(AppError::BadRequest)` - Question is empty or blank
    /// - `Err(AppError::DbErr)` - Snapshot could not be loaded
    pub async fn ask(&self, question: &str) -> Result<String, AppError> {
        if question.trim().is_empty() {
            return Err(AppError::BadRequest("Question is required.".to_string()));
        }

        let language = Language::detect(question);
        let snapshot = self.snapshot(&SnapshotScope::from_question(question)).await?;
        let prompt = build_prompt(question, language, &snapshot);

        tracing::debug!("Chatbot prompt built ({:?}, {} chars)", language, prompt.len());

        let answer = match self.client.generate(&prompt).await {
            Ok(text) => {
                let text = text.trim();
                if language.accepts(text) {
                    text.to_string()
                } else {
                    tracing::debug!("Discarding answer not in {:?}", language);
                    language.fallback_greeting().to_string()
                }
            }
            Err(e) => {
                tracing::warn!("Chatbot generation failed: {}", e);
                match e {
                    GenerationError::MissingResponse => language.no_response_message(),
                    GenerationError::Status(_) => language.upstream_error_message(),
                    GenerationError::Transport(_) => language.transport_error_message(),
                }
                .to_string()
            }
        };

        Ok(answer)
    }

    /// Loads the records in `scope`: the target record when an ID was given, otherwise the
    /// most recent few. Types are listed in full unless narrowed by the scope.
    async fn snapshot(&self, scope: &SnapshotScope) -> Result<Snapshot, AppError> {
        let mut snapshot = Snapshot::default();

        if scope.types {
            let repo = TypeAttestationRepository::new(self.db);
            snapshot.types = match scope.target_id {
                Some(id) if !scope.lists_all_types() => {
                    repo.find_by_id(id).await?.into_iter().collect()
                }
                _ => repo.get_all().await?,
            };
        }

        if scope.attestations {
            let repo = AttestationRepository::new(self.db);
            snapshot.attestations = match scope.target_id {
                Some(id) => repo.find_by_id(id).await?.into_iter().collect(),
                None => repo.get_recent(SNAPSHOT_LIMIT).await?,
            };
        }

        if scope.requests {
            let repo = RequestRepository::new(self.db);
            snapshot.requests = match scope.target_id {
                Some(id) => repo.find_by_id(id).await?.into_iter().collect(),
                None => repo.get_recent(SNAPSHOT_LIMIT).await?,
            };
        }

        if scope.users {
            let repo = UserRepository::new(self.db);
            snapshot.users = match scope.target_id {
                Some(id) => repo.find_by_id(id).await?.into_iter().collect(),
                None => repo.get_first(SNAPSHOT_LIMIT).await?,
            };
        }

        Ok(snapshot)
    }
}

#[cfg(test)]
mod test;
