//! Attestation type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an attestation type with a unique generated label.
///
/// # Returns
/// - `Ok(entity::type_attestation::Model)` - Created type labelled `"Type {id}"`
/// - `Err(DbErr)` - Database error during insert
pub async fn create_type_attestation(
    db: &DatabaseConnection,
) -> Result<entity::type_attestation::Model, DbErr> {
    create_type_attestation_with_label(db, format!("Type {}", next_id())).await
}

/// Creates an attestation type with the given label.
pub async fn create_type_attestation_with_label(
    db: &DatabaseConnection,
    label: impl Into<String>,
) -> Result<entity::type_attestation::Model, DbErr> {
    entity::type_attestation::ActiveModel {
        label: ActiveValue::Set(label.into()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
