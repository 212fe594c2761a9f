use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attestation::Table)
                    .if_not_exists()
                    .col(pk_auto(Attestation::Id))
                    .col(string(Attestation::IfValue))
                    .col(string(Attestation::Cin))
                    .col(string(Attestation::Nom))
                    .col(string(Attestation::Prenom))
                    .col(string_null(Attestation::Email))
                    .col(string_null(Attestation::Phone))
                    .col(string(Attestation::Type))
                    .col(string(Attestation::Status).default("déposé"))
                    .col(integer_null(Attestation::CreatorId))
                    .col(integer_null(Attestation::DeliveredById))
                    .col(
                        timestamp(Attestation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Attestation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attestation_creator_id")
                            .from(Attestation::Table, Attestation::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attestation_delivered_by_id")
                            .from(Attestation::Table, Attestation::DeliveredById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attestation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attestation {
    Table,
    Id,
    IfValue,
    Cin,
    Nom,
    Prenom,
    Email,
    Phone,
    Type,
    Status,
    CreatorId,
    DeliveredById,
    CreatedAt,
    UpdatedAt,
}
