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
                    .table(Request::Table)
                    .if_not_exists()
                    .col(pk_auto(Request::Id))
                    .col(date_null(Request::DateEntree))
                    .col(string_len(Request::RaisonSocialeNomsPrenom, 200))
                    .col(string_len_null(Request::Cin, 50))
                    .col(string_len_null(Request::PmPp, 2))
                    .col(text_null(Request::Objet))
                    .col(date_null(Request::DateTraitement))
                    .col(string_len_null(Request::Etat, 50))
                    .col(string_len_null(Request::IfValue, 50))
                    .col(string_len_null(Request::Ice, 50))
                    .col(string_len_null(Request::Secteur, 100))
                    .col(integer_null(Request::AgentId))
                    .col(text_null(Request::MotifRejet))
                    .col(string_len_null(Request::Tp, 50))
                    .col(string_len_null(Request::Email, 100))
                    .col(string_len_null(Request::Gsm, 20))
                    .col(string_len_null(Request::Fix, 20))
                    .col(text_null(Request::Remarque))
                    .col(integer(Request::CreatorId))
                    .col(
                        timestamp(Request::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Request::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_creator_id")
                            .from(Request::Table, Request::CreatorId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_request_agent_id")
                            .from(Request::Table, Request::AgentId)
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
            .drop_table(Table::drop().table(Request::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Request {
    Table,
    Id,
    DateEntree,
    RaisonSocialeNomsPrenom,
    Cin,
    PmPp,
    Objet,
    DateTraitement,
    Etat,
    IfValue,
    Ice,
    Secteur,
    AgentId,
    MotifRejet,
    Tp,
    Email,
    Gsm,
    Fix,
    Remarque,
    CreatorId,
    CreatedAt,
    UpdatedAt,
}
