use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TypeAttestation::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeAttestation::Id))
                    .col(string_uniq(TypeAttestation::Label))
                    .col(
                        timestamp(TypeAttestation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TypeAttestation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TypeAttestation {
    Table,
    Id,
    Label,
    CreatedAt,
}
