use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attestation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub if_value: String,
    pub cin: String,
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_name = "type")]
    pub r#type: String,
    pub status: String,
    pub creator_id: Option<i32>,
    pub delivered_by_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id"
    )]
    Creator,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::DeliveredById",
        to = "super::user::Column::Id"
    )]
    DeliveredBy,
}

impl ActiveModelBehavior for ActiveModel {}
