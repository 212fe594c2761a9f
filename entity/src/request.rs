use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date_entree: Option<Date>,
    pub raison_sociale_noms_prenom: String,
    pub cin: Option<String>,
    pub pm_pp: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub objet: Option<String>,
    pub date_traitement: Option<Date>,
    pub etat: Option<String>,
    pub if_value: Option<String>,
    pub ice: Option<String>,
    pub secteur: Option<String>,
    pub agent_id: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub motif_rejet: Option<String>,
    pub tp: Option<String>,
    pub email: Option<String>,
    pub gsm: Option<String>,
    pub fix: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub remarque: Option<String>,
    pub creator_id: i32,
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
        from = "Column::AgentId",
        to = "super::user::Column::Id"
    )]
    Agent,
}

impl ActiveModelBehavior for ActiveModel {}
