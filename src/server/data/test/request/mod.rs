use crate::server::{
    data::request::RequestRepository,
    model::request::{ProcessRequestParams, RequestFieldsParams, ETAT_EN_TRAITEMENT, ETAT_NOUVEAU},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory, factory::request::RequestFactory};

mod advance_state;
mod create;
mod query;
mod reassign;
mod update;

fn fields(name: &str) -> RequestFieldsParams {
    RequestFieldsParams {
        date_entree: Some(Utc::now().date_naive()),
        raison_sociale_noms_prenom: name.to_string(),
        cin: Some("BK223344".to_string()),
        if_value: None,
        ice: None,
        pm_pp: Some("PP".to_string()),
        objet: Some("Inscription TP".to_string()),
    }
}
