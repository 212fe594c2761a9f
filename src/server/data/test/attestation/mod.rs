use crate::server::{
    data::attestation::AttestationRepository,
    model::attestation::{CreateAttestationParams, STATUS_DEPOSE, STATUS_LIVRE},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::attestation::AttestationFactory};

mod create;
mod mark_delivered;
mod query;
mod reassign_user;
