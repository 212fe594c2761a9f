use crate::server::{
    data::type_attestation::TypeAttestationRepository,
    model::type_attestation::TypeAttestationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod label_taken;

fn params(label: &str) -> TypeAttestationParams {
    TypeAttestationParams {
        label: label.to_string(),
    }
}
