use crate::server::{
    data::user::{NewUser, UserChanges, UserRepository},
    model::user::Role,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod update;
mod usernames_by_ids;
