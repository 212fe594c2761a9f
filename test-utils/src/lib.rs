//! DGI Backend Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the DGI
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for seeding users, requests, attestations and attestation
//! types.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_request() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let request = factory::create_request(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
