//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let request = factory::create_request(&db, user.id).await?;
//! let attestation = factory::create_attestation(&db, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::{request::RequestFactory, user::UserFactory};
//!
//! let manager = UserFactory::new(&db).role("ROLE_MANAGER").build().await?;
//!
//! let request = RequestFactory::new(&db, manager.id)
//!     .cin(None)
//!     .etat("EN_TRAITEMENT")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `request` - Create request entities
//! - `attestation` - Create attestation entities
//! - `type_attestation` - Create attestation type entities
//! - `helpers` - Shared ID counter

pub mod attestation;
pub mod helpers;
pub mod request;
pub mod type_attestation;
pub mod user;

pub use attestation::create_attestation;
pub use request::create_request;
pub use type_attestation::create_type_attestation;
pub use user::{create_user, create_user_with_role};
