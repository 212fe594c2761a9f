//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types own input validation through their `from_dto` constructors, so services
//! only ever see values that already satisfy field-level rules.

pub mod attestation;
pub mod request;
pub mod type_attestation;
pub mod user;
