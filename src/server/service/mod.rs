//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing workflow rules such as the front-desk edit window,
//!   the attestation delivery lifecycle and label uniqueness
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Rendering**: Producing spreadsheet and PDF exports from domain models

pub mod attestation;
pub mod auth;
pub mod chatbot;
pub mod export;
pub mod request;
pub mod type_attestation;
pub mod user;

#[cfg(test)]
mod test;
