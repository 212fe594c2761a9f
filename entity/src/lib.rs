pub mod prelude;

pub mod attestation;
pub mod request;
pub mod type_attestation;
pub mod user;
