mod attestation;
mod request;
mod type_attestation;
mod user;
