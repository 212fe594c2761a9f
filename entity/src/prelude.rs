pub use super::attestation::Entity as Attestation;
pub use super::request::Entity as Request;
pub use super::type_attestation::Entity as TypeAttestation;
pub use super::user::Entity as User;
