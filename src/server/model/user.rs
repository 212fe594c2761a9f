//! User domain models and parameters.
//!
//! Provides the `Role` enumeration that drives every authorization decision, the `User`
//! domain model loaded at the repository boundary, and the validated parameter types
//! used by sign-up and user administration.

use sea_orm::DbErr;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        util::{parse::parse_role, validate},
    },
};

/// One of the four staff roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Frontdesk,
    Processing,
    Manager,
    Admin,
}

impl Role {
    /// Value persisted in the `role` column and carried in bearer tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontdesk => "ROLE_FRONTDESK",
            Self::Processing => "ROLE_PROCESSING",
            Self::Manager => "ROLE_MANAGER",
            Self::Admin => "ROLE_ADMIN",
        }
    }

    /// Parses a persisted role value.
    ///
    /// # Returns
    /// - `Some(Role)` - Known stored value
    /// - `None` - Unrecognized value
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "ROLE_FRONTDESK" => Some(Self::Frontdesk),
            "ROLE_PROCESSING" => Some(Self::Processing),
            "ROLE_MANAGER" => Some(Self::Manager),
            "ROLE_ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Maps a role name supplied by sign-up or user administration.
    ///
    /// `admin`, `manager` and `processing` map to their roles; anything else, including
    /// an absent value, yields front-desk.
    pub fn from_requested(value: Option<&str>) -> Self {
        match value {
            Some("admin") => Self::Admin,
            Some("manager") => Self::Manager,
            Some("processing") => Self::Processing,
            _ => Self::Frontdesk,
        }
    }
}

/// Application user as seen by services. Carries the password hash for sign-in checks.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash is dropped.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored role is not one of the four known values
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        let role = parse_role(&entity.role)?;

        Ok(Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            role,
        })
    }
}

/// Validated input for creating a user, shared by sign-up and user administration.
///
/// Holds the plain-text password; the service hashes it before it reaches the repository.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl CreateUserParams {
    /// Validates and converts a create-user DTO.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Username 3-20 chars, email at most 50 chars and well-formed,
    ///   password 6-40 chars
    /// - `Err(AppError::BadRequest)` - First failed rule
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        validate::length("username", &dto.username, 3, 20)?;
        validate::email(&dto.email)?;
        validate::password(&dto.password)?;

        Ok(Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            role: Role::from_requested(dto.role.as_deref()),
        })
    }
}

/// Validated partial update of a user. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        if let Some(username) = &dto.username {
            validate::length("username", username, 3, 20)?;
        }
        if let Some(email) = &dto.email {
            validate::email(email)?;
        }
        if let Some(password) = &dto.password {
            validate::password(password)?;
        }

        Ok(Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            role: dto.role.as_deref().map(|r| Role::from_requested(Some(r))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_role_falls_back_to_frontdesk() {
        assert_eq!(Role::from_requested(Some("admin")), Role::Admin);
        assert_eq!(Role::from_requested(Some("manager")), Role::Manager);
        assert_eq!(Role::from_requested(Some("processing")), Role::Processing);
        assert_eq!(Role::from_requested(Some("ROLE_ADMIN")), Role::Frontdesk);
        assert_eq!(Role::from_requested(None), Role::Frontdesk);
    }

    #[test]
    fn stored_role_round_trips() {
        for role in [Role::Frontdesk, Role::Processing, Role::Manager, Role::Admin] {
            assert_eq!(Role::from_stored(role.as_str()), Some(role));
        }
        assert_eq!(Role::from_stored("ROLE_USER"), None);
    }

    #[test]
    fn create_params_reject_short_username() {
        let dto = CreateUserDto {
            username: "ab".to_string(),
            email: "ab@example.com".to_string(),
            password: "secret1".to_string(),
            role: None,
        };

        assert!(matches!(
            CreateUserParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn create_params_reject_malformed_email() {
        let dto = CreateUserDto {
            username: "amina".to_string(),
            email: "not-an-email".to_string(),
            password: "secret1".to_string(),
            role: Some("manager".to_string()),
        };

        assert!(matches!(
            CreateUserParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn update_params_only_validate_present_fields() {
        let params = UpdateUserParams::from_dto(UpdateUserDto {
            role: Some("processing".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(params.role, Some(Role::Processing));
        assert!(params.username.is_none());
    }
}
