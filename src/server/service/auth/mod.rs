//! Sign-in, sign-up and credential management.
//!
//! `AuthService` checks credentials against the stored Argon2 hashes and issues bearer
//! tokens through `TokenService`. Request authentication itself happens in
//! `middleware::auth::AuthGuard`, which validates tokens issued here.

pub mod password;
pub mod token;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, User},
    service::{
        auth::{password::verify_password, token::TokenService},
        user::UserService,
    },
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Verifies a username and password and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok((User, String))` - The signed-in user and their token
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown username or wrong password
    pub async fn signin(&self, username: &str, password: String) -> Result<(User, String), AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials(username.to_string()))?;

        if !verify_password(password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        let token = self.tokens.issue(&user)?;

        tracing::info!("User {} signed in", user.username);

        Ok((user, token))
    }

    /// Registers a new account with the same checks as user administration.
    pub async fn signup(&self, params: CreateUserParams) -> Result<User, AppError> {
        UserService::new(self.db).create(params).await
    }

    /// Replaces the signed-in user's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The user was deleted since the token
    ///   was issued
    pub async fn change_password(&self, user_id: i32, new_password: String) -> Result<(), AppError> {
        if !UserService::new(self.db)
            .change_password(user_id, new_password)
            .await?
        {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        }

        Ok(())
    }
}
