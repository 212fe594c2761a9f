use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Role, User},
    service::auth::token::TokenService,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Resolves the bearer token to a stored user holding one of `roles`.
    ///
    /// An empty `roles` slice admits any authenticated user. The role is read from the
    /// database rather than the token, so role changes apply to tokens already issued.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with an allowed role
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token failed validation
    /// - `Err(AuthError::UserNotInDatabase)` - Token user has been deleted
    /// - `Err(AuthError::AccessDenied)` - User's role is not in `roles`
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let token = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = self.tokens.validate(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.uid).await? else {
            return Err(AuthError::UserNotInDatabase(claims.uid).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::AccessDenied(
                user.id,
                format!(
                    "role {} is not one of {:?}",
                    user.role.as_str(),
                    roles.iter().map(Role::as_str).collect::<Vec<_>>()
                ),
            )
            .into());
        }

        Ok(user)
    }
}
