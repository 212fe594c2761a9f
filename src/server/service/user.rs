use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        attestation::AttestationRepository,
        request::RequestRepository,
        user::{NewUser, UserChanges, UserRepository},
    },
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateUserParams, User},
    service::auth::password::hash_password,
};

const USERNAME_TAKEN: &str = "Error: Username is already taken!";
const EMAIL_TAKEN: &str = "Error: Email is already in use!";

/// Accounts created on first boot when the user table is empty.
const DEFAULT_USERS: [(&str, Role); 4] = [
    ("admin", Role::Admin),
    ("manager", Role::Manager),
    ("processing", Role::Processing),
    ("frontdesk", Role::Frontdesk),
];
const DEFAULT_PASSWORD: &str = "password";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

/// Outcome of deleting a user after moving their references.
#[derive(Debug)]
pub struct Reassignment {
    /// Agent plus creator request references moved.
    pub requests_reassigned: u64,
    /// User who now holds the references.
    pub target: User,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Creates a user after checking username and email are free.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username or email already in use
    /// - `Err(AppError::AuthErr(PasswordHash))` - Hashing failed
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.exists_by_username(&params.username).await? {
            return Err(AppError::BadRequest(USERNAME_TAKEN.to_string()));
        }
        if repo.exists_by_email(&params.email).await? {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let password_hash = hash_password(params.password).await?;

        let user = repo
            .create(NewUser {
                username: params.username,
                email: params.email,
                password_hash,
                role: params.role,
            })
            .await?;

        tracing::info!("Created user {} with role {}", user.username, user.role.as_str());

        Ok(user)
    }

    /// Applies a partial update. Uniqueness is only checked for values that change.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - New username or email already in use
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(existing) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(username) = &params.username {
            if *username != existing.username && repo.exists_by_username(username).await? {
                return Err(AppError::BadRequest(USERNAME_TAKEN.to_string()));
            }
        }
        if let Some(email) = &params.email {
            if *email != existing.email && repo.exists_by_email(email).await? {
                return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
            }
        }

        let password_hash = match params.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let user = repo
            .update(
                id,
                UserChanges {
                    username: params.username,
                    email: params.email,
                    password_hash,
                    role: params.role,
                },
            )
            .await?;

        Ok(user)
    }

    /// Sets a new password for the user.
    ///
    /// # Returns
    /// - `Ok(true)` - Password changed
    /// - `Ok(false)` - No user with that ID
    pub async fn change_password(&self, id: i32, new_password: String) -> Result<bool, AppError> {
        let password_hash = hash_password(new_password).await?;

        let user = UserRepository::new(self.db)
            .update(
                id,
                UserChanges {
                    password_hash: Some(password_hash),
                    ..Default::default()
                },
            )
            .await?;

        Ok(user.is_some())
    }

    /// Deletes a user that no request or attestation refers to.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - The user is still an agent or creator of requests, or
    ///   creator or deliverer of attestations
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);
        let request_repo = RequestRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let assigned = request_repo.count_by_agent(id).await?;
        if assigned > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete this user because they are assigned to {assigned} requests. \
                 Please reassign these requests first or use the 'reassign-and-delete' endpoint."
            )));
        }

        let created = request_repo.count_by_creator(id).await?;
        if created > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete this user because they have created {created} requests. \
                 Please use the 'reassign-and-delete' endpoint."
            )));
        }

        let attestations = AttestationRepository::new(self.db)
            .count_referencing_user(id)
            .await?;
        if attestations > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete this user because they are referenced by {attestations} \
                 attestations. Please use the 'reassign-and-delete' endpoint."
            )));
        }

        Ok(user_repo.delete(id).await?)
    }

    /// Moves every request and attestation reference from `id` to `target_id`, then deletes
    /// the user. The moves and the delete commit together or not at all.
    ///
    /// # Returns
    /// - `Ok(Reassignment)` - Count of moved request references and the target user
    /// - `Err(AppError::BadRequest)` - Either user is missing, or both IDs are the same
    pub async fn reassign_and_delete(
        &self,
        id: i32,
        target_id: i32,
    ) -> Result<Reassignment, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "User to delete not found with id: {id}"
            )));
        }
        let Some(target) = user_repo.find_by_id(target_id).await? else {
            return Err(AppError::BadRequest(format!(
                "Reassignment user not found with id: {target_id}"
            )));
        };
        if id == target_id {
            return Err(AppError::BadRequest(
                "Cannot reassign requests to the user being deleted".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let request_repo = RequestRepository::new(&txn);
        let as_agent = request_repo.reassign_agent(id, target_id).await?;
        let as_creator = request_repo.reassign_creator(id, target_id).await?;
        let attestations = AttestationRepository::new(&txn)
            .reassign_user(id, target_id)
            .await?;

        UserRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            "Deleted user {} after moving {} request and {} attestation references to {}",
            id,
            as_agent + as_creator,
            attestations,
            target.username
        );

        Ok(Reassignment {
            requests_reassigned: as_agent + as_creator,
            target,
        })
    }

    /// Creates the four default accounts when no user exists yet.
    ///
    /// # Returns
    /// - `Ok(true)` - Accounts were seeded
    /// - `Ok(false)` - Users already exist, nothing done
    pub async fn seed_default_users(&self) -> Result<bool, AppError> {
        if UserRepository::new(self.db).count().await? > 0 {
            return Ok(false);
        }

        for (username, role) in DEFAULT_USERS {
            self.create(CreateUserParams {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password: DEFAULT_PASSWORD.to_string(),
                role,
            })
            .await?;
        }

        tracing::warn!(
            "Seeded default users with password '{}'; change them before going live",
            DEFAULT_PASSWORD
        );

        Ok(true)
    }
}
