//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential lookups, partial updates and username
//! resolution for the other repositories, converting entity models to domain models at
//! the infrastructure boundary.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{Role, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

/// Fields of a new user row. The password must already be hashed.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Partial user update. `None` leaves the column unchanged.
#[derive(Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<Role>,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user row.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by exact username, as used by sign-in.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Gets every user ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    /// Gets up to `limit` users ordered by ID.
    pub async fn get_first(&self, limit: u64) -> Result<Vec<User>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect()
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_email(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all users. Used at startup to decide whether to seed default accounts.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(&self, id: i32, changes: UserChanges) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(username) = changes.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = changes.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = changes.password_hash {
            active.password = ActiveValue::Set(password_hash);
        }
        if let Some(role) = changes.role {
            active.role = ActiveValue::Set(role.as_str().to_string());
        }

        let entity = active.update(self.db).await?;
        User::from_entity(entity).map(Some)
    }

    /// Deletes a user by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error, including foreign key violations
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Resolves usernames for a set of user IDs in a single query.
    ///
    /// IDs with no matching user are simply absent from the map.
    pub async fn usernames_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.username)).collect())
    }
}
