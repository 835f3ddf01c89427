//! User repository backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Usernames are matched exactly and case-sensitively.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user record.
    ///
    /// Fails with `DuplicateUsername` when the unique index rejects the row.
    async fn insert(&self, username: String, credential: String) -> AppResult<User>;

    /// Count records with this exact username (0 or 1)
    async fn count_by_username(&self, username: &str) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn insert(&self, username: String, credential: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(username.clone()),
            credential: Set(credential),
            created_at: Set(Utc::now()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::duplicate(username))
            }
            Err(e) => Err(AppError::from(e)),
        }
    }

    async fn count_by_username(&self, username: &str) -> AppResult<u64> {
        UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
