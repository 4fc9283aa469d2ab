//! User repository for database operations.

use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::user;
use crate::error::{StoreError, StoreResult};
use crate::inputs::NewUser;
use crate::pagination::{fetch_page, Page, PageRequest};
use crate::validation::ensure_valid;

use super::update_error;

/// Repository for user-related database operations.
pub struct UserRepository;

impl UserRepository {
    /// Validate and insert a new user, stamping `created_at`.
    ///
    /// A duplicate username or email is reported by the store as
    /// [`StoreError::UniqueViolation`] and nothing is written.
    pub async fn create<C>(conn: &C, input: NewUser) -> StoreResult<user::Model>
    where
        C: ConnectionTrait,
    {
        ensure_valid(&input)?;
        debug!("Creating user '{}'", input.username);

        let mut active = input.into_active_model();
        active.created_at = Set(Utc::now());
        Ok(active.insert(conn).await?)
    }

    /// Get a single user by id.
    pub async fn get_by_id<C>(conn: &C, id: i64) -> StoreResult<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get a single user by username.
    pub async fn get_by_username<C>(conn: &C, username: &str) -> StoreResult<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(conn)
            .await?)
    }

    /// Get a single user by email.
    pub async fn get_by_email<C>(conn: &C, email: &str) -> StoreResult<Option<user::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(conn)
            .await?)
    }

    /// Whether a user with `username` already exists.
    pub async fn exists_by_username<C>(conn: &C, username: &str) -> StoreResult<bool>
    where
        C: ConnectionTrait,
    {
        let matches = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .count(conn)
            .await?;
        Ok(matches > 0)
    }

    /// Get all users, ordered by id.
    pub async fn find_all<C>(conn: &C, page: PageRequest) -> StoreResult<Page<user::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(conn, user::Entity::find().order_by_asc(user::Column::Id), page).await
    }

    /// Replace username, email and password. `created_at` is never rewritten.
    pub async fn update<C>(conn: &C, id: i64, input: NewUser) -> StoreResult<user::Model>
    where
        C: ConnectionTrait,
    {
        ensure_valid(&input)?;
        let mut active = input.into_active_model();
        active.id = Set(id);
        active.update(conn).await.map_err(|e| update_error("User", id, e))
    }

    /// Delete a user by id. Fails with a foreign key violation while the
    /// user still manages projects or has tasks assigned.
    pub async fn delete<C>(conn: &C, id: i64) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = user::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found("User", id));
        }
        debug!("Deleted user {}", id);
        Ok(())
    }

    /// Count all users.
    pub async fn count<C>(conn: &C) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(user::Entity::find().count(conn).await?)
    }
}
