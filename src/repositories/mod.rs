//! Repository layer for database operations.
//!
//! This module provides repository structs that encapsulate database queries
//! and operations, following the Data Mapper pattern recommended by SeaORM.
//! Repositories keep entities as pure data models while providing reusable
//! database access methods. Every function takes any `ConnectionTrait`, so a
//! pooled connection and an open transaction are interchangeable.

pub mod project;
pub mod task;
pub mod user;
pub mod user_role;

pub use project::ProjectRepository;
pub use task::TaskRepository;
pub use user::UserRepository;
pub use user_role::UserRoleRepository;

use sea_orm::DbErr;

use crate::error::StoreError;

/// Map a failed full-record update to `NotFound` when no row had the key.
pub(crate) fn update_error(entity: &'static str, id: i64, err: DbErr) -> StoreError {
    match err {
        DbErr::RecordNotUpdated => StoreError::not_found(entity, id),
        other => StoreError::from(other),
    }
}
