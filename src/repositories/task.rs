//! Task repository for database operations.

use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::{task, TaskStatus};
use crate::error::{StoreError, StoreResult};
use crate::inputs::NewTask;
use crate::pagination::{fetch_page, Page, PageRequest};
use crate::validation::ensure_valid;

use super::update_error;

/// Repository for task-related database operations.
pub struct TaskRepository;

impl TaskRepository {
    /// Validate and insert a new task, stamping `created_at`.
    pub async fn create<C>(conn: &C, input: NewTask) -> StoreResult<task::Model>
    where
        C: ConnectionTrait,
    {
        ensure_valid(&input)?;
        debug!(
            "Creating task '{}' ({}, {})",
            input.title, input.status, input.priority
        );

        let mut active = input.into_active_model();
        active.created_at = Set(Utc::now());
        Ok(active.insert(conn).await?)
    }

    /// Get a single task by id.
    pub async fn get_by_id<C>(conn: &C, id: i64) -> StoreResult<Option<task::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get all tasks, ordered by id.
    pub async fn find_all<C>(conn: &C, page: PageRequest) -> StoreResult<Page<task::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(conn, task::Entity::find().order_by_asc(task::Column::Id), page).await
    }

    /// Get all tasks for a specific project.
    pub async fn find_by_project<C>(conn: &C, project_id: i64, page: PageRequest) -> StoreResult<Page<task::Model>>
    where
        C: ConnectionTrait,
    {
        let select = task::Entity::find()
            .filter(task::Column::ProjectId.eq(project_id))
            .order_by_asc(task::Column::Id);

        fetch_page(conn, select, page).await
    }

    /// Get all tasks assigned to a specific user.
    pub async fn find_by_assigned_to<C>(conn: &C, user_id: i64, page: PageRequest) -> StoreResult<Page<task::Model>>
    where
        C: ConnectionTrait,
    {
        let select = task::Entity::find()
            .filter(task::Column::AssignedToId.eq(user_id))
            .order_by_asc(task::Column::Id);

        fetch_page(conn, select, page).await
    }

    /// Count tasks in `status`.
    pub async fn count_by_status<C>(conn: &C, status: TaskStatus) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find()
            .filter(task::Column::Status.eq(status))
            .count(conn)
            .await?)
    }

    /// Replace every field of an existing task except `created_at`.
    pub async fn update<C>(conn: &C, id: i64, input: NewTask) -> StoreResult<task::Model>
    where
        C: ConnectionTrait,
    {
        ensure_valid(&input)?;
        let mut active = input.into_active_model();
        active.id = Set(id);
        active.update(conn).await.map_err(|e| update_error("Task", id, e))
    }

    /// Delete a task by id.
    pub async fn delete<C>(conn: &C, id: i64) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = task::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Task", id));
        }
        debug!("Deleted task {}", id);
        Ok(())
    }

    /// Count all tasks.
    pub async fn count<C>(conn: &C) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(task::Entity::find().count(conn).await?)
    }
}
