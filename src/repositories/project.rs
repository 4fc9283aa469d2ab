//! Project repository for database operations.

use chrono::NaiveDate;
use log::debug;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::entities::{project, user};
use crate::error::{StoreError, StoreResult};
use crate::inputs::NewProject;
use crate::pagination::{fetch_page, Page, PageRequest};
use crate::validation::ensure_valid;

use super::update_error;

/// Repository for project-related database operations.
pub struct ProjectRepository;

/// Escape LIKE wildcards so the needle matches literally under `ESCAPE '\'`.
fn like_literal(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len());
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl ProjectRepository {
    /// Validate and insert a new project.
    pub async fn create<C>(conn: &C, input: NewProject) -> StoreResult<project::Model>
    where
        C: ConnectionTrait,
    {
        ensure_valid(&input)?;
        debug!("Creating project '{}'", input.name);
        Ok(input.into_active_model().insert(conn).await?)
    }

    /// Get a single project by id.
    pub async fn get_by_id<C>(conn: &C, id: i64) -> StoreResult<Option<project::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get all projects, ordered by id.
    pub async fn find_all<C>(conn: &C, page: PageRequest) -> StoreResult<Page<project::Model>>
    where
        C: ConnectionTrait,
    {
        fetch_page(conn, project::Entity::find().order_by_asc(project::Column::Id), page).await
    }

    /// Projects whose name contains `name`, ignoring case, ordered by id.
    pub async fn find_by_name_containing_ignore_case<C>(
        conn: &C,
        name: &str,
        page: PageRequest,
    ) -> StoreResult<Page<project::Model>>
    where
        C: ConnectionTrait,
    {
        let pattern = format!("%{}%", like_literal(&name.to_lowercase()));
        let select = project::Entity::find()
            .filter(Expr::col(project::Column::NameFolded).like(LikeExpr::new(pattern).escape('\\')))
            .order_by_asc(project::Column::Id);

        fetch_page(conn, select, page).await
    }

    /// Count projects still active after `date`: no end date, or an end date
    /// strictly later than `date`.
    pub async fn count_by_end_date_is_null_or_end_date_after<C>(conn: &C, date: NaiveDate) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find()
            .filter(
                Condition::any()
                    .add(project::Column::EndDate.is_null())
                    .add(project::Column::EndDate.gt(date)),
            )
            .count(conn)
            .await?)
    }

    /// Projects managed by `manager`, ordered by id.
    pub async fn find_by_project_manager<C>(
        conn: &C,
        manager: &user::Model,
        page: PageRequest,
    ) -> StoreResult<Page<project::Model>>
    where
        C: ConnectionTrait,
    {
        Self::find_by_project_manager_id(conn, manager.id, page).await
    }

    /// Projects managed by the user with `manager_id`, ordered by id.
    pub async fn find_by_project_manager_id<C>(
        conn: &C,
        manager_id: i64,
        page: PageRequest,
    ) -> StoreResult<Page<project::Model>>
    where
        C: ConnectionTrait,
    {
        let select = project::Entity::find()
            .filter(project::Column::ProjectManagerId.eq(manager_id))
            .order_by_asc(project::Column::Id);

        fetch_page(conn, select, page).await
    }

    /// Replace every field of an existing project.
    pub async fn update<C>(conn: &C, id: i64, input: NewProject) -> StoreResult<project::Model>
    where
        C: ConnectionTrait,
    {
        ensure_valid(&input)?;
        let mut active = input.into_active_model();
        active.id = Set(id);
        active.update(conn).await.map_err(|e| update_error("Project", id, e))
    }

    /// Delete a project by id.
    pub async fn delete<C>(conn: &C, id: i64) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let result = project::Entity::delete_by_id(id).exec(conn).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Project", id));
        }
        debug!("Deleted project {}", id);
        Ok(())
    }

    /// Count all projects.
    pub async fn count<C>(conn: &C) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(project::Entity::find().count(conn).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::like_literal;

    #[test]
    fn test_like_literal_escapes_wildcards() {
        assert_eq!(like_literal("50%_off"), "50\\%\\_off");
        assert_eq!(like_literal("a\\b"), "a\\\\b");
        assert_eq!(like_literal("plain"), "plain");
    }
}
