//! User-role assignment repository.

use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::entities::user_role;
use crate::error::StoreResult;
use crate::pagination::{fetch_page, Page, PageRequest};

/// Repository for the user/role bridge table.
pub struct UserRoleRepository;

impl UserRoleRepository {
    /// Grant `role_id` to `user_id`. Granting the same pair twice is a
    /// unique violation; an unknown user is a foreign key violation.
    pub async fn assign<C>(conn: &C, user_id: i64, role_id: i64) -> StoreResult<user_role::Model>
    where
        C: ConnectionTrait,
    {
        debug!("Assigning role {} to user {}", role_id, user_id);
        let active = user_role::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
        };
        Ok(active.insert(conn).await?)
    }

    /// Role ids held by a user, ascending.
    pub async fn roles_for_user<C>(conn: &C, user_id: i64) -> StoreResult<Vec<i64>>
    where
        C: ConnectionTrait,
    {
        Ok(user_role::Entity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .select_only()
            .column(user_role::Column::RoleId)
            .order_by_asc(user_role::Column::RoleId)
            .into_tuple::<i64>()
            .all(conn)
            .await?)
    }

    /// User ids holding a role, ascending.
    pub async fn users_with_role<C>(conn: &C, role_id: i64) -> StoreResult<Vec<i64>>
    where
        C: ConnectionTrait,
    {
        Ok(user_role::Entity::find()
            .filter(user_role::Column::RoleId.eq(role_id))
            .select_only()
            .column(user_role::Column::UserId)
            .order_by_asc(user_role::Column::UserId)
            .into_tuple::<i64>()
            .all(conn)
            .await?)
    }

    /// Remove one assignment. Returns whether a row was removed.
    pub async fn revoke<C>(conn: &C, user_id: i64, role_id: i64) -> StoreResult<bool>
    where
        C: ConnectionTrait,
    {
        let result = user_role::Entity::delete_by_id((user_id, role_id)).exec(conn).await?;
        Ok(result.rows_affected > 0)
    }

    /// All assignments, ordered by user then role.
    pub async fn find_all<C>(conn: &C, page: PageRequest) -> StoreResult<Page<user_role::Model>>
    where
        C: ConnectionTrait,
    {
        let select = user_role::Entity::find()
            .order_by_asc(user_role::Column::UserId)
            .order_by_asc(user_role::Column::RoleId);

        fetch_page(conn, select, page).await
    }

    /// Count all assignments.
    pub async fn count<C>(conn: &C) -> StoreResult<u64>
    where
        C: ConnectionTrait,
    {
        Ok(user_role::Entity::find().count(conn).await?)
    }
}
