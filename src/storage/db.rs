use std::time::Duration;

use log::{debug, info};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, Schema,
};

use crate::config::DatabaseConfig;
use crate::entities::{Project, Task, User, UserRole};
use crate::error::StoreResult;

/// Owner of the database connection pool.
pub struct LocalStorage {
    pub conn: DatabaseConnection,
}

impl LocalStorage {
    /// Connect using the given settings and make sure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .sqlx_logging(config.sqlx_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);

        info!("Connecting to database at {}", config.url);
        let conn = Database::connect(options).await?;

        let storage = LocalStorage { conn };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Fresh in-memory SQLite database with the schema applied.
    ///
    /// Every pooled connection to `sqlite::memory:` opens its own database,
    /// so the pool is pinned to a single connection.
    pub async fn in_memory() -> StoreResult<Self> {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..DatabaseConfig::default()
        };
        Self::connect(&config).await
    }

    /// Create the four tables if they are missing, parents before children.
    pub async fn init_schema(&self) -> StoreResult<()> {
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let mut statements = [
            schema.create_table_from_entity(User),
            schema.create_table_from_entity(Project),
            schema.create_table_from_entity(Task),
            schema.create_table_from_entity(UserRole),
        ];

        for statement in statements.iter_mut() {
            statement.if_not_exists();
            self.conn.execute(backend.build(&*statement)).await?;
        }

        debug!("Database schema ready");
        Ok(())
    }

    /// Check that the store is reachable.
    pub async fn ping(&self) -> StoreResult<()> {
        Ok(self.conn.ping().await?)
    }

    /// Check if the database has any users
    pub async fn has_data(&self) -> StoreResult<bool> {
        Ok(User::find().count(&self.conn).await? > 0)
    }

    /// Clear all data from the database, children before parents
    pub async fn clear_all_data(&self) -> StoreResult<()> {
        UserRole::delete_many().exec(&self.conn).await?;
        Task::delete_many().exec(&self.conn).await?;
        Project::delete_many().exec(&self.conn).await?;
        User::delete_many().exec(&self.conn).await?;
        info!("Cleared all stored data");
        Ok(())
    }
}
