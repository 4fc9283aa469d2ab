mod common;

use common::{create_project, create_user, setup_storage};
use teammanager::config::DatabaseConfig;
use teammanager::repositories::{ProjectRepository, UserRepository};
use teammanager::storage::LocalStorage;

#[tokio::test]
async fn test_local_storage_creation() {
    let result = LocalStorage::in_memory().await;
    assert!(result.is_ok(), "LocalStorage should be created successfully");

    let storage = result.unwrap();
    assert!(storage.ping().await.is_ok());
    assert!(!storage.has_data().await.unwrap());
}

#[tokio::test]
async fn test_init_schema_is_idempotent() {
    let storage = setup_storage().await;
    create_user(&storage, "alice").await;

    storage.init_schema().await.unwrap();

    assert_eq!(UserRepository::count(&storage.conn).await.unwrap(), 1);
}

#[tokio::test]
async fn test_clear_all_data() {
    let storage = setup_storage().await;
    let manager = create_user(&storage, "alice").await;
    create_project(&storage, "Website", &manager).await;
    assert!(storage.has_data().await.unwrap());

    storage.clear_all_data().await.unwrap();

    assert!(!storage.has_data().await.unwrap());
    assert_eq!(ProjectRepository::count(&storage.conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_connect_rejects_unreachable_database() {
    let config = DatabaseConfig {
        url: "sqlite:///nonexistent-dir/for/teammanager/test.db?mode=ro".to_string(),
        connect_timeout_secs: 1,
        ..DatabaseConfig::default()
    };

    assert!(LocalStorage::connect(&config).await.is_err());
}
