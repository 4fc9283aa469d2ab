// Shared helpers for integration tests
#![allow(dead_code)]

use chrono::NaiveDate;
use teammanager::repositories::{ProjectRepository, UserRepository};
use teammanager::storage::LocalStorage;
use teammanager::{project, user, NewProject, NewUser};

/// Creates an in-memory store with the schema applied
pub async fn setup_storage() -> LocalStorage {
    LocalStorage::in_memory()
        .await
        .expect("Failed to create in-memory database")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Inserts a user whose email is derived from the username
pub async fn create_user(storage: &LocalStorage, username: &str) -> user::Model {
    UserRepository::create(
        &storage.conn,
        NewUser::new(username, format!("{}@example.com", username), "secret"),
    )
    .await
    .expect("Failed to create user")
}

/// Inserts a project running through 2025
pub async fn create_project(storage: &LocalStorage, name: &str, manager: &user::Model) -> project::Model {
    create_project_ending(storage, name, manager, date(2025, 12, 31)).await
}

pub async fn create_project_ending(
    storage: &LocalStorage,
    name: &str,
    manager: &user::Model,
    end_date: NaiveDate,
) -> project::Model {
    ProjectRepository::create(
        &storage.conn,
        NewProject::new(name, date(2025, 1, 1), end_date, manager.id),
    )
    .await
    .expect("Failed to create project")
}
