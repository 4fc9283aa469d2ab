//! Teammanager - persistence layer for a team and task management application
//!
//! This library maps four relational entities (users, projects, tasks and
//! user-role assignments) onto SQLite through SeaORM and exposes repository
//! functions for creating, querying, updating and deleting them. Every write
//! runs a validation pass over its input record before touching the store.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for the four tables
//! * [`inputs`] - Validated input records for writes
//! * [`repositories`] - Query and write functions per entity
//! * [`storage`] - Connection pool and schema bootstrap

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types shared by the store
pub mod error;

/// Input records and their field rules
pub mod inputs;

/// Logging setup for file output
pub mod logger;

/// Page requests and paged results
pub mod pagination;

/// Repository layer for database operations
pub mod repositories;

/// Connection pool and schema management
pub mod storage;

/// Field validation rules
pub mod validation;

// Re-export entity models for convenient access
pub use entities::{project, task, user, user_role};
pub use error::{FieldError, StoreError, StoreResult, ValidationError};
pub use inputs::{NewProject, NewTask, NewUser};
pub use pagination::{Page, PageRequest};
