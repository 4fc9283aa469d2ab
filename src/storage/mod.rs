//! Local storage module for the team manager database
//!
//! Owns the connection pool and creates the schema for:
//! - Users
//! - Projects
//! - Tasks
//! - User-role assignments

pub mod db;

pub use db::LocalStorage;
