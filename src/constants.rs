//! Constants used throughout the crate
//!
//! This module centralizes file names, limits, and other constant values.

// Application identity
pub const APP_NAME: &str = "teammanager";

// Configuration files
pub const LOCAL_CONFIG_FILE_NAME: &str = "teammanager.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_GENERATED: &str = "Default configuration written to";

// Logging
pub const LOG_FILE_NAME: &str = "teammanager.log";

// Pagination
pub const MAX_PAGE_SIZE_LIMIT: u64 = 1000;
