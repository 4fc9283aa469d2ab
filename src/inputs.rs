//! Input records accepted by the repositories.
//!
//! Each record carries the field rules for its entity. Repositories validate
//! the record before building an active model, so a failing record never
//! reaches the store.

use chrono::NaiveDate;
use sea_orm::ActiveValue::{self, NotSet, Set};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::{project, task, user, TaskPriority, TaskStatus};
use crate::validation::{email_address, not_blank};

fn set_if_present<T>(value: Option<T>) -> ActiveValue<T>
where
    T: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}

/// Fields for creating or fully replacing a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(custom(function = "not_blank", message = "The username should not be blank"))]
    pub username: String,
    #[validate(custom(function = "email_address"))]
    pub email: String,
    #[validate(custom(function = "not_blank", message = "The password should not be blank"))]
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Active model without identity or creation timestamp.
    pub fn into_active_model(self) -> user::ActiveModel {
        user::ActiveModel {
            id: NotSet,
            username: Set(self.username),
            email: Set(self.email),
            password: Set(self.password),
            created_at: NotSet,
        }
    }
}

/// Fields for creating or fully replacing a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(custom(function = "not_blank", message = "The name field should not be blank"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(required(message = "Start date must not be null"))]
    pub start_date: Option<NaiveDate>,
    #[validate(required(message = "End date must not be null"))]
    pub end_date: Option<NaiveDate>,
    #[validate(required(message = "Project must have a manager"))]
    pub project_manager_id: Option<i64>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate, project_manager_id: i64) -> Self {
        Self {
            name: name.into(),
            description: None,
            start_date: Some(start_date),
            end_date: Some(end_date),
            project_manager_id: Some(project_manager_id),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Active model without identity. Absent required fields stay `NotSet`;
    /// callers validate first.
    pub fn into_active_model(self) -> project::ActiveModel {
        project::ActiveModel {
            id: NotSet,
            name_folded: Set(self.name.to_lowercase()),
            name: Set(self.name),
            description: Set(self.description),
            start_date: set_if_present(self.start_date),
            end_date: set_if_present(self.end_date),
            project_manager_id: set_if_present(self.project_manager_id),
        }
    }
}

/// Fields for creating or fully replacing a task.
///
/// Build with [`NewTask::new`], which fills in the default status and
/// priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewTask {
    #[validate(custom(function = "not_blank", message = "The Title should not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    #[validate(required(message = "Task must be associated with a project"))]
    pub project_id: Option<i64>,
    pub assigned_to_id: Option<i64>,
}

impl NewTask {
    pub const DEFAULT_STATUS: TaskStatus = TaskStatus::ToDo;
    pub const DEFAULT_PRIORITY: TaskPriority = TaskPriority::Medium;

    pub fn new(title: impl Into<String>, project_id: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            status: Self::DEFAULT_STATUS,
            priority: Self::DEFAULT_PRIORITY,
            due_date: None,
            project_id: Some(project_id),
            assigned_to_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_on(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to_id = Some(user_id);
        self
    }

    /// Active model without identity or creation timestamp.
    pub fn into_active_model(self) -> task::ActiveModel {
        task::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            description: Set(self.description),
            status: Set(self.status),
            priority: Set(self.priority),
            due_date: Set(self.due_date),
            project_id: set_if_present(self.project_id),
            assigned_to_id: Set(self.assigned_to_id),
            created_at: NotSet,
        }
    }
}
