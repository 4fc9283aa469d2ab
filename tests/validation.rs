use chrono::NaiveDate;
use teammanager::entities::{TaskPriority, TaskStatus};
use teammanager::validation::ensure_valid;
use teammanager::{NewProject, NewTask, NewUser, StoreError};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn test_valid_records_pass() {
    assert!(ensure_valid(&NewUser::new("alice", "alice@example.com", "secret")).is_ok());
    assert!(ensure_valid(&NewProject::new("Website", date(2025, 1, 1), date(2025, 3, 1), 1)).is_ok());
    assert!(ensure_valid(&NewTask::new("Write copy", 1)).is_ok());
}

#[test]
fn test_blank_email_reports_required_only() {
    let err = ensure_valid(&NewUser::new("alice", "   ", "secret")).unwrap_err();

    assert_eq!(err.messages_for("email"), vec!["Email is required"]);
    assert_eq!(err.errors.len(), 1);
}

#[test]
fn test_malformed_email_is_rejected() {
    for email in ["alice", "alice@", "@example.com", "alice example.com"] {
        let err = ensure_valid(&NewUser::new("alice", email, "secret")).unwrap_err();
        assert_eq!(err.messages_for("email"), vec!["Email should be valid"], "email: {}", email);
    }
}

#[test]
fn test_whitespace_title_is_blank() {
    let err = ensure_valid(&NewTask::new(" \t\n", 1)).unwrap_err();

    assert!(err.has_field("title"));
    assert!(!err.has_field("project_id"));
}

#[test]
fn test_task_factory_defaults() {
    let task = NewTask::new("Plan", 3);

    assert_eq!(task.status, TaskStatus::ToDo);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert_eq!(task.project_id, Some(3));
    assert!(task.description.is_none());
    assert!(task.due_date.is_none());
    assert!(task.assigned_to_id.is_none());
}

#[test]
fn test_validation_error_display_lists_fields() {
    let err = ensure_valid(&NewUser::new("", "", "")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "validation failed: email: Email is required; password: The password should not be blank; \
         username: The username should not be blank"
    );
}

#[test]
fn test_store_error_shows_validation_message_unchanged() {
    let err = ensure_valid(&NewProject::new(" ", date(2025, 1, 1), date(2025, 2, 1), 1)).unwrap_err();
    let expected = "validation failed: name: The name field should not be blank";
    assert_eq!(err.to_string(), expected);

    let store_err = StoreError::from(err);
    assert!(store_err.is_validation());
    assert_eq!(store_err.to_string(), expected);
}

#[test]
fn test_enum_names_round_trip_through_from_str() {
    for status in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done] {
        assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
    }
    for priority in [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High] {
        assert_eq!(priority.to_string().parse::<TaskPriority>().unwrap(), priority);
    }
    assert!("URGENT".parse::<TaskPriority>().is_err());
    assert!("to_do".parse::<TaskStatus>().is_err());
}

#[test]
fn test_input_records_deserialize() {
    let task: NewTask = serde_json::from_str(
        r#"{"title":"Ship","description":null,"status":"DONE","priority":"LOW",
            "due_date":"2025-05-01","project_id":4,"assigned_to_id":null}"#,
    )
    .unwrap();

    assert_eq!(task.status, TaskStatus::Done);
    assert_eq!(task.priority, TaskPriority::Low);
    assert_eq!(task.due_date, Some(date(2025, 5, 1)));
}
