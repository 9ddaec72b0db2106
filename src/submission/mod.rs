//! Submission payload.
//!
//! # Responsibilities
//! - Snapshot the form into an immutable `TaskSubmission`
//! - Force the initial status to "Pending"
//! - Provide the ordered key/value pairs used for both the form body and
//!   the query string

use serde::Serialize;
use uuid::Uuid;

use crate::form::{FieldValues, FIELD_NAMES};

/// Status every new task is created with.
pub const INITIAL_STATUS: &str = "Pending";

/// One task-creation request, built fresh on every submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSubmission {
    #[serde(skip)]
    attempt_id: Uuid,
    employee_name: String,
    task_title: String,
    task_description: String,
    due_date: String,
    priority: String,
    status: &'static str,
}

impl TaskSubmission {
    /// Read the named fields. Missing fields become empty strings.
    pub fn from_fields(fields: &FieldValues) -> Self {
        let [employee_name, task_title, task_description, due_date, priority] =
            FIELD_NAMES.map(|name| fields.get(name).unwrap_or_default().to_string());
        Self {
            attempt_id: Uuid::new_v4(),
            employee_name,
            task_title,
            task_description,
            due_date,
            priority,
            status: INITIAL_STATUS,
        }
    }

    /// Correlation id for logs. Never sent to the endpoint.
    pub fn attempt_id(&self) -> Uuid {
        self.attempt_id
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn task_title(&self) -> &str {
        &self.task_title
    }

    pub fn task_description(&self) -> &str {
        &self.task_description
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn status(&self) -> &str {
        self.status
    }

    /// Wire pairs in fixed order, status last.
    pub fn pairs(&self) -> [(&'static str, &str); 6] {
        [
            ("employeeName", &self.employee_name),
            ("taskTitle", &self.task_title),
            ("taskDescription", &self.task_description),
            ("dueDate", &self.due_date),
            ("priority", &self.priority),
            ("status", self.status),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FieldValues {
        let mut fields = FieldValues::default();
        for (k, v) in pairs {
            fields.set(*k, *v);
        }
        fields
    }

    #[test]
    fn test_status_is_always_pending() {
        let submission = TaskSubmission::from_fields(&fields(&[
            ("employeeName", "Ada"),
            ("status", "Done"),
        ]));
        assert_eq!(submission.status(), "Pending");
        assert_eq!(submission.pairs()[5], ("status", "Pending"));
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let submission = TaskSubmission::from_fields(&fields(&[("taskTitle", "Audit")]));
        assert_eq!(submission.task_title(), "Audit");
        assert_eq!(submission.employee_name(), "");
        assert_eq!(submission.priority(), "");
    }

    #[test]
    fn test_pairs_order() {
        let submission = TaskSubmission::from_fields(&fields(&[
            ("employeeName", "Ada"),
            ("taskTitle", "Audit"),
            ("taskDescription", "Q3 books"),
            ("dueDate", "2024-05-01"),
            ("priority", "High"),
        ]));
        let keys: Vec<_> = submission.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            ["employeeName", "taskTitle", "taskDescription", "dueDate", "priority", "status"]
        );
    }

    #[test]
    fn test_json_shape_matches_wire_names() {
        let submission = TaskSubmission::from_fields(&fields(&[("dueDate", "2024-05-01")]));
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["dueDate"], "2024-05-01");
        assert_eq!(json["status"], "Pending");
        assert!(json.get("attemptId").is_none());
    }

    #[test]
    fn test_each_submission_gets_new_attempt_id() {
        let values = fields(&[("taskTitle", "Audit")]);
        let a = TaskSubmission::from_fields(&values);
        let b = TaskSubmission::from_fields(&values);
        assert_ne!(a.attempt_id(), b.attempt_id());
    }
}
