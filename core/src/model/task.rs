use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::model::category::DEFAULT_CATEGORY;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    /// Rank used for priority ordering: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// A persisted task. Field names on disk follow the record-store shape
/// (`Id`, `dueDate`, `categoryId`, ...), so a store written by the web
/// client reads back unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "Id")]
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub category_id: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// The only writer of `completed`. Keeps the invariant that
    /// `completed_at` is present exactly when `completed` is true.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = if completed { Some(now) } else { None };
    }
}

/// Creation payload: everything the caller supplies; the store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub category_id: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn into_task(self, id: u64, now: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            category_id: self
                .category_id
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn draft_defaults() {
        let task = NewTask::new("Buy milk").into_task(1, now());
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.category_id, "personal");
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
        assert_eq!(task.created_at, now());
    }

    #[test]
    fn blank_title_rejected() {
        assert!(NewTask::new("   ").validate().is_err());
        assert!(NewTask::new("").validate().is_err());
        assert!(NewTask::new("x").validate().is_ok());
    }

    #[test]
    fn completion_round_trip() {
        let mut task = NewTask::new("A").into_task(1, now());

        task.set_completed(true, now());
        assert!(task.completed);
        assert!(task.completed_at.is_some());

        task.set_completed(false, now());
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }
}
