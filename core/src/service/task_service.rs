use std::collections::HashMap;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{Category, NewTask, Task};
use crate::query::{count_active_by_category, DueBucket, TaskQuery};
use crate::repository::TaskRepository;

/// Application surface over a task store: validated creation, the
/// completion transitions, and the query-engine entry points the
/// presentation layer calls per refresh.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_task(&self, draft: NewTask) -> Result<Task> {
        draft.validate()?;
        self.repo.create(draft)
    }

    pub fn get_task(&self, id: u64) -> Result<Task> {
        self.repo.get(id)
    }

    pub fn update_task(&self, task: &Task) -> Result<()> {
        self.repo.update(task)
    }

    pub fn delete_task(&self, id: u64) -> Result<()> {
        self.repo.delete(id)
    }

    pub fn clear_completed(&self) -> Result<usize> {
        self.repo.delete_completed()
    }

    /// The only write path for `completed`; `completed_at` mirrors it.
    pub fn set_completed(&self, id: u64, completed: bool, now: DateTime<Utc>) -> Result<Task> {
        let mut task = self.repo.get(id)?;
        task.set_completed(completed, now);
        self.repo.update(&task)?;
        Ok(task)
    }

    pub fn toggle_completed(&self, id: u64, now: DateTime<Utc>) -> Result<Task> {
        let task = self.repo.get(id)?;
        self.set_completed(id, !task.completed, now)
    }

    /// Runs one list refresh over the current snapshot. `today` is the
    /// caller's local calendar day.
    pub fn query(&self, query: &TaskQuery, today: NaiveDate) -> Result<Vec<Task>> {
        let tasks = self.repo.list()?;
        Ok(query.run(&tasks, today))
    }

    /// Active tasks whose due date is strictly before `today`.
    pub fn overdue_tasks(&self, today: NaiveDate) -> Result<Vec<Task>> {
        let tasks = self.repo.list()?;
        Ok(tasks
            .into_iter()
            .filter(|t| !t.completed && DueBucket::of(t, today) == DueBucket::Past)
            .collect())
    }

    /// Sidebar badge counts, keyed by category id.
    pub fn category_counts(
        &self,
        categories: &[Category],
        today: NaiveDate,
    ) -> Result<HashMap<String, usize>> {
        let tasks = self.repo.list()?;
        Ok(count_active_by_category(&tasks, categories, today))
    }
}
