use std::sync::Mutex;

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate, TimeZone, Utc};

use crate::error::Error;
use crate::model::category::{default_categories, virtual_categories};
use crate::model::{Category, NewTask, Priority, Task};
use crate::repository::next_id;
use crate::repository::traits::{CategoryRepository, TaskRepository};

/// In-memory task store: the offline/demo fallback, and the mock used
/// by service tests. Interchangeable with the file store at composition
/// time.
#[derive(Default)]
pub struct MemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }

    /// Demo data spread across categories, priorities and due buckets,
    /// anchored to the given day.
    pub fn seeded(today: NaiveDate) -> Self {
        let created = |days_ago: i64| {
            let day = today - Duration::days(days_ago);
            Utc.from_utc_datetime(&day.and_hms_opt(8, 0, 0).expect("valid time"))
        };
        let demo = |id: u64, title: &str, priority, due_date, category: &str, days_ago| Task {
            id,
            title: title.to_string(),
            description: String::new(),
            priority,
            due_date,
            category_id: category.to_string(),
            completed: false,
            created_at: created(days_ago),
            completed_at: None,
        };

        let mut tasks = vec![
            demo(1, "Finish quarterly report", Priority::High, Some(today), "work", 6),
            demo(2, "Review pull requests", Priority::High, Some(today - Duration::days(1)), "work", 5),
            demo(3, "Buy groceries", Priority::Medium, Some(today), "shopping", 4),
            demo(4, "Book dentist appointment", Priority::Medium, Some(today + Duration::days(3)), "personal", 3),
            demo(5, "Order birthday gift", Priority::Medium, Some(today + Duration::days(1)), "shopping", 2),
            demo(6, "Plan weekend trip", Priority::Low, None, "personal", 1),
            demo(7, "Water the plants", Priority::Low, Some(today - Duration::days(1)), "personal", 6),
        ];
        tasks[6].set_completed(true, created(1));

        Self::with_tasks(tasks)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Task>>> {
        self.tasks
            .lock()
            .map_err(|_| anyhow!("task store lock poisoned"))
    }
}

impl TaskRepository for MemoryTaskRepository {
    fn create(&self, draft: NewTask) -> Result<Task> {
        let mut tasks = self.lock()?;
        let task = draft.into_task(next_id(&tasks), Utc::now());
        tasks.push(task.clone());
        Ok(task)
    }

    fn list(&self) -> Result<Vec<Task>> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: u64) -> Result<Task> {
        self.lock()?
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(id).into())
    }

    fn update(&self, task: &Task) -> Result<()> {
        let mut tasks = self.lock()?;
        if let Some(pos) = tasks.iter().position(|t| t.id == task.id) {
            tasks[pos] = task.clone();
            Ok(())
        } else {
            Err(Error::NotFound(task.id).into())
        }
    }

    fn delete(&self, id: u64) -> Result<()> {
        let mut tasks = self.lock()?;
        let initial_len = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == initial_len {
            return Err(Error::NotFound(id).into());
        }
        Ok(())
    }

    fn delete_completed(&self) -> Result<usize> {
        let mut tasks = self.lock()?;
        let initial_len = tasks.len();
        tasks.retain(|t| !t.completed);
        Ok(initial_len - tasks.len())
    }
}

/// Serves the virtual views plus a persisted set (the demo seed by
/// default). Both task stores pair with this one.
pub struct MemoryCategoryRepository {
    persisted: Vec<Category>,
}

impl Default for MemoryCategoryRepository {
    fn default() -> Self {
        Self {
            persisted: default_categories(),
        }
    }
}

impl MemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(persisted: Vec<Category>) -> Self {
        Self { persisted }
    }
}

impl CategoryRepository for MemoryCategoryRepository {
    fn list(&self) -> Result<Vec<Category>> {
        let mut categories = virtual_categories();
        categories.extend(self.persisted.iter().cloned());
        categories.sort_by_key(|c| c.order);
        Ok(categories)
    }
}
