use chrono::NaiveDate;

use crate::model::{CategorySelector, Priority, Task};
use crate::query::bucket::DueBucket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Completed,
}

impl Default for StatusFilter {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl StatusFilter {
    /// Lenient: unknown values behave as `All`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "active" => StatusFilter::Active,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityFilter {
    All,
    Only(Priority),
}

impl Default for PriorityFilter {
    fn default() -> Self {
        PriorityFilter::All
    }
}

impl PriorityFilter {
    /// Lenient: unknown values behave as `All`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => PriorityFilter::Only(Priority::Low),
            "medium" => PriorityFilter::Only(Priority::Medium),
            "high" => PriorityFilter::Only(Priority::High),
            _ => PriorityFilter::All,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority == p,
        }
    }
}

/// Conjunction of status, priority and category predicates. Evaluation
/// order does not affect the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub priority: PriorityFilter,
    pub category: CategorySelector,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        self.status.matches(task)
            && self.priority.matches(task)
            && self.category_matches(task, today)
    }

    fn category_matches(&self, task: &Task, today: NaiveDate) -> bool {
        match &self.category {
            CategorySelector::All => true,
            CategorySelector::Today => DueBucket::of(task, today) == DueBucket::Today,
            CategorySelector::Upcoming => DueBucket::of(task, today) == DueBucket::Future,
            CategorySelector::Persisted(id) => task.category_id == *id,
        }
    }

    /// Returns the matching tasks as a fresh collection; the input
    /// snapshot is never mutated.
    pub fn filter(&self, tasks: &[Task], today: NaiveDate) -> Vec<Task> {
        tasks
            .iter()
            .filter(|t| self.matches(t, today))
            .cloned()
            .collect()
    }
}
