//! The query engine: pure, clock-injected transformations over a task
//! snapshot. Nothing here mutates its input or touches storage.

pub mod bucket;
pub mod counts;
pub mod filter;
pub mod partition;
pub mod search;
pub mod sort;

pub use bucket::DueBucket;
pub use counts::count_active_by_category;
pub use filter::{PriorityFilter, StatusFilter, TaskFilter};
pub use partition::partition;
pub use search::search;
pub use sort::{sort, SortKey};

use chrono::NaiveDate;

use crate::model::{CategorySelector, Task};

/// One list refresh, as the task list performs it: search (when a query
/// is present) or category selection, then status/priority filtering,
/// then sort, then the active/completed regroup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub search: Option<String>,
    pub filter: TaskFilter,
    pub sort: SortKey,
}

impl TaskQuery {
    pub fn run(&self, tasks: &[Task], today: NaiveDate) -> Vec<Task> {
        let mut filter = self.filter.clone();
        let searched;
        let source: &[Task] = match self.search.as_deref() {
            Some(q) if !q.trim().is_empty() => {
                // Search runs over the whole collection; the category
                // selection does not apply to search results.
                filter.category = CategorySelector::All;
                searched = search(tasks, q);
                &searched
            }
            _ => tasks,
        };

        let filtered = filter.filter(source, today);
        let sorted = sort(&filtered, self.sort);
        partition(&sorted)
    }
}
