pub mod file;
pub mod memory;
pub mod traits;

pub use file::FileTaskRepository;
pub use memory::{MemoryCategoryRepository, MemoryTaskRepository};
pub use traits::{CategoryRepository, TaskRepository};

use crate::model::Task;

/// Id assignment policy shared by every store: one past the largest
/// existing id, starting at 1 for an empty store.
pub(crate) fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}
