use anyhow::Result;

use crate::model::{Category, NewTask, Task};

/// The persistence collaborator. The query engine never sees this; it
/// receives snapshots from `list` and returns fresh collections.
///
/// Implementations assign ids (max existing + 1) and stamp `created_at`
/// inside `create`. Identity-based operations fail with
/// [`crate::Error::NotFound`] when the id is absent.
pub trait TaskRepository {
    fn create(&self, draft: NewTask) -> Result<Task>;
    fn list(&self) -> Result<Vec<Task>>;
    fn get(&self, id: u64) -> Result<Task>;
    fn update(&self, task: &Task) -> Result<()>;
    fn delete(&self, id: u64) -> Result<()>;
    /// Removes every completed task, returning how many were deleted.
    fn delete_completed(&self) -> Result<usize>;
}

pub trait CategoryRepository {
    /// All categories in display order, virtual views first.
    fn list(&self) -> Result<Vec<Category>>;
}
