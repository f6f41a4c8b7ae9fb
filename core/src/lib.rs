pub mod error;
pub mod model;
pub mod query;
pub mod repository;
pub mod service;

pub use error::Error;
pub use model::category::{default_categories, virtual_categories};
pub use model::{Category, CategorySelector, NewTask, Priority, Task};
pub use query::{
    count_active_by_category, partition, search, sort, DueBucket, PriorityFilter, SortKey,
    StatusFilter, TaskFilter, TaskQuery,
};
pub use repository::{
    CategoryRepository, FileTaskRepository, MemoryCategoryRepository, MemoryTaskRepository,
    TaskRepository,
};
pub use service::TaskService;
