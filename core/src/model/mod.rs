pub mod category;
pub mod task;

pub use category::{Category, CategorySelector};
pub use task::{NewTask, Priority, Task};
