use crate::model::Task;

/// Regroups an already filtered-and-sorted collection so active tasks
/// come first and completed ones trail, each bucket keeping its given
/// relative order. Not a re-sort.
pub fn partition(tasks: &[Task]) -> Vec<Task> {
    let (mut active, completed): (Vec<Task>, Vec<Task>) =
        tasks.iter().cloned().partition(|t| !t.completed);
    active.extend(completed);
    active
}
