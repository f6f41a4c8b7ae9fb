use std::cmp::Ordering;

use crate::model::Task;

/// Sort keys offered by the filter bar. Unknown key strings degrade to
/// `Created` (the UI default).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first.
    Created,
    /// Earliest due date first; undated tasks last.
    DueDate,
    /// High before medium before low.
    Priority,
    /// Lexicographic, case-insensitive.
    Title,
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::Created
    }
}

impl SortKey {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "duedate" | "due-date" | "due" => SortKey::DueDate,
            "priority" => SortKey::Priority,
            "title" => SortKey::Title,
            _ => SortKey::Created,
        }
    }
}

/// Returns a new ordered collection. The sort is stable for every key:
/// equal-key tasks keep their relative input order, so repeated queries
/// over the same snapshot render identically.
pub fn sort(tasks: &[Task], key: SortKey) -> Vec<Task> {
    let mut out = tasks.to_vec();
    match key {
        SortKey::Created => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::DueDate => out.sort_by(|a, b| cmp_due(a, b)),
        SortKey::Priority => out.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank())),
        SortKey::Title => out.sort_by(|a, b| cmp_title(&a.title, &b.title)),
    }
    out
}

fn cmp_due(a: &Task, b: &Task) -> Ordering {
    match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => x.cmp(&y),
    }
}

// Case-insensitive with the raw title as tie-break, so the order is
// total and deterministic across platforms.
fn cmp_title(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::query::testing::{day, task, task_created_at};

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn created_is_newest_first() {
        let tasks = vec![
            task_created_at(1, "A", day(2024, 1, 1)),
            task_created_at(2, "B", day(2024, 1, 2)),
        ];
        assert_eq!(ids(&sort(&tasks, SortKey::Created)), vec![2, 1]);
    }

    #[test]
    fn due_date_puts_undated_last() {
        let mut a = task_created_at(1, "A", day(2024, 1, 1));
        a.due_date = None;
        let mut b = task_created_at(2, "B", day(2024, 1, 1));
        b.due_date = Some(day(2024, 6, 1));
        assert_eq!(ids(&sort(&[a, b], SortKey::DueDate)), vec![2, 1]);
    }

    #[test]
    fn due_date_is_ascending() {
        let tasks = vec![
            task(1, "A", false, Priority::Medium, Some(day(2024, 7, 1)), "work"),
            task(2, "B", false, Priority::Medium, Some(day(2024, 6, 1)), "work"),
            task(3, "C", false, Priority::Medium, None, "work"),
            task(4, "D", false, Priority::Medium, Some(day(2024, 6, 15)), "work"),
        ];
        assert_eq!(ids(&sort(&tasks, SortKey::DueDate)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn priority_is_high_first() {
        let tasks = vec![
            task_created_at(1, "A", day(2024, 1, 1)),
            task(2, "B", false, Priority::High, None, "work"),
        ];
        assert_eq!(ids(&sort(&tasks, SortKey::Priority)), vec![2, 1]);
    }

    #[test]
    fn title_is_case_insensitive() {
        let tasks = vec![
            task_created_at(1, "banana", day(2024, 1, 1)),
            task_created_at(2, "Apple", day(2024, 1, 1)),
            task_created_at(3, "cherry", day(2024, 1, 1)),
        ];
        assert_eq!(ids(&sort(&tasks, SortKey::Title)), vec![2, 1, 3]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        // Same priority and same creation instant: every key must leave
        // the relative order untouched.
        let tasks: Vec<Task> = (1..=4)
            .map(|id| task(id, "same", id % 2 == 0, Priority::Medium, None, "work"))
            .collect();
        for key in [
            SortKey::Created,
            SortKey::DueDate,
            SortKey::Priority,
            SortKey::Title,
        ] {
            assert_eq!(ids(&sort(&tasks, key)), vec![1, 2, 3, 4], "{key:?}");
        }
    }

    #[test]
    fn undated_tasks_keep_relative_order_among_themselves() {
        let tasks = vec![
            task(1, "A", false, Priority::Medium, None, "work"),
            task(2, "B", false, Priority::Medium, Some(day(2024, 6, 1)), "work"),
            task(3, "C", false, Priority::Medium, None, "work"),
        ];
        assert_eq!(ids(&sort(&tasks, SortKey::DueDate)), vec![2, 1, 3]);
    }

    #[test]
    fn input_is_left_untouched() {
        let tasks = vec![
            task_created_at(1, "A", day(2024, 1, 1)),
            task_created_at(2, "B", day(2024, 1, 2)),
        ];
        let before = tasks.clone();
        let _ = sort(&tasks, SortKey::Created);
        assert_eq!(tasks, before);
    }

    #[test]
    fn unknown_key_behaves_as_created() {
        assert_eq!(SortKey::parse("random"), SortKey::Created);
        assert_eq!(SortKey::parse("dueDate"), SortKey::DueDate);
        assert_eq!(SortKey::parse("TITLE"), SortKey::Title);
    }
}
