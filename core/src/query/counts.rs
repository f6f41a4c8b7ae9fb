use std::collections::HashMap;

use chrono::NaiveDate;

use crate::model::category::{ALL_ID, TODAY_ID, UPCOMING_ID};
use crate::model::{Category, Task};
use crate::query::bucket::DueBucket;

/// Active-task counts per category id, for the sidebar badges.
///
/// The three virtual keys are always present; so is every persisted id
/// from `categories`, at 0 when it has no active tasks. Recomputed from
/// scratch on every call over the given snapshot.
pub fn count_active_by_category(
    tasks: &[Task],
    categories: &[Category],
    today: NaiveDate,
) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for id in [ALL_ID, TODAY_ID, UPCOMING_ID] {
        counts.insert(id.to_string(), 0);
    }
    for category in categories {
        counts.entry(category.id.clone()).or_insert(0);
    }

    for task in tasks.iter().filter(|t| !t.completed) {
        *counts.entry(ALL_ID.to_string()).or_insert(0) += 1;
        match DueBucket::of(task, today) {
            DueBucket::Today => *counts.entry(TODAY_ID.to_string()).or_insert(0) += 1,
            DueBucket::Future => *counts.entry(UPCOMING_ID.to_string()).or_insert(0) += 1,
            DueBucket::Past | DueBucket::None => {}
        }
        // A task pointing at a category the caller did not list is
        // counted only under the virtual views.
        if !Category::is_virtual_id(&task.category_id) {
            if let Some(n) = counts.get_mut(&task.category_id) {
                *n += 1;
            }
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::{default_categories, virtual_categories};
    use crate::model::Priority;
    use crate::query::testing::{day, task, today};

    fn categories() -> Vec<Category> {
        let mut all = virtual_categories();
        all.extend(default_categories());
        all
    }

    #[test]
    fn counts_only_active_tasks() {
        let tasks = vec![
            task(1, "A", false, Priority::Low, None, "work"),
            task(2, "B", false, Priority::Low, None, "work"),
            task(3, "C", false, Priority::Low, None, "work"),
            task(4, "D", true, Priority::Low, None, "work"),
            task(5, "E", true, Priority::Low, None, "work"),
        ];
        let counts = count_active_by_category(&tasks, &categories(), today());
        assert_eq!(counts["work"], 3);
        assert_eq!(counts["all"], 3);
    }

    #[test]
    fn all_equals_active_count() {
        let tasks: Vec<Task> = (1..=7)
            .map(|id| task(id, "t", id % 3 == 0, Priority::Medium, None, "personal"))
            .collect();
        let active = tasks.iter().filter(|t| !t.completed).count();
        let counts = count_active_by_category(&tasks, &categories(), today());
        assert_eq!(counts["all"], active);
    }

    #[test]
    fn virtual_buckets_follow_the_classifier() {
        let tasks = vec![
            task(1, "past", false, Priority::Low, Some(day(2024, 6, 14)), "work"),
            task(2, "today", false, Priority::Low, Some(day(2024, 6, 15)), "work"),
            task(3, "future", false, Priority::Low, Some(day(2024, 6, 20)), "work"),
            task(4, "done today", true, Priority::Low, Some(day(2024, 6, 15)), "work"),
            task(5, "undated", false, Priority::Low, None, "work"),
        ];
        let counts = count_active_by_category(&tasks, &categories(), today());
        assert_eq!(counts["today"], 1);
        assert_eq!(counts["upcoming"], 1);
        assert_eq!(counts["all"], 4);
    }

    #[test]
    fn zero_count_categories_are_present() {
        let counts = count_active_by_category(&[], &categories(), today());
        for id in ["all", "today", "upcoming", "work", "personal", "shopping"] {
            assert_eq!(counts.get(id), Some(&0), "{id}");
        }
    }

    #[test]
    fn unlisted_category_ids_do_not_add_keys() {
        let tasks = vec![task(1, "A", false, Priority::Low, None, "errands")];
        let counts = count_active_by_category(&tasks, &categories(), today());
        assert_eq!(counts.get("errands"), None);
        assert_eq!(counts["all"], 1);
    }
}
