use crate::model::Task;

/// Case-insensitive substring match over title and description.
///
/// A blank query returns a copy of the full collection. Result order is
/// input order; there is no ranking.
pub fn search(tasks: &[Task], query: &str) -> Vec<Task> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }

    tasks
        .iter()
        .filter(|t| {
            t.title.to_lowercase().contains(&needle)
                || t.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::query::testing::task;

    fn sample() -> Vec<Task> {
        let mut a = task(1, "Buy milk", false, Priority::Medium, None, "shopping");
        a.description = "Semi-skimmed".to_string();
        let b = task(2, "Call dentist", false, Priority::Medium, None, "personal");
        let mut c = task(3, "Quarterly report", false, Priority::High, None, "work");
        c.description = "Include milk budget".to_string();
        vec![a, b, c]
    }

    fn ids(tasks: &[Task]) -> Vec<u64> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn matches_title_and_description() {
        assert_eq!(ids(&search(&sample(), "milk")), vec![1, 3]);
    }

    #[test]
    fn query_is_trimmed_and_case_folded() {
        assert_eq!(ids(&search(&sample(), "  MILK  ")), vec![1, 3]);
        assert_eq!(ids(&search(&sample(), "DENTIST")), vec![2]);
    }

    #[test]
    fn blank_query_returns_everything() {
        assert_eq!(search(&sample(), "").len(), 3);
        assert_eq!(search(&sample(), "   ").len(), 3);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(search(&sample(), "garden").is_empty());
        assert!(search(&[], "milk").is_empty());
    }
}
