use chrono::NaiveDate;

use crate::model::Task;

/// Temporal classification of a due date against a reference day.
///
/// This is the single home for the today/upcoming/overdue boundary:
/// category views, badge counts and the overdue report all go through
/// `classify` instead of re-deriving the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// No due date set.
    None,
    /// Strictly before the reference day.
    Past,
    /// Falls on the reference day.
    Today,
    /// Strictly after the reference day.
    Future,
}

impl DueBucket {
    pub fn classify(due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        match due_date {
            None => DueBucket::None,
            Some(d) if d == today => DueBucket::Today,
            Some(d) if d < today => DueBucket::Past,
            Some(_) => DueBucket::Future,
        }
    }

    pub fn of(task: &Task, today: NaiveDate) -> Self {
        Self::classify(task.due_date, today)
    }
}
