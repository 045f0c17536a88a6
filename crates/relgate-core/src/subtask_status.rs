use crate::models::{SubTaskCategory, SubTaskExecutionCounts};

const TRASH_STATUS: &str = "trash";
const ACCEPTED_STATUS: &str = "accepted";
const COMPLETED_STATUSES: &[&str] = &[
    "done",
    "completed",
    "passed",
    "failed",
    "closed",
    ACCEPTED_STATUS,
];
const IN_PROGRESS_STATUSES: &[&str] = &["in progress", "executing", "in review"];

/// Maps a tracker status to its category. `None` for trashed executions.
#[must_use]
pub fn classify_status(raw: &str) -> Option<SubTaskCategory> {
    let status = raw.trim().to_ascii_lowercase();
    if status == TRASH_STATUS {
        return None;
    }
    if COMPLETED_STATUSES.contains(&status.as_str()) {
        Some(SubTaskCategory::Completed)
    } else if IN_PROGRESS_STATUSES.contains(&status.as_str()) {
        Some(SubTaskCategory::InProgress)
    } else {
        Some(SubTaskCategory::NotStarted)
    }
}

#[must_use]
pub fn is_accepted_status(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(ACCEPTED_STATUS)
}

impl SubTaskExecutionCounts {
    /// Tallies raw tracker statuses, skipping trashed executions.
    pub fn from_statuses<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::default();
        for status in statuses {
            let status = status.as_ref();
            let Some(category) = classify_status(status) else {
                continue;
            };
            counts.total += 1;
            match category {
                SubTaskCategory::Completed => {
                    counts.completed += 1;
                    if is_accepted_status(status) {
                        counts.accepted += 1;
                    }
                }
                SubTaskCategory::InProgress => counts.in_progress += 1,
                SubTaskCategory::NotStarted => counts.not_started += 1,
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify_status("Accepted"), Some(SubTaskCategory::Completed));
        assert_eq!(classify_status("FAILED"), Some(SubTaskCategory::Completed));
        assert_eq!(
            classify_status("In Review"),
            Some(SubTaskCategory::InProgress)
        );
        assert_eq!(classify_status("To Do"), Some(SubTaskCategory::NotStarted));
        assert_eq!(classify_status("Trash"), None);
    }

    #[test]
    fn tally_skips_trash_and_keeps_invariants() {
        let counts = SubTaskExecutionCounts::from_statuses([
            "Accepted",
            "Accepted",
            "Done",
            "Executing",
            "Open",
            "Trash",
        ]);
        assert_eq!(
            counts,
            SubTaskExecutionCounts {
                total: 5,
                accepted: 2,
                completed: 3,
                in_progress: 1,
                not_started: 1,
            }
        );
        assert_eq!(
            counts.completed + counts.in_progress + counts.not_started,
            counts.total
        );
        assert_eq!(counts.completed_not_accepted(), 1);
    }

    #[test]
    fn empty_status_list_yields_zero_counts() {
        let counts = SubTaskExecutionCounts::from_statuses(Vec::<String>::new());
        assert_eq!(counts, SubTaskExecutionCounts::default());
    }
}
