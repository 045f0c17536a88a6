use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugCounts {
    pub on_dev: u64,
    pub on_qa: u64,
    pub total_open: u64,
}

/// Sub-task execution status counts at report time.
///
/// `completed` includes `accepted`; `completed + in_progress + not_started`
/// always equals `total` for well-formed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTaskExecutionCounts {
    pub total: u64,
    pub accepted: u64,
    pub completed: u64,
    pub in_progress: u64,
    pub not_started: u64,
}

impl SubTaskExecutionCounts {
    #[must_use]
    pub const fn completed_not_accepted(&self) -> u64 {
        self.completed.saturating_sub(self.accepted)
    }

    #[must_use]
    pub const fn outstanding(&self) -> u64 {
        self.total.saturating_sub(self.accepted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubTaskCategory {
    Completed,
    InProgress,
    NotStarted,
}
