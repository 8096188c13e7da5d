use serde::{Deserialize, Serialize};

/// How a job with several independent targets reacts to a failed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    /// Attempt every target and report each outcome.
    #[default]
    BestEffort,

    /// Stop at the first failure; later targets are reported as skipped.
    FailFast,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerConfig {
    #[serde(default)]
    pub batch_policy: BatchPolicy,
}

impl WorkerConfig {
    pub fn fail_fast() -> Self {
        Self {
            batch_policy: BatchPolicy::FailFast,
        }
    }
}
