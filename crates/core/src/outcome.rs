//! What a job reports back once it is done.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{EntityKind, Outcomes};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerResult {
    pub is_success: bool,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl WorkerResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            reason: None,
        }
    }

    pub fn failure(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Tells a view whether to insert, reload or drop the refreshed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RefreshType {
    Add,
    Update,
    Remove,
}

/// The scope a view must invalidate after a job ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RefreshAction {
    Well {
        well_uid: String,
        refresh_type: RefreshType,
    },

    /// Coarse refresh of the well collection, used by batch jobs.
    Wells {
        well_uids: Vec<String>,
        refresh_type: RefreshType,
    },

    Wellbore {
        well_uid: String,
        wellbore_uid: String,
        refresh_type: RefreshType,
    },

    Objects {
        well_uid: String,
        wellbore_uid: String,
        object_type: EntityKind,
        refresh_type: RefreshType,
    },
}

impl RefreshAction {
    pub fn well(well_uid: impl Into<String>, refresh_type: RefreshType) -> Self {
        Self::Well {
            well_uid: well_uid.into(),
            refresh_type,
        }
    }

    pub fn wellbore(
        well_uid: impl Into<String>,
        wellbore_uid: impl Into<String>,
        refresh_type: RefreshType,
    ) -> Self {
        Self::Wellbore {
            well_uid: well_uid.into(),
            wellbore_uid: wellbore_uid.into(),
            refresh_type,
        }
    }

    pub fn objects(
        well_uid: impl Into<String>,
        wellbore_uid: impl Into<String>,
        object_type: EntityKind,
        refresh_type: RefreshType,
    ) -> Self {
        Self::Objects {
            well_uid: well_uid.into(),
            wellbore_uid: wellbore_uid.into(),
            object_type,
            refresh_type,
        }
    }

    pub fn refresh_type(&self) -> RefreshType {
        match self {
            Self::Well { refresh_type, .. }
            | Self::Wells { refresh_type, .. }
            | Self::Wellbore { refresh_type, .. }
            | Self::Objects { refresh_type, .. } => *refresh_type,
        }
    }

    /// The single well this action is scoped to, if any.
    pub fn well_uid(&self) -> Option<&str> {
        match self {
            Self::Well { well_uid, .. }
            | Self::Wellbore { well_uid, .. }
            | Self::Objects { well_uid, .. } => Some(well_uid),
            Self::Wells { .. } => None,
        }
    }

    pub fn wellbore_uid(&self) -> Option<&str> {
        match self {
            Self::Wellbore { wellbore_uid, .. } | Self::Objects { wellbore_uid, .. } => {
                Some(wellbore_uid)
            }
            _ => None,
        }
    }
}

pub type WorkerOutput = (WorkerResult, RefreshAction);

fn failure_reasons(outcomes: &Outcomes) -> String {
    outcomes
        .iter()
        .filter_map(|x| x.reason().map(|reason| format!("{}: {reason}", x.target)))
        .join("; ")
}

/// Folds per-target outcomes into the single result of a job.
///
/// Only a job whose every target succeeded is reported as successful. A
/// partially applied job states how many targets succeeded, failed and were
/// skipped so it is never mistaken for a total success.
pub fn build_result(
    description: &str,
    outcomes: &Outcomes,
    refresh: RefreshAction,
) -> WorkerOutput {
    let succeeded = outcomes.succeeded();

    let result = if outcomes.is_empty() {
        WorkerResult::failure(
            format!("{description} failed"),
            "no target was processed",
        )
    } else if succeeded == outcomes.len() {
        WorkerResult::success(description)
    } else if succeeded == 0 {
        WorkerResult::failure(format!("{description} failed"), failure_reasons(outcomes))
    } else {
        let failed = outcomes
            .iter()
            .filter(|x| !x.is_success())
            .map(|x| x.target.as_str())
            .join(", ");

        WorkerResult::failure(
            format!(
                "{description} partially failed: {succeeded} succeeded, {} failed, {} skipped ({failed})",
                outcomes.failed(),
                outcomes.skipped(),
            ),
            failure_reasons(outcomes),
        )
    };

    (result, refresh)
}
