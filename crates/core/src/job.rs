//! The closed set of intents a caller can submit.

use serde::{Deserialize, Serialize};

use crate::{workers::*, JobWorker, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Job {
    ModifyWell(ModifyWellJob),
    ModifyWellbore(ModifyWellboreJob),
    ModifyLogObject(ModifyLogObjectJob),
    ModifyTubular(ModifyTubularJob),
    ModifyMessage(ModifyMessageJob),
    ModifyWbGeometrySection(ModifyWbGeometrySectionJob),
    BatchModifyWell(BatchModifyWellJob),
    CreateRisk(CreateRiskJob),
    CreateWell(CreateWellJob),
    CreateWellbore(CreateWellboreJob),
    DeleteWell(DeleteWellJob),
    DeleteWellbore(DeleteWellboreJob),
    DeleteObjects(DeleteObjectsJob),
    DeleteLogObjects(DeleteLogObjectsJob),
    DeleteMudLogs(DeleteMudLogsJob),
    DeleteMessageObjects(DeleteMessageObjectsJob),
    RenameMnemonic(RenameMnemonicJob),
}

/// Binds the worker inside any [`Job`] variant and evaluates `$body` with it.
macro_rules! dispatch {
    ($job:expr, $worker:ident => $body:expr) => {
        match $job {
            $crate::Job::ModifyWell($worker) => $body,
            $crate::Job::ModifyWellbore($worker) => $body,
            $crate::Job::ModifyLogObject($worker) => $body,
            $crate::Job::ModifyTubular($worker) => $body,
            $crate::Job::ModifyMessage($worker) => $body,
            $crate::Job::ModifyWbGeometrySection($worker) => $body,
            $crate::Job::BatchModifyWell($worker) => $body,
            $crate::Job::CreateRisk($worker) => $body,
            $crate::Job::CreateWell($worker) => $body,
            $crate::Job::CreateWellbore($worker) => $body,
            $crate::Job::DeleteWell($worker) => $body,
            $crate::Job::DeleteWellbore($worker) => $body,
            $crate::Job::DeleteObjects($worker) => $body,
            $crate::Job::DeleteLogObjects($worker) => $body,
            $crate::Job::DeleteMudLogs($worker) => $body,
            $crate::Job::DeleteMessageObjects($worker) => $body,
            $crate::Job::RenameMnemonic($worker) => $body,
        }
    };
}

pub(crate) use dispatch;

impl Job {
    pub fn name(&self) -> &'static str {
        dispatch!(self, x => x.name())
    }

    /// Runs the pure checks of the job without touching any store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        dispatch!(self, x => x.validate())
    }

    pub fn describe(&self) -> String {
        dispatch!(self, x => x.describe())
    }
}
