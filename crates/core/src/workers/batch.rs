use serde::{Deserialize, Serialize};

use crate::{
    builder,
    validate::{optional_name, require_targets, require_uid},
    JobWorker, MutationExecutor, Operation, Outcomes, RefreshAction, RefreshType, StoreClient,
    ValidationError, Well,
};

/// Updates several wells, one store call per well in input order.
///
/// Wells are independent of each other, so a failing well does not stop the
/// others unless the worker runs with a fail-fast policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchModifyWellJob {
    pub wells: Vec<Well>,
}

impl JobWorker for BatchModifyWellJob {
    fn name(&self) -> &'static str {
        "batch_modify_well"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_targets(&self.wells)?;

        for well in self.wells.iter() {
            require_uid(&well.uid)?;
            optional_name(well.name.as_deref())?;
        }

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let targets = self
            .wells
            .iter()
            .map(|well| (format!("well {}", well.uid), builder::modify_well(well)))
            .collect();

        executor.apply_each(targets, Operation::Update).await
    }

    fn refresh(&self) -> RefreshAction {
        RefreshAction::Wells {
            well_uids: self.wells.iter().map(|x| x.uid.clone()).collect(),
            refresh_type: RefreshType::Update,
        }
    }

    fn describe(&self) -> String {
        match self.wells.len() {
            1 => "Update 1 well".into(),
            n => format!("Update {n} wells"),
        }
    }
}
