//! Creation jobs.
//!
//! A creation is an add followed by a read back of the new entity. Parents
//! addressed by name only are resolved first, and their names are copied
//! onto the payload so the stored entity carries them.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{label, parent_reference, present};
use crate::{
    builder,
    validate::{require_name, require_uid, require_well_reference, require_wellbore_reference},
    EntityKind, JobWorker, LookupError, LookupResolver, MutationExecutor, Outcomes,
    RefreshAction, RefreshType, Risk, StoreClient, StoreEntity, TargetOutcome, ValidationError,
    Well, WellReference, Wellbore,
};

fn name_of<T: StoreEntity>(entity: &T) -> Option<String> {
    serde_json::to_value(entity)
        .ok()?
        .get("name")?
        .as_str()
        .map(str::to_owned)
}

/// Adds the entity, then checks the stored copy carries the requested name.
async fn create_one<C: StoreClient, T: StoreEntity>(
    executor: &MutationExecutor<'_, C>,
    target: String,
    entity: &T,
) -> Outcomes {
    let key = entity.key();

    let (outcome, created) = executor
        .create(
            target.clone(),
            builder::create(entity),
            builder::confirm(T::KIND, &key),
        )
        .await;

    let Some(created) = created else {
        return Outcomes::single(outcome);
    };

    let confirmed = created
        .into_items::<T>()
        .ok()
        .and_then(|items| items.into_iter().find(|x| x.key() == key));

    let Some(confirmed) = confirmed else {
        return Outcomes::single(TargetOutcome::failed(
            target,
            "entity not found after creation",
        ));
    };

    let requested = name_of(entity);
    let stored = name_of(&confirmed);

    if stored != requested {
        warn!(%key, ?requested, ?stored, "created entity has another name");

        return Outcomes::single(TargetOutcome::failed(
            target,
            format!(
                "stored name '{}' differs from the requested '{}'",
                stored.unwrap_or_default(),
                requested.unwrap_or_default()
            ),
        ));
    }

    debug!(%key, name = ?stored, "creation confirmed");

    Outcomes::single(outcome)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWellJob {
    pub well: Well,
}

impl JobWorker for CreateWellJob {
    fn name(&self) -> &'static str {
        "create_well"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_uid(&self.well.uid)?;
        require_name(self.well.name.as_deref())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        create_one(executor, format!("well {}", self.well.uid), &self.well).await
    }

    fn refresh(&self) -> RefreshAction {
        RefreshAction::well(&self.well.uid, RefreshType::Add)
    }

    fn describe(&self) -> String {
        format!(
            "Create well {}",
            label(self.well.name.as_deref(), &self.well.uid)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWellboreJob {
    pub wellbore: Wellbore,
}

impl CreateWellboreJob {
    fn parent(&self) -> WellReference {
        WellReference {
            well_uid: present(&self.wellbore.uid_well),
            well_name: self.wellbore.name_well.clone(),
        }
    }
}

impl JobWorker for CreateWellboreJob {
    fn name(&self) -> &'static str {
        "create_wellbore"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_uid(&self.wellbore.uid)?;
        require_name(self.wellbore.name.as_deref())?;
        require_well_reference(&self.parent())
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        let well = resolver.resolve_well(&self.parent()).await?;

        self.wellbore.uid_well = well.uid;

        if self.wellbore.name_well.is_none() {
            self.wellbore.name_well = well.name;
        }

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        create_one(
            executor,
            format!("wellbore {}", self.wellbore.uid),
            &self.wellbore,
        )
        .await
    }

    fn refresh(&self) -> RefreshAction {
        RefreshAction::wellbore(&self.wellbore.uid_well, &self.wellbore.uid, RefreshType::Add)
    }

    fn describe(&self) -> String {
        format!(
            "Create wellbore {}",
            label(self.wellbore.name.as_deref(), &self.wellbore.uid)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRiskJob {
    pub risk: Risk,
}

impl JobWorker for CreateRiskJob {
    fn name(&self) -> &'static str {
        "create_risk"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let identity = &self.risk.identity;

        require_uid(&identity.uid)?;
        require_name(identity.name.as_deref())?;
        require_wellbore_reference(&parent_reference(identity))
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        let identity = &mut self.risk.identity;
        let wellbore = resolver
            .resolve_wellbore(&parent_reference(identity))
            .await?;

        identity.uid_well = wellbore.uid_well;
        identity.uid_wellbore = wellbore.uid;

        if identity.name_well.is_none() {
            identity.name_well = wellbore.name_well;
        }

        if identity.name_wellbore.is_none() {
            identity.name_wellbore = wellbore.name;
        }

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        create_one(
            executor,
            format!("risk {}", self.risk.identity.uid),
            &self.risk,
        )
        .await
    }

    fn refresh(&self) -> RefreshAction {
        let key = self.risk.identity.key();

        RefreshAction::objects(key.well, key.wellbore, EntityKind::Risk, RefreshType::Add)
    }

    fn describe(&self) -> String {
        let identity = &self.risk.identity;
        format!("Create risk {}", label(identity.name.as_deref(), &identity.uid))
    }
}
