//! Deletion jobs.
//!
//! Objects of one kind under one wellbore are removed with a single store
//! call carrying every identity. Deleting a well or a wellbore also removes
//! everything below it; that cascade is up to the store.

use serde::{Deserialize, Serialize};

use super::{counted, label};
use crate::{
    builder,
    validate::{require_object_references, require_well_reference, require_wellbore_reference},
    EntityKey, EntityKind, JobWorker, LookupError, LookupResolver, MutationExecutor,
    ObjectReferences, Operation, Outcomes, RefreshAction, RefreshType, StoreClient,
    TargetOutcome, ValidationError, WellReference, WellboreReference,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWellJob {
    pub to_delete: WellReference,
}

impl JobWorker for DeleteWellJob {
    fn name(&self) -> &'static str {
        "delete_well"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_well_reference(&self.to_delete)
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        let well = resolver.resolve_well(&self.to_delete).await?;

        self.to_delete.well_uid = Some(well.uid);

        if self.to_delete.well_name.is_none() {
            self.to_delete.well_name = well.name;
        }

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let uid = self.to_delete.uid().unwrap_or_default();

        let outcome = executor
            .apply(
                format!("well {uid}"),
                builder::delete(EntityKind::Well, &[EntityKey::well(uid)]),
                Operation::Delete,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        RefreshAction::well(self.to_delete.uid().unwrap_or_default(), RefreshType::Remove)
    }

    fn describe(&self) -> String {
        format!(
            "Delete well {}",
            label(self.to_delete.name(), self.to_delete.uid().unwrap_or_default())
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWellboreJob {
    pub to_delete: WellboreReference,
}

impl JobWorker for DeleteWellboreJob {
    fn name(&self) -> &'static str {
        "delete_wellbore"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_wellbore_reference(&self.to_delete)
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        let wellbore = resolver.complete_wellbore(&mut self.to_delete).await?;

        if self.to_delete.wellbore_name.is_none() {
            self.to_delete.wellbore_name = wellbore.name;
        }

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let key = self.to_delete.key();

        let outcome = executor
            .apply(
                format!("wellbore {}", key.uid),
                builder::delete(EntityKind::Wellbore, std::slice::from_ref(&key)),
                Operation::Delete,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        let key = self.to_delete.key();
        RefreshAction::wellbore(key.well, key.uid, RefreshType::Remove)
    }

    fn describe(&self) -> String {
        format!(
            "Delete wellbore {}",
            label(
                self.to_delete.name(),
                self.to_delete.uid().unwrap_or_default()
            )
        )
    }
}

async fn resolve_parent<C: StoreClient>(
    resolver: &LookupResolver<'_, C>,
    references: &mut ObjectReferences,
) -> Result<(), LookupError> {
    resolver.complete_wellbore(&mut references.parent).await?;
    Ok(())
}

async fn delete_objects<C: StoreClient>(
    executor: &MutationExecutor<'_, C>,
    references: &ObjectReferences,
    kind: EntityKind,
) -> Outcomes {
    let parent = references.parent.key();
    let target = format!(
        "{} in wellbore {}",
        counted(references.object_uids.len(), kind),
        parent.uid
    );

    let outcome = executor
        .apply(
            target,
            builder::delete(kind, &references.keys()),
            Operation::Delete,
        )
        .await;

    Outcomes::single(outcome)
}

/// "Delete 2 logs", followed by the object names when the caller sent them.
fn describe_objects(references: &ObjectReferences, kind: EntityKind) -> String {
    let summary = format!("Delete {}", counted(references.object_uids.len(), kind));

    if references.names.is_empty() {
        summary
    } else {
        format!("{summary}: {}", references.names.join(", "))
    }
}

fn objects_refresh(references: &ObjectReferences, kind: EntityKind) -> RefreshAction {
    let parent = references.parent.key();
    RefreshAction::objects(parent.well, parent.uid, kind, RefreshType::Remove)
}

/// Deletes objects of the kind named by the reference itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteObjectsJob {
    pub to_delete: ObjectReferences,
}

impl JobWorker for DeleteObjectsJob {
    fn name(&self) -> &'static str {
        "delete_objects"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_object_references(&self.to_delete, None).map(|_| ())
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        resolve_parent(resolver, &mut self.to_delete).await
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        match self.to_delete.object_type {
            Some(kind) => delete_objects(executor, &self.to_delete, kind).await,
            None => Outcomes::single(TargetOutcome::failed(
                self.describe(),
                "object type is required",
            )),
        }
    }

    fn refresh(&self) -> RefreshAction {
        match self.to_delete.object_type {
            Some(kind) => objects_refresh(&self.to_delete, kind),
            None => {
                let parent = self.to_delete.parent.key();
                RefreshAction::wellbore(parent.well, parent.uid, RefreshType::Update)
            }
        }
    }

    fn describe(&self) -> String {
        match self.to_delete.object_type {
            Some(kind) => describe_objects(&self.to_delete, kind),
            None => format!("Delete {} objects", self.to_delete.object_uids.len()),
        }
    }
}

macro_rules! typed_delete_job {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $job:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            pub to_delete: ObjectReferences,
        }

        impl JobWorker for $name {
            fn name(&self) -> &'static str {
                $job
            }

            fn validate(&self) -> Result<(), ValidationError> {
                require_object_references(&self.to_delete, Some($kind)).map(|_| ())
            }

            async fn resolve<C: StoreClient>(
                &mut self,
                resolver: &LookupResolver<'_, C>,
            ) -> Result<(), LookupError> {
                resolve_parent(resolver, &mut self.to_delete).await
            }

            async fn mutate<C: StoreClient>(
                &self,
                executor: &MutationExecutor<'_, C>,
            ) -> Outcomes {
                delete_objects(executor, &self.to_delete, $kind).await
            }

            fn refresh(&self) -> RefreshAction {
                objects_refresh(&self.to_delete, $kind)
            }

            fn describe(&self) -> String {
                describe_objects(&self.to_delete, $kind)
            }
        }
    };
}

typed_delete_job!(
    /// Deletes logs; an explicit object type other than log is rejected.
    DeleteLogObjectsJob,
    EntityKind::Log,
    "delete_log_objects"
);

typed_delete_job!(DeleteMudLogsJob, EntityKind::MudLog, "delete_mud_logs");

typed_delete_job!(
    DeleteMessageObjectsJob,
    EntityKind::Message,
    "delete_message_objects"
);
