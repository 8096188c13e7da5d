//! Single-target modify jobs.
//!
//! Each of these jobs updates exactly one entity already addressed by uid,
//! so there is nothing to resolve and a failure ends the job.

use serde::{Deserialize, Serialize};

use super::label;
use crate::{
    builder,
    validate::{require_name, require_object_identity, require_uid, require_wellbore_reference},
    EntityKind, JobWorker, LogObject, LookupError, LookupResolver, MessageObject,
    MutationExecutor, ObjectReference, Operation, Outcomes, RefreshAction, RefreshType,
    StoreClient, Tubular, ValidationError, WbGeometrySection, Well, Wellbore,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyWellJob {
    pub well: Well,
}

impl JobWorker for ModifyWellJob {
    fn name(&self) -> &'static str {
        "modify_well"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_uid(&self.well.uid)?;
        require_name(self.well.name.as_deref())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let outcome = executor
            .apply(
                format!("well {}", self.well.uid),
                builder::modify_well(&self.well),
                Operation::Update,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        RefreshAction::well(&self.well.uid, RefreshType::Update)
    }

    fn describe(&self) -> String {
        format!(
            "Update well {}",
            label(self.well.name.as_deref(), &self.well.uid)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyWellboreJob {
    pub wellbore: Wellbore,
}

impl JobWorker for ModifyWellboreJob {
    fn name(&self) -> &'static str {
        "modify_wellbore"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_uid(&self.wellbore.uid)?;
        require_uid(&self.wellbore.uid_well)?;
        require_name(self.wellbore.name.as_deref())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let outcome = executor
            .apply(
                format!("wellbore {}", self.wellbore.uid),
                builder::modify_wellbore(&self.wellbore),
                Operation::Update,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        RefreshAction::wellbore(
            &self.wellbore.uid_well,
            &self.wellbore.uid,
            RefreshType::Update,
        )
    }

    fn describe(&self) -> String {
        format!(
            "Update wellbore {}",
            label(self.wellbore.name.as_deref(), &self.wellbore.uid)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyLogObjectJob {
    pub log_object: LogObject,
}

impl JobWorker for ModifyLogObjectJob {
    fn name(&self) -> &'static str {
        "modify_log_object"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_object_identity(&self.log_object.identity)?;
        require_name(self.log_object.identity.name.as_deref())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let outcome = executor
            .apply(
                format!("log {}", self.log_object.identity.uid),
                builder::modify_log(&self.log_object),
                Operation::Update,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        let identity = &self.log_object.identity;

        RefreshAction::objects(
            &identity.uid_well,
            &identity.uid_wellbore,
            EntityKind::Log,
            RefreshType::Update,
        )
    }

    fn describe(&self) -> String {
        let identity = &self.log_object.identity;
        format!("Update log {}", label(identity.name.as_deref(), &identity.uid))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyTubularJob {
    pub tubular: Tubular,
}

impl JobWorker for ModifyTubularJob {
    fn name(&self) -> &'static str {
        "modify_tubular"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_object_identity(&self.tubular.identity)?;
        require_name(self.tubular.identity.name.as_deref())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let outcome = executor
            .apply(
                format!("tubular {}", self.tubular.identity.uid),
                builder::modify_tubular(&self.tubular),
                Operation::Update,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        let identity = &self.tubular.identity;

        RefreshAction::objects(
            &identity.uid_well,
            &identity.uid_wellbore,
            EntityKind::Tubular,
            RefreshType::Update,
        )
    }

    fn describe(&self) -> String {
        let identity = &self.tubular.identity;
        format!(
            "Update tubular {}",
            label(identity.name.as_deref(), &identity.uid)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyMessageJob {
    pub message_object: MessageObject,
}

impl JobWorker for ModifyMessageJob {
    fn name(&self) -> &'static str {
        "modify_message"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_object_identity(&self.message_object.identity)?;
        require_name(self.message_object.identity.name.as_deref())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let outcome = executor
            .apply(
                format!("message {}", self.message_object.identity.uid),
                builder::modify_message(&self.message_object),
                Operation::Update,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        let identity = &self.message_object.identity;

        RefreshAction::objects(
            &identity.uid_well,
            &identity.uid_wellbore,
            EntityKind::Message,
            RefreshType::Update,
        )
    }

    fn describe(&self) -> String {
        let identity = &self.message_object.identity;
        format!(
            "Update message {}",
            label(identity.name.as_deref(), &identity.uid)
        )
    }
}

/// Replaces or adds one section of a wellbore geometry.
///
/// The geometry itself may be addressed by the names of its well and
/// wellbore; those are resolved before the update is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyWbGeometrySectionJob {
    pub wb_geometry_reference: ObjectReference,
    pub section: WbGeometrySection,
}

impl JobWorker for ModifyWbGeometrySectionJob {
    fn name(&self) -> &'static str {
        "modify_wb_geometry_section"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_wellbore_reference(&self.wb_geometry_reference.parent)?;
        require_uid(&self.wb_geometry_reference.uid)?;
        require_uid(&self.section.uid)
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        resolver
            .complete_wellbore(&mut self.wb_geometry_reference.parent)
            .await?;

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let key = self.wb_geometry_reference.key();

        let outcome = executor
            .apply(
                format!("wellbore geometry {} section {}", key.uid, self.section.uid),
                builder::modify_wb_geometry_section(&key, &self.section),
                Operation::Update,
            )
            .await;

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        let key = self.wb_geometry_reference.key();

        RefreshAction::objects(
            key.well,
            key.wellbore,
            EntityKind::WbGeometry,
            RefreshType::Update,
        )
    }

    fn describe(&self) -> String {
        format!(
            "Update section {} of wellbore geometry {}",
            self.section.uid,
            label(
                self.wb_geometry_reference.name.as_deref(),
                &self.wb_geometry_reference.uid
            )
        )
    }
}
