use serde::{Deserialize, Serialize};
use tracing::debug;

use super::label;
use crate::{
    builder,
    validate::{require_mnemonics, require_uid, require_wellbore_reference},
    EntityKind, JobWorker, LogReference, LookupError, LookupResolver, MutationExecutor,
    Operation, Outcomes, RefreshAction, RefreshType, StoreClient, TargetOutcome,
    ValidationError,
};

#[derive(Debug, Clone)]
struct ResolvedCurve {
    curve_uid: String,
    is_index_curve: bool,

    /// Another curve of the log already carries the new mnemonic
    conflict: bool,
}

/// Renames one curve mnemonic of a log.
///
/// Only the renamed curve is sent, together with the index curve of the log
/// when the renamed curve is the index. Renaming onto a mnemonic the log
/// already uses fails without reaching the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameMnemonicJob {
    pub log_reference: LogReference,
    pub mnemonic: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_mnemonic: Option<String>,

    #[serde(skip)]
    resolved: Option<ResolvedCurve>,
}

impl RenameMnemonicJob {
    pub fn new(
        log_reference: LogReference,
        mnemonic: impl Into<String>,
        new_mnemonic: impl Into<String>,
    ) -> Self {
        Self {
            log_reference,
            mnemonic: mnemonic.into(),
            new_mnemonic: Some(new_mnemonic.into()),
            resolved: None,
        }
    }

    fn new_mnemonic(&self) -> &str {
        self.new_mnemonic.as_deref().unwrap_or_default()
    }
}

impl JobWorker for RenameMnemonicJob {
    fn name(&self) -> &'static str {
        "rename_mnemonic"
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_wellbore_reference(&self.log_reference.parent)?;
        require_uid(&self.log_reference.uid)?;
        require_mnemonics(&self.mnemonic, self.new_mnemonic.as_deref())
    }

    async fn resolve<C: StoreClient>(
        &mut self,
        resolver: &LookupResolver<'_, C>,
    ) -> Result<(), LookupError> {
        resolver
            .complete_wellbore(&mut self.log_reference.parent)
            .await?;

        let (header, curve) = resolver
            .resolve_curve(&self.log_reference.key(), &self.mnemonic)
            .await?;

        let conflict = header
            .log_curve_info
            .iter()
            .any(|x| x.mnemonic.as_deref() == Some(self.new_mnemonic()));

        let is_index_curve = header.index_curve.as_deref() == Some(self.mnemonic.as_str());

        debug!(curve = %curve.uid, is_index_curve, conflict, "resolved curve");

        self.resolved = Some(ResolvedCurve {
            curve_uid: curve.uid,
            is_index_curve,
            conflict,
        });

        Ok(())
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes {
        let key = self.log_reference.key();
        let target = format!("mnemonic {} of log {}", self.mnemonic, key.uid);

        let outcome = match &self.resolved {
            None => TargetOutcome::failed(target, "curve was not resolved"),
            Some(curve) if curve.conflict => TargetOutcome::failed(
                target,
                format!("log already has a curve named '{}'", self.new_mnemonic()),
            ),
            Some(curve) => {
                executor
                    .apply(
                        target,
                        builder::rename_mnemonic(
                            &key,
                            &curve.curve_uid,
                            self.new_mnemonic(),
                            curve.is_index_curve,
                        ),
                        Operation::Update,
                    )
                    .await
            }
        };

        Outcomes::single(outcome)
    }

    fn refresh(&self) -> RefreshAction {
        let key = self.log_reference.key();
        RefreshAction::objects(key.well, key.wellbore, EntityKind::Log, RefreshType::Update)
    }

    fn describe(&self) -> String {
        format!(
            "Rename mnemonic {} to {} in log {}",
            self.mnemonic,
            self.new_mnemonic(),
            label(self.log_reference.name.as_deref(), &self.log_reference.uid)
        )
    }
}
