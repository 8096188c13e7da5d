//! Execution of store mutations and collection of per-target outcomes.

use tracing::{debug, warn};

use crate::{
    BatchPolicy, EntityKey, Operation, QueryResult, ReturnElements, StoreClient, StoreError,
    StoreQuery,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    Succeeded,
    Failed(String),

    /// Never attempted because an earlier target failed under fail-fast.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Human-readable identification of the target, used in messages
    pub target: String,
    pub status: TargetStatus,
}

impl TargetOutcome {
    pub fn succeeded(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: TargetStatus::Succeeded,
        }
    }

    pub fn failed(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: TargetStatus::Failed(reason.into()),
        }
    }

    pub fn skipped(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            status: TargetStatus::Skipped,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, TargetStatus::Succeeded)
    }

    pub fn reason(&self) -> Option<&str> {
        match &self.status {
            TargetStatus::Failed(x) => Some(x),
            _ => None,
        }
    }
}

/// Outcomes of every target of a job, in the order they were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcomes(Vec<TargetOutcome>);

impl Outcomes {
    pub fn single(outcome: TargetOutcome) -> Self {
        Self(vec![outcome])
    }

    pub fn push(&mut self, outcome: TargetOutcome) {
        self.0.push(outcome);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TargetOutcome> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.iter().filter(|x| x.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.iter().filter(|x| x.reason().is_some()).count()
    }

    pub fn skipped(&self) -> usize {
        self.iter()
            .filter(|x| x.status == TargetStatus::Skipped)
            .count()
    }
}

impl From<Vec<TargetOutcome>> for Outcomes {
    fn from(value: Vec<TargetOutcome>) -> Self {
        Self(value)
    }
}

impl IntoIterator for Outcomes {
    type Item = TargetOutcome;
    type IntoIter = std::vec::IntoIter<TargetOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn describe_failure(answer: Result<QueryResult, StoreError>) -> Option<String> {
    match answer {
        Ok(QueryResult {
            is_successful: true,
            ..
        }) => None,
        Ok(QueryResult { reason, .. }) => {
            Some(reason.unwrap_or_else(|| "rejected by the store".into()))
        }
        Err(err) => Some(err.to_string()),
    }
}

/// The read-back holds every key that was written.
fn confirms(created: &StoreQuery, sent: &[EntityKey]) -> bool {
    let found = created.keys();
    !sent.is_empty() && sent.iter().all(|x| found.contains(x))
}

pub struct MutationExecutor<'a, C> {
    client: &'a C,
    policy: BatchPolicy,
}

impl<'a, C: StoreClient> MutationExecutor<'a, C> {
    pub fn new(client: &'a C, policy: BatchPolicy) -> Self {
        Self { client, policy }
    }

    pub fn policy(&self) -> BatchPolicy {
        self.policy
    }

    /// One round trip to the store.
    pub async fn execute(
        &self,
        query: StoreQuery,
        operation: Operation,
    ) -> Result<QueryResult, StoreError> {
        debug!(
            %operation,
            collection = query.collection(),
            elements = query.len(),
            "sending mutation"
        );

        match operation {
            Operation::Add => self.client.add(query).await,
            Operation::Update => self.client.update(query).await,
            Operation::Delete => self.client.delete(query).await,
        }
    }

    /// Runs one mutation and folds rejections and errors into the outcome.
    pub async fn apply(
        &self,
        target: impl Into<String>,
        query: StoreQuery,
        operation: Operation,
    ) -> TargetOutcome {
        let target = target.into();
        let answer = self.execute(query, operation).await;

        match describe_failure(answer) {
            None => TargetOutcome::succeeded(target),
            Some(reason) => {
                warn!(%operation, subject = %target, %reason, "store mutation failed");
                TargetOutcome::failed(target, reason)
            }
        }
    }

    /// Adds an entity then reads it back.
    ///
    /// The creation only counts as successful when the confirmation fetch
    /// returns the new entity; the fetched copy is handed back to the caller.
    pub async fn create(
        &self,
        target: impl Into<String>,
        query: StoreQuery,
        confirm: StoreQuery,
    ) -> (TargetOutcome, Option<StoreQuery>) {
        let target = target.into();
        let sent = query.keys();

        let outcome = self.apply(target.clone(), query, Operation::Add).await;

        if !outcome.is_success() {
            return (outcome, None);
        }

        match self.client.fetch(confirm, ReturnElements::All).await {
            Ok(created) if confirms(&created, &sent) => (outcome, Some(created)),
            Ok(_) => {
                warn!(subject = %target, "created entity not found on read back");
                (
                    TargetOutcome::failed(target, "entity not found after creation"),
                    None,
                )
            }
            Err(err) => {
                warn!(subject = %target, %err, "read back after creation failed");
                (TargetOutcome::failed(target, err.to_string()), None)
            }
        }
    }

    /// Applies one mutation per target, sequentially and in input order.
    ///
    /// Under [`BatchPolicy::FailFast`] the targets following the first
    /// failure are reported as skipped without reaching the store.
    pub async fn apply_each(
        &self,
        targets: Vec<(String, StoreQuery)>,
        operation: Operation,
    ) -> Outcomes {
        let mut outcomes = Outcomes::default();
        let mut halted = false;

        for (target, query) in targets {
            if halted {
                outcomes.push(TargetOutcome::skipped(target));
                continue;
            }

            let outcome = self.apply(target, query, operation).await;

            if !outcome.is_success() && self.policy == BatchPolicy::FailFast {
                halted = true;
            }

            outcomes.push(outcome);
        }

        outcomes
    }
}
