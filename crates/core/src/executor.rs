//! Generic job executor.
//!
//! Runs a [`JobWorker`] through its phases and folds whatever happened into a
//! single [`WorkerResult`](crate::WorkerResult) and
//! [`RefreshAction`](crate::RefreshAction). Only validation and lookup
//! failures are raised; anything the store does wrong is captured.

use tracing::{debug, info, instrument, warn, Instrument, Span};

use crate::{
    build_result, job::dispatch, Job, JobError, JobWorker, LookupError, LookupResolver,
    MutationExecutor, Outcomes, StoreClient, StoreClientProvider, TargetOutcome, WorkerConfig,
    WorkerOutput,
};

/// Execute a job worker through its complete lifecycle.
///
/// # Errors
///
/// Returns an error when the payload is invalid or a name-addressed
/// reference cannot be resolved to exactly one entity. In both cases no
/// mutation reached the store.
#[instrument(skip_all, fields(job = %job.name()))]
pub async fn execute_job<C: StoreClient, J: JobWorker>(
    client: &C,
    config: &WorkerConfig,
    mut job: J,
) -> Result<WorkerOutput, JobError> {
    info!("executing job");

    job.validate()?;
    debug!("validate phase complete");

    match job.resolve(&LookupResolver::new(client)).await {
        Ok(()) => debug!("resolve phase complete"),
        Err(LookupError::NotFound(err)) => return Err(err.into()),
        Err(LookupError::Store(err)) => {
            warn!(%err, "store failed during lookup");

            let description = job.describe();
            let outcomes = Outcomes::single(TargetOutcome::failed(&description, err.to_string()));

            return Ok(build_result(&description, &outcomes, job.refresh()));
        }
    }

    let executor = MutationExecutor::new(client, config.batch_policy);
    let outcomes = job.mutate(&executor).await;

    debug!(
        succeeded = outcomes.succeeded(),
        failed = outcomes.failed(),
        skipped = outcomes.skipped(),
        "mutate phase complete"
    );

    let (result, refresh) = build_result(&job.describe(), &outcomes, job.refresh());

    info!(success = result.is_success, "job completed");

    Ok((result, refresh))
}

/// Entry point executing any [`Job`] against clients of a provider.
pub struct JobRunner<P> {
    provider: P,
    config: WorkerConfig,
    span: Option<Span>,
}

impl<P: StoreClientProvider> JobRunner<P> {
    pub fn new(provider: P, config: WorkerConfig) -> Self {
        Self {
            provider,
            config,
            span: None,
        }
    }

    /// Nests every job span below `span` instead of the caller's span.
    pub fn with_span(self, span: Span) -> Self {
        Self {
            span: Some(span),
            ..self
        }
    }

    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    pub async fn execute(&self, job: Job) -> Result<WorkerOutput, JobError> {
        let client = self.provider.client();
        let span = self.span.clone().unwrap_or_else(Span::current);

        dispatch!(job, worker => {
            execute_job(&client, &self.config, worker)
                .instrument(span)
                .await
        })
    }
}
