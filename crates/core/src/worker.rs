//! Job Worker trait.
//!
//! A job worker carries one user intent against the store. Its lifecycle is
//! split into phases so the generic executor can log, time and short-circuit
//! each of them the same way for every kind of job:
//!
//! 1. **Validate** - pure checks over the payload. Nothing reaches the store
//!    when this phase fails.
//!
//! 2. **Resolve** - turn name-addressed references into uids. This phase may
//!    fetch headers from the store but never mutates it.
//!
//! 3. **Mutate** - issue the add, update or delete calls and record the
//!    outcome of each target.
//!
//! 4. **Report** - describe the job and the view scope it invalidates.

use crate::{
    LookupError, LookupResolver, MutationExecutor, Outcomes, RefreshAction, StoreClient,
    ValidationError,
};

#[trait_variant::make(Send)]
pub trait JobWorker: Send + Sync {
    /// Short static name used as the span field of the job.
    fn name(&self) -> &'static str;

    fn validate(&self) -> Result<(), ValidationError>;

    /// Fills uids the payload only addresses by name.
    ///
    /// The default implementation does nothing, which fits jobs whose payload
    /// must already carry every uid.
    fn resolve<C: StoreClient>(
        &mut self,
        _resolver: &LookupResolver<'_, C>,
    ) -> impl std::future::Future<Output = Result<(), LookupError>> + Send {
        async { Ok(()) }
    }

    async fn mutate<C: StoreClient>(&self, executor: &MutationExecutor<'_, C>) -> Outcomes;

    /// The view scope to invalidate once the job ran.
    fn refresh(&self) -> RefreshAction;

    /// Human-readable summary used as the result message.
    fn describe(&self) -> String;
}
