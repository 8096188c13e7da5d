//! Job workers mutating a remote well data store.
//!
//! A caller submits a [`Job`]; a [`JobRunner`] validates it, resolves any
//! name-addressed reference, issues the store mutations through a
//! [`StoreClient`] and reports a single [`WorkerResult`] together with the
//! [`RefreshAction`] a view should apply.

use thiserror::Error;

mod config;
mod entity;
mod executor;
mod job;
mod lookup;
mod model;
mod mutate;
mod outcome;
mod query;
mod reference;
mod store;
mod worker;

pub mod builder;
pub mod builtin;
pub mod validate;
pub mod workers;

pub use config::*;
pub use entity::*;
pub use executor::*;
pub use job::Job;
pub use lookup::*;
pub use model::*;
pub use mutate::*;
pub use outcome::*;
pub use query::*;
pub use reference::*;
pub use store::*;
pub use validate::ValidationError;
pub use worker::*;

/// Errors raised by a job before any mutation reached the store.
///
/// Failures of the store itself are never raised; they are reported through
/// the [`WorkerResult`] of the job.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
