//! Jobs executed against a store loaded from a local snapshot file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use wellops_core::{
    builtin::EphemeralStore, Job, JobRunner, RefreshAction, StaticProvider, StoreQuery,
    WorkerResult,
};

use crate::{
    config::{RootConfig, StoreConfig},
    prelude::*,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JobReport {
    pub result: WorkerResult,
    pub refresh: RefreshAction,
}

pub fn read_job(path: &Path) -> Result<Job, Error> {
    let file = std::fs::File::open(path)?;
    let job = serde_json::from_reader(std::io::BufReader::new(file))?;

    Ok(job)
}

/// Opens the configured snapshot, or an empty store when there is none yet.
pub fn open_store(config: &StoreConfig) -> Result<EphemeralStore, Error> {
    let Some(path) = &config.snapshot else {
        warn!("no snapshot configured, starting from an empty store");
        return Ok(EphemeralStore::new());
    };

    if !path.is_file() {
        warn!(path = %path.display(), "snapshot not found, starting from an empty store");
        return Ok(EphemeralStore::new());
    }

    let file = std::fs::File::open(path)?;
    let snapshot: Vec<StoreQuery> = serde_json::from_reader(std::io::BufReader::new(file))?;

    Ok(EphemeralStore::from_snapshot(snapshot)?)
}

pub fn save_store(store: &EphemeralStore, path: &Path) -> Result<(), Error> {
    let snapshot = store.snapshot()?;
    let file = std::fs::File::create(path)?;

    serde_json::to_writer_pretty(std::io::BufWriter::new(file), &snapshot)?;
    info!(path = %path.display(), "snapshot saved");

    Ok(())
}

/// Runs one job against `store`, persisting it afterwards when configured to.
///
/// The snapshot is written whenever the store accepted at least one
/// mutation, so the succeeded targets of a partially failed job are kept.
pub async fn execute(
    config: &RootConfig,
    store: &EphemeralStore,
    job: Job,
) -> Result<JobReport, Error> {
    let span = info_span!("local", job = job.name());

    let runner = JobRunner::new(StaticProvider::new(store.clone()), config.worker.clone())
        .with_span(span);

    let revision = store.revision();
    let (result, refresh) = runner.execute(job).await?;

    if config.store.persist && store.revision() != revision {
        match &config.store.snapshot {
            Some(path) => save_store(store, path)?,
            None => return Err(Error::config("persist requires a snapshot path")),
        }
    }

    Ok(JobReport { result, refresh })
}
