use std::path::PathBuf;

use miette::{Context as _, IntoDiagnostic};

use wellops::{config::RootConfig, core::BatchPolicy, local};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON file holding the job
    job: PathBuf,

    /// Snapshot to load instead of the configured one
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Write the store back to the snapshot when the job succeeds
    #[arg(long)]
    persist: bool,

    /// Stop a batch at its first failing target
    #[arg(long)]
    fail_fast: bool,
}

pub async fn run(config: &mut RootConfig, args: &Args) -> miette::Result<()> {
    if let Some(snapshot) = &args.snapshot {
        config.store.snapshot = Some(snapshot.clone());
    }

    if args.persist {
        config.store.persist = true;
    }

    if args.fail_fast {
        config.worker.batch_policy = BatchPolicy::FailFast;
    }

    let job = local::read_job(&args.job).context("reading job file")?;
    let store = local::open_store(&config.store).context("opening store")?;

    let report = local::execute(config, &store, job).await?;

    let json = serde_json::to_string_pretty(&report).into_diagnostic()?;
    println!("{json}");

    if !report.result.is_success {
        miette::bail!("{}", report.result.message);
    }

    Ok(())
}
