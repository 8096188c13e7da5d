use std::path::PathBuf;

use miette::{Context as _, IntoDiagnostic};

use wellops::local;

#[derive(Debug, clap::Args)]
pub struct Args {
    /// JSON file holding the job
    job: PathBuf,
}

pub fn run(args: &Args) -> miette::Result<()> {
    let job = local::read_job(&args.job).context("reading job file")?;

    job.validate().into_diagnostic()?;

    println!("{}: {}", job.name(), job.describe());

    Ok(())
}
