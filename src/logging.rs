use tracing_subscriber::{filter::Targets, prelude::*};

use crate::config::LoggingConfig;

pub fn setup_tracing(config: &LoggingConfig) -> miette::Result<()> {
    let level = config.max_level;

    let mut filter = Targets::new()
        .with_target("wellops", level)
        .with_target("wellops_core", level);

    if !config.include_store {
        filter = filter.with_target("wellops_core::builtin", tracing::Level::WARN);
    }

    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish()
        .with(filter)
        .init();

    Ok(())
}
