use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use wellops_core::WorkerConfig;

use crate::prelude::*;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct StoreConfig {
    /// JSON file holding the content of the local store
    pub snapshot: Option<PathBuf>,

    /// Write the store back to the snapshot file after a successful job
    #[serde(default)]
    pub persist: bool,
}

#[serde_as]
#[derive(Serialize, Deserialize, Debug)]
pub struct LoggingConfig {
    #[serde_as(as = "DisplayFromStr")]
    pub max_level: tracing::Level,

    /// Also emit the events of the built-in store
    #[serde(default)]
    pub include_store: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            max_level: tracing::Level::INFO,
            include_store: Default::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct RootConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub worker: WorkerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RootConfig {
    pub fn new(explicit_file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut s = config::Config::builder();

        // our base config will always be in /etc/wellops
        s = s.add_source(config::File::with_name("/etc/wellops/wellops.toml").required(false));

        // but we can override it by having a file in the working dir
        s = s.add_source(config::File::with_name("wellops.toml").required(false));

        // if an explicit file was passed, then we load it as mandatory
        if let Some(explicit) = explicit_file.and_then(|x| x.to_str()) {
            s = s.add_source(config::File::with_name(explicit).required(true));
        }

        // finally, env vars such as WELLOPS_WORKER__BATCH_POLICY override the rest
        s = s.add_source(
            config::Environment::with_prefix("WELLOPS")
                .prefix_separator("_")
                .separator("__"),
        );

        s.build()?.try_deserialize()
    }

    pub fn load(explicit_file: Option<&Path>) -> Result<Self, Error> {
        Self::new(explicit_file).map_err(Error::config)
    }
}
