//! Layered configuration: optional file, then `STOCKROOM_*` environment.

use std::env;

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use stockroom_inventory::InventoryConfig;

/// Config file looked up (any supported extension) when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "stockroom";
/// Environment variable naming an explicit config file; the file must exist.
pub const CONFIG_PATH_VAR: &str = "STOCKROOM_CONFIG";
pub const ENV_PREFIX: &str = "STOCKROOM";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub inventory: InventoryConfig,
}

impl CliConfig {
    /// Load from `stockroom.{toml,json,yaml,..}` (or `$STOCKROOM_CONFIG`) and
    /// `STOCKROOM_<SECTION>__<KEY>` variables, e.g.
    /// `STOCKROOM_INVENTORY__LOW_STOCK_THRESHOLD=3`.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => File::with_name(&path).required(true),
            Err(_) => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            .add_source(environment());

        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
