use anyhow::Context;
use config::{Config, Environment, File};
use std::path::Path;
use tpost_domain::config::AppConfig;

/// Prefix of environment overrides, e.g. `TPOST__CODEC__COMPRESSION=true`.
pub const ENV_PREFIX: &str = "TPOST";

/// Loads the layered configuration.
///
/// 1. Built-in defaults.
/// 2. The file at `path`, when given. It must exist.
/// 3. `TPOST__`-prefixed environment variables, with `__` between nested keys.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).required(true));
    }
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .convert_case(config::Case::Snake)
            .try_parsing(true),
    );

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<AppConfig>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
