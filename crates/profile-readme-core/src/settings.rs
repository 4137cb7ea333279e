use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, Map};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "PROFILE_README";
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Settings for a generator run.
///
/// Values are layered: built-in defaults, then `PROFILE_README_*` environment
/// variables. Command-line flags are applied on top by the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneratorConfig {
    /// Where the rendered README is written.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// Loads the defaults overlaid with `PROFILE_README_*` entries from `vars`,
    /// typically `std::env::vars()`.
    pub fn load_from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::load_from(Environment::with_prefix(ENV_PREFIX).source(Some(source)))
    }

    fn load_from(environment: Environment) -> Result<Self> {
        Config::builder()
            .set_default("output", DEFAULT_OUTPUT)?
            .add_source(environment)
            .build()
            .context("failed to assemble generator configuration")?
            .try_deserialize()
            .context("invalid generator configuration")
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}
