//! Tree configuration.
//!
//! Loaded from YAML files and environment variables with the `config` crate.

use serde::Deserialize;

use crate::tree::DEFAULT_INITIAL_CAPACITY;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "rbset.yaml";
/// Environment variable for configuration file path.
pub const CONFIG_ENV_VAR: &str = "RBSET_CONFIG";
/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "RBSET";
/// Environment variable for logging configuration.
pub const LOG_ENV_VAR: &str = "RBSET_LOG";

/// Largest arena a tree can address: `u32` indices minus the sentinel slot.
pub const MAX_CAPACITY: usize = u32::MAX as usize - 1;

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Settings applied when a tree is built with
/// [`RbTree::with_config`](crate::RbTree::with_config).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Nodes to pre-allocate in the arena.
    ///
    /// Default: 16.
    pub initial_capacity: usize,

    /// Run a full invariant check after every insert and delete.
    ///
    /// Costs `O(n)` per mutation. A failed check is logged and panics.
    /// Default: false.
    pub validate_on_mutation: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            validate_on_mutation: false,
        }
    }
}

impl TreeConfig {
    /// Load configuration from file and environment.
    ///
    /// Configuration sources (in order of priority, later overrides earlier):
    /// 1. `rbset.yaml` in current directory (if exists)
    /// 2. File specified by `path` argument (if provided)
    /// 3. File specified by `CONFIG_ENV_VAR` environment variable (if set)
    /// 4. Environment variables with `CONFIG_ENV_PREFIX` prefix and `__`
    ///    separator, e.g. `RBSET__VALIDATE_ON_MUTATION=true`
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config as ConfigLib, Environment, File, FileFormat};

        let mut builder = ConfigLib::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: TreeConfig = config.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    /// Create config for testing: validation after every mutation.
    pub fn for_test() -> Self {
        Self {
            validate_on_mutation: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.initial_capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "initial_capacity {} exceeds the addressable maximum {}",
                self.initial_capacity, MAX_CAPACITY
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
