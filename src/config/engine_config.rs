use std::env::{self, VarError};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::graph::{GraphError, Result};
use crate::rng::os_random_seed;

/// Environment variable that pins the seed of every default engine.
pub const SEED_VARIABLE: &str = "GENGRAPH_SEED";

/// Process wide defaults for random engines created without a seed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EngineConfig {
    pub seed_override: Option<u32>,
}

impl EngineConfig {
    /// Reads the config from the environment.
    pub fn from_env() -> Result<Self> {
        match env::var(SEED_VARIABLE) {
            Ok(value) => Self::from_value(Some(&value)),
            Err(VarError::NotPresent) => Self::from_value(None),
            Err(VarError::NotUnicode(value)) => {
                Err(GraphError::InvalidSeed(value.to_string_lossy().into_owned()))
            }
        }
    }

    /// Builds the config from the raw value of [`SEED_VARIABLE`].
    /// An empty value counts as unset.
    pub fn from_value(value: Option<&str>) -> Result<Self> {
        let seed_override = match value.map(str::trim) {
            None | Some("") => None,
            Some(text) => Some(
                text.parse()
                    .map_err(|_| GraphError::InvalidSeed(text.to_string()))?,
            ),
        };
        Ok(EngineConfig { seed_override })
    }

    /// Returns the config of this process.
    ///
    /// The environment is read on first use only; later changes have no effect.
    pub fn global() -> Result<Self> {
        static GLOBAL: OnceLock<Result<EngineConfig>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| {
                let config = Self::from_env();
                tracing::debug!(?config, "resolved engine config");
                config
            })
            .clone()
    }

    /// Returns the seed for a new default engine: the override if there is
    /// one, fresh OS entropy otherwise.
    pub fn seed(&self) -> Result<u32> {
        self.seed_override.map_or_else(os_random_seed, Ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ErrorKind;

    #[test]
    fn unset_value_has_no_override() {
        assert_eq!(EngineConfig::from_value(None).unwrap(), EngineConfig::default());
        assert_eq!(EngineConfig::from_value(Some("  ")).unwrap(), EngineConfig::default());
    }

    #[test]
    fn override_is_used_as_seed() {
        let config = EngineConfig::from_value(Some(" 42 ")).unwrap();

        assert_eq!(config.seed_override, Some(42));
        assert_eq!(config.seed().unwrap(), 42);
    }

    #[test]
    fn malformed_override_errors() {
        let err = EngineConfig::from_value(Some("forty-two")).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err, GraphError::InvalidSeed("forty-two".to_string()));
        assert!(EngineConfig::from_value(Some("-1")).is_err(), "Seeds are unsigned.");
    }

    #[test]
    fn global_config_is_stable() {
        assert_eq!(EngineConfig::global(), EngineConfig::global());
    }
}
