use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::{EngineConfig, Fix};
use crate::generate::{
    DuplicationComplementation, DuplicationMutation, ErdosRenyi, Generate, Redirection, Surfer,
};
use crate::graph::{Graph, GraphError, Result};
use crate::rng::RandomEngine;

/// A random graph model together with its parameters.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelConfig {
    Gnp(ErdosRenyi),
    DuplicationMutation(DuplicationMutation),
    DuplicationComplementation(DuplicationComplementation),
    Surfer(Surfer),
    Redirection(Redirection),
}

impl ModelConfig {
    fn model(&self) -> &dyn Generate {
        match self {
            Self::Gnp(model) => model,
            Self::DuplicationMutation(model) => model,
            Self::DuplicationComplementation(model) => model,
            Self::Surfer(model) => model,
            Self::Redirection(model) => model,
        }
    }
}

impl Generate for ModelConfig {
    fn validate(&self) -> Result<()> {
        self.model().validate()
    }

    fn sample(&self, engine: &mut RandomEngine) -> Result<Graph> {
        self.model().sample(engine)
    }
}

/// Describes one generator run.
///
/// Without a seed the run follows [`EngineConfig`]; [`GenerationConfig::seeded`]
/// pins the seed so the run can be written back and replayed.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub seed: Option<u32>,
    pub model: ModelConfig,
}

impl GenerationConfig {
    pub fn new(model: ModelConfig) -> Self {
        GenerationConfig { seed: None, model }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|err| GraphError::Config(err.to_string()))
    }

    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::de::from_str(text).map_err(|err| GraphError::Config(err.to_string()))
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|err| GraphError::Config(err.to_string()))
    }

    pub fn to_ron_string(&self) -> Result<String> {
        ron::ser::to_string(self).map_err(|err| GraphError::Config(err.to_string()))
    }

    /// Returns a copy whose seed is set, drawing one from the engine config
    /// if needed.
    pub fn seeded(&self) -> Result<Self> {
        self.to_fixed()
    }

    /// Validates the model and runs it with a fresh engine.
    #[instrument(level = "debug")]
    pub fn generate(&self) -> Result<Graph> {
        self.model.validate()?;
        let seed = self.resolve_seed()?;
        tracing::info!(seed, "generating graph");
        self.model.generate(Some(&mut RandomEngine::new(seed)))
    }

    fn resolve_seed(&self) -> Result<u32> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => EngineConfig::global()?.seed(),
        }
    }
}

impl Fix<GenerationConfig> for GenerationConfig {
    fn to_fixed(&self) -> Result<GenerationConfig> {
        Ok(self.with_seed(self.resolve_seed()?))
    }
}
