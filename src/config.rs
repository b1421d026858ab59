mod engine_config;
mod generation_config;

pub use engine_config::{EngineConfig, SEED_VARIABLE};
pub use generation_config::{GenerationConfig, ModelConfig};

use crate::graph::Result;

/// Turns a config with open choices into one that can be replayed exactly.
pub trait Fix<Fixed> {
    fn to_fixed(&self) -> Result<Fixed>;
}
