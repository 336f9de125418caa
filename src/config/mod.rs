use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default bound on bracket nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest bracket nesting accepted, counting the domain's own brackets
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// A batch of domain strings read from a YAML file.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct PatternsConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub parser: ParserConfig,
}

impl PatternsConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
