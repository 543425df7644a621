//! Engine configuration with TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Katz centrality iteration settings
    pub katz: KatzConfig,
}

/// Convergence and divergence bounds for Katz centrality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatzConfig {
    /// Largest per-node change that still counts as converged
    pub tolerance: f64,

    /// Iteration cap
    pub max_iterations: usize,

    /// Any score magnitude above this aborts the iteration
    pub divergence_threshold: f64,
}

impl Default for KatzConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 1000,
            divergence_threshold: 1e12,
        }
    }
}

impl KatzConfig {
    /// Reject bounds the iteration cannot work with.
    pub fn validate(&self) -> GraphResult<()> {
        if !(self.tolerance > 0.0 && self.tolerance.is_finite()) {
            return Err(GraphError::Config(format!(
                "katz.tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(GraphError::Config(
                "katz.max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.divergence_threshold > 0.0) {
            return Err(GraphError::Config(format!(
                "katz.divergence_threshold must be positive, got {}",
                self.divergence_threshold
            )));
        }
        Ok(())
    }
}

impl EngineConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> GraphResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> GraphResult<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loading engine config from {}", path.as_ref().display());
        Self::from_toml_str(&source)
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> GraphResult<String> {
        toml::to_string_pretty(self).map_err(|e| GraphError::Config(e.to_string()))
    }

    /// Validate every section.
    pub fn validate(&self) -> GraphResult<()> {
        self.katz.validate()
    }
}
