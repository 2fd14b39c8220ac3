//! Input specs for a run (RunSpec / ApproximatorSpec).
//!
//! Every field has a default so partial JSON documents are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// How a `Runner` drives an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSpec {
    /// Number of steps (choose + perform) to execute.
    pub max_ticks: u64,

    /// Replay history into the solver every N ticks. `None` (or 0) means
    /// only once, at the end of the run.
    pub reevaluate_every: Option<u64>,

    pub approximator: ApproximatorSpec,
}

impl Default for RunSpec {
    fn default() -> Self {
        Self {
            max_ticks: 100,
            reevaluate_every: Some(10),
            approximator: ApproximatorSpec::default(),
        }
    }
}

/// Tuning of the linear function approximator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApproximatorSpec {
    /// Step size (alpha) of each correction.
    pub learning_rate: f64,

    /// Weight of the next state's value in the correction target (gamma).
    pub discount: f64,

    /// Probability of picking a uniformly random candidate (epsilon).
    pub exploration_rate: f64,

    /// Weight assigned to every newly created value function.
    pub initial_weight: f64,

    /// Upper bound on remembered choices.
    pub max_trace: usize,

    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ApproximatorSpec {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            discount: 0.9,
            exploration_rate: 0.0,
            initial_weight: 1.0,
            max_trace: 1000,
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("failed to read run spec {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid run spec: {0}")]
    Json(#[from] serde_json::Error),
}

impl RunSpec {
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Effective reevaluation interval, with 0 treated as "never periodic".
    pub fn reevaluation_interval(&self) -> Option<u64> {
        self.reevaluate_every.filter(|n| *n > 0)
    }
}
