//! Engine settings block carried in every exported model document.
//!
//! Defaults match the engine's own defaults; a JSON file may override any
//! subset of keys. Unknown keys are rejected so typos do not pass silently.

use anyhow::{Context, Result};
use hybrid::hyperrect::FLAT_TOL;
use hybrid::seed::{ReplayToken, SeedCfg};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSettings {
    pub output_vars: Vec<String>,
    pub time_horizon: f64,
    pub max_iterations: u32,
    pub sampling_time: f64,
    pub system_id: Option<String>,
    pub output_format: String,
    pub scenario: String,
    pub directions: String,
    /// Map zero-duration jump sets (time-triggered models).
    pub time_triggered: bool,
    // initial-point seeding
    pub center: bool,
    pub star: bool,
    pub corners: bool,
    pub rand: usize,
    pub seed: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            output_vars: Vec::new(),
            time_horizon: 10.0,
            max_iterations: 10,
            sampling_time: 0.1,
            system_id: None,
            output_format: "GEN".to_string(),
            scenario: "stc".to_string(),
            directions: "oct".to_string(),
            time_triggered: false,
            center: false,
            star: false,
            corners: true,
            rand: 0,
            seed: 0,
        }
    }
}

impl EngineSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn seed_cfg(&self) -> SeedCfg {
        SeedCfg {
            center: self.center,
            star: self.star,
            corners: self.corners,
            rand: self.rand,
            tol: FLAT_TOL,
        }
    }

    pub fn replay_token(&self) -> ReplayToken {
        ReplayToken {
            seed: self.seed,
            index: 0,
        }
    }
}
