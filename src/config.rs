use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::error::Error;
use crate::goals::GoalIndex;
use crate::heuristic::{Estimator, Heuristic};
use crate::state::State;
use crate::strategy::{new_strategy, Strategy, StrategyKind};

pub const DEFAULT_WEIGHT: i64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed reading the file")]
    ReadError(#[from] std::io::Error),
    #[error("Failed parsing the file")]
    ParseError(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] Error),
}

// Run configuration, selected once at startup.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct EvalConfig {
    pub strategy: StrategyKind,
    pub estimator: Estimator,
    pub weight: Option<i64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            strategy: StrategyKind::default(),
            estimator: Estimator::default(),
            weight: None,
        }
    }
}

impl EvalConfig {
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        info!("Loading evaluation config from {}", path.display());
        EvalConfig::from_json(&data)
    }

    // Weight to hand to the strategy; weighted runs fall back to the default.
    pub fn effective_weight(&self) -> Option<i64> {
        match self.strategy {
            StrategyKind::Wastar => Some(self.weight.unwrap_or(DEFAULT_WEIGHT)),
            _ => self.weight,
        }
    }

    // Indexes the goals of the initial state; done once per run.
    pub fn build_heuristic(&self, initial: &State) -> Result<Heuristic, ConfigError> {
        let goals = Arc::new(GoalIndex::new(initial)?);
        Ok(Heuristic::new(goals, self.estimator))
    }

    pub fn build_strategy(&self, heuristic: Heuristic) -> Result<Box<dyn Strategy>, ConfigError> {
        let strategy = new_strategy(self.strategy, heuristic, self.effective_weight())?;
        info!("Using {} with the {} estimator{}", strategy.describe(), self.estimator,
              if self.estimator.is_admissible() { "" } else { " (not admissible)" });
        Ok(strategy)
    }

    pub fn build(&self, initial: &State) -> Result<Box<dyn Strategy>, ConfigError> {
        self.build_strategy(self.build_heuristic(initial)?)
    }
}

pub fn load_state(path: &Path) -> Result<State, ConfigError> {
    let data = std::fs::read_to_string(path)?;
    Ok(State::from_json(&data)?)
}
