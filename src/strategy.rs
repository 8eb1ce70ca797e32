// Evaluation strategies combining the path cost so far (g) with a heuristic
// estimate (h) into the priority the frontier is ordered by. Lower is better.
//
// Strategy | f(n)      | Optimal?                           |
// ------------------------------------------------------------
// A*       | g + h     | Y, if the estimator is admissible  |
// WA*      | g + w * h | within a factor w, same condition  |
// Greedy   | h         | N                                  |

use clap::ValueEnum;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::heuristic::Heuristic;
use crate::state::{Cost, State};

pub trait Strategy: Send + Sync {
    // Label for diagnostics, never used for control flow.
    fn describe(&self) -> String;

    // Implementation of the evaluation function.
    fn do_evaluate(&self, state: &State) -> Cost;

    // Wrapper to do_evaluate, to trace every evaluation.
    fn evaluate(&self, state: &State) -> Cost {
        let f = self.do_evaluate(state);
        trace!("{}: f = {} (g = {})", self.describe(), f, state.g);
        f
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Copy, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Plain best-first: g + h.
    #[default]
    #[value(alias = "plain")]
    #[serde(alias = "plain")]
    Astar,
    /// Weighted best-first: g + w * h.
    #[value(alias = "weighted")]
    #[serde(alias = "weighted")]
    Wastar,
    /// Greedy best-first: h only.
    Greedy,
}

pub struct AStar {
    heuristic: Heuristic,
}

pub struct WeightedAStar {
    heuristic: Heuristic,
    weight: Cost,
}

pub struct Greedy {
    heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        AStar { heuristic }
    }
}

impl WeightedAStar {
    // Larger weights lean toward greedy search: faster, possibly suboptimal.
    pub fn new(heuristic: Heuristic, weight: i64) -> Result<Self, Error> {
        if weight <= 0 || weight > Cost::MAX as i64 {
            return Err(Error::InvalidWeight(weight));
        }
        Ok(WeightedAStar { heuristic, weight: weight as Cost })
    }
}

impl Greedy {
    pub fn new(heuristic: Heuristic) -> Self {
        Greedy { heuristic }
    }
}

impl Strategy for AStar {
    fn describe(&self) -> String {
        "A* evaluation".to_string()
    }

    fn do_evaluate(&self, state: &State) -> Cost {
        state.g.saturating_add(self.heuristic.h(state))
    }
}

impl Strategy for WeightedAStar {
    fn describe(&self) -> String {
        format!("WA* ({}) evaluation", self.weight)
    }

    fn do_evaluate(&self, state: &State) -> Cost {
        // Saturates: a priority pinned at Cost::MAX still sorts last.
        state.g.saturating_add(self.weight.saturating_mul(self.heuristic.h(state)))
    }
}

impl Strategy for Greedy {
    fn describe(&self) -> String {
        "Greedy evaluation".to_string()
    }

    fn do_evaluate(&self, state: &State) -> Cost {
        self.heuristic.h(state)
    }
}

// The weight is only consulted for the weighted strategy, where it is required.
pub fn new_strategy(
    kind: StrategyKind, heuristic: Heuristic, weight: Option<i64>
    ) -> Result<Box<dyn Strategy>, Error> {
    Ok(match kind {
        StrategyKind::Astar => Box::new(AStar::new(heuristic)),
        StrategyKind::Wastar => {
            let weight = weight.ok_or(Error::MissingWeight)?;
            Box::new(WeightedAStar::new(heuristic, weight)?)
        },
        StrategyKind::Greedy => Box::new(Greedy::new(heuristic)),
    })
}
