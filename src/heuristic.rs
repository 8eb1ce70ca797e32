// Estimates of the remaining cost to put every box on a matching goal.
//
// Only `agent-to-goals` and `unsatisfied-goals` never overestimate. The
// box-distance variants sum over *every* box of the matching type rather than
// the nearest one, which makes them non-admissible. That is known and kept,
// since tuned weights and recorded expansion counts depend on these numbers.
//
// Relative per-call cost, from cheapest:
// Estimator                    | Complexity            | Admissible |
// -----------------------------------------------------------------
// agent-to-goals               | O(goals)              |     Y      |
// unsatisfied-goals            | O(goals)              |     Y      |
// box-distance-sum             | O(goals * rows * cols)|     N      |
// box-distance-max             | O(goals * rows * cols)|     N      |
// unsatisfied-box-distance-sum | O(goals * rows * cols)|     N      |
// row-proximity                | O(goals * cols)       |     N      |

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::goals::{Goal, GoalIndex};
use crate::state::{symbols_match, Cost, State};

#[derive(ValueEnum, Serialize, Deserialize, Debug, Default, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum Estimator {
    /// Sum of the agent's distance to every goal, ignoring boxes.
    AgentToGoals,
    /// Number of goals without a matching box on them.
    UnsatisfiedGoals,
    /// Per goal, sum of distances from all matching boxes; summed over goals.
    BoxDistanceSum,
    /// Same per-goal term as box-distance-sum, but the worst goal only.
    #[default]
    BoxDistanceMax,
    /// box-distance-sum restricted to goals that are not yet satisfied.
    UnsatisfiedBoxDistanceSum,
    /// Lateral distance of boxes sharing a goal's row, plus the agent's
    /// cheapest approach.
    RowProximity,
}

impl Estimator {
    pub const ALL: [Estimator; 6] = [
        Estimator::AgentToGoals,
        Estimator::UnsatisfiedGoals,
        Estimator::BoxDistanceSum,
        Estimator::BoxDistanceMax,
        Estimator::UnsatisfiedBoxDistanceSum,
        Estimator::RowProximity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Estimator::AgentToGoals => "agent-to-goals",
            Estimator::UnsatisfiedGoals => "unsatisfied-goals",
            Estimator::BoxDistanceSum => "box-distance-sum",
            Estimator::BoxDistanceMax => "box-distance-max",
            Estimator::UnsatisfiedBoxDistanceSum => "unsatisfied-box-distance-sum",
            Estimator::RowProximity => "row-proximity",
        }
    }

    pub fn is_admissible(&self) -> bool {
        matches!(self, Estimator::AgentToGoals | Estimator::UnsatisfiedGoals)
    }

    pub fn estimate(&self, goals: &GoalIndex, state: &State) -> Cost {
        match self {
            Estimator::AgentToGoals => agent_to_goals(goals, state),
            Estimator::UnsatisfiedGoals => unsatisfied_goals(goals, state),
            Estimator::BoxDistanceSum => box_distance_sum(goals, state),
            Estimator::BoxDistanceMax => box_distance_max(goals, state),
            Estimator::UnsatisfiedBoxDistanceSum =>
                unsatisfied_box_distance_sum(goals, state),
            Estimator::RowProximity => row_proximity(goals, state),
        }
    }
}

impl fmt::Display for Estimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The estimator is fixed at construction: switching formulas mid-run would
// make priorities already in the frontier incomparable with new ones.
#[derive(Debug, Clone)]
pub struct Heuristic {
    goals: Arc<GoalIndex>,
    estimator: Estimator,
}

impl Heuristic {
    pub fn new(goals: Arc<GoalIndex>, estimator: Estimator) -> Self {
        Heuristic { goals, estimator }
    }

    #[inline]
    pub fn h(&self, state: &State) -> Cost {
        debug_assert_eq!(state.boxes.dimensions(), self.goals.dimensions(),
                         "box grid does not match the indexed goal grid");
        debug_assert_eq!(state.goals.dimensions(), self.goals.dimensions(),
                         "goal grid does not match the indexed goal grid");
        self.estimator.estimate(&self.goals, state)
    }

    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    pub fn goals(&self) -> &Arc<GoalIndex> {
        &self.goals
    }
}

#[inline]
pub fn is_satisfied(state: &State, goal: &Goal) -> bool {
    state.boxes.get(goal.pos.row, goal.pos.col)
        .map_or(false, |symbol| symbols_match(symbol, goal.symbol))
}

// Sum of distances from every box matching the goal's type to the goal.
pub fn matching_box_distance(state: &State, goal: &Goal) -> Cost {
    state.boxes.cells()
        .filter(|&(_, symbol)| symbols_match(symbol, goal.symbol))
        .map(|(pos, _)| pos.manhattan(&goal.pos))
        .sum()
}

pub fn agent_to_goals(goals: &GoalIndex, state: &State) -> Cost {
    goals.iter().map(|goal| state.agent.manhattan(&goal.pos)).sum()
}

pub fn unsatisfied_goals(goals: &GoalIndex, state: &State) -> Cost {
    goals.iter().filter(|goal| !is_satisfied(state, goal)).count() as Cost
}

pub fn box_distance_sum(goals: &GoalIndex, state: &State) -> Cost {
    goals.iter().map(|goal| matching_box_distance(state, goal)).sum()
}

// Goals can be worked on in any order, so the furthest one is taken as the
// bottleneck instead of adding up sub-goals that may overlap.
pub fn box_distance_max(goals: &GoalIndex, state: &State) -> Cost {
    goals.iter()
        .map(|goal| matching_box_distance(state, goal))
        .max()
        .unwrap_or(0)
}

pub fn unsatisfied_box_distance_sum(goals: &GoalIndex, state: &State) -> Cost {
    goals.iter()
        .filter(|goal| !is_satisfied(state, goal))
        .map(|goal| matching_box_distance(state, goal))
        .sum()
}

pub fn row_proximity(goals: &GoalIndex, state: &State) -> Cost {
    let agent = state.agent;
    let mut cost: Cost = 0;
    let mut approach: Option<Cost> = None;
    for goal in goals {
        let row = goal.pos.row;
        for col in 0..state.boxes.cols() {
            if col == goal.pos.col || state.boxes.get(row, col).is_none() {
                continue;
            }
            cost += col.abs_diff(goal.pos.col) as Cost;
            let reach = (col.abs_diff(agent.col) + agent.row.abs_diff(row)) as Cost;
            approach = Some(approach.map_or(reach, |best| best.min(reach)));
        }
    }
    cost + approach.unwrap_or(0)
}
