use log::debug;

use crate::error::Error;
use crate::state::{Pos, State};

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Goal {
    pub pos: Pos,
    // Required (lower-case) box type.
    pub symbol: char,
}

// Goal cells of the initial configuration, in row-major scan order. Goal cells
// never move during a search, only what occupies them changes, so this is
// built once per run and shared read-only by every evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalIndex {
    goals: Vec<Goal>,
    dimensions: (usize, usize),
}

impl GoalIndex {
    pub fn new(initial: &State) -> Result<Self, Error> {
        let (rows, cols) = initial.goals.dimensions();
        if rows == 0 || cols == 0 {
            return Err(Error::MalformedConfiguration(format!(
                "goal grid must have positive dimensions, got {rows}x{cols}")));
        }
        if initial.boxes.dimensions() != (rows, cols) {
            let (box_rows, box_cols) = initial.boxes.dimensions();
            return Err(Error::MalformedConfiguration(format!(
                "box grid is {box_rows}x{box_cols} but goal grid is {rows}x{cols}")));
        }
        if initial.agent.row >= rows || initial.agent.col >= cols {
            return Err(Error::MalformedConfiguration(format!(
                "agent {:?} is outside the {rows}x{cols} grid", initial.agent)));
        }

        let goals: Vec<Goal> = initial.goals.cells()
            .map(|(pos, symbol)| Goal { pos, symbol })
            .collect();
        // Boxes match a goal through their lower-case form, so an upper-case
        // goal could never be satisfied.
        if let Some(goal) = goals.iter().find(|goal| !goal.symbol.is_ascii_lowercase()) {
            return Err(Error::MalformedConfiguration(format!(
                "goal '{}' at {:?} is not a lower-case type symbol",
                goal.symbol, goal.pos)));
        }
        debug!("Indexed {} goal(s) on a {rows}x{cols} grid", goals.len());
        Ok(GoalIndex { goals, dimensions: (rows, cols) })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.goals.iter()
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }
}

impl<'a> IntoIterator for &'a GoalIndex {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.goals.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::state::Grid;
    use super::*;

    fn make_state(boxes: &[&str], goals: &[&str]) -> State {
        State::new(Pos::new(0, 0),
                   Grid::from_rows(boxes).unwrap(),
                   Grid::from_rows(goals).unwrap(),
                   0)
    }

    #[test]
    fn test_index_goals_in_scan_order() {
        let state = make_state(&["A..", "...", "..B"],
                               &["..b", "a..", "..a"]);
        let index = GoalIndex::new(&state).unwrap();
        let goals: Vec<Goal> = index.iter().cloned().collect();
        assert_eq!(goals, vec![
            Goal { pos: Pos::new(0, 2), symbol: 'b' },
            Goal { pos: Pos::new(1, 0), symbol: 'a' },
            Goal { pos: Pos::new(2, 2), symbol: 'a' },
        ]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.dimensions(), (3, 3));
    }

    #[test]
    fn test_no_goals() {
        let state = make_state(&["A.", ".."], &["..", ".."]);
        let index = GoalIndex::new(&state).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_mismatched_dimensions() {
        let state = make_state(&["...", "..."], &["..", "..", ".."]);
        assert!(matches!(GoalIndex::new(&state),
                         Err(Error::MalformedConfiguration(_))));
    }

    #[test]
    fn test_empty_goal_grid() {
        let mut state = make_state(&[".."], &[".."]);
        state.goals = Grid::empty(0, 0);
        assert!(matches!(GoalIndex::new(&state),
                         Err(Error::MalformedConfiguration(_))));
    }

    #[test]
    fn test_upper_case_goal() {
        let state = make_state(&["A.", ".."], &["A.", ".."]);
        assert!(matches!(GoalIndex::new(&state),
                         Err(Error::MalformedConfiguration(_))));
    }

    #[test]
    fn test_agent_out_of_bounds() {
        let mut state = make_state(&["..", ".."], &["a.", ".."]);
        state.agent = Pos::new(2, 0);
        assert!(matches!(GoalIndex::new(&state),
                         Err(Error::MalformedConfiguration(_))));
    }
}
