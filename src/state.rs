use itertools::iproduct;
use serde::{Deserialize, Serialize};
use crate::error::Error;

pub type Cost = u32;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Ord, PartialOrd, Copy, Clone)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    #[inline]
    pub fn manhattan(&self, other: &Pos) -> Cost {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as Cost
    }
}

// A box satisfies a goal when its symbol, lower-cased, equals the goal's.
#[inline]
pub fn symbols_match(box_symbol: char, goal_symbol: char) -> bool {
    box_symbol.to_ascii_lowercase() == goal_symbol
}

/// Fixed-size grid of optional type symbols, stored row-major.
///
/// In JSON a grid is an array of equally long row strings, where letters are
/// symbols and `.` or a space is an empty cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Grid { rows, cols, cells: vec![None; rows * cols] }
    }

    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, Error> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.as_ref().chars().count()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(Error::MalformedConfiguration(format!(
                "grid must have positive dimensions, got {rows}x{cols}")));
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for (r, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(Error::MalformedConfiguration(format!(
                    "ragged grid: row {r} has {} cells, expected {cols}",
                    line.chars().count())));
            }
            for (c, ch) in line.chars().enumerate() {
                cells.push(match ch {
                    '.' | ' ' => None,
                    ch if ch.is_ascii_alphabetic() => Some(ch),
                    _ => return Err(Error::MalformedConfiguration(format!(
                        "unrecognized symbol '{ch}' at ({r}, {c})"))),
                });
            }
        }
        Ok(Grid { rows, cols, cells })
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, symbol: Option<char>) {
        self.cells[row * self.cols + col] = symbol;
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    // Non-empty cells, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item=(Pos, char)> + '_ {
        iproduct!(0..self.rows, 0..self.cols).filter_map(move |(row, col)| {
            self.get(row, col).map(|symbol| (Pos { row, col }, symbol))
        })
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = Error;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Grid::from_rows(&lines[..])
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        (0..grid.rows)
            .map(|row| (0..grid.cols)
                 .map(|col| grid.get(row, col).unwrap_or('.'))
                 .collect())
            .collect()
    }
}

/// Read-only snapshot of a configuration, as handed over by the search layer
/// for a single evaluation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub agent: Pos,
    pub boxes: Grid,
    pub goals: Grid,
    // Path cost accumulated to reach this state.
    #[serde(default)]
    pub g: Cost,
}

impl State {
    pub fn new(agent: Pos, boxes: Grid, goals: Grid, g: Cost) -> Self {
        State { agent, boxes, goals, g }
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn with_g(&self, g: Cost) -> Self {
        State { g, ..self.clone() }
    }
}
