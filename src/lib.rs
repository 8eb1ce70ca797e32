//! Heuristic evaluation for box-placement puzzles: goal extraction from the
//! initial configuration, a family of remaining-cost estimators, and the
//! best-first strategies (A*, weighted A*, greedy) that turn them into
//! frontier priorities.

pub mod config;
pub mod error;
pub mod goals;
pub mod heuristic;
pub mod state;
pub mod strategy;
