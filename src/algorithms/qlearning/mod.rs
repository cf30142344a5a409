//! Tabular Q-learning path planning.
//!
//! The [`QLearningSolver`] owns a Q-table sized to its [`GridWorld`], learns
//! with ε-greedy exploration, and extracts a route by following the greedy
//! policy. [`QLearningPlanner`] wraps the train-then-extract sequence behind
//! the [`PathPlanner`](crate::algorithms::PathPlanner) trait.

pub mod config;
pub mod metrics;
pub mod planner;
pub mod q_table;
pub mod solver;

pub use config::{QLearningConfig, DEFAULT_ALPHA, DEFAULT_EPISODES, DEFAULT_EPSILON, DEFAULT_GAMMA};
pub use metrics::{EpisodeOutcome, TrainingStats};
pub use planner::QLearningPlanner;
pub use q_table::QTable;
pub use solver::QLearningSolver;

use crate::algorithms::error::PlanningError;
use crate::grid::{Cell, GridWorld, OccupancyMatrix};

/// Trains a solver with the default hyperparameters for
/// [`DEFAULT_EPISODES`] episodes and returns the greedy route from `start`
/// to `goal`.
///
/// Uses [`ActionIndexing::Canonical`](crate::grid::ActionIndexing::Canonical);
/// build a [`QLearningSolver`] with
/// [`ActionIndexing::FilteredNeighbor`](crate::grid::ActionIndexing::FilteredNeighbor)
/// to index into the list of open neighbours instead.
pub fn find_optimal_path(
    matrix: OccupancyMatrix,
    start: Cell,
    goal: Cell,
) -> Result<Vec<Cell>, PlanningError> {
    let world = GridWorld::new(matrix, start, goal)?;
    let mut solver = QLearningSolver::new(world, QLearningConfig::default())?;
    solver.train(DEFAULT_EPISODES)?;
    solver.extract_path()
}
