//! gridq - grid path planning with tabular Q-learning
//!
//! Learns a route between two cells of a 2D occupancy grid and returns it as
//! an ordered list of cells for an external renderer.
//!
//! ```no_run
//! use gridq::{Cell, GridWorld, OccupancyMatrix, QLearningConfig, QLearningSolver};
//!
//! let matrix: OccupancyMatrix = "...\n.X.\n...".parse()?;
//! let world = GridWorld::new(matrix, Cell::new(0, 0), Cell::new(2, 2))?;
//! let mut solver = QLearningSolver::new(world, QLearningConfig::default().with_seed(42))?;
//! solver.train(1000)?;
//! let path = solver.extract_path()?;
//! # Ok::<(), gridq::PlanningError>(())
//! ```

pub mod algorithms;
pub mod grid;

pub use algorithms::{
    find_optimal_path, PathPlanner, PathReport, PlanningError, QLearningConfig, QLearningPlanner,
    QLearningSolver, ShortestPathPlanner,
};
pub use grid::{Action, ActionIndexing, Cell, GridWorld, OccupancyMatrix, ValidationError};
