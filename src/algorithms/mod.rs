pub mod baseline;
pub mod error;
pub mod evaluation;
pub mod qlearning;

pub use baseline::ShortestPathPlanner;
pub use error::PlanningError;
pub use evaluation::PathReport;
pub use qlearning::{find_optimal_path, QLearningConfig, QLearningPlanner, QLearningSolver};

use crate::grid::{Cell, GridWorld};

/// Algorithm that produces a route through a [`GridWorld`].
pub trait PathPlanner: Send {
    /// Plans a route from the world's start to its goal.
    ///
    /// # Returns
    ///
    /// The visited cells in order, starting with the start cell and ending
    /// with the goal.
    fn plan(&mut self, world: &GridWorld) -> Result<Vec<Cell>, PlanningError>;

    /// Returns a human-readable name for this planner.
    fn name(&self) -> &str;
}
