//! Grid environment: legal moves, transitions, and rewards.

use super::error::{Endpoint, ValidationError};
use super::matrix::OccupancyMatrix;
use super::types::{Action, ActionIndexing, Cell};

/// Reward for entering the goal cell.
pub const GOAL_REWARD: f64 = 1.0;
/// Reward for entering an obstacle cell.
pub const OBSTACLE_REWARD: f64 = -1.0;
/// Reward for entering any other cell.
pub const STEP_REWARD: f64 = -0.1;

/// Multiplier applied to the number of cells to derive default step limits.
pub const STEP_LIMIT_FACTOR: usize = 100;

/// A static grid with a start and a goal cell.
///
/// The world is immutable once built: it answers which moves are legal and
/// what each transition is worth, and never tracks the agent itself.
///
/// # Lifecycle
///
/// 1. Build an [`OccupancyMatrix`] (from rows or a textual map).
/// 2. Call [`GridWorld::new`] with the start and goal cells.
/// 3. Hand the world to a planner.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    matrix: OccupancyMatrix,
    start: Cell,
    goal: Cell,
}

impl GridWorld {
    /// Creates a world, validating both endpoints against the matrix.
    ///
    /// # Errors
    ///
    /// [`ValidationError::OutOfBounds`] when start or goal lies outside the
    /// grid, [`ValidationError::BlockedEndpoint`] when either is an obstacle.
    pub fn new(matrix: OccupancyMatrix, start: Cell, goal: Cell) -> Result<Self, ValidationError> {
        for (endpoint, cell) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            match matrix.get(cell) {
                None => {
                    return Err(ValidationError::OutOfBounds {
                        endpoint,
                        cell,
                        height: matrix.height(),
                        width: matrix.width(),
                    })
                }
                Some(true) => return Err(ValidationError::BlockedEndpoint { endpoint, cell }),
                Some(false) => {}
            }
        }

        Ok(Self {
            matrix,
            start,
            goal,
        })
    }

    /// Creates a world directly from rows of obstacle flags.
    pub fn from_rows<R: AsRef<[bool]>>(
        rows: &[R],
        start: Cell,
        goal: Cell,
    ) -> Result<Self, ValidationError> {
        Self::new(OccupancyMatrix::from_rows(rows)?, start, goal)
    }

    pub fn matrix(&self) -> &OccupancyMatrix {
        &self.matrix
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn height(&self) -> usize {
        self.matrix.height()
    }

    pub fn width(&self) -> usize {
        self.matrix.width()
    }

    /// Total number of cells, obstacles included.
    pub fn cell_count(&self) -> usize {
        self.matrix.cell_count()
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        self.matrix.contains(cell)
    }

    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.matrix.is_obstacle(cell)
    }

    /// Returns true if `cell` is inside the grid and not an obstacle.
    pub fn is_free(&self, cell: Cell) -> bool {
        self.matrix.get(cell) == Some(false)
    }

    /// Default step limit for loops over this world: `cells × STEP_LIMIT_FACTOR`.
    pub fn default_step_limit(&self) -> usize {
        self.cell_count() * STEP_LIMIT_FACTOR
    }

    /// Cell reached by `action` from `cell` if it stays inside the grid.
    /// Obstacles are not filtered.
    pub fn target(&self, cell: Cell, action: Action) -> Option<Cell> {
        action.apply(cell).filter(|c| self.in_bounds(*c))
    }

    /// Free neighbours of `cell`, in action-index order.
    ///
    /// The result may hold fewer than four cells. Under
    /// [`ActionIndexing::FilteredNeighbor`] the position in this list is the
    /// Q-table index, so the order must stay identical between training and
    /// extraction.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        Action::ALL
            .iter()
            .filter_map(|a| self.target(cell, *a))
            .filter(|c| self.is_free(*c))
            .collect()
    }

    /// Canonical transition: the agent stays put when the move would leave
    /// the grid or enter an obstacle.
    pub fn step(&self, cell: Cell, action: Action) -> Cell {
        self.target(cell, action)
            .filter(|c| self.is_free(*c))
            .unwrap_or(cell)
    }

    /// Resolves an action index chosen at `cell` into the resulting cell.
    ///
    /// Indices that do not name a move under `indexing` keep the agent in
    /// place.
    pub fn resolve(&self, cell: Cell, action_index: usize, indexing: ActionIndexing) -> Cell {
        match indexing {
            ActionIndexing::Canonical => Action::from_index(action_index)
                .map(|a| self.step(cell, a))
                .unwrap_or(cell),
            ActionIndexing::FilteredNeighbor => self
                .neighbors(cell)
                .get(action_index)
                .copied()
                .unwrap_or(cell),
        }
    }

    /// Reward for arriving at `cell`.
    ///
    /// `+1` for the goal, `-1` for an obstacle or a cell outside the grid,
    /// `-0.1` otherwise.
    pub fn reward(&self, cell: Cell) -> f64 {
        if cell == self.goal {
            GOAL_REWARD
        } else if !self.is_free(cell) {
            OBSTACLE_REWARD
        } else {
            STEP_REWARD
        }
    }
}
