//! Path quality report.
//!
//! Scores a planned route against the world it was planned for and against
//! the exact shortest path.

use std::fmt;

use super::baseline::ShortestPathPlanner;
use crate::grid::{Cell, GridWorld};

/// Summary of a single planned path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathReport {
    /// Number of moves (path length minus one).
    pub moves: usize,
    /// Whether the path starts at start, ends at goal, stays on free cells,
    /// and only moves between orthogonal neighbours.
    pub valid: bool,
    /// Moves on the exact shortest path, if the goal is reachable.
    pub optimal_moves: Option<usize>,
}

impl PathReport {
    /// Evaluates `path` in `world`.
    pub fn evaluate(world: &GridWorld, path: &[Cell]) -> Self {
        Self {
            moves: path.len().saturating_sub(1),
            valid: Self::is_valid(world, path),
            optimal_moves: ShortestPathPlanner::shortest_path_len(world),
        }
    }

    /// Structural validity check used by [`Self::evaluate`].
    pub fn is_valid(world: &GridWorld, path: &[Cell]) -> bool {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return false;
        };
        *first == world.start()
            && *last == world.goal()
            && path.iter().all(|c| world.is_free(*c))
            && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }

    /// Extra moves compared to the shortest path.
    pub fn gap(&self) -> Option<usize> {
        self.optimal_moves.map(|opt| self.moves.saturating_sub(opt))
    }

    /// Returns true for a valid path of minimal length.
    pub fn is_optimal(&self) -> bool {
        self.valid && self.gap() == Some(0)
    }
}

impl fmt::Display for PathReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Path Report ===")?;
        writeln!(f, "  Valid:          {}", self.valid)?;
        writeln!(f, "  Moves:          {}", self.moves)?;
        match self.optimal_moves {
            Some(opt) => writeln!(f, "  Optimal moves:  {}", opt)?,
            None => writeln!(f, "  Optimal moves:  unreachable")?,
        }
        match self.gap() {
            Some(gap) => writeln!(f, "  Gap:            {}", gap),
            None => writeln!(f, "  Gap:            n/a"),
        }
    }
}
