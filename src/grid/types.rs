//! Core types for the grid world.
//!
//! Defines grid cells, the fixed 4-connected action set, and the rule used to
//! map a chosen action index onto a physical move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of actions available in every cell.
pub const ACTION_COUNT: usize = 4;

/// A discrete grid coordinate `(row, col)`, with `(0, 0)` at the top left.
///
/// Cells are both the state identifier of the decision process and the
/// elements of an extracted path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Creates a new cell.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance to another cell.
    pub fn manhattan_distance(&self, other: Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Returns true if `other` is one of the four orthogonal neighbours.
    pub fn is_adjacent(&self, other: Cell) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four movement directions.
///
/// The discriminant is the action index used to address the Q-table, so the
/// order below is part of the learned model and must never change:
///
/// | index | action  | delta (row, col) |
/// |-------|---------|------------------|
/// | 0     | `East`  | `(0, +1)`        |
/// | 1     | `North` | `(-1, 0)`        |
/// | 2     | `West`  | `(0, -1)`        |
/// | 3     | `South` | `(+1, 0)`        |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Action {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Action {
    /// All actions in index order.
    pub const ALL: [Action; ACTION_COUNT] =
        [Action::East, Action::North, Action::West, Action::South];

    /// Returns the Q-table index of this action.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up the action for a Q-table index.
    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    /// Row/column displacement of this action.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Action::East => (0, 1),
            Action::North => (-1, 0),
            Action::West => (0, -1),
            Action::South => (1, 0),
        }
    }

    /// Applies the displacement to `cell`.
    ///
    /// Returns `None` when the move would take a coordinate below zero. The
    /// upper bounds are not known here; see [`super::GridWorld::target`].
    pub fn apply(&self, cell: Cell) -> Option<Cell> {
        let (dr, dc) = self.delta();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        Some(Cell::new(row, col))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::East => write!(f, "east"),
            Action::North => write!(f, "north"),
            Action::West => write!(f, "west"),
            Action::South => write!(f, "south"),
        }
    }
}

/// How a chosen action index is turned into a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionIndexing {
    /// The index names an [`Action`]. Moves that leave the grid or enter an
    /// obstacle keep the agent in place.
    #[default]
    Canonical,
    /// The index is a position in the filtered neighbour list of the current
    /// cell, so a Q-table column means a different direction depending on
    /// which neighbours are blocked. Indices past the end of the list keep
    /// the agent in place.
    FilteredNeighbor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_indices_are_stable() {
        for (i, action) in Action::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
            assert_eq!(Action::from_index(i), Some(*action));
        }
        assert_eq!(Action::from_index(ACTION_COUNT), None);
    }

    #[test]
    fn action_deltas() {
        let c = Cell::new(1, 1);
        assert_eq!(Action::East.apply(c), Some(Cell::new(1, 2)));
        assert_eq!(Action::North.apply(c), Some(Cell::new(0, 1)));
        assert_eq!(Action::West.apply(c), Some(Cell::new(1, 0)));
        assert_eq!(Action::South.apply(c), Some(Cell::new(2, 1)));
    }

    #[test]
    fn apply_rejects_negative_coordinates() {
        let origin = Cell::new(0, 0);
        assert_eq!(Action::North.apply(origin), None);
        assert_eq!(Action::West.apply(origin), None);
    }

    #[test]
    fn manhattan_and_adjacency() {
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 3);
        assert_eq!(a.manhattan_distance(b), 5);
        assert_eq!(b.manhattan_distance(a), 5);
        assert!(a.is_adjacent(Cell::new(0, 1)));
        assert!(!a.is_adjacent(Cell::new(1, 1)));
        assert!(!a.is_adjacent(a));
    }

    #[test]
    fn cell_display() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Cell::from((1, 2)), Cell::new(1, 2));
    }

    #[test]
    fn default_indexing_is_canonical() {
        assert_eq!(ActionIndexing::default(), ActionIndexing::Canonical);
    }
}
