use thiserror::Error;

use crate::grid::{Cell, ValidationError};

/// Errors produced while building or querying a planner.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No path from {start} to {goal} found after {steps} steps")]
    PathNotFound {
        start: Cell,
        goal: Cell,
        steps: usize,
    },

    #[error("Cannot update action {action_index} at {cell} towards {next_cell}")]
    InvalidTransition {
        cell: Cell,
        action_index: usize,
        next_cell: Cell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_not_found_display() {
        let e = PlanningError::PathNotFound {
            start: Cell::new(0, 0),
            goal: Cell::new(2, 2),
            steps: 7,
        };
        assert_eq!(
            e.to_string(),
            "No path from (0, 0) to (2, 2) found after 7 steps"
        );
    }

    #[test]
    fn invalid_transition_display() {
        let e = PlanningError::InvalidTransition {
            cell: Cell::new(5, 5),
            action_index: 0,
            next_cell: Cell::new(0, 0),
        };
        assert_eq!(
            e.to_string(),
            "Cannot update action 0 at (5, 5) towards (0, 0)"
        );
    }

    #[test]
    fn validation_is_transparent() {
        let e: PlanningError = ValidationError::EmptyGrid.into();
        assert_eq!(e.to_string(), ValidationError::EmptyGrid.to_string());
    }
}
