use std::fmt;

use thiserror::Error;

use super::types::Cell;

/// Which end of the requested route a cell refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Malformed or inconsistent solver input, rejected at construction time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Occupancy matrix must have at least one row")]
    EmptyGrid,

    #[error("Occupancy matrix must have at least one column")]
    EmptyRow,

    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unknown map symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },

    #[error("The {endpoint} cell {cell} lies outside the {height}x{width} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("The {endpoint} cell {cell} is an obstacle")]
    BlockedEndpoint { endpoint: Endpoint, cell: Cell },

    #[error("Hyperparameter {name} = {value} must lie in {expected}")]
    InvalidHyperparameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    #[error("Step limit {name} must be greater than zero")]
    ZeroStepLimit { name: &'static str },

    #[error("Q-table for a {height}x{width} grid has {found} rows")]
    TableSize {
        height: usize,
        width: usize,
        found: usize,
    },
}
