//! Dense Q-table over every cell of a grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::grid::{Cell, GridWorld, ValidationError, ACTION_COUNT};

/// Action values for every cell, obstacles included.
///
/// Rows are stored in row-major cell order; each row holds one value per
/// action index. All values start at zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "QTableRaw"))]
pub struct QTable {
    values: Vec<[f64; ACTION_COUNT]>,
    height: usize,
    width: usize,
}

impl QTable {
    /// Creates a zero-initialised table for a `height × width` grid.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            values: vec![[0.0; ACTION_COUNT]; height * width],
            height,
            width,
        }
    }

    /// Rebuilds a table from stored rows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGrid`] or [`ValidationError::EmptyRow`]
    /// for a zero dimension, and [`ValidationError::TableSize`] when the row
    /// count differs from `height * width`.
    pub fn from_values(
        values: Vec<[f64; ACTION_COUNT]>,
        height: usize,
        width: usize,
    ) -> Result<Self, ValidationError> {
        if height == 0 {
            return Err(ValidationError::EmptyGrid);
        }
        if width == 0 {
            return Err(ValidationError::EmptyRow);
        }
        if height.checked_mul(width) != Some(values.len()) {
            return Err(ValidationError::TableSize {
                height,
                width,
                found: values.len(),
            });
        }
        Ok(Self {
            values,
            height,
            width,
        })
    }

    /// Creates a zero-initialised table sized for `world`.
    pub fn for_world(world: &GridWorld) -> Self {
        Self::new(world.height(), world.width())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells covered.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        (cell.row < self.height && cell.col < self.width)
            .then(|| cell.row * self.width + cell.col)
    }

    /// Action values of `cell`, or `None` outside the grid.
    pub fn get(&self, cell: Cell) -> Option<&[f64; ACTION_COUNT]> {
        self.index(cell).map(|i| &self.values[i])
    }

    pub(crate) fn get_mut(&mut self, cell: Cell) -> Option<&mut [f64; ACTION_COUNT]> {
        let i = self.index(cell)?;
        Some(&mut self.values[i])
    }

    /// Value of one action at `cell`; `0.0` outside the grid.
    pub fn value(&self, cell: Cell, action_index: usize) -> f64 {
        self.get(cell)
            .and_then(|row| row.get(action_index).copied())
            .unwrap_or(0.0)
    }

    /// Largest action value at `cell`; `0.0` outside the grid.
    pub fn max_value(&self, cell: Cell) -> f64 {
        self.get(cell)
            .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
            .unwrap_or(0.0)
    }

    /// Index of the largest action value at `cell`, ties broken by the
    /// lowest index. Cells outside the grid yield index 0.
    pub fn best_action(&self, cell: Cell) -> usize {
        let Some(row) = self.get(cell) else {
            return 0;
        };
        let mut best = 0;
        for (i, &q) in row.iter().enumerate().skip(1) {
            if q > row[best] {
                best = i;
            }
        }
        best
    }

    /// Iterates over `(cell, action values)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, &[f64; ACTION_COUNT])> + '_ {
        let width = self.width;
        self.values
            .iter()
            .enumerate()
            .map(move |(i, row)| (Cell::new(i / width, i % width), row))
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct QTableRaw {
    values: Vec<[f64; ACTION_COUNT]>,
    height: usize,
    width: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<QTableRaw> for QTable {
    type Error = ValidationError;

    fn try_from(raw: QTableRaw) -> Result<Self, Self::Error> {
        Self::from_values(raw.values, raw.height, raw.width)
    }
}
