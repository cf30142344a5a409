//! Rectangular occupancy matrix and its textual map format.
//!
//! Maps are written one row per line, `.` for a free cell and `X` for an
//! obstacle:
//!
//! ```text
//! ..X
//! .XX
//! ...
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::types::Cell;

/// Map symbol for a free cell.
pub const FREE_SYMBOL: char = '.';
/// Map symbol for an obstacle cell.
pub const OBSTACLE_SYMBOL: char = 'X';

/// A validated `height × width` grid of obstacle flags (`true` = obstacle).
///
/// Cells are stored densely in row-major order. Construction guarantees at
/// least one row, at least one column, and equal row lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct OccupancyMatrix {
    cells: Vec<bool>,
    height: usize,
    width: usize,
}

impl OccupancyMatrix {
    /// Builds a matrix from rows of obstacle flags.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyGrid`] with no rows,
    /// [`ValidationError::EmptyRow`] when the first row is empty, and
    /// [`ValidationError::RaggedRow`] when any row differs in length from the
    /// first.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ValidationError> {
        let first = rows.first().ok_or(ValidationError::EmptyGrid)?;
        let width = first.as_ref().len();
        if width == 0 {
            return Err(ValidationError::EmptyRow);
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, data) in rows.iter().enumerate() {
            let data = data.as_ref();
            if data.len() != width {
                return Err(ValidationError::RaggedRow {
                    row,
                    expected: width,
                    found: data.len(),
                });
            }
            cells.extend_from_slice(data);
        }

        Ok(Self {
            cells,
            height: rows.len(),
            width,
        })
    }

    /// Builds an obstacle-free matrix.
    pub fn open(height: usize, width: usize) -> Result<Self, ValidationError> {
        if height == 0 {
            return Err(ValidationError::EmptyGrid);
        }
        if width == 0 {
            return Err(ValidationError::EmptyRow);
        }
        Ok(Self {
            cells: vec![false; height * width],
            height,
            width,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, obstacles included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Obstacle flag of `cell`, or `None` when it lies outside the grid.
    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.contains(cell)
            .then(|| self.cells[cell.row * self.width + cell.col])
    }

    /// Returns true if `cell` is inside the grid and marked as an obstacle.
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.get(cell).unwrap_or(false)
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width;
        (0..self.cells.len()).map(move |i| Cell::new(i / width, i % width))
    }

    /// Iterates over the cells that are not obstacles.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(|c| !self.is_obstacle(*c))
    }
}

impl FromStr for OccupancyMatrix {
    type Err = ValidationError;

    /// Parses a textual map. Surrounding whitespace on each line and trailing
    /// blank lines are ignored; row and column numbers in errors are 1-based.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines: Vec<&str> = s.lines().map(str::trim).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let mut rows = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(c, symbol)| match symbol {
                    FREE_SYMBOL => Ok(false),
                    OBSTACLE_SYMBOL => Ok(true),
                    _ => Err(ValidationError::UnknownSymbol {
                        symbol,
                        row: r + 1,
                        column: c + 1,
                    }),
                })
                .collect::<Result<Vec<bool>, _>>()?;
            rows.push(row);
        }

        Self::from_rows(&rows)
    }
}

impl TryFrom<Vec<Vec<bool>>> for OccupancyMatrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Self::from_rows(&rows)
    }
}

impl From<OccupancyMatrix> for Vec<Vec<bool>> {
    fn from(matrix: OccupancyMatrix) -> Self {
        matrix.rows().map(<[bool]>::to_vec).collect()
    }
}

impl fmt::Display for OccupancyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &blocked in row {
                let symbol = if blocked { OBSTACLE_SYMBOL } else { FREE_SYMBOL };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
