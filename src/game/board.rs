use std::fmt;

use crate::config::GameConfig;
use crate::error::PlaceError;

use super::player::PlayerId;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
pub const DEFAULT_GOAL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(PlayerId),
}

impl Cell {
    /// Integer code used when rendering: 0 for empty, otherwise the owner's code
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Owned(owner) => owner.code(),
        }
    }
}

/// Gravity-constrained grid. Row 0 is the top, row `rows - 1` is the bottom.
///
/// Cells only change through [`Board::place`], which always fills the lowest
/// empty cell of a column, so within a column every empty cell sits above every
/// occupied one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    goal: usize,
    cells: Vec<Cell>,
    filled: usize,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if `rows * columns` overflows `usize`. [`GameConfig::validate`]
    /// rejects such sizes before a board is built from configuration.
    pub fn new(rows: usize, columns: usize, goal: usize) -> Self {
        let Some(size) = rows.checked_mul(columns) else {
            panic!("board of {rows}x{columns} cells overflows usize");
        };
        Board {
            rows,
            columns,
            goal,
            cells: vec![Cell::Empty; size],
            filled: 0,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rows, config.columns, config.goal)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Minimum run length that wins
    pub fn goal(&self) -> usize {
        self.goal
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()` or `column >= columns()`.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) is outside a {}x{} board",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column]
    }

    /// Check if a column is full. Columns outside the grid count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        if column >= self.columns || self.rows == 0 {
            return true;
        }
        self.get(0, column) != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn place(&mut self, owner: PlayerId, column: usize) -> Result<usize, PlaceError> {
        if column >= self.columns {
            return Err(PlaceError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }

        if self.is_column_full(column) {
            return Err(PlaceError::ColumnFull { column });
        }

        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, column) == Cell::Empty)
            .ok_or(PlaceError::ColumnFull { column })?;

        self.cells[row * self.columns + column] = owner.to_cell();
        self.filled += 1;
        Ok(row)
    }

    /// Check if `owner` has a run of at least `goal` through (row, column) in
    /// any of the four directions.
    pub fn has_run(&self, owner: PlayerId, row: usize, column: usize) -> bool {
        self.check_horizontal(owner, row)
            || self.check_vertical(owner, row, column)
            || self.check_top_left_to_bottom_right(owner, row, column)
            || self.check_top_right_to_bottom_left(owner, row, column)
    }

    /// Scan the whole row. A piece may have landed in the middle of a streak,
    /// so scanning outward from it is not enough.
    pub fn check_horizontal(&self, owner: PlayerId, row: usize) -> bool {
        self.streak_reaches_goal(owner, (0..self.columns).map(|column| (row, column)))
    }

    /// Scan downward from (row, column). The newest piece in a column is
    /// always on top, so nothing above it can extend the run.
    pub fn check_vertical(&self, owner: PlayerId, row: usize, column: usize) -> bool {
        if self.rows - row < self.goal {
            return false;
        }

        let cell = owner.to_cell();
        let below = (row + 1..self.rows)
            .take_while(|&r| self.get(r, column) == cell)
            .count();
        1 + below >= self.goal
    }

    /// Scan the whole `\` diagonal through (row, column).
    pub fn check_top_left_to_bottom_right(
        &self,
        owner: PlayerId,
        row: usize,
        column: usize,
    ) -> bool {
        let offset = row.min(column);
        let cells = (row - offset..self.rows).zip(column - offset..self.columns);
        self.streak_reaches_goal(owner, cells)
    }

    /// Scan the whole `/` diagonal through (row, column).
    pub fn check_top_right_to_bottom_left(
        &self,
        owner: PlayerId,
        row: usize,
        column: usize,
    ) -> bool {
        let offset = row.min(self.columns - 1 - column);
        let cells = (row - offset..self.rows).zip((0..=column + offset).rev());
        self.streak_reaches_goal(owner, cells)
    }

    fn streak_reaches_goal(
        &self,
        owner: PlayerId,
        cells: impl Iterator<Item = (usize, usize)>,
    ) -> bool {
        let target = owner.to_cell();
        let mut streak = 0;
        for (row, column) in cells {
            if self.get(row, column) == target {
                streak += 1;
                if streak >= self.goal {
                    return true;
                }
            } else {
                streak = 0;
            }
        }
        false
    }

    /// Overwrite a cell directly, bypassing gravity. Test positions only.
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        let index = row * self.columns + column;
        match (self.cells[index], cell) {
            (Cell::Empty, Cell::Owned(_)) => self.filled += 1,
            (Cell::Owned(_), Cell::Empty) => self.filled -= 1,
            _ => {}
        }
        self.cells[index] = cell;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS, DEFAULT_GOAL)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                write!(f, "{} ", self.get(row, column).code())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
