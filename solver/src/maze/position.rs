use std::fmt;
use std::ops::Add;

/// grid coordinate; signed so that neighbors of border cells can be expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: isize,
    pub col: isize,
}

impl Position {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row >= 0 && self.col >= 0 && (self.row as usize) < rows && (self.col as usize) < cols
    }

    /// linear index of the cell, or None when it lies off a `rows` x `cols` grid
    pub fn to_index(self, rows: usize, cols: usize) -> Option<usize> {
        self.is_within(rows, cols)
            .then(|| self.row as usize * cols + self.col as usize)
    }

    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new((index / cols) as isize, (index % cols) as isize)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    pub fn north(self) -> Self {
        self + (-1, 0)
    }

    pub fn east(self) -> Self {
        self + (0, 1)
    }

    pub fn south(self) -> Self {
        self + (1, 0)
    }

    pub fn west(self) -> Self {
        self + (0, -1)
    }
}

impl Add<(isize, isize)> for Position {
    type Output = Self;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        Self::new(self.row + dr, self.col + dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
