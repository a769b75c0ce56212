use super::{cell::Cell, position::Position};

/// rectangular character maze, mutated in place by the solvers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// builds a grid from equally long rows; returns None for ragged or empty input
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let cols = rows.first().map(Vec::len)?;
        if cols == 0 || rows.iter().any(|row| row.len() != cols) {
            return None;
        }

        let height = rows.len();
        let cells = rows.into_iter().flatten().collect();

        Some(Self {
            cells,
            rows: height,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.is_within(self.rows, self.cols)
    }

    pub fn index_of(&self, pos: Position) -> Option<usize> {
        pos.to_index(self.rows, self.cols)
    }

    pub fn position_of(&self, index: usize) -> Position {
        Position::from_index(index, self.cols)
    }

    /// cells outside the grid read as walls
    pub fn value_at(&self, pos: Position) -> Cell {
        self.index_of(pos)
            .map_or(Cell::Wall, |index| self.cells[index])
    }

    /// writes a cell; off-grid writes are dropped and reported as false
    pub fn set(&mut self, pos: Position, cell: Cell) -> bool {
        match self.index_of(pos) {
            Some(index) => {
                self.cells[index] = cell;
                true
            }
            None => {
                log::warn!("ignoring write of {:?} outside the maze at {}", cell, pos);
                false
            }
        }
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, &cell)| (self.position_of(index), cell))
    }

    /// number of cells stamped as part of the reported path
    pub fn path_length(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_path()).count()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::maze::Band;

    fn boxed(rows: usize, cols: usize) -> Grid {
        let grid = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                            Cell::Wall
                        } else {
                            Cell::Open
                        }
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(grid).unwrap()
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![Cell::Wall; 3], vec![Cell::Wall; 2]];
        assert!(Grid::from_rows(rows).is_none());
        assert!(Grid::from_rows(Vec::new()).is_none());
    }

    #[test]
    fn stored_values_are_returned_inside() {
        let grid = boxed(4, 5);
        assert_eq!(grid.value_at(Position::new(0, 0)), Cell::Wall);
        assert_eq!(grid.value_at(Position::new(1, 1)), Cell::Open);
        assert_eq!(grid.value_at(Position::new(2, 3)), Cell::Open);
    }

    #[test]
    fn off_grid_writes_are_dropped() {
        let mut grid = boxed(3, 3);
        let before = grid.clone();
        assert!(!grid.set(Position::new(-1, 1), Cell::Open));
        assert!(!grid.set(Position::new(1, 3), Cell::Open));
        assert_eq!(grid, before);
        assert!(grid.set(Position::new(1, 1), Cell::Path(Band::Near)));
        assert_eq!(grid.path_length(), 1);
    }

    proptest! {
        #[test]
        fn off_grid_reads_are_walls(
            rows in 1usize..12,
            cols in 1usize..12,
            row in -20isize..20,
            col in -20isize..20,
        ) {
            let grid = Grid::from_rows(vec![vec![Cell::Open; cols]; rows]).unwrap();
            let pos = Position::new(row, col);
            let outside = row < 0 || col < 0 || row >= rows as isize || col >= cols as isize;
            if outside {
                prop_assert_eq!(grid.value_at(pos), Cell::Wall);
            } else {
                prop_assert_eq!(grid.value_at(pos), Cell::Open);
            }
        }
    }
}
