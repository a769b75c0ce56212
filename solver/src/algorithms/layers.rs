use crate::maze::Position;

/// per-cell record of the predecessor that first claimed each cell
#[derive(Debug, Clone)]
pub struct ParentMap {
    parents: Vec<Option<Position>>,
    rows: usize,
    cols: usize,
}

impl ParentMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            parents: vec![None; rows * cols],
            rows,
            cols,
        }
    }

    pub fn parent_of(&self, pos: Position) -> Option<Position> {
        pos.to_index(self.rows, self.cols)
            .and_then(|index| self.parents[index])
    }

    pub fn is_claimed(&self, pos: Position) -> bool {
        self.parent_of(pos).is_some()
    }

    /// first claim wins; returns false if the cell was already claimed or is off-grid
    pub fn claim(&mut self, pos: Position, parent: Position) -> bool {
        let Some(index) = pos.to_index(self.rows, self.cols) else {
            log::warn!("claim pointing outside maze at {}", pos);
            return false;
        };

        match self.parents[index] {
            Some(_) => false,
            None => {
                self.parents[index] = Some(parent);
                true
            }
        }
    }

    pub fn claimed(&self) -> impl Iterator<Item = Position> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(|(_, parent)| parent.is_some())
            .map(|(index, _)| Position::from_index(index, self.cols))
    }
}

/// per-cell "already expanded" flags; only ever set, never cleared
#[derive(Debug, Clone)]
pub struct ExclusionMap {
    excluded: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl ExclusionMap {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            excluded: vec![false; rows * cols],
            rows,
            cols,
        }
    }

    /// off-grid coordinates always count as excluded
    pub fn is_excluded(&self, pos: Position) -> bool {
        pos.to_index(self.rows, self.cols)
            .is_none_or(|index| self.excluded[index])
    }

    /// returns true if the cell was newly excluded
    pub fn exclude(&mut self, pos: Position) -> bool {
        let Some(index) = pos.to_index(self.rows, self.cols) else {
            log::warn!("exclusion pointing outside maze at {}", pos);
            return false;
        };

        !std::mem::replace(&mut self.excluded[index], true)
    }

    pub fn count(&self) -> usize {
        self.excluded.iter().filter(|&&flag| flag).count()
    }
}
