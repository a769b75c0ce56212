use super::position::Position;

pub const MAX_EXITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCategory {
    /// start lies on the outer border
    Edge,
    Interior,
}

/// maze facts computed once from a validated grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeParams {
    pub rows: usize,
    pub cols: usize,
    pub start: Position,
    pub start_category: StartCategory,
    /// exits in raster scan order, at most [`MAX_EXITS`]
    pub exits: Vec<Position>,
}

impl MazeParams {
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }
}
