use crate::{
    error::SolveError,
    maze::{Band, Grid, MazeParams, Position, RenderMode, render},
};

pub trait MazeSolver {
    /// walks the maze, stamping `grid` in place
    fn solve(&self, grid: &mut Grid, params: &MazeParams) -> Result<Traversal, SolveError>;

    fn name(&self) -> &'static str;
}

/// what a successful run leaves behind besides the stamped grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    /// cursor relocations, turns excluded
    pub steps: usize,
    /// cells from the start to the cell next to the exit
    pub path: Vec<Position>,
    pub exit: Position,
}

pub(crate) fn log_milestone(grid: &Grid, start: Position, steps: usize) {
    if Band::is_milestone(steps) && log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "intermediate state at {}th step\n{}",
            steps,
            render(grid, start, RenderMode::Raw)
        );
    }
}
