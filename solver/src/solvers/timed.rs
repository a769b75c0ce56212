use std::time::{Duration, Instant};

use crate::{
    algorithms::{MazeSolver, Traversal},
    error::SolveError,
    maze::{Grid, MazeParams},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub traversal: Traversal,
    /// cells left stamped as path on the grid
    pub path_length: usize,
    pub elapsed: Duration,
}

impl Solution {
    pub fn steps(&self) -> usize {
        self.traversal.steps
    }
}

/// runs an algorithm against a grid and measures it
pub struct TimedSolver<A: MazeSolver> {
    algorithm: A,
}

impl<A: MazeSolver> TimedSolver<A> {
    pub fn new(algorithm: A) -> Self {
        Self { algorithm }
    }

    pub fn solve(&self, grid: &mut Grid, params: &MazeParams) -> Result<Solution, SolveError> {
        log::debug!(
            "{}x{} maze: {} -> {:?}",
            params.rows,
            params.cols,
            params.start,
            params.exits
        );

        let started = Instant::now();
        let result = self.algorithm.solve(grid, params);
        let elapsed = started.elapsed();

        match result {
            Ok(traversal) => {
                let path_length = grid.path_length();
                log::info!(
                    "{} reached {} in {} steps ({:?})",
                    self.algorithm.name(),
                    traversal.exit,
                    traversal.steps,
                    elapsed
                );
                Ok(Solution {
                    traversal,
                    path_length,
                    elapsed,
                })
            }
            Err(e) => {
                log::debug!("{} stopped after {:?}: {}", self.algorithm.name(), elapsed, e);
                Err(e)
            }
        }
    }
}
