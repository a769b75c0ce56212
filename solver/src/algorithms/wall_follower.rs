use crate::{
    error::SolveError,
    maze::{Band, Cell, Grid, MazeParams, StartCategory},
};

use super::{
    cursor::Cursor,
    traits::{MazeSolver, Traversal, log_milestone},
};

/// Pledge's algorithm; with pledge disabled it is the classic wall follower
/// keeping the wall on its clockwise side.
pub struct WallFollower {
    pledge: bool,
    max_steps: Option<usize>,
}

impl WallFollower {
    pub fn new(pledge: bool) -> Self {
        Self {
            pledge,
            max_steps: None,
        }
    }

    /// gives up with [`SolveError::StepLimit`] once the step count exceeds `max_steps`
    pub fn with_step_limit(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn pledge(&self) -> bool {
        self.pledge
    }
}

impl MazeSolver for WallFollower {
    fn solve(&self, grid: &mut Grid, params: &MazeParams) -> Result<Traversal, SolveError> {
        if !self.pledge && params.start_category == StartCategory::Interior {
            return Err(SolveError::Configuration);
        }

        // east is the preferred heading; entering the start counts as the first step
        let mut cursor = Cursor::new(grid, params.start);
        cursor.relocate(grid, params.start);
        let mut path = vec![params.start];
        let mut idle_turns = 0;

        while !cursor.goal_reached() {
            // four turns in place means every side is a wall
            if let Some(limit) = self.max_steps
                && (cursor.steps() > limit || idle_turns >= 4)
            {
                log::debug!(
                    "step budget of {} exhausted at {} after {} idle turns",
                    limit,
                    cursor.position(),
                    idle_turns
                );
                return Err(SolveError::StepLimit {
                    steps: cursor.steps(),
                });
            }

            // net turning back at zero: walk straight, ignoring side openings
            let pledge_mode = self.pledge && cursor.unfolded_heading() == 0;

            let moved = if !pledge_mode && !cursor.side().value.is_wall() {
                cursor.turn(grid, -1);
                let ahead = cursor.ahead().position;
                cursor.relocate(grid, ahead);
                true
            } else if cursor.ahead().value.is_wall() {
                cursor.turn(grid, 1);
                false
            } else {
                let ahead = cursor.ahead().position;
                cursor.relocate(grid, ahead);
                true
            };

            let band = Band::for_steps(cursor.steps());
            cursor.stamp(grid, Cell::Path(band));

            if moved {
                idle_turns = 0;
                log::trace!(
                    "step {} to {} heading {:?}",
                    cursor.steps(),
                    cursor.position(),
                    cursor.heading()
                );
                path.push(cursor.position());
                log_milestone(grid, params.start, cursor.steps());
            } else {
                idle_turns += 1;
            }
        }

        let exit = cursor
            .adjacent_exit()
            .unwrap_or_else(|| cursor.position());

        Ok(Traversal {
            steps: cursor.steps(),
            path,
            exit,
        })
    }

    fn name(&self) -> &'static str {
        if self.pledge {
            "Pledge"
        } else {
            "Wall Follower"
        }
    }
}
