use std::fmt;

use crate::{
    algorithms::{FloodFill, WallFollower},
    error::SolveError,
    maze::{Grid, MazeParams},
};

use super::timed::{Solution, TimedSolver};

/// the closed set of traversal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FloodFill,
    WallFollower { pledge: bool },
}

impl Strategy {
    /// the order the benchmark runs them in
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::FloodFill,
            Self::WallFollower { pledge: true },
            Self::WallFollower { pledge: false },
        ]
        .into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::FloodFill => "Dijkstra",
            Self::WallFollower { pledge: true } => "Pledge",
            Self::WallFollower { pledge: false } => "Wall Follower",
        }
    }

    /// solves `grid` in place; `max_steps` only bounds the wall follower
    pub fn run(
        &self,
        grid: &mut Grid,
        params: &MazeParams,
        max_steps: Option<usize>,
    ) -> Result<Solution, SolveError> {
        match *self {
            Self::FloodFill => TimedSolver::new(FloodFill).solve(grid, params),
            Self::WallFollower { pledge } => {
                TimedSolver::new(WallFollower::new(pledge).with_step_limit(max_steps))
                    .solve(grid, params)
            }
        }
    }
}

/// outcome category of a run, for reports and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Unreachable,
    ConfigError,
    StepLimit,
}

impl Status {
    pub fn of(result: &Result<Solution, SolveError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(SolveError::Unreachable { .. }) => Self::Unreachable,
            Err(SolveError::Configuration) => Self::ConfigError,
            Err(SolveError::StepLimit { .. }) => Self::StepLimit,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Unreachable => "unreachable",
            Self::ConfigError => "config error",
            Self::StepLimit => "step limit",
        };
        f.pad(label)
    }
}

/// sums the exit-code weights of every failed run
pub fn exit_code<'a>(results: impl IntoIterator<Item = &'a Result<Solution, SolveError>>) -> u8 {
    results
        .into_iter()
        .filter_map(|result| result.as_ref().err())
        .fold(0u8, |code, e| code.saturating_add(e.exit_weight()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{WallPolicy, parse};

    const SEALED: &str = "\
#######
#^ #  E
#  #  #
#######
";

    #[test]
    fn benchmark_order_matches_the_driver() {
        let names: Vec<_> = Strategy::all().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Dijkstra", "Pledge", "Wall Follower"]);
    }

    #[test]
    fn failures_accumulate_into_the_exit_code() {
        let (grid, params) = parse(SEALED, WallPolicy::Strict).unwrap();

        let results: Vec<_> = Strategy::all()
            .map(|strategy| strategy.run(&mut grid.clone(), &params, Some(50)))
            .collect();
        let statuses: Vec<_> = results.iter().map(Status::of).collect();

        assert_eq!(
            statuses,
            vec![Status::Unreachable, Status::StepLimit, Status::ConfigError]
        );
        assert_eq!(exit_code(&results), 1 + 1 + 2);
    }

    #[test]
    fn successes_contribute_nothing() {
        let (mut grid, params) = parse("#####\n^   E\n#####\n", WallPolicy::Strict).unwrap();
        let result = Strategy::FloodFill.run(&mut grid, &params, None);
        assert_eq!(Status::of(&result), Status::Success);
        assert_eq!(exit_code([&result]), 0);
        assert_eq!(result.unwrap().path_length, 3);
    }
}
