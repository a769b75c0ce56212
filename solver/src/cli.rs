use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use maze_solver::solvers::Strategy;

#[derive(Parser, Debug)]
#[command(name = "maze-solver")]
#[command(about = "Character-grid maze solver with multiple strategies")]
pub struct Args {
    /// Sets the logger's verbosity level
    #[arg(short, long, value_name = "VERBOSITY", default_value_t = LevelFilter::Info)]
    pub verbosity: LevelFilter,

    /// Keep every scratch stamp in the printed grids
    #[arg(long)]
    pub raw: bool,

    /// Disable colored grid output
    #[arg(long)]
    pub plain: bool,

    /// Give up a wall follower run after this many steps
    #[arg(long, value_name = "STEPS")]
    pub max_steps: Option<usize>,

    /// Close open border cells instead of rejecting the maze
    #[arg(long)]
    pub repair_walls: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve a maze with a single algorithm
    Solve {
        /// Maze file to solve
        maze: PathBuf,

        /// Traversal algorithm to use
        #[arg(value_enum)]
        algorithm: Algorithm,
    },

    /// Run every algorithm on the same maze and compare
    Benchmark {
        /// Maze file to solve
        maze: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Algorithm {
    /// Flood fill expanding the smallest cell index first
    #[value(name = "dijkstra", alias = "flood-fill")]
    Dijkstra,

    /// Pledge's algorithm, escapes obstacles from an interior start
    Pledge,

    /// Classic wall follower, edge starts only
    #[value(name = "wall-follower")]
    WallFollower,
}

impl Algorithm {
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Dijkstra => Strategy::FloodFill,
            Self::Pledge => Strategy::WallFollower { pledge: true },
            Self::WallFollower => Strategy::WallFollower { pledge: false },
        }
    }
}
