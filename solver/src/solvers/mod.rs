mod strategy;
mod timed;

pub use strategy::{Status, Strategy, exit_code};
pub use timed::{Solution, TimedSolver};
