pub mod algorithms;
pub mod error;
pub mod maze;
pub mod solvers;
pub mod uniques;

pub use error::{FormatError, LoadError, SanityError, SolveError};
pub use maze::{Grid, MazeParams, Position};
pub use solvers::{Solution, Status, Strategy};
