use std::path::PathBuf;

use thiserror::Error;

use crate::maze::Position;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read maze file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed maze: {0}")]
    Format(#[from] FormatError),

    #[error("broken outer wall: {0}")]
    Sanity(#[from] SanityError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("the first maze row is empty")]
    EmptyFirstRow,

    #[error("maze too wide ({width} columns), maximum allowed width is {max}")]
    TooWide { width: usize, max: usize },

    #[error("uneven row lengths: row {row} has {found} columns, expected {expected}")]
    UnevenRows {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown symbol {symbol:?} at {at}")]
    UnknownSymbol { symbol: char, at: Position },

    #[error("no start marker '^' in maze")]
    MissingStart,

    #[error("second start marker at {second}, first one at {first}")]
    MultipleStarts { first: Position, second: Position },

    #[error("no exit marker 'E' in maze")]
    MissingExit,

    #[error("maximum number of exits ({max}) exceeded at {at}")]
    TooManyExits { max: usize, at: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SanityError {
    #[error("open border cell at {0}")]
    OpenBorder(Position),

    #[error("start at {0} sits on the edge with a wall right behind it")]
    BlockedStart(Position),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("exit not found after {steps} steps")]
    Unreachable { steps: usize },

    #[error(
        "classic wall follower may not have a solution for an interior start \
         if the maze is not simply connected; enable pledge mode"
    )]
    Configuration,

    #[error("gave up after {steps} steps")]
    StepLimit { steps: usize },
}

impl SolveError {
    /// contribution of this failure to the process exit code
    pub fn exit_weight(&self) -> u8 {
        match self {
            Self::Unreachable { .. } | Self::StepLimit { .. } => 1,
            Self::Configuration => 2,
        }
    }
}
