use std::fmt;

/// step-count bucket used to stamp visited cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    /// fewer than 20 steps
    Near,
    /// fewer than 150 steps
    Mid,
    /// fewer than 200 steps
    Late,
    Far,
}

impl Band {
    /// step counts at which a solver logs an intermediate snapshot
    pub const MILESTONES: [usize; 3] = [20, 150, 200];

    pub fn for_steps(steps: usize) -> Self {
        match steps {
            0..20 => Self::Near,
            20..150 => Self::Mid,
            150..200 => Self::Late,
            _ => Self::Far,
        }
    }

    pub fn is_milestone(steps: usize) -> bool {
        Self::MILESTONES.contains(&steps)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Open,
    Start,
    Exit,
    /// scratch stamp left by an expanded or passed cell
    Visit(Band),
    /// stamp of a cell on the reported path
    Path(Band),
}

impl Cell {
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => '^',
            Self::Exit => 'E',
            Self::Visit(Band::Near) => 'a',
            Self::Visit(Band::Mid) => 'b',
            Self::Visit(Band::Late) => 'c',
            Self::Visit(Band::Far) => '.',
            Self::Path(Band::Near) => 'A',
            Self::Path(Band::Mid) => 'B',
            Self::Path(Band::Late) => 'C',
            Self::Path(Band::Far) => 'O',
        }
    }

    /// parses a symbol of the maze file alphabet; stamps are not accepted as input
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Open),
            '^' => Some(Self::Start),
            'E' => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn is_wall(self) -> bool {
        self == Self::Wall
    }

    pub fn is_exit(self) -> bool {
        self == Self::Exit
    }

    pub fn is_path(self) -> bool {
        matches!(self, Self::Path(_))
    }

    pub fn is_scratch(self) -> bool {
        matches!(self, Self::Visit(_))
    }

    /// the on-path counterpart of a visit stamp; anything else lands in the far band
    pub fn on_path(self) -> Self {
        match self {
            Self::Visit(band) => Self::Path(band),
            _ => Self::Path(Band::Far),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
