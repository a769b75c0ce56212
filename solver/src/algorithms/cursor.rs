use crate::maze::{Cell, Grid, Position};

/// cardinal direction, numbered in quarter turns counterclockwise from east
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

impl Heading {
    /// folds an unbounded quarter-turn count into one of the four directions
    pub fn fold(unfolded: i64) -> Self {
        match unfolded.rem_euclid(4) {
            0 => Self::East,
            1 => Self::North,
            2 => Self::West,
            _ => Self::South,
        }
    }

    /// a quarter turn clockwise
    pub fn clockwise(self) -> Self {
        match self {
            Self::East => Self::South,
            Self::North => Self::East,
            Self::West => Self::North,
            Self::South => Self::West,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub position: Position,
    pub value: Cell,
}

impl Neighbor {
    fn read(grid: &Grid, position: Position) -> Self {
        Self {
            position,
            value: grid.value_at(position),
        }
    }
}

/// the maze-walking agent: position, heading and a snapshot of its surroundings
///
/// The snapshot is refreshed on every relocation and turn, so the neighbor
/// values always describe the grid as it was at the last move.
#[derive(Debug, Clone)]
pub struct Cursor {
    position: Position,
    here: Cell,
    unfolded_heading: i64,
    steps: usize,
    north: Neighbor,
    east: Neighbor,
    south: Neighbor,
    west: Neighbor,
}

impl Cursor {
    /// places the cursor facing east without counting a step
    pub fn new(grid: &Grid, position: Position) -> Self {
        Self {
            position,
            here: grid.value_at(position),
            unfolded_heading: 0,
            steps: 0,
            north: Neighbor::read(grid, position.north()),
            east: Neighbor::read(grid, position.east()),
            south: Neighbor::read(grid, position.south()),
            west: Neighbor::read(grid, position.west()),
        }
    }

    fn refresh(&mut self, grid: &Grid) {
        let pos = self.position;
        self.here = grid.value_at(pos);
        self.north = Neighbor::read(grid, pos.north());
        self.east = Neighbor::read(grid, pos.east());
        self.south = Neighbor::read(grid, pos.south());
        self.west = Neighbor::read(grid, pos.west());
    }

    /// moves to `position` and counts one step
    pub fn relocate(&mut self, grid: &Grid, position: Position) {
        self.position = position;
        self.refresh(grid);
        self.steps += 1;
    }

    /// adds `delta` quarter turns (positive is counterclockwise); not a step
    pub fn turn(&mut self, grid: &Grid, delta: i64) {
        self.unfolded_heading += delta;
        self.refresh(grid);
    }

    /// writes `cell` under the cursor
    pub fn stamp(&mut self, grid: &mut Grid, cell: Cell) {
        grid.set(self.position, cell);
        self.here = cell;
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn here(&self) -> Cell {
        self.here
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn unfolded_heading(&self) -> i64 {
        self.unfolded_heading
    }

    pub fn heading(&self) -> Heading {
        Heading::fold(self.unfolded_heading)
    }

    pub fn neighbor(&self, heading: Heading) -> Neighbor {
        match heading {
            Heading::East => self.east,
            Heading::North => self.north,
            Heading::West => self.west,
            Heading::South => self.south,
        }
    }

    /// north, east, south, west
    pub fn cardinals(&self) -> [Neighbor; 4] {
        [self.north, self.east, self.south, self.west]
    }

    pub fn ahead(&self) -> Neighbor {
        self.neighbor(self.heading())
    }

    /// the cell a quarter turn clockwise from ahead
    pub fn side(&self) -> Neighbor {
        self.neighbor(self.heading().clockwise())
    }

    pub fn goal_reached(&self) -> bool {
        self.cardinals().iter().any(|n| n.value.is_exit())
    }

    /// prefers west, then east, south and north when several exits touch
    pub fn adjacent_exit(&self) -> Option<Position> {
        [self.west, self.east, self.south, self.north]
            .into_iter()
            .find(|n| n.value.is_exit())
            .map(|n| n.position)
    }
}
