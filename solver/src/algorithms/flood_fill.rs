use crate::{
    error::SolveError,
    maze::{Band, Cell, Grid, MazeParams, Position},
    uniques::OrderedUniqueSet,
};

use super::{
    cursor::Cursor,
    layers::{ExclusionMap, ParentMap},
    traits::{MazeSolver, Traversal, log_milestone},
};

/// Frontier search labeled "Dijkstra" on the command line.
///
/// The frontier always yields the smallest linear cell index, not the cell
/// nearest to the start, so the reported path is a path but not necessarily
/// a shortest one.
pub struct FloodFill;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchState {
    Running,
    GoalFound { exit: Position },
    FrontierExhausted,
}

/// one flood-fill run; owns the frontier and both per-cell layers
pub(crate) struct Search<'g> {
    grid: &'g mut Grid,
    start: Position,
    frontier: OrderedUniqueSet,
    parents: ParentMap,
    expanded: ExclusionMap,
    cursor: Cursor,
}

impl<'g> Search<'g> {
    pub(crate) fn new(grid: &'g mut Grid, start: Position) -> Self {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut parents = ParentMap::new(rows, cols);
        let mut frontier = OrderedUniqueSet::new();

        // the start is its own parent, which ends every trace-back
        parents.claim(start, start);
        if let Some(index) = grid.index_of(start) {
            frontier.insert(index);
        }

        let cursor = Cursor::new(grid, start);

        Self {
            grid,
            start,
            frontier,
            parents,
            expanded: ExclusionMap::new(rows, cols),
            cursor,
        }
    }

    pub(crate) fn steps(&self) -> usize {
        self.cursor.steps()
    }

    pub(crate) fn parents(&self) -> &ParentMap {
        &self.parents
    }

    pub(crate) fn expanded(&self) -> &ExclusionMap {
        &self.expanded
    }

    /// expands the smallest frontier index
    pub(crate) fn step(&mut self) -> SearchState {
        let Some(index) = self.frontier.pop_first() else {
            return SearchState::FrontierExhausted;
        };

        let pos = self.grid.position_of(index);
        if !self.expanded.exclude(pos) {
            log::warn!("cell {} expanded twice", pos);
        }

        self.cursor.relocate(self.grid, pos);
        let band = Band::for_steps(self.cursor.steps());
        self.cursor.stamp(self.grid, Cell::Visit(band));
        log_milestone(self.grid, self.start, self.cursor.steps());

        if let Some(exit) = self.cursor.adjacent_exit() {
            self.parents.claim(exit, pos);
            return SearchState::GoalFound { exit };
        }

        for neighbor in self.cursor.cardinals() {
            let next = neighbor.position;
            if neighbor.value.is_wall() || self.expanded.is_excluded(next) {
                continue;
            }
            if self.parents.claim(next, pos)
                && let Some(next_index) = self.grid.index_of(next)
            {
                self.frontier.insert(next_index);
            }
        }

        SearchState::Running
    }

    pub(crate) fn run(&mut self) -> SearchState {
        loop {
            match self.step() {
                SearchState::Running => continue,
                done => return done,
            }
        }
    }

    /// follows parents from `from` back to the start, restamping each cell
    /// except the start as on-path; returns the cells in walking order
    pub(crate) fn trace_back(&mut self, from: Position) -> Vec<Position> {
        let mut path = Vec::new();
        let mut current = from;

        // a cell is claimed once, so no chain is longer than the grid
        for _ in 0..self.grid.len() {
            let Some(parent) = self.parents.parent_of(current) else {
                log::warn!("trace-back hit unclaimed cell {}", current);
                break;
            };
            path.push(current);
            if parent == current {
                break;
            }

            let on_path = self.grid.value_at(current).on_path();
            self.grid.set(current, on_path);
            current = parent;
        }

        path.reverse();
        path
    }
}

impl MazeSolver for FloodFill {
    fn solve(&self, grid: &mut Grid, params: &MazeParams) -> Result<Traversal, SolveError> {
        let mut search = Search::new(grid, params.start);

        match search.run() {
            SearchState::GoalFound { exit } => {
                let steps = search.steps();
                let last = search.cursor.position();
                let path = search.trace_back(last);
                log::debug!("reached exit {} after {} expansions", exit, steps);
                Ok(Traversal { steps, path, exit })
            }
            SearchState::Running => unreachable!("run() only returns a terminal state"),
            SearchState::FrontierExhausted => {
                let steps = search.steps();
                log::debug!(
                    "frontier exhausted after {} expansions, {} cells claimed",
                    steps,
                    search.parents().claimed().count()
                );
                Err(SolveError::Unreachable { steps })
            }
        }
    }

    fn name(&self) -> &'static str {
        "Dijkstra"
    }
}
