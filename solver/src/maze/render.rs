use colored::{ColoredString, Colorize};

use super::{
    cell::{Band, Cell},
    grid::Grid,
    position::Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// blank out scratch visit stamps, keep only the path
    #[default]
    Cleaned,
    /// keep every stamp for debugging
    Raw,
}

fn display_cell(cell: Cell, mode: RenderMode) -> Cell {
    match mode {
        RenderMode::Cleaned if cell.is_scratch() => Cell::Open,
        _ => cell,
    }
}

fn rendered_rows(
    grid: &Grid,
    start: Position,
    mode: RenderMode,
) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
    (0..grid.rows()).map(move |r| {
        grid.row(r).iter().enumerate().map(move |(c, &cell)| {
            if Position::new(r as isize, c as isize) == start {
                Cell::Start
            } else {
                display_cell(cell, mode)
            }
        })
    })
}

/// renders the grid as maze text, one line per row, with the start marker restored
pub fn render(grid: &Grid, start: Position, mode: RenderMode) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in rendered_rows(grid, start, mode) {
        out.extend(row.map(Cell::symbol));
        out.push('\n');
    }
    out
}

fn paint_cell(cell: Cell) -> ColoredString {
    let symbol = cell.symbol().to_string();
    let symbol = symbol.as_str();
    match cell {
        Cell::Wall => symbol.dimmed(),
        Cell::Open => symbol.normal(),
        Cell::Start => symbol.bright_cyan().bold(),
        Cell::Exit => symbol.bright_magenta().bold(),
        Cell::Visit(_) => symbol.bright_black(),
        Cell::Path(Band::Near) => symbol.green().bold(),
        Cell::Path(Band::Mid) => symbol.yellow().bold(),
        Cell::Path(Band::Late) => symbol.red().bold(),
        Cell::Path(Band::Far) => symbol.bright_red().bold(),
    }
}

/// like [`render`], styled for a terminal
pub fn paint(grid: &Grid, start: Position, mode: RenderMode) -> String {
    let mut out = String::new();
    for row in rendered_rows(grid, start, mode) {
        for cell in row {
            out.push_str(&paint_cell(cell).to_string());
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{WallPolicy, parse};

    const BOX: &str = "\
##E##
#   #
#   #
# ^ #
#####
";

    #[test]
    fn cleaned_render_of_fresh_grid_reproduces_input() {
        let (grid, params) = parse(BOX, WallPolicy::Strict).unwrap();
        assert_eq!(render(&grid, params.start, RenderMode::Cleaned), BOX);
        assert_eq!(render(&grid, params.start, RenderMode::Raw), BOX);
    }

    #[test]
    fn cleaned_render_blanks_scratch_stamps() {
        let (mut grid, params) = parse(BOX, WallPolicy::Strict).unwrap();
        grid.set(Position::new(1, 1), Cell::Visit(Band::Near));
        grid.set(Position::new(2, 1), Cell::Visit(Band::Far));
        grid.set(Position::new(2, 2), Cell::Path(Band::Mid));
        grid.set(params.start, Cell::Visit(Band::Near));

        let cleaned = render(&grid, params.start, RenderMode::Cleaned);
        assert_eq!(cleaned, "##E##\n#   #\n# B #\n# ^ #\n#####\n");

        let raw = render(&grid, params.start, RenderMode::Raw);
        assert_eq!(raw, "##E##\n#a  #\n#.B #\n# ^ #\n#####\n");
    }

    #[test]
    fn painted_output_keeps_symbols() {
        colored::control::set_override(false);
        let (grid, params) = parse(BOX, WallPolicy::Strict).unwrap();
        assert_eq!(paint(&grid, params.start, RenderMode::Cleaned), BOX);
    }
}
