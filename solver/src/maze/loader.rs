use std::fs;
use std::path::Path;

use crate::error::{FormatError, LoadError, SanityError};

use super::{
    cell::Cell,
    grid::Grid,
    params::{MAX_EXITS, MazeParams, StartCategory},
    position::Position,
};

pub const MAX_ROW_LENGTH: usize = 1021;

/// what to do with open cells on the outer border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallPolicy {
    #[default]
    Strict,
    /// close open border cells with walls
    Repair,
}

pub fn load(path: impl AsRef<Path>, policy: WallPolicy) -> Result<(Grid, MazeParams), LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", text.len(), path.display());
    parse(&text, policy)
}

pub fn parse(text: &str, policy: WallPolicy) -> Result<(Grid, MazeParams), LoadError> {
    let rows = measure(text)?;
    let mut grid = build_grid(&rows)?;
    let params = endpoints(&grid)?;
    check_walls(&mut grid, &params, policy)?;

    log::debug!(
        "{}x{} maze, start {} ({:?}), {} exit(s)",
        params.rows,
        params.cols,
        params.start,
        params.start_category,
        params.exit_count()
    );

    Ok((grid, params))
}

/// strips everything from the last graphic character onward
fn strip_line(line: &str) -> &str {
    line.trim_end_matches(|c: char| !c.is_ascii_graphic())
}

/// splits the text into rows of equal width, stopping at the first empty line
fn measure(text: &str) -> Result<Vec<&str>, FormatError> {
    let mut lines = text.lines().map(strip_line);

    let first = lines.next().unwrap_or_default();
    let width = first.chars().count();
    if width == 0 {
        return Err(FormatError::EmptyFirstRow);
    }
    if width > MAX_ROW_LENGTH {
        return Err(FormatError::TooWide {
            width,
            max: MAX_ROW_LENGTH,
        });
    }

    let mut rows = vec![first];
    for line in lines.take_while(|line| !line.is_empty()) {
        let found = line.chars().count();
        if found != width {
            return Err(FormatError::UnevenRows {
                row: rows.len(),
                found,
                expected: width,
            });
        }
        rows.push(line);
    }

    Ok(rows)
}

fn build_grid(rows: &[&str]) -> Result<Grid, FormatError> {
    let cells = rows
        .iter()
        .enumerate()
        .map(|(r, line)| {
            line.chars()
                .enumerate()
                .map(|(c, symbol)| {
                    Cell::from_symbol(symbol).ok_or(FormatError::UnknownSymbol {
                        symbol,
                        at: Position::new(r as isize, c as isize),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    // measure() already guarantees a non-empty rectangle
    Grid::from_rows(cells).ok_or(FormatError::EmptyFirstRow)
}

/// finds the start and the exits in raster order
pub fn endpoints(grid: &Grid) -> Result<MazeParams, FormatError> {
    let mut start: Option<Position> = None;
    let mut exits = Vec::with_capacity(MAX_EXITS);

    for (pos, cell) in grid.cells() {
        match cell {
            Cell::Start => {
                if let Some(first) = start {
                    return Err(FormatError::MultipleStarts { first, second: pos });
                }
                start = Some(pos);
            }
            Cell::Exit => {
                if exits.len() == MAX_EXITS {
                    return Err(FormatError::TooManyExits {
                        max: MAX_EXITS,
                        at: pos,
                    });
                }
                exits.push(pos);
            }
            _ => {}
        }
    }

    let start = start.ok_or(FormatError::MissingStart)?;
    if exits.is_empty() {
        return Err(FormatError::MissingExit);
    }

    let (rows, cols) = (grid.rows() as isize, grid.cols() as isize);
    let interior = start.row > 0 && start.row < rows - 1 && start.col > 0 && start.col < cols - 1;

    Ok(MazeParams {
        rows: grid.rows(),
        cols: grid.cols(),
        start,
        start_category: if interior {
            StartCategory::Interior
        } else {
            StartCategory::Edge
        },
        exits,
    })
}

fn border(rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    let (rows, cols) = (rows as isize, cols as isize);
    let horizontal = (0..cols).flat_map(move |c| [Position::new(0, c), Position::new(rows - 1, c)]);
    let vertical = (0..rows).flat_map(move |r| [Position::new(r, 0), Position::new(r, cols - 1)]);
    horizontal.chain(vertical)
}

/// checks the outer wall; start and exit markers may legitimately breach it
pub fn check_walls(grid: &mut Grid, params: &MazeParams, policy: WallPolicy) -> Result<(), SanityError> {
    for pos in border(grid.rows(), grid.cols()) {
        if grid.value_at(pos) != Cell::Open {
            continue;
        }
        match policy {
            WallPolicy::Strict => return Err(SanityError::OpenBorder(pos)),
            WallPolicy::Repair => {
                log::warn!("closing open border cell at {}", pos);
                grid.set(pos, Cell::Wall);
            }
        }
    }

    // an edge start needs a way in; this cannot be repaired
    let start = params.start;
    let (last_row, last_col) = (params.rows as isize - 1, params.cols as isize - 1);
    let inward = [
        (start.row == 0, start.south()),
        (start.row == last_row, start.north()),
        (start.col == 0, start.east()),
        (start.col == last_col, start.west()),
    ];

    for (on_edge, behind) in inward {
        if on_edge && grid.value_at(behind).is_wall() {
            return Err(SanityError::BlockedStart(start));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
#####
#^  E
#####
";

    #[test]
    fn parses_a_small_maze() {
        let (grid, params) = parse(SMALL, WallPolicy::Strict).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 5));
        assert_eq!(params.start, Position::new(1, 1));
        assert_eq!(params.start_category, StartCategory::Interior);
        assert_eq!(params.exits, vec![Position::new(1, 4)]);
    }

    #[test]
    fn trailing_junk_and_blank_tail_are_ignored() {
        let text = "#####\r\n#^  E\t\r\n#####\r\n\r\nignored after blank line\n";
        let (grid, _) = parse(text, WallPolicy::Strict).unwrap();
        assert_eq!(grid.rows(), 3);
    }

    #[test]
    fn empty_first_row_is_rejected() {
        let err = measure("\n#####\n").unwrap_err();
        assert_eq!(err, FormatError::EmptyFirstRow);
        assert_eq!(measure("").unwrap_err(), FormatError::EmptyFirstRow);
    }

    #[test]
    fn over_wide_rows_are_rejected() {
        let wide = "#".repeat(MAX_ROW_LENGTH + 1);
        assert!(matches!(
            measure(&wide),
            Err(FormatError::TooWide { width, .. }) if width == MAX_ROW_LENGTH + 1
        ));
        assert!(measure(&"#".repeat(MAX_ROW_LENGTH)).is_ok());
    }

    #[test]
    fn uneven_rows_are_rejected() {
        let err = measure("#####\n#^ E\n#####\n").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnevenRows {
                row: 1,
                found: 4,
                expected: 5
            }
        );
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        let err = parse("#####\n#^x E\n#####\n", WallPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Format(FormatError::UnknownSymbol { symbol: 'x', .. })
        ));
    }

    #[test]
    fn start_and_exit_markers_are_required() {
        let no_start = parse("#####\n#   E\n#####\n", WallPolicy::Strict).unwrap_err();
        assert!(matches!(no_start, LoadError::Format(FormatError::MissingStart)));

        let no_exit = parse("#####\n#^  #\n#####\n", WallPolicy::Strict).unwrap_err();
        assert!(matches!(no_exit, LoadError::Format(FormatError::MissingExit)));

        let two_starts = parse("#####\n#^ ^E\n#####\n", WallPolicy::Strict).unwrap_err();
        assert!(matches!(
            two_starts,
            LoadError::Format(FormatError::MultipleStarts { .. })
        ));
    }

    #[test]
    fn open_border_is_rejected_in_strict_mode() {
        let err = parse("## ##\n#^  E\n#####\n", WallPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Sanity(SanityError::OpenBorder(pos)) if pos == Position::new(0, 2)
        ));
    }

    #[test]
    fn open_border_is_closed_in_repair_mode() {
        let (grid, _) = parse("## ##\n#^  E\n#####\n", WallPolicy::Repair).unwrap();
        assert_eq!(grid.value_at(Position::new(0, 2)), Cell::Wall);
    }

    #[test]
    fn edge_start_facing_a_wall_is_rejected() {
        let text = "##^##\n# # E\n#####\n";
        for policy in [WallPolicy::Strict, WallPolicy::Repair] {
            let err = parse(text, policy).unwrap_err();
            assert!(matches!(
                err,
                LoadError::Sanity(SanityError::BlockedStart(pos)) if pos == Position::new(0, 2)
            ));
        }
    }

    #[test]
    fn edge_start_is_categorized() {
        let (_, params) = parse("#####\n^   E\n#####\n", WallPolicy::Strict).unwrap();
        assert_eq!(params.start_category, StartCategory::Edge);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("/definitely/not/here/maze.txt", WallPolicy::Strict).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
