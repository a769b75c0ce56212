mod cell;
mod grid;
mod loader;
mod params;
mod position;
pub mod render;

pub use cell::{Band, Cell};
pub use grid::Grid;
pub use loader::{MAX_ROW_LENGTH, WallPolicy, check_walls, endpoints, load, parse};
pub use params::{MAX_EXITS, MazeParams, StartCategory};
pub use position::Position;
pub use render::{RenderMode, paint, render};
