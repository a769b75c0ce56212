pub mod cursor;
mod flood_fill;
pub mod layers;
pub mod traits;
mod wall_follower;

pub use cursor::{Cursor, Heading, Neighbor};
pub use flood_fill::FloodFill;
pub use layers::{ExclusionMap, ParentMap};
pub use traits::{MazeSolver, Traversal};
pub use wall_follower::WallFollower;
