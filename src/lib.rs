pub mod config;
pub mod error;
pub mod grid;
pub mod random;
pub mod tile;

pub use error::GridError;
pub use grid::{Grid, Neighbor};
pub use random::{IndexPicker, RngPicker};
pub use tile::{ArrayPosition, Boundary, Direction, LockAxis, Point, Tile, TileId};
