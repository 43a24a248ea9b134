use crate::tile::TileId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive (got {0})")]
    InvalidDimensions(usize),
    #[error("tile {0} is not part of this grid")]
    UnknownTile(TileId),
    #[error("tile {0} is not next to the blank tile")]
    TileLocked(TileId),
    #[error("grid state is inconsistent: {0}")]
    Inconsistent(String),
}
