//! Tile arrangement for the sliding puzzle.
//!
//! The collection is kept sorted by `curr_index`. Neighbor lookups go through
//! a `(row, col)` cell map that every swap keeps in step with the tiles'
//! points, so they never depend on the collection's order.

use std::fmt;

use rand::Rng;
use tracing::{debug, info, trace};

use crate::error::GridError;
use crate::random::{IndexPicker, RngPicker};
use crate::tile::{ArrayPosition, Direction, Point, Tile, TileId};

/// A tile lying next to the blank, and the side of the blank it is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub direction: Direction,
    pub tile: TileId,
}

#[derive(Debug, Clone)]
pub struct Grid {
    dimensions: usize,
    tiles: Vec<Tile>,
    /// Tile occupying each cell, indexed by `row * dimensions + col`.
    cells: Vec<TileId>,
}

impl Grid {
    /// Builds a solved grid with the blank tile in the last cell.
    pub fn new(dimensions: usize) -> Result<Self, GridError> {
        if dimensions == 0 {
            return Err(GridError::InvalidDimensions(dimensions));
        }

        let mut tiles = Vec::with_capacity(dimensions * dimensions);
        let mut count = 0;

        for row in 0..dimensions {
            for col in 0..dimensions {
                tiles.push(Tile::new(count + 1, Point::new(row, col), count));
                count += 1;
            }
        }

        if let Some(last) = tiles.last_mut() {
            last.blank = true;
        }

        let cells = tiles.iter().map(|tile| tile.id).collect();
        let mut grid = Self {
            dimensions,
            tiles,
            cells,
        };
        grid.apply_neighbor_eligibility();

        info!(dimensions, tiles = grid.tiles.len(), "grid initialized");
        debug_assert_eq!(grid.check_invariants(), Ok(()));
        Ok(grid)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// All tiles, ordered by `curr_index`.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    pub fn tile_at(&self, point: Point) -> Option<&Tile> {
        if point.row >= self.dimensions || point.col >= self.dimensions {
            return None;
        }
        let id = *self.cells.get(point.linear_index(self.dimensions))?;
        self.tile(id)
    }

    pub fn blank(&self) -> &Tile {
        self.tiles
            .iter()
            .find(|tile| tile.blank)
            .expect("a grid always holds exactly one blank tile")
    }

    /// Tiles orthogonally adjacent to the blank, in up, down, left, right order.
    pub fn find_adjacent_tiles(&self) -> Vec<Neighbor> {
        let blank = self.blank().point;

        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                let point = blank.step(direction, self.dimensions)?;
                // A cell without a tile is skipped rather than trusted.
                let tile = *self.cells.get(point.linear_index(self.dimensions))?;
                self.tile(tile)?;
                Some(Neighbor { direction, tile })
            })
            .collect()
    }

    pub fn assign_lock_axes(&mut self, neighbors: &[Neighbor]) {
        for neighbor in neighbors {
            if let Some(tile) = self.tiles.iter_mut().find(|tile| tile.id == neighbor.tile) {
                tile.lock_axis = Some(neighbor.direction.lock_axis());
            }
        }
    }

    /// Finds the blank's neighbors and sets their lock axes.
    ///
    /// Tiles that stopped being neighbors keep whatever axis they had; only
    /// `disabled` decides whether that axis matters.
    pub fn compute_blank_neighbors(&mut self) -> Vec<TileId> {
        let neighbors = self.find_adjacent_tiles();
        self.assign_lock_axes(&neighbors);
        trace!(count = neighbors.len(), "blank neighbors computed");
        neighbors.into_iter().map(|neighbor| neighbor.tile).collect()
    }

    pub fn apply_neighbor_eligibility(&mut self) {
        let neighbors = self.compute_blank_neighbors();
        for tile in &mut self.tiles {
            tile.disabled = !neighbors.contains(&tile.id);
        }
    }

    /// The tile on the given side of the blank, if any.
    pub fn neighbor_in(&self, direction: Direction) -> Option<TileId> {
        self.find_adjacent_tiles()
            .into_iter()
            .find(|neighbor| neighbor.direction == direction)
            .map(|neighbor| neighbor.tile)
    }

    /// Exchanges the points and array positions of two tiles.
    ///
    /// Eligibility is left stale; callers follow up with
    /// [`apply_neighbor_eligibility`](Self::apply_neighbor_eligibility).
    pub fn swap_tiles(&mut self, a: TileId, b: TileId) -> Result<(), GridError> {
        let slot_a = self.slot_of(a).ok_or(GridError::UnknownTile(a))?;
        let slot_b = self.slot_of(b).ok_or(GridError::UnknownTile(b))?;
        self.swap_slots(slot_a, slot_b);
        Ok(())
    }

    fn slot_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id == id)
    }

    fn swap_slots(&mut self, slot_a: usize, slot_b: usize) {
        let (id_a, point_a, index_a) = {
            let tile = &self.tiles[slot_a];
            (tile.id, tile.point, tile.array_position.curr_index)
        };
        let (id_b, point_b, index_b) = {
            let tile = &self.tiles[slot_b];
            (tile.id, tile.point, tile.array_position.curr_index)
        };

        let tile = &mut self.tiles[slot_a];
        tile.point = point_b;
        tile.array_position = ArrayPosition {
            curr_index: index_b,
            prev_index: Some(index_a),
        };

        let tile = &mut self.tiles[slot_b];
        tile.point = point_a;
        tile.array_position = ArrayPosition {
            curr_index: index_a,
            prev_index: Some(index_b),
        };

        self.cells[point_a.linear_index(self.dimensions)] = id_b;
        self.cells[point_b.linear_index(self.dimensions)] = id_a;

        self.tiles.sort_by_key(|tile| tile.array_position.curr_index);

        debug!(a = %id_a, b = %id_b, from = index_a, to = index_b, "tiles swapped");
        debug_assert_eq!(self.check_layout(), Ok(()));
    }

    /// Fisher-Yates over the current tile order, applying one swap per step.
    ///
    /// Any permutation can come out of this, including ones a player cannot
    /// slide back to the solved order.
    pub fn shuffle<P: IndexPicker + ?Sized>(&mut self, picker: &mut P) {
        let mut order: Vec<TileId> = self.tiles.iter().map(|tile| tile.id).collect();

        for i in (1..order.len()).rev() {
            let j = picker.pick(i).min(i);
            order.swap(i, j);

            if let (Some(slot_i), Some(slot_j)) = (self.slot_of(order[i]), self.slot_of(order[j])) {
                self.swap_slots(slot_i, slot_j);
            }
        }

        self.apply_neighbor_eligibility();

        info!(
            swaps = order.len().saturating_sub(1),
            blank_row = self.blank().point.row,
            blank_col = self.blank().point.col,
            "grid shuffled"
        );
        debug_assert_eq!(self.check_invariants(), Ok(()));
    }

    pub fn shuffle_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.shuffle(&mut RngPicker(rng));
    }

    /// Moves `dragged` into the blank's cell.
    ///
    /// Adjacency is not checked here: a locked tile swaps with the blank just
    /// the same. Use [`try_move`](Self::try_move) to honor `disabled`.
    pub fn handle_move(&mut self, dragged: TileId) -> Result<(), GridError> {
        let blank = self.blank().id;
        self.swap_tiles(dragged, blank)?;
        self.apply_neighbor_eligibility();

        debug!(tile = %dragged, "move applied");
        debug_assert_eq!(self.check_invariants(), Ok(()));
        Ok(())
    }

    /// Like [`handle_move`](Self::handle_move), but refuses tiles that are not
    /// next to the blank and leaves the grid untouched.
    pub fn try_move(&mut self, dragged: TileId) -> Result<(), GridError> {
        let tile = self.tile(dragged).ok_or(GridError::UnknownTile(dragged))?;
        if tile.disabled {
            debug!(tile = %dragged, "move rejected, tile is locked");
            return Err(GridError::TileLocked(dragged));
        }
        self.handle_move(dragged)
    }

    /// Structural checks that hold after every swap.
    fn check_layout(&self) -> Result<(), GridError> {
        let size = self.dimensions * self.dimensions;
        if self.tiles.len() != size || self.cells.len() != size {
            return Err(GridError::Inconsistent(format!(
                "expected {size} tiles and cells, found {} and {}",
                self.tiles.len(),
                self.cells.len()
            )));
        }

        let blanks = self.tiles.iter().filter(|tile| tile.blank).count();
        if blanks != 1 {
            return Err(GridError::Inconsistent(format!("{blanks} blank tiles")));
        }

        for (slot, tile) in self.tiles.iter().enumerate() {
            // Sorted and a permutation of 0..size at once.
            if tile.array_position.curr_index != slot {
                return Err(GridError::Inconsistent(format!(
                    "tile {} has index {} in slot {slot}",
                    tile.id, tile.array_position.curr_index
                )));
            }
            if tile.point.row >= self.dimensions || tile.point.col >= self.dimensions {
                return Err(GridError::Inconsistent(format!("tile {} is off the grid", tile.id)));
            }
            if tile.point.linear_index(self.dimensions) != slot {
                return Err(GridError::Inconsistent(format!(
                    "tile {} at {:?} disagrees with index {slot}",
                    tile.id, tile.point
                )));
            }
            if self.cells[slot] != tile.id {
                return Err(GridError::Inconsistent(format!(
                    "cell {slot} holds {} instead of {}",
                    self.cells[slot], tile.id
                )));
            }
        }

        Ok(())
    }

    /// Verifies layout and that exactly the blank's neighbors are draggable.
    pub fn check_invariants(&self) -> Result<(), GridError> {
        self.check_layout()?;

        let blank = self.blank().point;
        for tile in &self.tiles {
            let adjacent = tile.point.is_adjacent(blank);
            if tile.disabled == adjacent {
                return Err(GridError::Inconsistent(format!(
                    "tile {} disabled={} but adjacent={adjacent}",
                    tile.id, tile.disabled
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dimensions {
            for col in 0..self.dimensions {
                match self.tile_at(Point::new(row, col)) {
                    Some(tile) if !tile.blank => write!(f, "{:>2} ", tile.label)?,
                    _ => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod tests;
