//! Asteroid entity
//!
//! Asteroids are never removed from a round. Leaving the board or being shot
//! rolls a fresh spawn point into the same slot.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::spawn::{SpawnPoint, spawn};
use crate::inside_far_margin;

/// A drifting asteroid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asteroid {
    /// Stable id (insertion order within the round)
    pub id: u32,
    /// Cell as (row, column); may leave the grid between ticks
    pub pos: IVec2,
    /// Per-tick step, each component in {-1, 0, 1}
    pub dir: IVec2,
}

impl Asteroid {
    /// Build an asteroid at an explicit cell and heading
    pub fn new(id: u32, pos: IVec2, dir: IVec2) -> Self {
        Self { id, pos, dir }
    }

    /// Roll a fresh asteroid on a random edge
    pub fn spawned<R: Rng + ?Sized>(id: u32, rng: &mut R, grid_size: i32, spread: f64) -> Self {
        let SpawnPoint { pos, dir, .. } = spawn(rng, grid_size, spread);
        Self { id, pos, dir }
    }

    /// Step one cell along the heading (no clamping)
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.dir;
    }

    /// Still on the board; the far row/column counts as off-board since the
    /// sprite is anchored at its top-left corner
    #[inline]
    pub fn in_bounds(&self, grid_size: i32) -> bool {
        inside_far_margin(self.pos, grid_size)
    }

    #[inline]
    pub fn collided_with(&self, ship_cell: IVec2) -> bool {
        self.pos == ship_cell
    }

    /// Overwrite position and heading with a new spawn roll
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, grid_size: i32, spread: f64) {
        let SpawnPoint { pos, dir, .. } = spawn(rng, grid_size, spread);
        self.pos = pos;
        self.dir = dir;
    }
}
