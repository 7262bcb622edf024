//! Grid Asteroids - a fixed-grid asteroid shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, round state)
//! - `scheduler`: Fixed-period tick channels and the `Game` facade that drives `sim`
//! - `board`: Read-only render surface (row-major cell arena, snapshots)
//! - `score`: Shot accounting and score-screen text
//! - `config`: Data-driven game constants
//! - `autopilot`: Demo-mode pilot used by the headless driver

pub mod autopilot;
pub mod board;
pub mod config;
pub mod scheduler;
pub mod score;
pub mod sim;

pub use board::{Board, Cell, Snapshot};
pub use config::{ConfigError, GameConfig};
pub use scheduler::{Game, Scheduler};
pub use sim::{GameEvent, GamePhase, GameState, Input, Turn};
pub use score::Score;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Side length of the square grid
    pub const GRID_SIZE: i32 = 23;
    /// Ship cell (row, column) - center of the default grid
    pub const SHIP_ROW: i32 = 11;
    pub const SHIP_COL: i32 = 11;

    /// Asteroids created at round start
    pub const INITIAL_ASTEROIDS: usize = 3;

    /// Channel periods (milliseconds)
    pub const ASTEROID_PERIOD_MS: u64 = 600;
    pub const PROJECTILE_PERIOD_MS: u64 = 50;
    pub const ESCALATION_PERIOD_MS: u64 = 30_000;

    /// Std-dev of the spawn coordinate along an edge
    pub const SPAWN_SPREAD: f64 = 6.0;

    /// Rotation step per keypress (degrees)
    pub const ROTATION_STEP: u32 = 45;

    /// Maximum ticks a single channel may emit per update (prevents spiral of death)
    pub const MAX_CATCHUP_TICKS: u32 = 64;
}

/// True iff `cell` lies strictly inside the grid, leaving one cell of margin at
/// the far edge (row/col `size - 1`) but none at the near edge.
#[inline]
pub fn inside_far_margin(cell: IVec2, size: i32) -> bool {
    cell.x > -1 && cell.x < size - 1 && cell.y > -1 && cell.y < size - 1
}

/// True iff `cell` lies inside the grid excluding the outermost ring.
#[inline]
pub fn inside_inner_ring(cell: IVec2, size: i32) -> bool {
    cell.x > 0 && cell.x < size - 1 && cell.y > 0 && cell.y < size - 1
}
