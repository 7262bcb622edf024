//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete grid steps only, no wall-clock reads
//! - Session-owned seeded RNG only
//! - Stable iteration order (asteroid insertion order)
//! - No rendering or platform dependencies

pub mod asteroid;
pub mod projectile;
pub mod ship;
pub mod spawn;
pub mod state;
pub mod tick;

pub use asteroid::Asteroid;
pub use projectile::Projectile;
pub use ship::{Facing, Ship, Turn};
pub use spawn::{Edge, SpawnPoint, spawn};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{Input, SimEvent, TickKind, apply};
