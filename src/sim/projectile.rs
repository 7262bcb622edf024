//! The ship's single projectile

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::inside_inner_ring;

/// At most one projectile is in flight at a time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: IVec2,
    pub dir: IVec2,
    pub active: bool,
}

impl Projectile {
    /// An idle projectile parked on the ship cell
    pub fn idle(ship_cell: IVec2) -> Self {
        Self {
            pos: ship_cell,
            dir: IVec2::ZERO,
            active: false,
        }
    }

    /// Launch from the ship cell. Returns false (and changes nothing) if a
    /// projectile is already in flight.
    pub fn fire(&mut self, ship_cell: IVec2, dir: IVec2) -> bool {
        if self.active {
            return false;
        }
        self.pos = ship_cell;
        self.dir = dir;
        self.active = true;
        true
    }

    /// Inside the board excluding the outer ring
    #[inline]
    pub fn in_valid_range(&self, grid_size: i32) -> bool {
        inside_inner_ring(self.pos, grid_size)
    }

    #[inline]
    pub fn step(&mut self) {
        self.pos += self.dir;
    }

    /// Take the projectile out of play and park it back on the ship
    pub fn deactivate(&mut self, ship_cell: IVec2) {
        self.active = false;
        self.pos = ship_cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_is_ignored_while_active() {
        let ship = IVec2::new(11, 11);
        let mut projectile = Projectile::idle(ship);

        assert!(projectile.fire(ship, IVec2::new(-1, 0)));
        projectile.step();
        assert!(!projectile.fire(ship, IVec2::new(0, 1)));

        assert!(projectile.active);
        assert_eq!(projectile.pos, IVec2::new(10, 11));
        assert_eq!(projectile.dir, IVec2::new(-1, 0));
    }

    #[test]
    fn test_valid_range_excludes_outer_ring() {
        let mut projectile = Projectile::idle(IVec2::new(11, 11));
        assert!(projectile.in_valid_range(23));
        projectile.pos = IVec2::new(0, 11);
        assert!(!projectile.in_valid_range(23));
        projectile.pos = IVec2::new(11, 22);
        assert!(!projectile.in_valid_range(23));
        projectile.pos = IVec2::new(1, 21);
        assert!(projectile.in_valid_range(23));
    }

    #[test]
    fn test_deactivate_parks_on_ship() {
        let ship = IVec2::new(11, 11);
        let mut projectile = Projectile::idle(ship);
        projectile.fire(ship, IVec2::new(1, 1));
        projectile.step();
        projectile.deactivate(ship);
        assert!(!projectile.active);
        assert_eq!(projectile.pos, ship);
    }
}
