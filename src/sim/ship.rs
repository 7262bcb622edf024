//! Ship orientation
//!
//! The ship never moves; it only turns in 45-degree steps. Facing is derived
//! from the accumulated rotation, and the sprite's diagonal flag is tracked
//! separately because it only matters to renderers.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::ROTATION_STEP;

/// Turn direction for a rotate command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Left,
    Right,
}

impl Turn {
    /// Degrees added to the accumulator (left is encoded as +315 to stay
    /// non-negative)
    pub fn degrees(self) -> u32 {
        match self {
            Turn::Left => 360 - ROTATION_STEP,
            Turn::Right => ROTATION_STEP,
        }
    }
}

/// 8-way compass facing, clockwise from north
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Facing {
    pub const ALL: [Facing; 8] = [
        Facing::North,
        Facing::NorthEast,
        Facing::East,
        Facing::SouthEast,
        Facing::South,
        Facing::SouthWest,
        Facing::West,
        Facing::NorthWest,
    ];

    /// Facing for an accumulated rotation; only `degrees % 360` matters
    pub fn from_degrees(degrees: u64) -> Self {
        let step = ((degrees % 360) / ROTATION_STEP as u64) as usize;
        Self::ALL[step % Self::ALL.len()]
    }

    /// Heading in degrees (0 = north, clockwise)
    pub fn degrees(self) -> u32 {
        self as u32 * ROTATION_STEP
    }

    /// Firing direction as (row, column) step. North is up the board (-row).
    pub fn direction(self) -> IVec2 {
        match self {
            Facing::North => IVec2::new(-1, 0),
            Facing::NorthEast => IVec2::new(-1, 1),
            Facing::East => IVec2::new(0, 1),
            Facing::SouthEast => IVec2::new(1, 1),
            Facing::South => IVec2::new(1, 0),
            Facing::SouthWest => IVec2::new(1, -1),
            Facing::West => IVec2::new(0, -1),
            Facing::NorthWest => IVec2::new(-1, -1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let d = self.direction();
        d.x != 0 && d.y != 0
    }

    pub fn label(self) -> &'static str {
        match self {
            Facing::North => "N",
            Facing::NorthEast => "NE",
            Facing::East => "E",
            Facing::SouthEast => "SE",
            Facing::South => "S",
            Facing::SouthWest => "SW",
            Facing::West => "W",
            Facing::NorthWest => "NW",
        }
    }
}

/// The player's ship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    /// Accumulated rotation in degrees (multiple of 45, never reduced)
    pub rotation: u64,
    /// Sprite selector, flipped on every turn
    pub diagonal: bool,
}

impl Ship {
    pub fn rotate(&mut self, turn: Turn) {
        self.rotation += turn.degrees() as u64;
        self.diagonal = !self.diagonal;
    }

    pub fn facing(&self) -> Facing {
        Facing::from_degrees(self.rotation)
    }

    /// Angle a renderer should rotate the sprite by; diagonal sprites are
    /// drawn pre-rotated by one step
    pub fn sprite_rotation(&self) -> u32 {
        let degrees = (self.rotation % 360) as u32;
        if self.diagonal {
            (degrees + 360 - ROTATION_STEP) % 360
        } else {
            degrees
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_facing_table() {
        let expected = [
            (0, (-1, 0)),
            (45, (-1, 1)),
            (90, (0, 1)),
            (135, (1, 1)),
            (180, (1, 0)),
            (225, (1, -1)),
            (270, (0, -1)),
            (315, (-1, -1)),
        ];
        for (degrees, (x, y)) in expected {
            assert_eq!(Facing::from_degrees(degrees).direction(), IVec2::new(x, y));
        }
    }

    #[test]
    fn test_rotate_left_wraps_to_northwest() {
        let mut ship = Ship::default();
        ship.rotate(Turn::Left);
        assert_eq!(ship.rotation, 315);
        assert_eq!(ship.facing(), Facing::NorthWest);
        assert!(ship.diagonal);

        ship.rotate(Turn::Right);
        assert_eq!(ship.rotation, 360);
        assert_eq!(ship.facing(), Facing::North);
        assert!(!ship.diagonal);
    }

    #[test]
    fn test_sprite_rotation() {
        let mut ship = Ship::default();
        ship.rotate(Turn::Right);
        // Diagonal sprite is already drawn at 45 degrees
        assert_eq!(ship.sprite_rotation(), 0);
        ship.rotate(Turn::Right);
        assert_eq!(ship.sprite_rotation(), 90);
    }

    proptest! {
        #[test]
        fn facing_depends_only_on_rotation_mod_360(turns in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut ship = Ship::default();
            let mut net: i64 = 0;
            for right in turns {
                if right {
                    ship.rotate(Turn::Right);
                    net += 1;
                } else {
                    ship.rotate(Turn::Left);
                    net -= 1;
                }
            }
            let expected = Facing::ALL[net.rem_euclid(8) as usize];
            prop_assert_eq!(ship.facing(), expected);
            prop_assert_eq!(ship.rotation % 45, 0);
        }
    }
}
