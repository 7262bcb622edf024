//! Demo-mode pilot
//!
//! Picks the nearest asteroid sitting on one of the ship's eight firing lines,
//! turns toward it by the shorter way round, and fires once lined up.

use glam::IVec2;

use crate::sim::{Facing, GamePhase, GameState, Input, Turn};

/// Facing whose firing line passes through `offset` (relative to the ship)
pub fn facing_toward(offset: IVec2) -> Option<Facing> {
    if offset == IVec2::ZERO {
        return None;
    }
    let on_line = offset.x == 0 || offset.y == 0 || offset.x.abs() == offset.y.abs();
    if !on_line {
        return None;
    }
    let step = offset.signum();
    Facing::ALL.into_iter().find(|f| f.direction() == step)
}

/// Shorter rotation from `from` to `to` (None if already there)
pub fn turn_toward(from: Facing, to: Facing) -> Option<Turn> {
    let diff = (to as i32 - from as i32).rem_euclid(Facing::ALL.len() as i32);
    match diff {
        0 => None,
        1..=4 => Some(Turn::Right),
        _ => Some(Turn::Left),
    }
}

/// Next command for the pilot, if any
pub fn decide(state: &GameState) -> Option<Input> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let ship = state.ship_cell();
    let target = state
        .asteroids
        .iter()
        .filter_map(|a| {
            let offset = a.pos - ship;
            facing_toward(offset).map(|f| (offset.abs().max_element(), f))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, facing)| facing)?;

    match turn_toward(state.ship.facing(), target) {
        Some(turn) => Some(Input::Rotate(turn)),
        None if !state.projectile.active => Some(Input::Fire),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_facing_toward_lines() {
        assert_eq!(facing_toward(IVec2::new(-5, 0)), Some(Facing::North));
        assert_eq!(facing_toward(IVec2::new(3, -3)), Some(Facing::SouthWest));
        assert_eq!(facing_toward(IVec2::new(0, 7)), Some(Facing::East));
        assert_eq!(facing_toward(IVec2::new(2, 5)), None);
        assert_eq!(facing_toward(IVec2::ZERO), None);
    }

    #[test]
    fn test_turn_takes_short_way() {
        assert_eq!(turn_toward(Facing::North, Facing::East), Some(Turn::Right));
        assert_eq!(turn_toward(Facing::North, Facing::West), Some(Turn::Left));
        assert_eq!(turn_toward(Facing::NorthWest, Facing::NorthEast), Some(Turn::Right));
        assert_eq!(turn_toward(Facing::South, Facing::South), None);
    }

    #[test]
    fn test_decide_fires_when_lined_up() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start_round();
        state.asteroids.clear();
        state.place_asteroid(IVec2::new(4, 11), IVec2::new(1, 0));
        state.place_asteroid(IVec2::new(11, 20), IVec2::new(0, -1));

        assert_eq!(decide(&state), Some(Input::Fire));
    }

    #[test]
    fn test_decide_turns_toward_nearest() {
        let mut state = GameState::new(GameConfig::default(), 1);
        state.start_round();
        state.asteroids.clear();
        state.place_asteroid(IVec2::new(1, 11), IVec2::new(1, 0));
        state.place_asteroid(IVec2::new(11, 14), IVec2::new(0, -1));

        assert_eq!(decide(&state), Some(Input::Rotate(Turn::Right)));
    }

    #[test]
    fn test_decide_idle_on_menu() {
        let state = GameState::new(GameConfig::default(), 1);
        assert_eq!(decide(&state), None);
    }
}
