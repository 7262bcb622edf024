//! Tick handlers and player commands
//!
//! `apply` is the single path through which the simulation is mutated. Each
//! call runs to completion and reports at most one `GameEvent`.

use serde::{Deserialize, Serialize};

use super::ship::Turn;
use super::state::{GameEvent, GamePhase, GameState};

/// Periodic simulation channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickKind {
    /// Move every asteroid one cell
    Asteroids,
    /// Move the projectile one cell
    Projectile,
    /// Add one asteroid
    Escalation,
}

/// Discrete player / menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Start,
    Rotate(Turn),
    Fire,
    ReturnToMenu,
}

/// Anything that can mutate the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Tick(TickKind),
    Input(Input),
}

/// Apply one tick or command to the state
pub fn apply(state: &mut GameState, event: SimEvent) -> Option<GameEvent> {
    match event {
        SimEvent::Tick(TickKind::Asteroids) => advance_asteroids(state),
        SimEvent::Tick(TickKind::Projectile) => advance_projectile(state),
        SimEvent::Tick(TickKind::Escalation) => escalate(state),
        SimEvent::Input(input) => handle_input(state, input),
    }
}

/// Apply a player / menu command
pub fn handle_input(state: &mut GameState, input: Input) -> Option<GameEvent> {
    match input {
        Input::Start => state.start_round().then_some(GameEvent::RoundStarted),
        Input::ReturnToMenu => state.return_to_menu().then_some(GameEvent::ReturnedToMenu),
        Input::Rotate(turn) => rotate(state, turn),
        Input::Fire => fire(state),
    }
}

/// Turn the ship one step
pub fn rotate(state: &mut GameState, turn: Turn) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }
    state.ship.rotate(turn);
    Some(GameEvent::ShipRotated {
        degrees: state.ship.facing().degrees(),
    })
}

/// Launch the projectile along the ship's facing (no-op while one is in flight)
pub fn fire(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }
    let dir = state.ship.facing().direction();
    let ship_cell = state.ship_cell();
    if !state.projectile.fire(ship_cell, dir) {
        return None;
    }
    state.score.shots_fired += 1;
    Some(GameEvent::ShotFired)
}

/// Asteroid channel: move each asteroid in insertion order. The first one to
/// reach the ship ends the round and the rest are left untouched.
pub fn advance_asteroids(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let grid_size = state.config.grid_size;
    let spread = state.config.spawn_spread;
    let ship_cell = state.config.ship_cell;

    for idx in 0..state.asteroids.len() {
        let asteroid = &mut state.asteroids[idx];
        asteroid.advance();

        if asteroid.collided_with(ship_cell) {
            let by = asteroid.id;
            let score = state.end_round()?;
            return Some(GameEvent::ShipDestroyed { by, score });
        }

        if !asteroid.in_bounds(grid_size) {
            asteroid.respawn(&mut state.rng, grid_size, spread);
        }
    }
    None
}

/// Projectile channel: step the projectile, then check it against asteroids
/// in insertion order (first match wins)
pub fn advance_projectile(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing || !state.projectile.active {
        return None;
    }

    let grid_size = state.config.grid_size;
    let ship_cell = state.config.ship_cell;

    if !state.projectile.in_valid_range(grid_size) {
        let at = state.projectile.pos;
        state.projectile.deactivate(ship_cell);
        return Some(GameEvent::ProjectileExpired { at });
    }

    state.projectile.step();
    let at = state.projectile.pos;

    let spread = state.config.spawn_spread;
    let hit = state.asteroids.iter_mut().find(|a| a.pos == at)?;
    let id = hit.id;
    hit.respawn(&mut state.rng, grid_size, spread);

    state.projectile.deactivate(ship_cell);
    state.score.asteroids_destroyed += 1;
    log::debug!("Asteroid {} destroyed at ({}, {})", id, at.x, at.y);
    Some(GameEvent::AsteroidDestroyed { id, at })
}

/// Escalation channel: one more asteroid for the rest of the round
pub fn escalate(state: &mut GameState) -> Option<GameEvent> {
    if state.phase != GamePhase::Playing {
        return None;
    }
    let id = state.spawn_asteroid();
    state.escalations += 1;
    let total = state.asteroids.len();
    log::debug!("Escalation {}: {} asteroids", state.escalations, total);
    Some(GameEvent::AsteroidAdded { id, total })
}
