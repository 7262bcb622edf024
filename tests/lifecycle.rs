use std::time::Duration;

use glam::IVec2;
use proptest::prelude::*;

use grid_asteroids::score::game_over_summary;
use grid_asteroids::sim::tick::{advance_asteroids, advance_projectile, fire};
use grid_asteroids::{Game, GameConfig, GameEvent, GamePhase, GameState, Input, Score, Turn};

/// Drive a session straight into GameOver by parking an asteroid next to the ship
fn crash(state: &mut GameState) {
    state.asteroids.clear();
    state.place_asteroid(IVec2::new(10, 11), IVec2::new(1, 0));
    assert!(matches!(
        advance_asteroids(state),
        Some(GameEvent::ShipDestroyed { .. })
    ));
}

#[test]
fn round_trip_resets_everything() {
    let mut state = GameState::new(GameConfig::default(), 31337);
    assert!(state.start_round());

    fire(&mut state);
    for _ in 0..3 {
        grid_asteroids::sim::tick::escalate(&mut state);
    }
    state.ship.rotate(Turn::Left);
    crash(&mut state);

    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.final_score.map(|s| s.shots_fired), Some(1));

    assert!(state.return_to_menu());
    assert_eq!(state.phase, GamePhase::Menu);
    assert!(state.asteroids.is_empty());
    assert_eq!(state.final_score, None);

    assert!(state.start_round());
    assert_eq!(state.asteroids.len(), 3);
    assert_eq!(state.score.shots_fired, 0);
    assert_eq!(state.score.asteroids_destroyed, 0);
    assert_eq!(state.escalations, 0);
    assert!(!state.projectile.active);
    assert_eq!(state.ship.rotation, 0);
}

#[test]
fn game_over_stops_all_channels() {
    let mut state = GameState::new(GameConfig::default(), 8);
    state.start_round();
    state.asteroids.clear();
    state.place_asteroid(IVec2::new(10, 11), IVec2::new(1, 0));

    let mut game = Game::from_state(state).unwrap();
    assert!(game.scheduler().is_running());

    let events = game.update(Duration::from_millis(600));
    assert!(matches!(
        events.last(),
        Some(GameEvent::ShipDestroyed { .. })
    ));
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(!game.scheduler().is_running());

    // Nothing moves after the round ends, even across an escalation period
    let frozen = game.state().asteroids.clone();
    assert!(game.update(Duration::from_secs(60)).is_empty());
    assert_eq!(game.state().asteroids, frozen);

    game.push_input(Input::ReturnToMenu);
    assert_eq!(game.update(Duration::ZERO), vec![GameEvent::ReturnedToMenu]);
    assert_eq!(game.phase(), GamePhase::Menu);
}

#[test]
fn projectile_channel_destroys_asteroid_in_its_path() {
    let mut state = GameState::new(GameConfig::default(), 99);
    state.start_round();
    state.asteroids.clear();
    let target = state.place_asteroid(IVec2::new(11, 16), IVec2::ZERO);

    let mut game = Game::from_state(state).unwrap();
    game.push_input(Input::Rotate(Turn::Right));
    game.push_input(Input::Rotate(Turn::Right));
    game.push_input(Input::Fire);

    // Five projectile ticks at 50 ms reach (11, 16)
    let events = game.update(Duration::from_millis(250));
    assert!(events.contains(&GameEvent::AsteroidDestroyed {
        id: target,
        at: IVec2::new(11, 16)
    }));

    let score = game.state().score;
    assert_eq!(score.shots_fired, 1);
    assert_eq!(score.asteroids_destroyed, 1);
    assert_eq!(
        game_over_summary(&score),
        "Number of Asteroids Destroyed: 1     Accuracy: 100%"
    );
}

#[test]
fn projectile_hits_on_outer_ring_then_expires_past_it() {
    let mut state = GameState::new(GameConfig::default(), 5);
    state.start_round();
    state.asteroids.clear();
    state.place_asteroid(IVec2::new(0, 11), IVec2::ZERO);

    fire(&mut state);
    for _ in 0..11 {
        advance_projectile(&mut state);
    }
    // Projectile moved onto the asteroid's cell on the 11th step
    assert_eq!(state.score.asteroids_destroyed, 1);
    assert!(!state.projectile.active);

    state.asteroids.clear();
    fire(&mut state);
    for _ in 0..12 {
        advance_projectile(&mut state);
    }
    assert!(!state.projectile.active);
    assert_eq!(state.score.asteroids_destroyed, 1);
    assert_eq!(state.score.shots_fired, 2);
}

proptest! {
    #[test]
    fn any_seed_round_trip_resets(seed in any::<u64>(), escalations in 0usize..10) {
        let mut state = GameState::new(GameConfig::default(), seed);
        state.start_round();
        for _ in 0..escalations {
            grid_asteroids::sim::tick::escalate(&mut state);
        }
        prop_assert_eq!(state.asteroids.len(), 3 + escalations);

        crash(&mut state);
        state.return_to_menu();
        state.start_round();

        prop_assert_eq!(state.asteroids.len(), 3);
        prop_assert_eq!(state.score, Score::default());
        for asteroid in &state.asteroids {
            let on_edge = asteroid.pos.x == 0 || asteroid.pos.y == 0
                || asteroid.pos.x == 22 || asteroid.pos.y == 22;
            prop_assert!(on_edge, "{:?}", asteroid);
        }
    }

    #[test]
    fn asteroids_stay_near_the_board(seed in any::<u64>(), ticks in 1usize..200) {
        let mut state = GameState::new(GameConfig::default(), seed);
        state.start_round();
        for _ in 0..ticks {
            if advance_asteroids(&mut state).is_some() {
                break;
            }
        }
        // Out-of-bounds asteroids are respawned the same tick
        if state.phase == GamePhase::Playing {
            for asteroid in &state.asteroids {
                prop_assert!(asteroid.pos.x >= 0 && asteroid.pos.x <= 22);
                prop_assert!(asteroid.pos.y >= 0 && asteroid.pos.y <= 22);
            }
        }
    }
}
