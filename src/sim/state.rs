//! Game state and round life-cycle
//!
//! Everything the simulation mutates lives here, owned by one `GameState`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::asteroid::Asteroid;
use super::projectile::Projectile;
use super::ship::Ship;
use crate::config::GameConfig;
use crate::score::Score;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Ship destroyed, final score frozen
    GameOver,
}

/// Outcomes reported to the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began
    RoundStarted,
    /// Projectile launched
    ShotFired,
    /// Ship turned to a new facing
    ShipRotated { degrees: u32 },
    /// Projectile struck an asteroid, which was sent back to an edge
    AsteroidDestroyed { id: u32, at: IVec2 },
    /// Projectile left the valid range without hitting anything
    ProjectileExpired { at: IVec2 },
    /// Difficulty escalation added an asteroid
    AsteroidAdded { id: u32, total: usize },
    /// An asteroid reached the ship; the round is over
    ShipDestroyed { by: u32, score: Score },
    /// Back on the title screen
    ReturnedToMenu,
}

/// Complete simulation state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG, owned by the session
    pub(super) rng: Pcg32,
    pub phase: GamePhase,
    pub ship: Ship,
    /// Active asteroids in insertion order (also collision order)
    pub asteroids: Vec<Asteroid>,
    pub projectile: Projectile,
    pub score: Score,
    /// Number of escalation ticks this round
    pub escalations: u32,
    /// Score frozen at game over
    pub final_score: Option<Score>,
    /// Next asteroid id
    next_id: u32,
}

impl GameState {
    /// Create a session on the menu screen with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, seed, Pcg32::seed_from_u64(seed))
    }

    /// Create a session with an explicit random source
    pub fn with_rng(config: GameConfig, seed: u64, rng: Pcg32) -> Self {
        let ship_cell = config.ship_cell;
        Self {
            config,
            seed,
            rng,
            phase: GamePhase::Menu,
            ship: Ship::default(),
            asteroids: Vec::new(),
            projectile: Projectile::idle(ship_cell),
            score: Score::default(),
            escalations: 0,
            final_score: None,
            next_id: 1,
        }
    }

    #[inline]
    pub fn grid_size(&self) -> i32 {
        self.config.grid_size
    }

    #[inline]
    pub fn ship_cell(&self) -> IVec2 {
        self.config.ship_cell
    }

    /// Allocate a new asteroid id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a freshly spawned asteroid, returning its id
    pub fn spawn_asteroid(&mut self) -> u32 {
        let id = self.next_entity_id();
        let asteroid =
            Asteroid::spawned(id, &mut self.rng, self.config.grid_size, self.config.spawn_spread);
        self.asteroids.push(asteroid);
        id
    }

    /// Append an asteroid at an explicit cell and heading, returning its id
    pub fn place_asteroid(&mut self, pos: IVec2, dir: IVec2) -> u32 {
        let id = self.next_entity_id();
        self.asteroids.push(Asteroid::new(id, pos, dir));
        id
    }

    /// Menu -> Playing. Rebuilds every piece of round state.
    pub fn start_round(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            log::warn!("Ignoring start request in {:?}", self.phase);
            return false;
        }

        self.clear_round();
        for _ in 0..self.config.initial_asteroids {
            self.spawn_asteroid();
        }
        self.phase = GamePhase::Playing;

        log::info!(
            "Round started (seed {}, {} asteroids)",
            self.seed,
            self.asteroids.len()
        );
        true
    }

    /// Playing -> GameOver. Freezes the score.
    pub fn end_round(&mut self) -> Option<Score> {
        if self.phase != GamePhase::Playing {
            log::warn!("Ignoring end-of-round request in {:?}", self.phase);
            return None;
        }

        let score = self.score;
        self.phase = GamePhase::GameOver;
        self.final_score = Some(score);
        self.projectile.deactivate(self.config.ship_cell);

        log::info!(
            "Game over: {} destroyed, {} shots fired, {} escalations",
            score.asteroids_destroyed,
            score.shots_fired,
            self.escalations
        );
        Some(score)
    }

    /// GameOver -> Menu. Nothing from the finished round survives.
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            log::warn!("Ignoring return-to-menu request in {:?}", self.phase);
            return false;
        }

        self.clear_round();
        self.phase = GamePhase::Menu;
        log::info!("Returned to menu");
        true
    }

    fn clear_round(&mut self) {
        self.asteroids.clear();
        self.next_id = 1;
        self.ship = Ship::default();
        self.projectile = Projectile::idle(self.config.ship_cell);
        self.score = Score::default();
        self.escalations = 0;
        self.final_score = None;
    }
}
