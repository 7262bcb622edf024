//! Tick scheduling
//!
//! The simulation knows nothing about time. `Scheduler` turns elapsed
//! wall-clock (or simulated) time into an ordered list of due ticks, and `Game`
//! feeds those ticks plus queued player input through `sim::apply`, the only
//! place simulation state changes.

use std::collections::VecDeque;
use std::time::Duration;

use crate::board::{Board, Snapshot};
use crate::config::{ConfigError, GameConfig};
use crate::consts::MAX_CATCHUP_TICKS;
use crate::sim::{GameEvent, GamePhase, GameState, Input, SimEvent, TickKind, apply};

/// One fixed-period tick source
#[derive(Debug, Clone)]
pub struct Channel {
    pub kind: TickKind,
    period: Duration,
    /// Time since the last tick (always < period between updates)
    elapsed: Duration,
    running: bool,
}

impl Channel {
    pub fn new(kind: TickKind, period: Duration) -> Self {
        Self {
            kind,
            period,
            elapsed: Duration::ZERO,
            running: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Accumulate `dt` and record every tick that fell due, as an offset from
    /// the start of this update
    fn advance(&mut self, dt: Duration, due: &mut Vec<(Duration, TickKind)>) {
        if !self.running || self.period.is_zero() {
            return;
        }

        let before = self.elapsed;
        self.elapsed += dt;

        let mut fired: u32 = 0;
        while self.elapsed >= self.period {
            if fired == MAX_CATCHUP_TICKS {
                let backlog = self.elapsed.as_nanos() / self.period.as_nanos();
                log::warn!("{:?} channel dropped {} late ticks", self.kind, backlog);
                self.elapsed = Duration::from_nanos(
                    (self.elapsed.as_nanos() % self.period.as_nanos()) as u64,
                );
                break;
            }
            fired += 1;
            self.elapsed -= self.period;
            due.push((self.period * fired - before, self.kind));
        }
    }
}

/// Same-instant ordering: grow the field, then move asteroids, then the shot
fn priority(kind: TickKind) -> u8 {
    match kind {
        TickKind::Escalation => 0,
        TickKind::Asteroids => 1,
        TickKind::Projectile => 2,
    }
}

/// The three round channels
#[derive(Debug, Clone)]
pub struct Scheduler {
    pub asteroids: Channel,
    pub projectile: Channel,
    pub escalation: Channel,
}

impl Scheduler {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            asteroids: Channel::new(TickKind::Asteroids, config.asteroid_period()),
            projectile: Channel::new(TickKind::Projectile, config.projectile_period()),
            escalation: Channel::new(TickKind::Escalation, config.escalation_period()),
        }
    }

    pub fn start(&mut self) {
        self.asteroids.start();
        self.projectile.start();
        self.escalation.start();
    }

    pub fn stop(&mut self) {
        self.asteroids.stop();
        self.projectile.stop();
        self.escalation.stop();
    }

    pub fn is_running(&self) -> bool {
        self.asteroids.is_running() || self.projectile.is_running() || self.escalation.is_running()
    }

    /// Ticks that fell due during `dt`, in firing order
    pub fn advance(&mut self, dt: Duration) -> Vec<TickKind> {
        let mut due = Vec::new();
        self.asteroids.advance(dt, &mut due);
        self.projectile.advance(dt, &mut due);
        self.escalation.advance(dt, &mut due);

        due.sort_by_key(|(at, kind)| (*at, priority(*kind)));
        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

/// Front-end facade: one session plus its scheduler and input queue
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    scheduler: Scheduler,
    pending: VecDeque<Input>,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::from_state(GameState::new(config, seed))
    }

    /// Wrap an existing session; channels start running if it is mid-round
    pub fn from_state(state: GameState) -> Result<Self, ConfigError> {
        state.config.validate()?;
        let scheduler = Scheduler::from_config(&state.config);
        let mut game = Self {
            state,
            scheduler,
            pending: VecDeque::new(),
        };
        if game.state.phase == GamePhase::Playing {
            game.scheduler.start();
        }
        Ok(game)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Queue a command; it takes effect on the next `update`
    pub fn push_input(&mut self, input: Input) {
        self.pending.push_back(input);
    }

    /// Apply queued input, then every tick that fell due during `elapsed`
    pub fn update(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();

        while let Some(input) = self.pending.pop_front() {
            self.step(SimEvent::Input(input), &mut events);
        }

        for kind in self.scheduler.advance(elapsed) {
            if !self.scheduler.is_running() {
                break;
            }
            self.step(SimEvent::Tick(kind), &mut events);
        }

        events
    }

    fn step(&mut self, event: SimEvent, events: &mut Vec<GameEvent>) {
        let Some(outcome) = apply(&mut self.state, event) else {
            return;
        };
        match outcome {
            GameEvent::RoundStarted => self.scheduler.start(),
            GameEvent::ShipDestroyed { .. } | GameEvent::ReturnedToMenu => self.scheduler.stop(),
            _ => {}
        }
        events.push(outcome);
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn board(&self) -> Board {
        Board::from_state(&self.state)
    }
}
