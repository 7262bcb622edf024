//! Render surface
//!
//! Renderers never touch `GameState` directly. They either rasterize it into a
//! `Board` (a flat row-major cell arena addressed by `(row, col)`) or take a
//! serializable `Snapshot` that can cross thread boundaries.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::score::Score;
use crate::sim::{Facing, GamePhase, GameState};

/// Contents of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Ship(Facing),
    Asteroid,
    Projectile,
}

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Asteroid => '@',
            Cell::Projectile => '*',
            Cell::Ship(facing) => match facing {
                Facing::North => '^',
                Facing::South => 'v',
                Facing::East => '>',
                Facing::West => '<',
                Facing::NorthEast | Facing::SouthWest => '/',
                Facing::NorthWest | Facing::SouthEast => '\\',
            },
        }
    }
}

/// Row-major grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    cells: Vec<Cell>,
}

impl Board {
    pub fn empty(size: i32) -> Self {
        let side = size.max(0) as usize;
        Self {
            size,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Rasterize a session. Later layers win: asteroids, projectile, ship.
    pub fn from_state(state: &GameState) -> Self {
        let mut board = Self::empty(state.grid_size());
        if state.phase == GamePhase::Menu {
            return board;
        }

        for asteroid in &state.asteroids {
            board.set(asteroid.pos, Cell::Asteroid);
        }
        if state.projectile.active {
            board.set(state.projectile.pos, Cell::Projectile);
        }
        // A wreck shows the asteroid that hit the ship
        if state.phase == GamePhase::Playing {
            board.set(state.ship_cell(), Cell::Ship(state.ship.facing()));
        }
        board
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Flat index for `(row, col)`, None if off the board
    #[inline]
    pub fn index(&self, cell: IVec2) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 || cell.x >= self.size || cell.y >= self.size {
            return None;
        }
        Some((cell.x * self.size + cell.y) as usize)
    }

    pub fn get(&self, cell: IVec2) -> Option<Cell> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Write a cell; off-board positions are skipped
    pub fn set(&mut self, cell: IVec2, value: Cell) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    pub fn count(&self, value: Cell) -> usize {
        self.cells.iter().filter(|c| **c == value).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Serializable read-only view of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub grid_size: i32,
    pub ship_cell: IVec2,
    pub facing: Facing,
    /// Sprite selector for renderers with separate diagonal art
    pub diagonal: bool,
    pub sprite_rotation: u32,
    pub asteroids: Vec<IVec2>,
    pub projectile: Option<IVec2>,
    pub score: Score,
    pub escalations: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            grid_size: state.grid_size(),
            ship_cell: state.ship_cell(),
            facing: state.ship.facing(),
            diagonal: state.ship.diagonal,
            sprite_rotation: state.ship.sprite_rotation(),
            asteroids: state.asteroids.iter().map(|a| a.pos).collect(),
            projectile: state.projectile.active.then_some(state.projectile.pos),
            score: state.final_score.unwrap_or(state.score),
            escalations: state.escalations,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
