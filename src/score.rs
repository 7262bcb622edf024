//! Score accounting and score-screen text
//!
//! Scores live for one round only; nothing is written to disk.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Menu help text
pub const HOW_TO_PLAY: &str = "How To Play:\n\
    Use the spacebar to attack.\n\
    Use the left arrow key to rotate the ship to its left.\n\
    Use the right arrow key to rotate the ship to its right.\n\
    The number of asteroids increases the longer you survive.";

/// Per-round shot counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub shots_fired: u32,
    pub asteroids_destroyed: u32,
}

impl Score {
    /// Hit percentage, or None if nothing was fired
    pub fn accuracy(&self) -> Option<f64> {
        if self.shots_fired == 0 {
            return None;
        }
        Some(self.asteroids_destroyed as f64 / self.shots_fired as f64 * 100.0)
    }

    pub fn accuracy_report(&self) -> Accuracy {
        match self.accuracy() {
            Some(percent) => Accuracy::Percent(percent),
            None => Accuracy::NoShots,
        }
    }
}

/// Accuracy line shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    NoShots,
    Percent(f64),
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Accuracy::NoShots => write!(f, "No shots were fired!"),
            Accuracy::Percent(p) => write!(f, "{}%", format_significant(*p, 3)),
        }
    }
}

/// Format `value` with `digits` significant digits (`25.0`, `33.3`, `100`)
pub fn format_significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1) as i32;
    if value == 0.0 || !value.is_finite() {
        return format!("{:.*}", (digits - 1) as usize, value);
    }

    let decimals_for = |v: f64| (digits - 1 - v.abs().log10().floor() as i32).max(0);
    let decimals = decimals_for(value);
    // Rounding can carry into a new digit (99.96 -> 100.0), so recompute
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", decimals_for(rounded) as usize, rounded)
}

/// Full score line for the game-over screen
pub fn game_over_summary(score: &Score) -> String {
    format!(
        "Number of Asteroids Destroyed: {}     Accuracy: {}",
        score.asteroids_destroyed,
        score.accuracy_report()
    )
}
