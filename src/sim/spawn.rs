//! Asteroid spawn policy
//!
//! New asteroids enter on one of the four grid edges, clustered around the
//! middle of that edge, heading into the board. The random source is always
//! passed in; nothing here touches global state.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Grid edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// Row 0, heading down (+row)
    Top,
    /// Column 0, heading right (+col)
    Left,
    /// Row `size - 1`, heading up (-row)
    Bottom,
    /// Column `size - 1`, heading left (-col)
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Left, Edge::Bottom, Edge::Right];

    /// Pick an edge uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Inward-pointing unit vector perpendicular to this edge
    pub fn inward(self) -> IVec2 {
        match self {
            Edge::Top => IVec2::new(1, 0),
            Edge::Left => IVec2::new(0, 1),
            Edge::Bottom => IVec2::new(-1, 0),
            Edge::Right => IVec2::new(0, -1),
        }
    }

    /// Place a cell on this edge at `offset` along it
    fn cell(self, offset: i32, grid_size: i32) -> IVec2 {
        match self {
            Edge::Top => IVec2::new(0, offset),
            Edge::Left => IVec2::new(offset, 0),
            Edge::Bottom => IVec2::new(grid_size - 1, offset),
            Edge::Right => IVec2::new(offset, grid_size - 1),
        }
    }

    /// Direction with the perpendicular component fixed inward and the
    /// parallel component set to `drift`
    fn heading(self, drift: i32) -> IVec2 {
        match self {
            Edge::Top | Edge::Bottom => self.inward() + IVec2::new(0, drift),
            Edge::Left | Edge::Right => self.inward() + IVec2::new(drift, 0),
        }
    }
}

/// A freshly rolled spawn position and heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub edge: Edge,
    pub pos: IVec2,
    pub dir: IVec2,
}

impl SpawnPoint {
    /// True iff this point sits on its edge, inside `[0, size - 2]` along it,
    /// and moves inward
    pub fn is_valid(&self, grid_size: i32) -> bool {
        let inward = self.edge.inward();
        let on_edge = self.edge.cell(0, grid_size);
        let along = match self.edge {
            Edge::Top | Edge::Bottom => self.pos.y,
            Edge::Left | Edge::Right => self.pos.x,
        };
        let fixed_matches = match self.edge {
            Edge::Top | Edge::Bottom => self.pos.x == on_edge.x,
            Edge::Left | Edge::Right => self.pos.y == on_edge.y,
        };
        let perpendicular = self.dir * inward.abs();
        let parallel = self.dir - perpendicular;

        fixed_matches
            && (0..=grid_size - 2).contains(&along)
            && perpendicular == inward
            && parallel.x.abs() <= 1
            && parallel.y.abs() <= 1
    }
}

/// Sample a normal distribution (Box-Muller transform)
///
/// Written over plain `rand` in place of `rand_distr::Normal`, which is not a
/// dependency of this crate.
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // 1 - [0, 1) keeps u1 away from zero so ln() stays finite
    let u1: f64 = 1.0 - rng.random::<f64>();
    let u2: f64 = rng.random::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
    mean + std_dev * z
}

/// Roll a spawn point on a `grid_size` board.
///
/// The along-edge coordinate is a normal draw around the edge midpoint, folded
/// with `|round(draw)| % (grid_size - 1)`. Negative draws fold back onto the
/// board, so the result is midpoint-biased rather than a clean bell curve.
pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid_size: i32, spread: f64) -> SpawnPoint {
    let edge = Edge::random(rng);

    let draw = sample_normal(rng, (grid_size / 2) as f64, spread);
    let span = (grid_size - 1).max(1) as u32;
    let offset = ((draw.round() as i32).unsigned_abs() % span) as i32;

    let drift = rng.random_range(-1..=1);

    SpawnPoint {
        edge,
        pos: edge.cell(offset, grid_size),
        dir: edge.heading(drift),
    }
}
