//! Run configuration and behavioural parameters.
//!
//! `SimConfig` describes the shape of one run (grid, population, hazards,
//! exits, seed).  `EvacParams` holds every behavioural constant; its
//! `Default` is the calibrated model and most callers never change it.

use crate::{Cell, EvacError, EvacResult};

// ── EvacParams ────────────────────────────────────────────────────────────────

/// Behavioural constants for persons and fires.
///
/// All radii are Euclidean grid distances and all comparisons against them
/// are strict (`distance < radius`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvacParams {
    /// Health every person starts with.
    pub initial_health: f32,

    /// A fire closer than this raises panic by one; otherwise panic decays.
    pub panic_radius: f32,

    /// Panic strictly below this is the calm tier.
    pub calm_below: u32,

    /// Panic at or above this is the severe tier.
    pub severe_from: u32,

    /// Persons closer than this to an exit count toward its congestion.
    pub congestion_radius: f32,

    /// A moderately panicked person walks toward its nearest neighbour when
    /// that neighbour is farther away than this.
    pub social_distance: f32,

    /// Chance that a fire ignites one eligible neighbour per attempt.
    pub spread_probability: f64,

    /// Inner damage ring radius and per-step damage inside it.
    pub near_damage_radius: f32,
    pub near_damage: f32,

    /// Outer damage ring radius and per-step damage inside it.
    pub far_damage_radius: f32,
    pub far_damage: f32,

    /// A cell holding more than this many living persons is a bottleneck.
    pub bottleneck_threshold: usize,
}

impl Default for EvacParams {
    fn default() -> Self {
        Self {
            initial_health:       200.0,
            panic_radius:         3.0,
            calm_below:           3,
            severe_from:          7,
            congestion_radius:    10.0,
            social_distance:      5.0,
            spread_probability:   0.2,
            near_damage_radius:   3.0,
            near_damage:          1.0,
            far_damage_radius:    5.0,
            far_damage:           0.5,
            bottleneck_threshold: 2,
        }
    }
}

impl EvacParams {
    /// Reject parameter combinations the model cannot interpret.
    pub fn validate(&self) -> EvacResult<()> {
        if !(self.initial_health > 0.0) {
            return Err(EvacError::config(format!(
                "initial_health must be positive, got {}",
                self.initial_health
            )));
        }
        if !(0.0..=1.0).contains(&self.spread_probability) {
            return Err(EvacError::config(format!(
                "spread_probability must be in [0, 1], got {}",
                self.spread_probability
            )));
        }
        let radii = [
            ("panic_radius",       self.panic_radius),
            ("congestion_radius",  self.congestion_radius),
            ("social_distance",    self.social_distance),
            ("near_damage_radius", self.near_damage_radius),
            ("far_damage_radius",  self.far_damage_radius),
        ];
        for (name, r) in radii {
            if !(r >= 0.0) {
                return Err(EvacError::config(format!("{name} must be non-negative, got {r}")));
            }
        }
        if self.near_damage_radius > self.far_damage_radius {
            return Err(EvacError::config(format!(
                "near_damage_radius {} exceeds far_damage_radius {}",
                self.near_damage_radius, self.far_damage_radius
            )));
        }
        if self.near_damage < 0.0 || self.far_damage < 0.0 {
            return Err(EvacError::config("damage amounts must be non-negative"));
        }
        if self.calm_below > self.severe_from {
            return Err(EvacError::config(format!(
                "calm_below {} exceeds severe_from {}",
                self.calm_below, self.severe_from
            )));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Grid width in cells.  Must be positive.
    pub width: i32,

    /// Grid height in cells.  Must be positive.
    pub height: i32,

    /// Persons placed uniformly at random when no explicit placement is given.
    pub person_count: usize,

    /// Seed fires placed uniformly at random when no explicit placement is given.
    pub fire_count: usize,

    /// Distinct obstacle cells placed at random, never on an exit.
    pub obstacle_count: usize,

    /// Ordered exit cells.  Order breaks congestion ties.
    pub exits: Vec<Cell>,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Upper bound on steps taken by `Sim::run`.
    pub max_steps: u64,

    /// Emit an observer snapshot every N steps.  0 disables snapshots.
    pub snapshot_interval: u64,

    pub params: EvacParams,
}

impl SimConfig {
    /// Configuration with the given run shape and default seed, step cap and
    /// parameters.
    pub fn new(
        width:          i32,
        height:         i32,
        person_count:   usize,
        fire_count:     usize,
        obstacle_count: usize,
        exits:          Vec<Cell>,
    ) -> Self {
        Self {
            width,
            height,
            person_count,
            fire_count,
            obstacle_count,
            exits,
            seed:              0,
            max_steps:         100,
            snapshot_interval: 1,
            params:            EvacParams::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_params(mut self, params: EvacParams) -> Self {
        self.params = params;
        self
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Check the run shape and parameters.
    ///
    /// Random obstacle placement needs `obstacle_count` distinct non-exit
    /// cells, so requesting more than the grid can hold is rejected here.
    pub fn validate(&self) -> EvacResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(EvacError::config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        for (i, &exit) in self.exits.iter().enumerate() {
            if !self.contains(exit) {
                return Err(EvacError::config(format!(
                    "exit {exit} lies outside the {}x{} grid",
                    self.width, self.height
                )));
            }
            if self.exits[..i].contains(&exit) {
                return Err(EvacError::config(format!("exit {exit} listed twice")));
            }
        }
        if self.exits.len() > u16::MAX as usize {
            return Err(EvacError::config("too many exits"));
        }
        let free = self.cell_count() - self.exits.len();
        if self.obstacle_count > free {
            return Err(EvacError::config(format!(
                "{} obstacles requested but only {free} non-exit cells exist",
                self.obstacle_count
            )));
        }
        self.params.validate()
    }
}
