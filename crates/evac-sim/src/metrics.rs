//! Per-step metrics: bottleneck cells, step summaries, escape-time statistics.

use evac_agent::Person;
use evac_core::{Cell, Timestep};
use evac_world::World;

#[cfg(feature = "fx-hash")]
type OccupancyMap = rustc_hash::FxHashMap<Cell, usize>;
#[cfg(not(feature = "fx-hash"))]
type OccupancyMap = std::collections::HashMap<Cell, usize>;

// ── Bottlenecks ───────────────────────────────────────────────────────────────

/// Number of grid cells holding more than `threshold` of `persons`.
///
/// One O(persons) pass builds a cell → occupancy index; only occupied cells
/// can exceed the threshold, so this matches a full scan of the grid.
pub fn count_bottlenecks(persons: &[Person], world: &World, threshold: usize) -> usize {
    let mut occupancy = OccupancyMap::default();
    for person in persons {
        *occupancy.entry(person.cell()).or_insert(0) += 1;
    }
    occupancy
        .iter()
        .filter(|&(&cell, &n)| n > threshold && world.contains(cell))
        .count()
}

// ── StepSummary ───────────────────────────────────────────────────────────────

/// What happened during one step.  Passed to
/// [`SimObserver::on_step_end`][crate::SimObserver::on_step_end].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummary {
    /// The timestep counter *after* the step (the first step reports `T1`).
    pub timestep:          Timestep,
    pub escaped_this_step: usize,
    pub died_this_step:    usize,
    pub escaped_total:     usize,
    pub dead_total:        usize,
    /// Persons still in the building after the step.
    pub living:            usize,
    pub fires:             usize,
    /// Fires ignited by spread this step.
    pub ignited:           usize,
    pub bottlenecks:       usize,
}

// ── EscapeStats ───────────────────────────────────────────────────────────────

/// Summary of escape timesteps across every escaped person.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeStats {
    pub count: usize,
    pub mean:  f64,
    pub min:   Timestep,
    pub max:   Timestep,
}

impl EscapeStats {
    /// `None` if nobody has escaped.
    pub fn from_escaped(escaped: &[Person]) -> Option<Self> {
        let mut times = escaped.iter().filter_map(Person::time_to_escape);
        let first = times.next()?;
        let (mut count, mut sum, mut min, mut max) = (1usize, first.0 as f64, first, first);
        for t in times {
            count += 1;
            sum += t.0 as f64;
            min = min.min(t);
            max = max.max(t);
        }
        Some(Self { count, mean: sum / count as f64, min, max })
    }
}
