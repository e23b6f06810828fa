//! Simulation observer trait for progress reporting and data collection.

use evac_agent::Person;
use evac_core::Timestep;
use evac_world::World;

use crate::StepSummary;

/// Callbacks invoked by [`Sim::step_with`][crate::Sim::step_with] and the
/// run loops at key points of each step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: escape printer
///
/// ```rust,ignore
/// struct EscapePrinter;
///
/// impl SimObserver for EscapePrinter {
///     fn on_step_end(&mut self, summary: &StepSummary) {
///         if summary.escaped_this_step > 0 {
///             println!("{}: {} escaped", summary.timestep, summary.escaped_this_step);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before panic is updated.
    fn on_step_start(&mut self, _timestep: Timestep) {}

    /// Called once the step has fully applied, fire phase included.
    fn on_step_end(&mut self, _summary: &StepSummary) {}

    /// Called every `config.snapshot_interval` steps with the living
    /// population and the world (fires, exits, obstacles).
    fn on_snapshot(&mut self, _timestep: Timestep, _persons: &[Person], _world: &World) {}

    /// Called once after a run loop finishes.
    fn on_sim_end(&mut self, _final_timestep: Timestep) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
