//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use evac_agent::Person;
use evac_core::Timestep;
use evac_sim::{SimObserver, StepSummary};
use evac_world::World;

use crate::row::{PersonSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes person snapshots and step summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, summary: &StepSummary) {
        let result = self.writer.write_step_summary(&StepSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, timestep: Timestep, persons: &[Person], _world: &World) {
        let rows: Vec<PersonSnapshotRow> = persons
            .iter()
            .map(|p| PersonSnapshotRow::new(timestep, p))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_timestep: Timestep) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
