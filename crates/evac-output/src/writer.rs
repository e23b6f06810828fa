//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PersonSnapshotRow, StepSummaryRow};

/// A sink for per-step simulation output.
///
/// The observer never propagates these errors into the step loop; they are
/// stored and retrieved with [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of person snapshots.
    fn write_snapshots(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent, so safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
