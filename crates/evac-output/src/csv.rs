//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `person_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PersonSnapshotRow, StepSummaryRow};

pub const SNAPSHOT_FILE: &str = "person_snapshots.csv";
pub const SUMMARY_FILE:  &str = "step_summaries.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files and write the headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["step", "person_id", "x", "y", "health", "panic"])?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record([
            "step",
            "escaped_this_step",
            "died_this_step",
            "escaped_total",
            "dead_total",
            "living",
            "fires",
            "bottlenecks",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[PersonSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.person_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.health.to_string(),
                row.panic.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.escaped_this_step.to_string(),
            row.died_this_step.to_string(),
            row.escaped_total.to_string(),
            row.dead_total.to_string(),
            row.living.to_string(),
            row.fires.to_string(),
            row.bottlenecks.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
