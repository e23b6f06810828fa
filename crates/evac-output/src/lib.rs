//! `evac-output`: simulation output writers for the evac simulator.
//!
//! | Backend | Files created                                     |
//! |---------|---------------------------------------------------|
//! | CSV     | `person_snapshots.csv`, `step_summaries.csv`      |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `evac_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use evac_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PersonSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
