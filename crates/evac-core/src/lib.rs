//! `evac-core`: foundational types for the `evac` crowd-evacuation simulator.
//!
//! This crate is a dependency of every other `evac-*` crate.  It has no
//! `evac-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PersonId`, `ExitId`                                  |
//! | [`grid`]        | `Cell`, `Offset`, Euclidean distance helpers          |
//! | [`time`]        | `Timestep`                                            |
//! | [`rng`]         | `SimRng` (seedable, injected into the simulation)     |
//! | [`config`]      | `SimConfig`, `EvacParams`                             |
//! | [`error`]       | `EvacError`, `EvacResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EvacParams, SimConfig};
pub use error::{EvacError, EvacResult};
pub use grid::{Cell, Offset};
pub use ids::{ExitId, PersonId};
pub use rng::SimRng;
pub use time::Timestep;
