//! `evac-behavior`: how evacuees decide where to step.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` (`Stay` / `Step`), `Goal`                              |
//! | [`context`] | `PolicyContext<'a>`: read-only step snapshot                   |
//! | [`model`]   | `MovementPolicy` trait                                          |
//! | [`tiered`]  | `PanicTieredPolicy`, `PanicTier`, snapshot spatial queries      |
//! | [`noop`]    | `StayPut`: policy that never moves anyone                      |
//!
//! # Design notes
//!
//! Movement in evac-sim is split in two:
//!
//! 1. **Decide**: every living person's [`Intent`] is computed against the
//!    same immutable [`PolicyContext`].
//! 2. **Apply**: intents are applied in collection order; each step is
//!    checked against the world and silently dropped if blocked.
//!
//! Decisions therefore never observe half-applied moves from earlier persons
//! in the same step.

pub mod context;
pub mod intent;
pub mod model;
pub mod noop;
pub mod tiered;


pub use context::PolicyContext;
pub use intent::{Goal, Intent};
pub use model::MovementPolicy;
pub use noop::StayPut;
pub use tiered::{PanicTier, PanicTieredPolicy};
