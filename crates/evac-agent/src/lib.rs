//! `evac-agent`: the two behavioural agent kinds.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`person`]  | `Person`: position, health, panic, escape bookkeeping       |
//! | [`fire`]    | `Fire`: neighbour spread and distance-tiered damage         |
//!
//! Movement *decisions* are not made here; they come from a
//! `MovementPolicy` in `evac-behavior`.  A `Person` only knows how to apply a
//! step it has been told to take, and refuses steps into walls or off the
//! grid.

pub mod fire;
pub mod person;


pub use fire::Fire;
pub use person::Person;
