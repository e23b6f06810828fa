//! `evac-world`: the bounded grid the evacuation runs on.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`world`]     | `World`: dimensions, obstacle set, exits, spatial queries |
//! | [`fire_set`]  | `FireSet`: cell-keyed fire set + R-tree radius index      |
//!
//! Obstacles and exits are plain coordinate data owned by the world, not
//! agents.  Fires live here too because every spread and panic decision asks
//! "is there fire at / near this cell?", and the R-tree answers the radius
//! form of that question without scanning every fire.

pub mod fire_set;
pub mod world;


pub use fire_set::FireSet;
pub use world::World;
