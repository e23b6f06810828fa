//! `evac-sim`: timestep orchestrator for the evacuation simulator.
//!
//! # Step loop
//!
//! ```text
//! for step in 0..config.max_steps (or until nobody is left inside):
//!   ① Panic      each person counts fires within the panic radius.
//!   ② Intents    MovementPolicy::decide for every person against one
//!                 shared snapshot of the world and population.
//!   ③ Apply      each intent in collection order; blocked moves stay put.
//!   ④ Reconcile  escaped persons record the timestep and leave; dead
//!                 persons leave.
//!   ⑤ Metrics    timestep += 1; cumulative escaped count; bottleneck cells.
//!   ⑥ Fire       every burning cell tries to spread, then damages persons.
//!   ⑦ Casualty   persons killed by fire leave; cumulative dead count.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | FxHash for the per-step cell occupancy index.            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_behavior::PanicTieredPolicy;
//! use evac_core::{Cell, SimConfig};
//! use evac_sim::{NoopObserver, SimBuilder};
//!
//! let config = SimConfig::new(20, 20, 10, 3, 5, vec![Cell::new(10, 0), Cell::new(0, 10)])
//!     .with_seed(7)
//!     .with_max_steps(10);
//! let mut sim = SimBuilder::new(config, PanicTieredPolicy).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{:?}", sim.escaped_counts());
//! ```

pub mod builder;
pub mod metrics;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use metrics::{count_bottlenecks, EscapeStats, StepSummary};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
