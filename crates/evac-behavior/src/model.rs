//! The `MovementPolicy` trait: the extension point for evacuee behaviour.

use evac_agent::Person;

use crate::{Intent, PolicyContext};

/// Pluggable movement decision.
///
/// Called once per living person per step, after that person's panic has
/// been updated.  Implementations read only the [`PolicyContext`] snapshot,
/// so the order persons are visited in never changes a decision.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEast;
///
/// impl MovementPolicy for AlwaysEast {
///     fn decide(&self, _me: &Person, _ctx: &PolicyContext<'_>) -> Intent {
///         Intent::step(Offset { dx: 1, dy: 0 }, Goal::Crowd)
///     }
/// }
/// ```
pub trait MovementPolicy: Send + Sync + 'static {
    fn decide(&self, me: &Person, ctx: &PolicyContext<'_>) -> Intent;
}
