//! A policy under which nobody moves.

use evac_agent::Person;

use crate::{Intent, MovementPolicy, PolicyContext};

/// A [`MovementPolicy`] that always returns [`Intent::Stay`].
///
/// Useful for isolating hazard dynamics (panic, damage, spread) from
/// movement in tests.
pub struct StayPut;

impl MovementPolicy for StayPut {
    fn decide(&self, _me: &Person, _ctx: &PolicyContext<'_>) -> Intent {
        Intent::Stay
    }
}
