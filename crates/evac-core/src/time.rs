//! Simulation time model.
//!
//! Time is a monotonically increasing `Timestep` counter starting at zero.
//! One step is one round of panic, movement, reconciliation and fire; there is
//! no mapping to wall-clock seconds.

use std::fmt;

/// An absolute simulation step counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestep(pub u64);

impl Timestep {
    pub const ZERO: Timestep = Timestep(0);

    /// The step after `self`.
    #[inline]
    pub fn next(self) -> Timestep {
        Timestep(self.0 + 1)
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
