//! Movement intents: what a person decided to do this step.

use evac_core::{ExitId, Offset, PersonId};

/// Why a step was chosen.  The simulation applies every `Step` the same way
/// and records the goal in its per-move trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Heading for the least-congested exit.
    Exit(ExitId),
    /// Closing the gap to an isolated nearest neighbour.
    Neighbor(PersonId),
    /// Following the crowd's mean displacement.
    Crowd,
}

/// The outcome of one movement decision.
///
/// A `Step` is only a request: the person stays put if the destination is
/// off the grid or an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Stay,
    Step { offset: Offset, goal: Goal },
}

impl Intent {
    /// `Step` toward `goal`, or `Stay` if `offset` is zero.
    #[inline]
    pub fn step(offset: Offset, goal: Goal) -> Self {
        if offset.is_zero() {
            Intent::Stay
        } else {
            Intent::Step { offset, goal }
        }
    }

    #[inline]
    pub fn offset(self) -> Offset {
        match self {
            Intent::Stay => Offset::ZERO,
            Intent::Step { offset, .. } => offset,
        }
    }
}
