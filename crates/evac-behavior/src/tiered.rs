//! The panic-tiered evacuation policy.
//!
//! | Tier       | Panic                       | Behaviour                                   |
//! |------------|-----------------------------|---------------------------------------------|
//! | `Calm`     | `< calm_below`              | step toward the least-congested exit        |
//! | `Moderate` | `calm_below ..severe_from`  | join an isolated nearest neighbour, else calm |
//! | `Severe`   | `>= severe_from`            | follow the crowd's mean displacement        |
//!
//! Every step is a king move whose components are the signs of the
//! displacement toward the target.

use evac_agent::Person;
use evac_core::{Cell, EvacParams, ExitId, Offset};

use crate::{Goal, Intent, MovementPolicy, PolicyContext};

// ── PanicTier ─────────────────────────────────────────────────────────────────

/// Behaviour regime selected by a person's panic level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PanicTier {
    Calm,
    Moderate,
    Severe,
}

impl PanicTier {
    pub fn of(panic: u32, params: &EvacParams) -> Self {
        if panic >= params.severe_from {
            PanicTier::Severe
        } else if panic >= params.calm_below {
            PanicTier::Moderate
        } else {
            PanicTier::Calm
        }
    }
}

// ── PanicTieredPolicy ─────────────────────────────────────────────────────────

/// The default [`MovementPolicy`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicTieredPolicy;

impl MovementPolicy for PanicTieredPolicy {
    fn decide(&self, me: &Person, ctx: &PolicyContext<'_>) -> Intent {
        match PanicTier::of(me.panic(), ctx.params) {
            PanicTier::Calm => toward_exit(me, ctx),
            PanicTier::Moderate => match nearest_other(me, ctx) {
                Some(other) if me.cell().distance(other.cell()) > ctx.params.social_distance => {
                    Intent::step(Offset::toward(me.cell(), other.cell()), Goal::Neighbor(other.id()))
                }
                _ => toward_exit(me, ctx),
            },
            PanicTier::Severe => match crowd_heading(me, ctx) {
                Some(offset) => Intent::step(offset, Goal::Crowd),
                None => Intent::Stay,
            },
        }
    }
}

fn toward_exit(me: &Person, ctx: &PolicyContext<'_>) -> Intent {
    match least_congested_exit(ctx) {
        Some((id, exit)) => Intent::step(Offset::toward(me.cell(), exit), Goal::Exit(id)),
        None => Intent::Stay,
    }
}

// ── Spatial queries over the snapshot ─────────────────────────────────────────

/// Number of persons in the snapshot strictly within the congestion radius
/// of `exit`.
pub fn congestion(exit: Cell, ctx: &PolicyContext<'_>) -> usize {
    let radius = ctx.params.congestion_radius;
    ctx.persons.iter().filter(|p| p.cell().within(exit, radius)).count()
}

/// The exit with the fewest persons nearby.  Ties go to the earliest exit in
/// list order.  `None` when the world has no exits.
pub fn least_congested_exit(ctx: &PolicyContext<'_>) -> Option<(ExitId, Cell)> {
    let mut best: Option<(ExitId, Cell, usize)> = None;
    for (i, &exit) in ctx.world.exits().iter().enumerate() {
        let load = congestion(exit, ctx);
        if best.is_none_or(|(_, _, best_load)| load < best_load) {
            best = Some((ExitId(i as u16), exit, load));
        }
    }
    best.map(|(id, exit, _)| (id, exit))
}

/// The closest other person.  Ties go to the earliest in collection order.
pub fn nearest_other<'a>(me: &Person, ctx: &PolicyContext<'a>) -> Option<&'a Person> {
    let here = me.cell();
    let mut best: Option<(&'a Person, i64)> = None;
    for other in ctx.others(me) {
        let d2 = here.distance_sq(other.cell());
        if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
            best = Some((other, d2));
        }
    }
    best.map(|(p, _)| p)
}

/// Sign-quantized mean displacement from `me` to every other person.
/// `None` when `me` is alone.
pub fn crowd_heading(me: &Person, ctx: &PolicyContext<'_>) -> Option<Offset> {
    let here = me.cell();
    let mut count = 0usize;
    let (mut sum_x, mut sum_y) = (0i64, 0i64);
    for other in ctx.others(me) {
        sum_x += (other.x() - here.x) as i64;
        sum_y += (other.y() - here.y) as i64;
        count += 1;
    }
    // The mean has the same sign as the sum.
    (count > 0).then(|| Offset::from_signs(sum_x, sum_y))
}
