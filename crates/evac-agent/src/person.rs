//! The evacuee agent.

use evac_core::{Cell, Offset, PersonId, Timestep};
use evac_world::World;

/// One evacuee.
///
/// Fields are private so the lifecycle invariants hold: health never rises,
/// panic never goes below zero, and `escaped` is never reset once set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    id:             PersonId,
    cell:           Cell,
    health:         f32,
    panic:          u32,
    escaped:        bool,
    time_to_escape: Option<Timestep>,
}

impl Person {
    /// A calm, unescaped person at `cell` with `health`.
    pub fn new(id: PersonId, cell: Cell, health: f32) -> Self {
        Self {
            id,
            cell,
            health,
            panic:          0,
            escaped:        false,
            time_to_escape: None,
        }
    }

    /// Start at a given panic level instead of zero.
    pub fn with_panic(mut self, panic: u32) -> Self {
        self.panic = panic;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> PersonId {
        self.id
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.cell.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.cell.y
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    #[inline]
    pub fn panic(&self) -> u32 {
        self.panic
    }

    #[inline]
    pub fn escaped(&self) -> bool {
        self.escaped
    }

    #[inline]
    pub fn time_to_escape(&self) -> Option<Timestep> {
        self.time_to_escape
    }

    // ── Per-step updates ──────────────────────────────────────────────────

    /// Raise panic by one if a fire is strictly closer than `radius`,
    /// otherwise let it decay by one (floored at zero).
    pub fn update_panic(&mut self, world: &World, radius: f32) {
        if world.fire_within(self.cell, radius) {
            self.panic = self.panic.saturating_add(1);
        } else {
            self.panic = self.panic.saturating_sub(1);
        }
    }

    /// `true` if one step by `offset` lands on a walkable cell.
    #[inline]
    pub fn can_move(&self, offset: Offset, world: &World) -> bool {
        world.is_walkable(self.cell + offset)
    }

    /// Step by `offset` if the destination is walkable.  Returns whether the
    /// person moved; a blocked or zero step leaves them in place.
    pub fn try_move(&mut self, offset: Offset, world: &World) -> bool {
        if offset.is_zero() || !self.can_move(offset, world) {
            return false;
        }
        self.cell = self.cell + offset;
        true
    }

    /// Lose `amount` health.  Negative amounts are ignored.
    #[inline]
    pub fn take_damage(&mut self, amount: f32) {
        if amount > 0.0 {
            self.health -= amount;
        }
    }

    // ── Terminal states ───────────────────────────────────────────────────

    /// Mark the person escaped the first time they stand on an exit,
    /// recording `timestep`.  Later calls change nothing.
    pub fn is_escaped(&mut self, timestep: Timestep, world: &World) -> bool {
        if !self.escaped && world.is_exit(self.cell.x, self.cell.y) {
            self.escaped = true;
            self.time_to_escape = Some(timestep);
        }
        self.escaped
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }
}
