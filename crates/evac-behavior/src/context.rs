//! Read-only step state passed to every movement decision.

use evac_agent::Person;
use evac_core::EvacParams;
use evac_world::World;

/// A read-only snapshot shared by every [`MovementPolicy`][crate::MovementPolicy]
/// call within one step.
///
/// `persons` is the living population as it stood after the panic update and
/// before anyone moved, so every decision in a step sees the same crowd
/// regardless of collection order.
pub struct PolicyContext<'a> {
    pub world:   &'a World,
    pub persons: &'a [Person],
    pub params:  &'a EvacParams,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(world: &'a World, persons: &'a [Person], params: &'a EvacParams) -> Self {
        Self { world, persons, params }
    }

    /// Everyone in the snapshot except `me`, in collection order.
    pub fn others<'p>(&'p self, me: &'p Person) -> impl Iterator<Item = &'a Person> + 'p {
        let id = me.id();
        self.persons.iter().filter(move |p| p.id() != id)
    }
}
