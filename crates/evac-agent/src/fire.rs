//! The hazard agent: stochastic spread and distance-tiered damage.

use evac_core::{Cell, EvacParams, Offset, SimRng};
use evac_world::World;

use crate::Person;

/// A burning cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fire {
    pub x: i32,
    pub y: i32,
}

impl Fire {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn cell(self) -> Cell {
        Cell::new(self.x, self.y)
    }

    /// Try to ignite one neighbouring cell.
    ///
    /// The 3×3 neighbourhood is visited in shuffled order.  Every eligible
    /// cell (walkable and not already burning) gets one draw at
    /// `probability`; the first success ignites that cell, registers it with
    /// `world`, and ends the attempt.  The fire's own cell always burns, so
    /// the zero offset is never eligible.
    pub fn spread(self, world: &mut World, rng: &mut SimRng, probability: f64) -> Option<Fire> {
        let mut offsets = Offset::NEIGHBORHOOD;
        rng.shuffle(&mut offsets);

        for offset in offsets {
            let target = self.cell() + offset;
            if !world.is_walkable(target) || world.is_fire(target.x, target.y) {
                continue;
            }
            if rng.gen_bool(probability) {
                world.add_fire(target);
                return Some(Fire::from(target));
            }
        }
        None
    }

    /// Health lost per step by a person `distance` away.
    pub fn damage_at(distance: f32, params: &EvacParams) -> f32 {
        if distance < params.near_damage_radius {
            params.near_damage
        } else if distance < params.far_damage_radius {
            params.far_damage
        } else {
            0.0
        }
    }

    /// Apply this fire's damage to every person in `persons`.
    pub fn apply_damage(self, persons: &mut [Person], params: &EvacParams) {
        let here = self.cell();
        for person in persons {
            person.take_damage(Self::damage_at(person.cell().distance(here), params));
        }
    }
}

impl From<Cell> for Fire {
    #[inline]
    fn from(cell: Cell) -> Self {
        Fire { x: cell.x, y: cell.y }
    }
}

impl From<Fire> for Cell {
    #[inline]
    fn from(fire: Fire) -> Self {
        fire.cell()
    }
}
