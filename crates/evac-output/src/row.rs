//! Plain data row types written by output backends.

use evac_agent::Person;
use evac_core::Timestep;
use evac_sim::StepSummary;

/// One living person's state at a snapshot step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonSnapshotRow {
    pub step:      u64,
    pub person_id: u32,
    pub x:         i32,
    pub y:         i32,
    pub health:    f32,
    pub panic:     u32,
}

impl PersonSnapshotRow {
    pub fn new(step: Timestep, person: &Person) -> Self {
        Self {
            step:      step.0,
            person_id: person.id().0,
            x:         person.x(),
            y:         person.y(),
            health:    person.health(),
            panic:     person.panic(),
        }
    }
}

/// Aggregate counters for one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub step:              u64,
    pub escaped_this_step: u64,
    pub died_this_step:    u64,
    pub escaped_total:     u64,
    pub dead_total:        u64,
    pub living:            u64,
    pub fires:             u64,
    pub bottlenecks:       u64,
}

impl From<&StepSummary> for StepSummaryRow {
    fn from(s: &StepSummary) -> Self {
        Self {
            step:              s.timestep.0,
            escaped_this_step: s.escaped_this_step as u64,
            died_this_step:    s.died_this_step as u64,
            escaped_total:     s.escaped_total as u64,
            dead_total:        s.dead_total as u64,
            living:            s.living as u64,
            fires:             s.fires as u64,
            bottlenecks:       s.bottlenecks as u64,
        }
    }
}
