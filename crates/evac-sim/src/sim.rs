//! The `Sim` struct and its step loop.

use tracing::{debug, trace};

use evac_agent::{Fire, Person};
use evac_behavior::{Goal, Intent, MovementPolicy, PolicyContext};
use evac_core::{SimConfig, SimRng, Timestep};
use evac_world::World;

use crate::metrics::{count_bottlenecks, EscapeStats, StepSummary};
use crate::{NoopObserver, SimObserver};

/// The evacuation simulation.
///
/// `Sim<P>` owns the world, the living population, the escaped and dead
/// accumulators, the metric histories and the RNG.  Nothing is shared
/// between instances, so independent runs never interfere.
///
/// Each step applies, in order:
///
/// 1. **Panic + movement**: update every person's panic, compute every
///    [`Intent`] against one [`PolicyContext`] snapshot, then apply them in
///    collection order.
/// 2. **Reconcile**: escaped persons (recording the current timestep) and
///    dead persons leave the active population.
/// 3. **Advance** the timestep.
/// 4. **Escape history**: append the cumulative escaped count.
/// 5. **Bottlenecks**: append the number of over-occupied cells.
/// 6. **Fire**: every fire that burned at the start of this phase tries to
///    spread, then damages the living population.
/// 7. **Casualties**: persons killed in phase 6 leave the population in the
///    same step; append the cumulative dead count.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: MovementPolicy> {
    /// Run configuration (grid shape, seed, step cap, parameters).
    pub config: SimConfig,

    pub(crate) world:            World,
    pub(crate) persons:          Vec<Person>,
    pub(crate) escaped:          Vec<Person>,
    pub(crate) dead:             Vec<Person>,
    pub(crate) timestep:         Timestep,
    pub(crate) escaped_counts:   Vec<usize>,
    pub(crate) bottleneck_areas: Vec<usize>,
    pub(crate) death_counts:     Vec<usize>,
    pub(crate) policy:           P,
    pub(crate) rng:              SimRng,
}

impl<P: MovementPolicy> Sim<P> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one timestep.
    pub fn step(&mut self) {
        self.step_with(&mut NoopObserver);
    }

    /// Advance exactly one timestep, reporting to `observer`.
    pub fn step_with<O: SimObserver>(&mut self, observer: &mut O) -> StepSummary {
        let now = self.timestep;
        observer.on_step_start(now);

        self.move_persons();
        let (escaped_this_step, died_in_crowd) = self.reconcile(now);

        self.timestep = now.next();
        self.escaped_counts.push(self.escaped.len());

        let bottlenecks = count_bottlenecks(
            &self.persons,
            &self.world,
            self.config.params.bottleneck_threshold,
        );
        self.bottleneck_areas.push(bottlenecks);

        let ignited = self.advance_fire();
        let died_in_fire = self.remove_casualties(now);
        self.death_counts.push(self.dead.len());

        let summary = StepSummary {
            timestep:       self.timestep,
            escaped_this_step,
            died_this_step: died_in_crowd + died_in_fire,
            escaped_total:  self.escaped.len(),
            dead_total:     self.dead.len(),
            living:         self.persons.len(),
            fires:          self.world.fire_count(),
            ignited,
            bottlenecks,
        };
        trace!(
            step = summary.timestep.0,
            escaped = summary.escaped_this_step,
            died = summary.died_this_step,
            living = summary.living,
            fires = summary.fires,
            bottlenecks = summary.bottlenecks,
            "step complete"
        );

        observer.on_step_end(&summary);
        let interval = self.config.snapshot_interval;
        if interval > 0 && self.timestep.0.is_multiple_of(interval) {
            observer.on_snapshot(self.timestep, &self.persons, &self.world);
        }
        summary
    }

    /// Run until `config.max_steps` or until nobody is left inside.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.timestep.0 < self.config.max_steps && !self.persons.is_empty() {
            self.step_with(observer);
        }
        observer.on_sim_end(self.timestep);
    }

    /// Run exactly `n` steps from the current timestep (ignores `max_steps`).
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step_with(observer);
        }
        observer.on_sim_end(self.timestep);
    }

    // ── Phases ────────────────────────────────────────────────────────────

    /// Phase 1.  Decisions read one snapshot; moves are applied afterwards
    /// so no decision sees another person's move from the same step.
    fn move_persons(&mut self) {
        let params = &self.config.params;
        for person in &mut self.persons {
            person.update_panic(&self.world, params.panic_radius);
        }

        let intents: Vec<Intent> = {
            let ctx = PolicyContext::new(&self.world, &self.persons, params);
            self.persons
                .iter()
                .map(|p| {
                    if p.is_dead() || p.escaped() {
                        Intent::Stay
                    } else {
                        self.policy.decide(p, &ctx)
                    }
                })
                .collect()
        };

        for (person, intent) in self.persons.iter_mut().zip(intents) {
            let Intent::Step { offset, goal } = intent else {
                continue;
            };
            let from = person.cell();
            let moved = person.try_move(offset, &self.world);
            let target = match goal {
                Goal::Exit(id) => self.world.exit(id),
                Goal::Neighbor(_) | Goal::Crowd => None,
            };
            trace!(
                person = %person.id(),
                from = %from,
                to = %person.cell(),
                moved,
                goal = ?goal,
                target = ?target,
                "step applied"
            );
        }
    }

    /// Phase 2.  Returns `(escaped, died)` counts for this step.
    fn reconcile(&mut self, now: Timestep) -> (usize, usize) {
        let mut escaped = 0;
        let mut died = 0;
        let mut active = Vec::with_capacity(self.persons.len());

        for mut person in std::mem::take(&mut self.persons) {
            if person.is_escaped(now, &self.world) {
                debug!(person = %person.id(), cell = %person.cell(), step = now.0, "person escaped");
                self.escaped.push(person);
                escaped += 1;
            } else if person.is_dead() {
                debug!(person = %person.id(), cell = %person.cell(), step = now.0, "person died");
                self.dead.push(person);
                died += 1;
            } else {
                active.push(person);
            }
        }

        self.persons = active;
        (escaped, died)
    }

    /// Phase 6.  Fires ignited this phase are registered immediately, so
    /// later spread attempts see them, but first act on the next step.
    /// Returns the number of new fires.
    fn advance_fire(&mut self) -> usize {
        let params = &self.config.params;
        let burning = self.world.fire_count();
        let mut ignited = 0;

        for i in 0..burning {
            let fire = Fire::from(self.world.fire_cells()[i]);
            if fire
                .spread(&mut self.world, &mut self.rng, params.spread_probability)
                .is_some()
            {
                ignited += 1;
            }
            fire.apply_damage(&mut self.persons, params);
        }
        ignited
    }

    /// Phase 7.  Returns the number of persons killed by fire this step.
    fn remove_casualties(&mut self, now: Timestep) -> usize {
        let before = self.dead.len();
        let dead = &mut self.dead;
        self.persons.retain(|person| {
            if !person.is_dead() {
                return true;
            }
            debug!(person = %person.id(), cell = %person.cell(), step = now.0, "person died");
            dead.push(person.clone());
            false
        });
        self.dead.len() - before
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Persons still inside, in collection order.
    #[inline]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Every burning cell, in ignition order.
    pub fn fires(&self) -> impl Iterator<Item = Fire> + '_ {
        self.world.fire_cells().iter().map(|&c| Fire::from(c))
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Steps taken so far.
    #[inline]
    pub fn timestep(&self) -> Timestep {
        self.timestep
    }

    /// Cumulative escaped count after each step.
    #[inline]
    pub fn escaped_counts(&self) -> &[usize] {
        &self.escaped_counts
    }

    /// Bottleneck cell count after each step's movement.
    #[inline]
    pub fn bottleneck_areas(&self) -> &[usize] {
        &self.bottleneck_areas
    }

    /// Cumulative dead count after each step.
    #[inline]
    pub fn death_counts(&self) -> &[usize] {
        &self.death_counts
    }

    /// Everyone who has escaped, in escape order.
    #[inline]
    pub fn escaped(&self) -> &[Person] {
        &self.escaped
    }

    /// Everyone who has died, in order of death.
    #[inline]
    pub fn dead(&self) -> &[Person] {
        &self.dead
    }

    #[inline]
    pub fn escaped_total(&self) -> usize {
        self.escaped.len()
    }

    #[inline]
    pub fn dead_total(&self) -> usize {
        self.dead.len()
    }

    /// Escape-time statistics; `None` until someone escapes.
    pub fn escape_stats(&self) -> Option<EscapeStats> {
        EscapeStats::from_escaped(&self.escaped)
    }
}
