//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use tracing::info;

use evac_agent::Person;
use evac_behavior::MovementPolicy;
use evac_core::{Cell, EvacError, EvacResult, PersonId, SimConfig, SimRng, Timestep};
use evac_world::World;

use crate::Sim;

/// RNG stream offsets derived from the master seed.
const PLACEMENT_STREAM: u64 = 0;
const SPREAD_STREAM:    u64 = 1;

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid shape, counts, exits, seed, parameters
/// - `P: MovementPolicy`: usually [`evac_behavior::PanicTieredPolicy`]
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                           |
/// |---------------------|---------------------------------------------------|
/// | `.persons(v)`       | `config.person_count` persons on random cells     |
/// | `.persons_at(v)`    | (same; positions only, default health and panic)  |
/// | `.fires(v)`         | `config.fire_count` fires on random cells         |
/// | `.obstacles(v)`     | `config.obstacle_count` distinct random non-exit cells |
///
/// Random placement draws persons, then fires, then obstacles, from a stream
/// seeded by `config.seed`.  Persons and seed fires may land on any in-bounds
/// cell, obstacles included.
///
/// # Example
///
/// ```rust,ignore
/// let config = SimConfig::new(20, 20, 10, 3, 5, vec![Cell::new(10, 0), Cell::new(0, 10)]);
/// let mut sim = SimBuilder::new(config, PanicTieredPolicy).build()?;
/// for _ in 0..10 {
///     sim.step();
/// }
/// ```
pub struct SimBuilder<P: MovementPolicy> {
    config:    SimConfig,
    policy:    P,
    persons:   Option<Vec<Person>>,
    fires:     Option<Vec<Cell>>,
    obstacles: Option<Vec<Cell>>,
}

impl<P: MovementPolicy> SimBuilder<P> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, policy: P) -> Self {
        Self {
            config,
            policy,
            persons:   None,
            fires:     None,
            obstacles: None,
        }
    }

    /// Supply the initial population explicitly.
    ///
    /// Ids must be unique, cells in bounds, and health positive.
    pub fn persons(mut self, persons: Vec<Person>) -> Self {
        self.persons = Some(persons);
        self
    }

    /// Place one calm person on each cell, ids in order from zero.
    pub fn persons_at(self, cells: impl IntoIterator<Item = Cell>) -> Self {
        let health = self.config.params.initial_health;
        let persons = cells
            .into_iter()
            .enumerate()
            .map(|(i, cell)| Person::new(PersonId(i as u32), cell, health))
            .collect();
        self.persons(persons)
    }

    /// Supply the seed fires explicitly.  Duplicates collapse into one.
    pub fn fires(mut self, fires: Vec<Cell>) -> Self {
        self.fires = Some(fires);
        self
    }

    /// Supply the obstacle cells explicitly.  None may be an exit.
    pub fn obstacles(mut self, obstacles: Vec<Cell>) -> Self {
        self.obstacles = Some(obstacles);
        self
    }

    /// Validate inputs, place agents and return a ready-to-step [`Sim`].
    pub fn build(self) -> EvacResult<Sim<P>> {
        let config = self.config;
        config.validate()?;

        let mut root = SimRng::new(config.seed);
        let mut placement = root.child(PLACEMENT_STREAM);
        let rng = root.child(SPREAD_STREAM);

        // ── Persons ───────────────────────────────────────────────────────
        let persons = match self.persons {
            Some(p) => {
                check_persons(&p, &config)?;
                p
            }
            None => (0..config.person_count)
                .map(|i| {
                    let id = PersonId::try_from(i)
                        .map_err(|_| EvacError::config("person count exceeds id space"))?;
                    Ok(Person::new(id, random_cell(&mut placement, &config), config.params.initial_health))
                })
                .collect::<EvacResult<Vec<_>>>()?,
        };

        // ── Fires ─────────────────────────────────────────────────────────
        let fires = match self.fires {
            Some(f) => {
                if let Some(&bad) = f.iter().find(|&&c| !config.contains(c)) {
                    return Err(EvacError::config(format!("fire {bad} lies outside the grid")));
                }
                f
            }
            None => (0..config.fire_count)
                .map(|_| random_cell(&mut placement, &config))
                .collect(),
        };

        // ── Obstacles ─────────────────────────────────────────────────────
        let obstacles = match self.obstacles {
            Some(o) => o,
            None => random_obstacles(&mut placement, &config),
        };

        let mut world = World::new(config.width, config.height, obstacles, config.exits.clone())?;
        for fire in fires {
            world.add_fire(fire);
        }

        info!(
            width = config.width,
            height = config.height,
            persons = persons.len(),
            fires = world.fire_count(),
            obstacles = world.obstacle_count(),
            exits = world.exits().len(),
            seed = config.seed,
            "simulation built"
        );

        Ok(Sim {
            config,
            world,
            persons,
            escaped:          Vec::new(),
            dead:             Vec::new(),
            timestep:         Timestep::ZERO,
            escaped_counts:   Vec::new(),
            bottleneck_areas: Vec::new(),
            death_counts:     Vec::new(),
            policy:           self.policy,
            rng,
        })
    }
}

// ── Placement helpers ─────────────────────────────────────────────────────────

fn random_cell(rng: &mut SimRng, config: &SimConfig) -> Cell {
    Cell::new(rng.gen_range(0..config.width), rng.gen_range(0..config.height))
}

/// `config.obstacle_count` distinct cells, none of them an exit.
///
/// Sparse requests use rejection sampling; dense ones shuffle the full list
/// of candidate cells so the draw count stays bounded.
fn random_obstacles(rng: &mut SimRng, config: &SimConfig) -> Vec<Cell> {
    let wanted = config.obstacle_count;
    let free = config.cell_count() - config.exits.len();

    if wanted * 2 <= free {
        let mut chosen = HashSet::with_capacity(wanted);
        let mut order = Vec::with_capacity(wanted);
        while order.len() < wanted {
            let cell = random_cell(rng, config);
            if !config.exits.contains(&cell) && chosen.insert(cell) {
                order.push(cell);
            }
        }
        return order;
    }

    let mut candidates: Vec<Cell> = (0..config.width)
        .flat_map(|x| (0..config.height).map(move |y| Cell::new(x, y)))
        .filter(|c| !config.exits.contains(c))
        .collect();
    rng.shuffle(&mut candidates);
    candidates.truncate(wanted);
    candidates
}

fn check_persons(persons: &[Person], config: &SimConfig) -> EvacResult<()> {
    let mut ids = HashSet::with_capacity(persons.len());
    for p in persons {
        if !config.contains(p.cell()) {
            return Err(EvacError::config(format!(
                "{} at {} lies outside the grid",
                p.id(),
                p.cell()
            )));
        }
        if !ids.insert(p.id()) {
            return Err(EvacError::config(format!("{} listed twice", p.id())));
        }
        if p.is_dead() || p.escaped() {
            return Err(EvacError::config(format!("{} must start alive and inside", p.id())));
        }
    }
    Ok(())
}
