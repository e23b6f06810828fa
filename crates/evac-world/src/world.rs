//! The bounded grid: dimensions, obstacles, exits, and burning cells.

use std::collections::HashSet;

use evac_core::{Cell, EvacError, EvacResult, ExitId};

use crate::FireSet;

/// Static layout plus the live fire set.
///
/// Obstacles and exits are fixed at construction.  Fires only ever grow.
/// Persons are not tracked here: any number of them may share a cell, so the
/// world has no occupancy state to maintain.
pub struct World {
    width:     i32,
    height:    i32,
    obstacles: HashSet<Cell>,
    exits:     Vec<Cell>,
    fires:     FireSet,
}

impl World {
    /// Build a world, rejecting out-of-bounds or overlapping layout cells.
    ///
    /// Duplicate obstacle cells collapse into one.  Duplicate exits are an
    /// error because exit order is meaningful.
    pub fn new(
        width:     i32,
        height:    i32,
        obstacles: impl IntoIterator<Item = Cell>,
        exits:     Vec<Cell>,
    ) -> EvacResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(EvacError::config(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }

        let mut world = Self {
            width,
            height,
            obstacles: HashSet::new(),
            exits:     Vec::with_capacity(exits.len()),
            fires:     FireSet::new(),
        };

        for exit in exits {
            if !world.contains(exit) {
                return Err(EvacError::config(format!(
                    "exit {exit} lies outside the {width}x{height} grid"
                )));
            }
            if world.exits.contains(&exit) {
                return Err(EvacError::config(format!("exit {exit} listed twice")));
            }
            world.exits.push(exit);
        }

        for cell in obstacles {
            if !world.contains(cell) {
                return Err(EvacError::config(format!(
                    "obstacle {cell} lies outside the {width}x{height} grid"
                )));
            }
            if world.exits.contains(&cell) {
                return Err(EvacError::config(format!("obstacle {cell} overlaps an exit")));
            }
            world.obstacles.insert(cell);
        }

        Ok(world)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    // ── Spatial predicates ────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.in_bounds(cell.x, cell.y)
    }

    #[inline]
    pub fn is_obstacle(&self, x: i32, y: i32) -> bool {
        self.obstacles.contains(&Cell::new(x, y))
    }

    #[inline]
    pub fn is_fire(&self, x: i32, y: i32) -> bool {
        self.fires.contains(Cell::new(x, y))
    }

    #[inline]
    pub fn is_exit(&self, x: i32, y: i32) -> bool {
        self.exits.contains(&Cell::new(x, y))
    }

    /// In bounds and not an obstacle.  Fire does not block movement.
    #[inline]
    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.obstacles.contains(&cell)
    }

    /// `true` if any fire is strictly closer than `radius` to `cell`.
    #[inline]
    pub fn fire_within(&self, cell: Cell, radius: f32) -> bool {
        self.fires.any_within(cell, radius)
    }

    // ── Layout ────────────────────────────────────────────────────────────

    /// Exits in their configured order.
    #[inline]
    pub fn exits(&self) -> &[Cell] {
        &self.exits
    }

    /// The exit at `id`, if any.
    #[inline]
    pub fn exit(&self, id: ExitId) -> Option<Cell> {
        self.exits.get(id.index()).copied()
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.iter().copied()
    }

    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    // ── Fires ─────────────────────────────────────────────────────────────

    /// Register a fire unless its cell already burns.  Returns `true` if the
    /// fire set grew.
    ///
    /// Cells outside the grid are ignored: a fire can only ever exist where
    /// a person could stand.
    pub fn add_fire(&mut self, fire: impl Into<Cell>) -> bool {
        let cell = fire.into();
        if !self.contains(cell) {
            return false;
        }
        self.fires.insert(cell)
    }

    /// Burning cells in ignition order.
    #[inline]
    pub fn fire_cells(&self) -> &[Cell] {
        self.fires.cells()
    }

    #[inline]
    pub fn fire_count(&self) -> usize {
        self.fires.len()
    }
}
