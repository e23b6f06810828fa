//! Integer grid coordinates and unit offsets.
//!
//! Cells use signed `i32` components so that probing a neighbour of an edge
//! cell (`x - 1` at `x == 0`) is representable and simply fails the world's
//! bounds check instead of wrapping.

use std::fmt;
use std::ops::Add;

/// A cell on the simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance.  Exact for any grid the world accepts.
    #[inline]
    pub fn distance_sq(self, other: Cell) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        dx * dx + dy * dy
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(self, other: Cell) -> f32 {
        (self.distance_sq(other) as f32).sqrt()
    }

    /// `true` if `other` is strictly closer than `radius`.
    #[inline]
    pub fn within(self, other: Cell, radius: f32) -> bool {
        self.distance(other) < radius
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Cell { x, y }
    }
}

impl From<[i32; 2]> for Cell {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Offset ────────────────────────────────────────────────────────────────────

/// A king-move step: each component is -1, 0 or 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0, dy: 0 };

    /// The 3×3 neighbourhood including `ZERO`, in row-major order.
    pub const NEIGHBORHOOD: [Offset; 9] = [
        Offset { dx: -1, dy: -1 },
        Offset { dx: -1, dy:  0 },
        Offset { dx: -1, dy:  1 },
        Offset { dx:  0, dy: -1 },
        Offset { dx:  0, dy:  0 },
        Offset { dx:  0, dy:  1 },
        Offset { dx:  1, dy: -1 },
        Offset { dx:  1, dy:  0 },
        Offset { dx:  1, dy:  1 },
    ];

    /// Sign-quantize an arbitrary displacement.
    #[inline]
    pub fn from_signs(dx: i64, dy: i64) -> Self {
        Offset { dx: dx.signum() as i32, dy: dy.signum() as i32 }
    }

    /// Unit step from `from` toward `to`.  `ZERO` when they coincide.
    #[inline]
    pub fn toward(from: Cell, to: Cell) -> Self {
        Self::from_signs((to.x - from.x) as i64, (to.y - from.y) as i64)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self == Offset::ZERO
    }
}

impl Add<Offset> for Cell {
    type Output = Cell;
    #[inline]
    fn add(self, rhs: Offset) -> Cell {
        Cell { x: self.x + rhs.dx, y: self.y + rhs.dy }
    }
}
