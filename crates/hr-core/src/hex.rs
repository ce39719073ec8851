//! Offset hex-grid addressing and the geometric turn model.
//!
//! # Coordinate scheme
//!
//! Cells are addressed by `(col, row)` offset coordinates.  Rows are spaced
//! 1.5 outer radii apart vertically; odd rows are shifted right by one inner
//! radius.  Adjacent cell centers are always exactly two inner radii apart,
//! which is what makes `extrapolate` work: continuing from one cell to the
//! next is always a fixed-length step at the incoming bearing rotated by a
//! multiple of 60°.
//!
//! # Turn model
//!
//! A track layout only permits continuation at 0° or ±60° from the incoming
//! heading, mirroring real turnout geometry.  [`HexGrid::extrapolate`] is the
//! sole definition of which cells are physically reachable from a heading.

use std::f32::consts::FRAC_PI_3;

use crate::geo::WorldPos;

const SQRT_3: f32 = 1.732_050_8;

// ── HexCoord ──────────────────────────────────────────────────────────────────

/// Offset grid coordinate of a cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub col: i32,
    pub row: i32,
}

impl HexCoord {
    #[inline]
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// `true` for rows shifted right by one inner radius.
    #[inline]
    pub fn odd_row(self) -> bool {
        self.row.rem_euclid(2) == 1
    }
}

impl std::fmt::Display for HexCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

// ── Turn ──────────────────────────────────────────────────────────────────────

/// One of the three continuations a track layout can offer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Turn {
    Right,
    Straight,
    Left,
}

impl Turn {
    /// The fixed evaluation order used by the route search.  Right wins ties.
    pub const PRIORITY: [Turn; 3] = [Turn::Right, Turn::Straight, Turn::Left];

    /// Heading delta applied to the incoming bearing.  Y grows downward, so
    /// a positive delta turns to the right on screen.
    #[inline]
    pub fn heading_delta(self) -> f32 {
        match self {
            Turn::Right => FRAC_PI_3,
            Turn::Straight => 0.0,
            Turn::Left => -FRAC_PI_3,
        }
    }
}

// ── HexGrid ───────────────────────────────────────────────────────────────────

/// Pure, stateless grid math parameterized by a single edge-length constant.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexGrid {
    edge_len: f32,
}

impl HexGrid {
    pub fn new(edge_len: f32) -> Self {
        Self { edge_len }
    }

    /// Outer radius: center to corner, equal to the edge length.
    #[inline]
    pub fn outer_radius(self) -> f32 {
        self.edge_len
    }

    /// Inner radius: center to edge midpoint.
    #[inline]
    pub fn inner_radius(self) -> f32 {
        self.edge_len * SQRT_3 / 2.0
    }

    /// World position of a cell center.
    pub fn to_world(self, coord: HexCoord) -> WorldPos {
        let inner = self.inner_radius();
        let x = if coord.odd_row() {
            (2 * coord.col + 1) as f32 * inner
        } else {
            (2 * coord.col) as f32 * inner
        };
        let y = 1.5 * self.outer_radius() * coord.row as f32;
        WorldPos::new(x, y)
    }

    /// Grid coordinate of the cell whose center is nearest to `pos`.
    ///
    /// Inverse of [`to_world`](Self::to_world) up to rounding: converting
    /// coord → world → coord always returns the original coord.
    pub fn to_coord(self, pos: WorldPos) -> HexCoord {
        let row = (2.0 / 3.0 * pos.y / self.outer_radius() + 0.5).floor() as i32;
        let half_cols = pos.x / self.inner_radius() / 2.0;
        let col = if row.rem_euclid(2) == 1 {
            half_cols.floor() as i32
        } else {
            (half_cols + 0.5).floor() as i32
        };
        HexCoord::new(col, row)
    }

    /// The cell reached by continuing past `curr` with the given turn, where
    /// the incoming bearing is defined by the step `prev → curr`.
    pub fn extrapolate(self, prev: HexCoord, curr: HexCoord, turn: Turn) -> HexCoord {
        self.extrapolate_world(self.to_world(prev), self.to_world(curr), turn)
    }

    /// Same as [`extrapolate`](Self::extrapolate), from cached world
    /// positions (skips two coord → world conversions on the hot path).
    pub fn extrapolate_world(self, prev: WorldPos, curr: WorldPos, turn: Turn) -> HexCoord {
        let bearing = prev.bearing_to(curr) + turn.heading_delta();
        let target = curr.advance(2.0 * self.inner_radius(), bearing);
        self.to_coord(target)
    }
}

impl Default for HexGrid {
    /// The original 60-unit edge.
    fn default() -> Self {
        Self::new(60.0)
    }
}
