//! The mutable track network layered on the hex grid.
//!
//! # Data layout
//!
//! Cells live in a `BTreeMap<CellId, Cell>`.  Ascending-id iteration order is
//! part of the contract, not an accident of the container: the reservation
//! scheduler's fairness policy and snapshot ordering both depend on it.
//!
//! Two secondary indexes are maintained incrementally alongside the registry:
//!
//! - a `HashMap<HexCoord, CellId>` for exact coordinate lookups (`cell_at`),
//! - an R-tree (via `rstar`) over cell centers for nearest-cell queries
//!   (`nearest_track_pair`), used to resolve a clicked world point to the
//!   closest track edge.

use std::collections::{BTreeMap, HashMap};

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use hr_core::{CellId, HexCoord, HexGrid, Terrain, Turn, WorldPos};

use crate::cell::Cell;
use crate::error::{TrackError, TrackResult};

// ── R-tree cell entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `CellId`.
#[derive(Clone, PartialEq)]
struct CellEntry {
    point: [f32; 2],
    id: CellId,
}

impl RTreeObject for CellEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for CellEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── TrackNetwork ──────────────────────────────────────────────────────────────

/// Id-keyed registry of cells plus the implicit track edges between them.
///
/// Owns all cells exclusively; external collaborators only ever receive
/// read-only views.  Structural errors (`CellNotFound`) are checked before
/// any mutation, so a failed edit leaves the network untouched.
pub struct TrackNetwork {
    grid: HexGrid,
    cells: BTreeMap<CellId, Cell>,
    coord_index: HashMap<HexCoord, CellId>,
    spatial_idx: RTree<CellEntry>,
    /// Monotonically increasing; ids are never reused.
    next_id: u32,
}

impl TrackNetwork {
    /// An empty network over a grid with the given edge length.
    pub fn new(grid: HexGrid) -> Self {
        Self {
            grid,
            cells: BTreeMap::new(),
            coord_index: HashMap::new(),
            spatial_idx: RTree::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn grid(&self) -> HexGrid {
        self.grid
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // ── Structural edits ──────────────────────────────────────────────────

    /// Add a cell at `coord`, or retag the existing one.
    ///
    /// If a cell already exists at `coord`, its terrain is updated in place
    /// and its id returned.  Otherwise a fresh id is allocated and the cell
    /// inserted with no links.
    pub fn add_cell(&mut self, coord: HexCoord, terrain: Terrain) -> CellId {
        if let Some(&id) = self.coord_index.get(&coord) {
            if let Some(cell) = self.cells.get_mut(&id) {
                cell.terrain = terrain;
            }
            return id;
        }

        let id = CellId(self.next_id);
        self.next_id += 1;
        let pos = self.grid.to_world(coord);
        self.cells.insert(
            id,
            Cell { id, coord, pos, terrain, links: Vec::new() },
        );
        self.coord_index.insert(coord, id);
        self.spatial_idx.insert(CellEntry { point: [pos.x, pos.y], id });
        id
    }

    /// Remove a cell and every symmetric back-reference to it.
    ///
    /// Callers holding cached paths or targets referencing `id` must
    /// invalidate them independently (the sim layer does).
    pub fn remove_cell(&mut self, id: CellId) -> TrackResult<()> {
        let cell = self.cells.remove(&id).ok_or(TrackError::CellNotFound(id))?;
        for neighbor in &cell.links {
            if let Some(other) = self.cells.get_mut(neighbor) {
                other.links.retain(|&l| l != id);
            }
        }
        self.coord_index.remove(&cell.coord);
        self.spatial_idx.remove_at_point(&[cell.pos.x, cell.pos.y]);
        Ok(())
    }

    /// Add a track between two existing cells.  Idempotent on both sides;
    /// linking a cell to itself is a no-op.
    pub fn add_track(&mut self, a: CellId, b: CellId) -> TrackResult<()> {
        self.check_pair(a, b)?;
        if a == b {
            return Ok(());
        }
        if let Some(cell_a) = self.cells.get_mut(&a)
            && !cell_a.links.contains(&b)
        {
            cell_a.links.push(b);
        }
        if let Some(cell_b) = self.cells.get_mut(&b)
            && !cell_b.links.contains(&a)
        {
            cell_b.links.push(a);
        }
        Ok(())
    }

    /// Remove the track between two existing cells.  Idempotent: removing a
    /// track that does not exist is a no-op.
    pub fn remove_track(&mut self, a: CellId, b: CellId) -> TrackResult<()> {
        self.check_pair(a, b)?;
        if let Some(cell_a) = self.cells.get_mut(&a) {
            cell_a.links.retain(|&l| l != b);
        }
        if let Some(cell_b) = self.cells.get_mut(&b) {
            cell_b.links.retain(|&l| l != a);
        }
        Ok(())
    }

    /// Both ids must exist before either side is touched, so a failed edit
    /// never leaves a half-applied track.
    fn check_pair(&self, a: CellId, b: CellId) -> TrackResult<()> {
        if !self.cells.contains_key(&a) {
            return Err(TrackError::CellNotFound(a));
        }
        if !self.cells.contains_key(&b) {
            return Err(TrackError::CellNotFound(b));
        }
        Ok(())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(&id)
    }

    /// Iterate all cells in ascending id order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    /// Id of the cell at exactly this grid coordinate, if any.
    pub fn cell_at(&self, coord: HexCoord) -> Option<CellId> {
        self.coord_index.get(&coord).copied()
    }

    /// Linked neighbor ids of a cell.
    pub fn neighbors(&self, id: CellId) -> Option<&[CellId]> {
        self.cells.get(&id).map(|c| c.links.as_slice())
    }

    pub fn degree(&self, id: CellId) -> Option<usize> {
        self.cells.get(&id).map(Cell::degree)
    }

    pub fn is_junction(&self, id: CellId) -> Option<bool> {
        self.cells.get(&id).map(Cell::is_junction)
    }

    pub fn are_linked(&self, a: CellId, b: CellId) -> bool {
        self.cells.get(&a).is_some_and(|c| c.is_linked_to(b))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Resolve a world point to the track edge it is closest to: the cell
    /// containing the point paired with the globally nearest *other* cell by
    /// straight-line distance.
    ///
    /// This is a nearest-point query for click-to-edge resolution, not a
    /// connectivity query — the second cell need not be a linked neighbor.
    pub fn nearest_track_pair(&self, pos: WorldPos) -> Option<(CellId, CellId)> {
        let first = self.cell_at(self.grid.to_coord(pos))?;
        let second = self
            .spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .map(|e| e.id)
            .find(|&id| id != first)?;
        Some((first, second))
    }

    // ── Turn-model reachability ───────────────────────────────────────────

    /// The cell reached by continuing past `curr` with the given turn, where
    /// the heading is defined by the step `prev → curr`.  `None` when either
    /// id is unknown or no cell exists at the extrapolated coordinate.
    pub fn extrapolate_cell(&self, prev: CellId, curr: CellId, turn: Turn) -> Option<CellId> {
        let prev_pos = self.cells.get(&prev)?.pos;
        let curr_pos = self.cells.get(&curr)?.pos;
        let coord = self.grid.extrapolate_world(prev_pos, curr_pos, turn);
        self.cell_at(coord)
    }
}

impl Default for TrackNetwork {
    fn default() -> Self {
        Self::new(HexGrid::default())
    }
}
