//! A single grid cell and its track links.

use hr_core::{CellId, HexCoord, Terrain, WorldPos};

/// A node in the hex grid, optionally part of the track network.
///
/// Tracks are not stored as separate entities: a track between A and B is
/// modeled as symmetric membership in both cells' `links`.  `TrackNetwork`
/// maintains that symmetry; it holds after every completed edit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id: CellId,
    pub coord: HexCoord,
    /// World position of the cell center, cached from `coord` at creation.
    pub pos: WorldPos,
    /// Cosmetic tag, never read by the core algorithms.
    pub terrain: Terrain,
    /// Ids of cells this one is tracked-connected to.
    pub links: Vec<CellId>,
}

impl Cell {
    /// Track-degree: the number of linked neighbors.
    #[inline]
    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// A cell with track-degree exactly 2 is a "through" cell; any other
    /// degree (0, 1, 3+) makes it a junction or endpoint.  The reservation
    /// scheduler only commits path segments at these boundaries.
    #[inline]
    pub fn is_junction(&self) -> bool {
        self.links.len() != 2
    }

    #[inline]
    pub fn is_linked_to(&self, other: CellId) -> bool {
        self.links.contains(&other)
    }
}
