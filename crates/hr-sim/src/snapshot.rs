//! Read-only world snapshots.
//!
//! Snapshots are the only view external collaborators (renderers, UIs,
//! recorders) get of the world: plain owned data, decoupled from the live
//! `Sim`, serializable with the `serde` feature.

use hr_core::{CellId, HexCoord, Terrain, Tick, TrainId, WorldPos};
use hr_train::TrainState;

/// One cell of the track network.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSnapshot {
    pub id:      CellId,
    pub coord:   HexCoord,
    pub terrain: Terrain,
    pub links:   Vec<CellId>,
}

/// One train's pose and state.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainSnapshot {
    pub id:      TrainId,
    pub pos:     WorldPos,
    pub heading: f32,
    pub state:   TrainState,
}

/// The full world at one tick.  Both lists are ascending by id.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldSnapshot {
    pub tick:   Tick,
    pub cells:  Vec<CellSnapshot>,
    pub trains: Vec<TrainSnapshot>,
}
