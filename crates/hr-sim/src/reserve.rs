//! The per-tick path reservation scheduler.
//!
//! # Contract
//!
//! Runs once per tick, after every train's whole path has been recomputed.
//! The reservation table is tick-scoped and rebuilt from scratch; nothing
//! persists across ticks.  Trains are processed in ascending `TrainId`
//! (`BTreeMap` iteration order) — the fairness policy is "lower id wins
//! ties", documented, deterministic, and relied on by the tests.
//!
//! Each train walks its whole path accumulating an in-progress segment:
//!
//! 1. a junction or endpoint (degree ≠ 2) closes the segment — committed
//!    cells always form whole junction-to-junction units, so a train never
//!    stops halfway into a switch;
//! 2. a cell occupied by another train stops the walk, discarding the
//!    open segment;
//! 3. a cell already reserved this tick stops the walk the same way;
//! 4. the current target closes the final, possibly partial, segment.
//!
//! Committed cells are written into the table after each train, so a later
//! train can never be granted a cell an earlier one holds: at most one
//! reserver per cell per tick.

use std::collections::BTreeMap;

use hr_core::{CellId, TrainId};
use hr_track::TrackNetwork;
use hr_train::Train;

#[cfg(feature = "fx-hash")]
type ReservationTable = rustc_hash::FxHashMap<CellId, TrainId>;
#[cfg(not(feature = "fx-hash"))]
type ReservationTable = std::collections::HashMap<CellId, TrainId>;

/// Rebuild every train's `free_path` from its `whole_path`.
///
/// Broken trains are skipped entirely: they never reserve, but their
/// current cell still blocks everyone else through the occupancy check.
pub(crate) fn allocate_free_paths(net: &TrackNetwork, trains: &mut BTreeMap<TrainId, Train>) {
    let occupancy: Vec<(TrainId, CellId)> = trains.values().map(|t| (t.id, t.cell)).collect();
    let mut reserved = ReservationTable::default();

    for (&id, train) in trains.iter_mut() {
        train.free_path.clear();
        if train.is_broken() {
            continue;
        }

        let target = train.current_target();
        let mut segment: Vec<CellId> = Vec::new();

        for &cell in &train.whole_path {
            let degree = net.degree(cell);
            if degree != Some(2) {
                // Junction, endpoint, or a cell that no longer exists:
                // commit what we have before deciding whether to go on.
                train.free_path.extend(segment.drain(..));
            }
            if degree.is_none() {
                break;
            }
            if occupancy.iter().any(|&(oid, at)| oid != id && at == cell) {
                break;
            }
            if reserved.contains_key(&cell) {
                break;
            }
            segment.push(cell);
            if target == Some(cell) {
                // The final segment may end mid-run, but only at the target.
                train.free_path.extend(segment.drain(..));
                break;
            }
        }

        for &cell in &train.free_path {
            reserved.insert(cell, id);
        }
    }
}
