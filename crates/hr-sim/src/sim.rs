//! The `Sim` struct and its tick loop.

use std::collections::BTreeMap;

use hr_core::{CellId, HexCoord, SimConfig, Terrain, Tick, TrainId, WorldPos};
use hr_track::{Router, TrackError, TrackNetwork};
use hr_train::{Train, TrainState};

use crate::error::{SimError, SimResult};
use crate::observer::{SimObserver, TickReport};
use crate::reserve;
use crate::snapshot::{CellSnapshot, TrainSnapshot, WorldSnapshot};

/// The main simulation runner.
///
/// `Sim<R>` owns the world and drives the three-phase tick loop:
///
/// 1. **Plan** — recompute each train's whole path to its head target via
///    the router.  `NoRoute` leaves the path empty; the train waits and the
///    search retries next tick.
/// 2. **Reserve** — the scheduler pass grants each train a collision-free
///    prefix of its whole path ([`reserve`] module).
/// 3. **Move** — [`Train::advance`] for each train against a fresh occupancy
///    view of the others.
///
/// All phases iterate trains in ascending `TrainId`.  Everything is
/// single-threaded; a tick always runs to completion (route search is
/// budget-bounded, so no topology can stall it).
///
/// Structural edits go through the `Sim` methods, never the network
/// directly, so cached train state referencing removed cells or tracks is
/// invalidated in the same call.  Create via
/// [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Global configuration (speeds, turn rates, grid scale).
    pub config: SimConfig,

    /// The current tick, incremented at the end of every `tick()`.
    pub tick: Tick,

    /// The track network.  Read freely; edit through the `Sim` methods.
    pub network: TrackNetwork,

    /// All trains, keyed by id.  Ascending iteration order is the fairness
    /// contract of the reservation scheduler.
    pub trains: BTreeMap<TrainId, Train>,

    /// The route search strategy.
    pub router: R,

    /// Monotonically increasing; ids are never reused.
    next_train_id: u32,
}

impl<R: Router> Sim<R> {
    pub fn new(config: SimConfig, network: TrackNetwork, router: R) -> Self {
        Self {
            config,
            tick: Tick::ZERO,
            network,
            trains: BTreeMap::new(),
            router,
            next_train_id: 0,
        }
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run one complete simulation step: plan, reserve, move.
    pub fn tick(&mut self) {
        // ── Phase 1: plan ─────────────────────────────────────────────────
        for train in self.trains.values_mut() {
            train.whole_path.clear();
            if train.is_broken() {
                continue;
            }
            let Some(target) = train.current_target() else {
                continue;
            };
            if let Ok(path) =
                self.router
                    .find_route(&self.network, target, train.prev_cell, train.cell)
            {
                train.whole_path = path.into();
            }
            // NoRoute: the path stays empty and the search retries next tick.
        }

        // ── Phase 2: reserve ──────────────────────────────────────────────
        reserve::allocate_free_paths(&self.network, &mut self.trains);

        // ── Phase 3: move ─────────────────────────────────────────────────
        let ids: Vec<TrainId> = self.trains.keys().copied().collect();
        for id in ids {
            let others: Vec<(TrainId, CellId)> =
                self.trains.values().map(|t| (t.id, t.cell)).collect();
            if let Some(train) = self.trains.get_mut(&id) {
                train.advance(&self.network, &others, &self.router, &self.config);
            }
        }

        self.tick = self.tick + 1;
    }

    /// Run exactly `n` ticks, calling observer hooks at every boundary.
    ///
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            self.tick();
            observer.on_tick_end(now, self.report());
        }
        observer.on_run_end(self.tick);
    }

    fn report(&self) -> TickReport {
        let mut report = TickReport::default();
        for train in self.trains.values() {
            match train.state {
                TrainState::Moving => report.moving += 1,
                TrainState::Broken => report.broken += 1,
                TrainState::Stopped => {}
            }
        }
        report
    }

    // ── Track edits ───────────────────────────────────────────────────────

    /// Add a cell (or retag the terrain of an existing one).
    pub fn add_cell(&mut self, coord: HexCoord, terrain: Terrain) -> CellId {
        self.network.add_cell(coord, terrain)
    }

    /// Remove a cell, dropping it from every train's target queue and
    /// clearing any cached path that referenced it.
    pub fn remove_cell(&mut self, id: CellId) -> SimResult<()> {
        self.network.remove_cell(id)?;
        for train in self.trains.values_mut() {
            train.targets.retain(|&t| t != id);
            if train.whole_path.contains(&id) || train.free_path.contains(&id) {
                train.whole_path.clear();
                train.free_path.clear();
            }
        }
        Ok(())
    }

    pub fn add_track(&mut self, a: CellId, b: CellId) -> SimResult<()> {
        self.network.add_track(a, b)?;
        Ok(())
    }

    /// Remove a track, invalidating the cached path of any train that was
    /// routed across it (including the implicit first hop from the train's
    /// current cell onto its path).
    pub fn remove_track(&mut self, a: CellId, b: CellId) -> SimResult<()> {
        self.network.remove_track(a, b)?;
        for train in self.trains.values_mut() {
            if traverses_edge(train, a, b) {
                train.whole_path.clear();
                train.free_path.clear();
            }
        }
        Ok(())
    }

    /// Remove the track closest to a world point (click handling).
    ///
    /// Resolves the point to its nearest cell pair; errors with
    /// `NoTrackNear` when the point is not inside any tracked cell, and
    /// `TrackNotFound` when the resolved pair has no track between it.
    pub fn remove_track_at(&mut self, pos: WorldPos) -> SimResult<(CellId, CellId)> {
        let Some((a, b)) = self.network.nearest_track_pair(pos) else {
            return Err(SimError::NoTrackNear(pos));
        };
        if !self.network.are_linked(a, b) {
            return Err(TrackError::TrackNotFound { a, b }.into());
        }
        self.remove_track(a, b)?;
        Ok((a, b))
    }

    // ── Train management ──────────────────────────────────────────────────

    /// Spawn a stopped train at the center of `cell`, heading away from
    /// `prev_cell`.  Both cells must exist and be distinct.
    pub fn add_train(&mut self, cell: CellId, prev_cell: CellId) -> SimResult<TrainId> {
        if cell == prev_cell {
            return Err(SimError::InvalidSpawn {
                cell,
                prev_cell,
                reason: "spawn cells must be distinct",
            });
        }
        let pos = self
            .network
            .cell(cell)
            .ok_or(TrackError::CellNotFound(cell))?
            .pos;
        let prev_pos = self
            .network
            .cell(prev_cell)
            .ok_or(TrackError::CellNotFound(prev_cell))?
            .pos;
        let heading = prev_pos.bearing_to(pos);

        let id = TrainId(self.next_train_id);
        self.next_train_id += 1;
        self.trains
            .insert(id, Train::new(id, cell, prev_cell, pos, heading));
        Ok(id)
    }

    /// Remove a train (the only remedy for a broken one).
    pub fn remove_train(&mut self, id: TrainId) -> SimResult<()> {
        self.trains
            .remove(&id)
            .map(|_| ())
            .ok_or(SimError::TrainNotFound(id))
    }

    /// Append a destination to a train's target queue.
    pub fn push_target(&mut self, train: TrainId, cell: CellId) -> SimResult<()> {
        if self.network.cell(cell).is_none() {
            return Err(TrackError::CellNotFound(cell).into());
        }
        let train = self
            .trains
            .get_mut(&train)
            .ok_or(SimError::TrainNotFound(train))?;
        train.targets.push_back(cell);
        Ok(())
    }

    /// Toggle patrol mode: reached targets re-enqueue at the queue's tail.
    pub fn set_cycle(&mut self, train: TrainId, cycle: bool) -> SimResult<()> {
        let train = self
            .trains
            .get_mut(&train)
            .ok_or(SimError::TrainNotFound(train))?;
        train.cycle = cycle;
        Ok(())
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn train(&self, id: TrainId) -> Option<&Train> {
        self.trains.get(&id)
    }

    pub fn train_count(&self) -> usize {
        self.trains.len()
    }

    /// Copy the whole world into an owned, serializable snapshot.
    pub fn snapshot(&self) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            cells: self
                .network
                .cells()
                .map(|c| CellSnapshot {
                    id: c.id,
                    coord: c.coord,
                    terrain: c.terrain,
                    links: c.links.clone(),
                })
                .collect(),
            trains: self
                .trains
                .values()
                .map(|t| TrainSnapshot {
                    id: t.id,
                    pos: t.pos,
                    heading: t.heading,
                    state: t.state,
                })
                .collect(),
        }
    }
}

/// Whether the train's planned path crosses the `a ↔ b` edge, counting the
/// implicit hop from its current cell onto the path's first cell.
fn traverses_edge(train: &Train, a: CellId, b: CellId) -> bool {
    let mut prev = train.cell;
    for &next in &train.whole_path {
        if (prev == a && next == b) || (prev == b && next == a) {
            return true;
        }
        prev = next;
    }
    false
}
