//! Train state and construction.

use std::collections::VecDeque;

use hr_core::{CellId, TrainId, WorldPos};

/// The motion state of a train.
///
/// `Stopped ⇄ Moving` transitions are driven by speed; `Broken` is entered
/// on collision from either state and is absorbing — the core defines no
/// recovery path.  A broken train is a persistent, user-visible condition
/// requiring external intervention (removal).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrainState {
    #[default]
    Stopped,
    Moving,
    Broken,
}

/// A single train.
///
/// Fields are `pub`: the sim layer orchestrates trains directly and
/// snapshots copy fields out.  External collaborators never see a `Train`,
/// only snapshots.
#[derive(Clone, Debug)]
pub struct Train {
    pub id: TrainId,

    // ── Position on the map ───────────────────────────────────────────────
    /// The cell currently containing the train.
    pub cell: CellId,
    /// The cell it came from; together with `cell` this defines the incoming
    /// heading used by the turn model.
    pub prev_cell: CellId,
    pub pos: WorldPos,
    /// Heading in radians, `[0, 2π)`.
    pub heading: f32,

    // ── Motion ────────────────────────────────────────────────────────────
    pub speed: f32,
    pub target_speed: f32,
    pub state: TrainState,

    // ── Route ─────────────────────────────────────────────────────────────
    /// Ordered queue of destination cells.  Only the head is routed to.
    pub targets: VecDeque<CellId>,
    /// Full route to the head target, ignoring other trains.  Recomputed
    /// every tick by the sim's plan phase.
    pub whole_path: VecDeque<CellId>,
    /// The scheduler-approved prefix of `whole_path` this train may actually
    /// traverse this tick.
    pub free_path: VecDeque<CellId>,
    /// When set, a reached target re-enqueues at the tail of `targets`,
    /// making the train patrol its targets forever.
    pub cycle: bool,
}

impl Train {
    /// A stopped train at `pos` with the heading defined by `prev_cell → cell`.
    pub fn new(id: TrainId, cell: CellId, prev_cell: CellId, pos: WorldPos, heading: f32) -> Self {
        Self {
            id,
            cell,
            prev_cell,
            pos,
            heading,
            speed: 0.0,
            target_speed: 0.0,
            state: TrainState::Stopped,
            targets: VecDeque::new(),
            whole_path: VecDeque::new(),
            free_path: VecDeque::new(),
            cycle: false,
        }
    }

    #[inline]
    pub fn is_broken(&self) -> bool {
        self.state == TrainState::Broken
    }

    /// The target currently being routed to.
    #[inline]
    pub fn current_target(&self) -> Option<CellId> {
        self.targets.front().copied()
    }

    /// Enter the terminal `Broken` state: all motion and planning state is
    /// cleared so the wreck never moves or reserves track again.
    pub fn break_down(&mut self) {
        self.state = TrainState::Broken;
        self.speed = 0.0;
        self.target_speed = 0.0;
        self.free_path.clear();
        self.targets.clear();
    }
}
