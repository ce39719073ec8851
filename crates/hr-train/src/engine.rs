//! The per-tick train life-cycle.

use hr_core::{CellId, SimConfig, TrainId, angle};
use hr_track::{Router, TrackNetwork};

use crate::state::{Train, TrainState};

impl Train {
    /// Advance this train by one tick.
    ///
    /// `others` is the occupancy view of every train's current cell at the
    /// time of the call (this train's own entry is ignored).  The order of
    /// operations mirrors the life-cycle contract:
    ///
    /// 1. re-derive the current cell from the world position,
    /// 2. collision check against `others`,
    /// 3. pop reached target / path heads,
    /// 4. derive target speed from the remaining reservation,
    /// 5. integrate speed under the acceleration bound,
    /// 6. update the motion state,
    /// 7. steer toward the next reserved cell (or a best-effort fallback),
    /// 8. move.
    ///
    /// A broken train takes the same path through this function: its speeds
    /// are zeroed and state-guarded, so steps 5-8 are no-ops.
    pub fn advance<R: Router>(
        &mut self,
        net: &TrackNetwork,
        others: &[(TrainId, CellId)],
        router: &R,
        cfg: &SimConfig,
    ) {
        // ── 1. Position → cell ────────────────────────────────────────────
        if let Some(here) = net.cell_at(net.grid().to_coord(self.pos))
            && here != self.cell
        {
            self.prev_cell = self.cell;
            self.cell = here;
        }

        // ── 2. Collision ──────────────────────────────────────────────────
        if others
            .iter()
            .any(|&(oid, ocell)| oid != self.id && ocell == self.cell)
        {
            self.break_down();
        }

        // ── 3. Reached-head bookkeeping ───────────────────────────────────
        if self.targets.front() == Some(&self.cell) {
            let reached = self.targets.pop_front();
            if self.cycle && let Some(reached) = reached {
                self.targets.push_back(reached);
            }
        }
        if self.whole_path.front() == Some(&self.cell) {
            self.whole_path.pop_front();
        }
        if self.free_path.front() == Some(&self.cell) {
            self.free_path.pop_front();
        }

        // ── 4-6. Speed and state ──────────────────────────────────────────
        self.target_speed = (self.free_path.len() as f32).min(cfg.max_speed);
        let turn_rate = (self.speed * cfg.turn_rate_factor).min(cfg.max_turn_rate);
        self.integrate_speed(cfg.acceleration);
        self.update_state();

        // ── 7. Steering ───────────────────────────────────────────────────
        //
        // With no reservation the train still aligns itself with the first
        // viable continuation so it leaves a junction on a plausible bearing
        // once a path is granted.
        let steer_to = self
            .free_path
            .front()
            .copied()
            .or_else(|| router.next_cell(net, self.prev_cell, self.cell));
        if let Some(next) = steer_to
            && let Some(cell) = net.cell(next)
        {
            let bearing = self.pos.bearing_to(cell.pos);
            self.heading = angle::rotate_toward(self.heading, bearing, turn_rate);
        }

        // ── 8. Move ───────────────────────────────────────────────────────
        self.pos = self.pos.advance(self.speed, self.heading);
    }

    /// Step `speed` toward `target_speed`, bounded by `accel` per tick and
    /// clamped so it never overshoots.  Broken trains stay at zero.
    fn integrate_speed(&mut self, accel: f32) {
        if self.state == TrainState::Broken {
            return;
        }
        if self.speed < self.target_speed {
            self.speed = (self.speed + accel).min(self.target_speed);
        } else if self.speed > self.target_speed {
            self.speed = (self.speed - accel).max(self.target_speed);
        }
    }

    /// `Stopped → Moving` on nonzero speed; `Moving → Stopped` once both
    /// current and target speed are zero.  `Broken` never changes here.
    fn update_state(&mut self) {
        match self.state {
            TrainState::Stopped if self.speed != 0.0 => self.state = TrainState::Moving,
            TrainState::Moving if self.speed == 0.0 && self.target_speed == 0.0 => {
                self.state = TrainState::Stopped;
            }
            _ => {}
        }
    }
}
