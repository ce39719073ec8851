//! Unit tests for hr-train.

#[cfg(test)]
mod helpers {
    use hr_core::{CellId, HexCoord, SimConfig, Terrain, TrainId};
    use hr_track::TrackNetwork;

    use crate::Train;

    /// Horizontal 6-cell chain at row 0, tracked consecutively.
    pub fn chain() -> (TrackNetwork, Vec<CellId>) {
        let mut net = TrackNetwork::default();
        let ids: Vec<CellId> = (0..6)
            .map(|col| net.add_cell(HexCoord::new(col, 0), Terrain::Grass))
            .collect();
        for pair in ids.windows(2) {
            net.add_track(pair[0], pair[1]).unwrap();
        }
        (net, ids)
    }

    /// A train standing on `cell`, having arrived from `prev`.
    pub fn train_at(net: &TrackNetwork, cell: CellId, prev: CellId) -> Train {
        let pos = net.cell(cell).unwrap().pos;
        let heading = net.cell(prev).unwrap().pos.bearing_to(pos);
        Train::new(TrainId(0), cell, prev, pos, heading)
    }

    pub fn cfg() -> SimConfig {
        SimConfig::default()
    }
}

// ── State machine ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod state_machine {
    use hr_core::TrainId;
    use hr_track::TurnRouter;

    use crate::TrainState;

    use super::helpers;

    #[test]
    fn stopped_to_moving_to_stopped() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        let cfg = helpers::cfg();
        let router = TurnRouter::default();

        assert_eq!(train.state, TrainState::Stopped);

        // Grant a path: the train spools up and is Moving.
        train.free_path = [ids[2], ids[3]].into();
        train.advance(&net, &[], &router, &cfg);
        assert!(train.speed > 0.0);
        assert_eq!(train.state, TrainState::Moving);

        // Revoke it: target speed falls to zero and the train brakes to a
        // stop over the following ticks.
        train.free_path.clear();
        for _ in 0..200 {
            train.free_path.clear(); // scheduler grants nothing
            train.advance(&net, &[], &router, &cfg);
        }
        assert_eq!(train.speed, 0.0);
        assert_eq!(train.state, TrainState::Stopped);
    }

    #[test]
    fn collision_breaks_and_clears() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.free_path = [ids[2]].into();
        train.targets = [ids[4]].into();
        train.speed = 1.0;

        let others = [(TrainId(9), ids[1])];
        train.advance(&net, &others, &TurnRouter::default(), &helpers::cfg());

        assert_eq!(train.state, TrainState::Broken);
        assert_eq!(train.speed, 0.0);
        assert_eq!(train.target_speed, 0.0);
        assert!(train.free_path.is_empty());
        assert!(train.targets.is_empty());
    }

    #[test]
    fn own_occupancy_entry_is_not_a_collision() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        let others = [(train.id, ids[1])];
        train.advance(&net, &others, &TurnRouter::default(), &helpers::cfg());
        assert_ne!(train.state, TrainState::Broken);
    }

    #[test]
    fn broken_is_absorbing() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.break_down();

        // Even with a fresh grant, a wreck stays put.
        for _ in 0..10 {
            train.free_path = [ids[2], ids[3]].into();
            train.advance(&net, &[], &TurnRouter::default(), &helpers::cfg());
        }
        assert_eq!(train.state, TrainState::Broken);
        assert_eq!(train.speed, 0.0);
        let home = net.cell(ids[1]).unwrap().pos;
        assert_eq!(train.pos, home);
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematics {
    use hr_track::TurnRouter;

    use super::helpers;

    #[test]
    fn speed_integrates_without_overshoot() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        let cfg = helpers::cfg();
        let router = TurnRouter::default();

        train.free_path = [ids[2]].into();
        train.advance(&net, &[], &router, &cfg);
        assert!((train.speed - cfg.acceleration).abs() < 1e-6);

        // Target speed is one cell's worth; the speed must converge to
        // exactly 1.0 and hold, never oscillating past it.
        for _ in 0..100 {
            train.free_path = [ids[2]].into();
            train.whole_path = [ids[2]].into();
            train.pos = net.cell(ids[1]).unwrap().pos; // pin in place
            train.advance(&net, &[], &router, &cfg);
            assert!(train.speed <= 1.0 + 1e-6);
        }
        assert!((train.speed - 1.0).abs() < 1e-6);
    }

    #[test]
    fn target_speed_tracks_reservation_length() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        let cfg = helpers::cfg();
        let router = TurnRouter::default();

        train.free_path = [ids[2], ids[3], ids[4], ids[5]].into();
        train.advance(&net, &[], &router, &cfg);
        // Four cells ahead but capped at max_speed.
        assert_eq!(train.target_speed, cfg.max_speed);

        train.free_path = [ids[2]].into();
        train.advance(&net, &[], &router, &cfg);
        assert_eq!(train.target_speed, 1.0);

        train.free_path.clear();
        train.advance(&net, &[], &router, &cfg);
        assert_eq!(train.target_speed, 0.0);
    }

    #[test]
    fn position_advances_along_heading() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.speed = 1.0;
        train.free_path = [ids[2]].into();
        let x0 = train.pos.x;

        train.advance(&net, &[], &TurnRouter::default(), &helpers::cfg());
        // Heading is +x along the chain; y must not drift.
        assert!(train.pos.x > x0);
        assert!((train.pos.y - net.cell(ids[1]).unwrap().pos.y).abs() < 1e-3);
    }

    #[test]
    fn heading_turn_bounded_and_speed_scaled() {
        let (net, ids) = helpers::chain();
        let cfg = helpers::cfg();
        let router = TurnRouter::default();

        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.heading = std::f32::consts::FRAC_PI_2; // facing down, off-axis
        train.speed = 2.0;
        train.free_path = [ids[2]].into();
        let before = train.heading;
        train.advance(&net, &[], &router, &cfg);
        let turned = (before - train.heading).abs();
        let expected = (2.0 * cfg.turn_rate_factor).min(cfg.max_turn_rate);
        assert!(turned <= expected + 1e-5);
        assert!(turned > 0.0);

        // A stationary train cannot rotate at all.
        let mut parked = helpers::train_at(&net, ids[1], ids[0]);
        parked.heading = std::f32::consts::FRAC_PI_2;
        parked.free_path = [ids[2]].into();
        let before = parked.heading;
        parked.advance(&net, &[], &router, &cfg);
        // One tick of acceleration barely moves the needle.
        assert!((parked.heading - before).abs() < cfg.acceleration * cfg.turn_rate_factor + 1e-6);
    }

    #[test]
    fn fallback_steering_without_reservation() {
        let (net, ids) = helpers::chain();
        let cfg = helpers::cfg();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.heading = std::f32::consts::FRAC_PI_2;
        train.speed = 2.0;
        // No free path: the router's single-step fallback (straight ahead to
        // ids[2]) still pulls the heading back toward +x.
        train.advance(&net, &[], &TurnRouter::default(), &cfg);
        assert!(train.heading < std::f32::consts::FRAC_PI_2);
    }
}

// ── Bookkeeping ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod bookkeeping {
    use hr_track::TurnRouter;

    use super::helpers;

    #[test]
    fn cell_refresh_shifts_previous() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        // Teleport the body into the next cell; the tick re-derives ids[2].
        train.pos = net.cell(ids[2]).unwrap().pos;
        train.advance(&net, &[], &TurnRouter::default(), &helpers::cfg());
        assert_eq!(train.cell, ids[2]);
        assert_eq!(train.prev_cell, ids[1]);
    }

    #[test]
    fn reached_target_pops() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.targets = [ids[1], ids[4]].into();
        train.advance(&net, &[], &TurnRouter::default(), &helpers::cfg());
        assert_eq!(train.current_target(), Some(ids[4]));
    }

    #[test]
    fn cycling_target_reenqueues_at_tail() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.cycle = true;
        train.targets = [ids[1], ids[4]].into();
        train.advance(&net, &[], &TurnRouter::default(), &helpers::cfg());
        assert_eq!(train.targets, [ids[4], ids[1]]);
    }

    #[test]
    fn path_heads_pop_on_arrival() {
        let (net, ids) = helpers::chain();
        let mut train = helpers::train_at(&net, ids[1], ids[0]);
        train.whole_path = [ids[1], ids[2]].into();
        train.free_path = [ids[1], ids[2]].into();
        train.advance(&net, &[], &TurnRouter::default(), &helpers::cfg());
        assert_eq!(train.whole_path.front(), Some(&ids[2]));
        assert_eq!(train.free_path.front(), Some(&ids[2]));
    }
}
