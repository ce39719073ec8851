//! Unit tests for hr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, TrainId};

    #[test]
    fn ordering() {
        assert!(CellId(0) < CellId(1));
        assert!(TrainId(100) > TrainId(99));
    }

    #[test]
    fn display() {
        assert_eq!(CellId(7).to_string(), "CellId(7)");
        assert_eq!(TrainId(3).to_string(), "TrainId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::WorldPos;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn distance() {
        let a = WorldPos::new(0.0, 0.0);
        let b = WorldPos::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-5);
        assert!((a.distance_sq(b) - 25.0).abs() < 1e-4);
    }

    #[test]
    fn bearing_cardinals() {
        let o = WorldPos::new(0.0, 0.0);
        assert!((o.bearing_to(WorldPos::new(1.0, 0.0)) - 0.0).abs() < 1e-6);
        assert!((o.bearing_to(WorldPos::new(0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((o.bearing_to(WorldPos::new(-1.0, 0.0)) - PI).abs() < 1e-6);
        // -y is three-quarters of the way round in [0, 2π).
        assert!((o.bearing_to(WorldPos::new(0.0, -1.0)) - 3.0 * FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn advance_along_heading() {
        let p = WorldPos::new(10.0, 10.0).advance(5.0, 0.0);
        assert!((p.x - 15.0).abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}

#[cfg(test)]
mod angle {
    use crate::angle::{angular_distance, normalize, rotate_toward};
    use std::f32::consts::{PI, TAU};

    #[test]
    fn normalize_wraps_both_ways() {
        assert!((normalize(TAU + 0.5) - 0.5).abs() < 1e-6);
        assert!((normalize(-0.5) - (TAU - 0.5)).abs() < 1e-6);
    }

    #[test]
    fn angular_distance_shorter_arc() {
        assert!((angular_distance(0.1, TAU - 0.1) - 0.2).abs() < 1e-5);
        assert!((angular_distance(0.0, PI) - PI).abs() < 1e-5);
    }

    #[test]
    fn rotate_snaps_within_step() {
        let r = rotate_toward(1.0, 1.03, 0.05);
        assert_eq!(r, 1.03);
    }

    #[test]
    fn rotate_steps_toward_target() {
        let r = rotate_toward(1.0, 2.0, 0.1);
        assert!((r - 1.1).abs() < 1e-6);
        let r = rotate_toward(2.0, 1.0, 0.1);
        assert!((r - 1.9).abs() < 1e-6);
    }

    #[test]
    fn rotate_crosses_wraparound() {
        // 6.2 rad is just below 2π; the short way to 0.1 rad is forward
        // through the wraparound, not 6.1 rad backwards.
        let r = rotate_toward(6.2, 0.1, 0.05);
        assert!((r - 6.25).abs() < 1e-5);
        // And the other direction.
        let r = rotate_toward(0.1, 6.2, 0.05);
        assert!((r - 0.05).abs() < 1e-5);
    }

    #[test]
    fn rotate_result_stays_normalized() {
        let r = rotate_toward(6.27, 1.0, 0.05);
        assert!((0.0..TAU).contains(&r));
    }
}

#[cfg(test)]
mod hex {
    use crate::{HexCoord, HexGrid, Turn, WorldPos};

    fn grid() -> HexGrid {
        HexGrid::new(60.0)
    }

    #[test]
    fn radii() {
        let g = grid();
        assert_eq!(g.outer_radius(), 60.0);
        assert!((g.inner_radius() - 51.9615).abs() < 1e-3);
    }

    #[test]
    fn odd_rows_shift_right() {
        let g = grid();
        let even = g.to_world(HexCoord::new(0, 0));
        let odd = g.to_world(HexCoord::new(0, 1));
        assert!((odd.x - even.x - g.inner_radius()).abs() < 1e-3);
    }

    #[test]
    fn world_roundtrip_over_signed_range() {
        let g = grid();
        for col in -3..=3 {
            for row in -3..=3 {
                let c = HexCoord::new(col, row);
                assert_eq!(g.to_coord(g.to_world(c)), c, "roundtrip failed for {c}");
            }
        }
    }

    #[test]
    fn to_coord_rounds_to_nearest_center() {
        let g = grid();
        let center = g.to_world(HexCoord::new(2, 2));
        // A point well inside the cell, off-center, still resolves to it.
        let off = WorldPos::new(center.x + 20.0, center.y - 15.0);
        assert_eq!(g.to_coord(off), HexCoord::new(2, 2));
    }

    #[test]
    fn extrapolate_straight() {
        let g = grid();
        let next = g.extrapolate(HexCoord::new(0, 0), HexCoord::new(1, 0), Turn::Straight);
        assert_eq!(next, HexCoord::new(2, 0));
    }

    #[test]
    fn extrapolate_turns_land_on_adjacent_rows() {
        let g = grid();
        // Heading +x out of (1, 0): right bends into row 1, left into row -1.
        let right = g.extrapolate(HexCoord::new(0, 0), HexCoord::new(1, 0), Turn::Right);
        let left = g.extrapolate(HexCoord::new(0, 0), HexCoord::new(1, 0), Turn::Left);
        assert_eq!(right, HexCoord::new(1, 1));
        assert_eq!(left, HexCoord::new(1, -1));
    }

    #[test]
    fn extrapolate_next_is_adjacent() {
        let g = grid();
        let curr = HexCoord::new(1, 0);
        let curr_pos = g.to_world(curr);
        for turn in Turn::PRIORITY {
            let next = g.extrapolate(HexCoord::new(0, 0), curr, turn);
            let d = curr_pos.distance(g.to_world(next));
            assert!(
                (d - 2.0 * g.inner_radius()).abs() < 1e-2,
                "{turn:?} landed {d} away"
            );
        }
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.edge_len, 60.0);
        assert_eq!(cfg.max_speed, 3.0);
        assert!(cfg.acceleration > 0.0);
        assert!(cfg.max_turn_rate > 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}
