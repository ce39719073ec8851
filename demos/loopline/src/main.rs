//! Two trains sharing a hexagonal main loop: one patrols between two far
//! corners, the other merges in from a feeder branch and laps the loop.
//! A dead-end siding hangs off the merge junction to give the route search
//! something to back out of.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use hr_core::{CellId, HexCoord, HexGrid, SimConfig, Terrain, Tick, TrainId, Turn};
use hr_sim::{SimBuilder, SimObserver, TickReport};
use hr_track::{TrackNetwork, TurnRouter};

struct Progress;

impl SimObserver for Progress {
    fn on_tick_end(&mut self, tick: Tick, report: TickReport) {
        if tick.0 % 50 == 0 {
            println!("{tick}: {} moving, {} broken", report.moving, report.broken);
        }
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        println!("finished at {final_tick}");
    }
}

fn scatter(rng: &mut SmallRng) -> Terrain {
    match rng.gen_range(0..10) {
        0 => Terrain::Water,
        1 => Terrain::Sand,
        2 => Terrain::Snow,
        3 => Terrain::Forest,
        _ => Terrain::Grass,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SmallRng::seed_from_u64(7);
    let grid = HexGrid::default();
    let mut net = TrackNetwork::new(grid);

    // ── Main loop ─────────────────────────────────────────────────────────
    //
    // A closed loop must turn through a full 360°, i.e. six 60° turns: walk
    // six sides of [straight, straight, right] and the path closes back
    // onto its two seed cells.
    let mut coords = vec![HexCoord::new(0, 0), HexCoord::new(1, 0)];
    for _ in 0..6 {
        for turn in [Turn::Straight, Turn::Straight, Turn::Right] {
            let n = coords.len();
            let next = grid.extrapolate(coords[n - 2], coords[n - 1], turn);
            coords.push(next);
        }
    }
    coords.truncate(coords.len() - 2);

    let ring: Vec<CellId> = coords
        .iter()
        .map(|&c| net.add_cell(c, scatter(&mut rng)))
        .collect();
    for i in 0..ring.len() {
        net.add_track(ring[i], ring[(i + 1) % ring.len()])?;
    }

    // ── Feeder branch and siding, both meeting the loop at (2, 0) ─────────
    let junction = ring[2];
    let f2 = net.add_cell(HexCoord::new(1, 2), scatter(&mut rng));
    let f1 = net.add_cell(HexCoord::new(1, 1), scatter(&mut rng));
    net.add_track(f2, f1)?;
    net.add_track(f1, junction)?;

    let s1 = net.add_cell(HexCoord::new(2, 1), scatter(&mut rng));
    let s2 = net.add_cell(HexCoord::new(3, 2), scatter(&mut rng));
    let s3 = net.add_cell(HexCoord::new(3, 3), scatter(&mut rng));
    net.add_track(junction, s1)?;
    net.add_track(s1, s2)?;
    net.add_track(s2, s3)?;

    // ── Trains ────────────────────────────────────────────────────────────
    let mut sim = SimBuilder::new(SimConfig::default(), TurnRouter::default())
        .network(net)
        .train(ring[1], ring[0]) // on the loop, running clockwise
        .train(f1, f2) // on the feeder, about to merge
        .build()?;

    let flyer = TrainId(0);
    sim.push_target(flyer, ring[7])?;
    sim.push_target(flyer, ring[13])?;
    sim.set_cycle(flyer, true)?;

    let local = TrainId(1);
    sim.push_target(local, ring[4])?;
    sim.set_cycle(local, true)?;

    println!(
        "{} cells, {} trains — running 600 ticks",
        sim.network.cell_count(),
        sim.train_count()
    );
    sim.run_ticks(600, &mut Progress);

    for train in sim.snapshot().trains {
        println!(
            "train {} at {} heading {:.2} ({:?})",
            train.id, train.pos, train.heading, train.state
        );
    }
    Ok(())
}
