//! `hr-sim` — tick loop orchestrator for the hexrail simulation.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for each tick:
//!   ① Plan    — recompute every train's whole path to its head target
//!               via the Router (NoRoute → empty path, retry next tick).
//!   ② Reserve — ascending TrainId, grant each train a collision-free
//!               prefix of its whole path; at most one reserver per cell.
//!   ③ Move    — Train::advance for every train against a fresh occupancy
//!               view; co-located trains break down.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | Serializable snapshots, config, and coordinate types.   |
//! | `fx-hash` | FxHash for the per-tick reservation table.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hr_core::{HexCoord, SimConfig, Terrain};
//! use hr_sim::{NoopObserver, SimBuilder};
//! use hr_track::{TrackNetwork, TurnRouter};
//!
//! let mut net = TrackNetwork::default();
//! let a = net.add_cell(HexCoord::new(0, 0), Terrain::Grass);
//! let b = net.add_cell(HexCoord::new(1, 0), Terrain::Grass);
//! net.add_track(a, b)?;
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), TurnRouter::default())
//!     .network(net)
//!     .train(b, a)
//!     .build()?;
//! sim.run_ticks(100, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
mod reserve;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickReport};
pub use sim::Sim;
pub use snapshot::{CellSnapshot, TrainSnapshot, WorldSnapshot};
