//! `hr-train` — per-train state and tick kinematics.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`state`]  | `TrainState` machine, `Train`                            |
//! | [`engine`] | `Train::advance` — the per-tick life-cycle               |
//!
//! # Movement model
//!
//! Trains move continuously in world space and are snapped back onto the
//! grid each tick by re-deriving their current cell from their position.
//! They may only traverse cells the reservation scheduler has granted them
//! (`free_path`); speed is derived from the remaining grant so a train
//! brakes smoothly as it approaches the edge of its reservation instead of
//! stopping dead.

pub mod engine;
pub mod state;

#[cfg(test)]
mod tests;

pub use state::{Train, TrainState};
