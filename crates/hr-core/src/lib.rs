//! `hr-core` — foundational types for the `hexrail` train simulation.
//!
//! This crate is a dependency of every other `hr-*` crate.  It intentionally
//! has no `hr-*` dependencies and only one optional external one (`serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`ids`]     | `CellId`, `TrainId`                                 |
//! | [`geo`]     | `WorldPos`, planar distance and bearing             |
//! | [`angle`]   | `[0, 2π)` normalization, shorter-arc rotation       |
//! | [`hex`]     | `HexCoord`, `Turn`, `HexGrid` offset-grid math      |
//! | [`terrain`] | `Terrain` cosmetic cell tag                         |
//! | [`time`]    | `Tick`                                              |
//! | [`config`]  | `SimConfig`                                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod angle;
pub mod config;
pub mod geo;
pub mod hex;
pub mod ids;
pub mod terrain;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use geo::WorldPos;
pub use hex::{HexCoord, HexGrid, Turn};
pub use ids::{CellId, TrainId};
pub use terrain::Terrain;
pub use time::Tick;
