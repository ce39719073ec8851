//! `hr-track` — track network, spatial indexing, and route search.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`cell`]    | `Cell` — a grid tile with symmetric track links           |
//! | [`network`] | `TrackNetwork` (id registry + coord index + R-tree)       |
//! | [`router`]  | `Router` trait, `TurnRouter` bounded depth-first search   |
//! | [`error`]   | `TrackError`, `TrackResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.        |

pub mod cell;
pub mod error;
pub mod network;
pub mod router;


pub use cell::Cell;
pub use error::{TrackError, TrackResult};
pub use network::TrackNetwork;
pub use router::{Router, TurnRouter};
