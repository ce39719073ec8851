//! Simulation configuration.

/// Top-level simulation constants.
///
/// Typically loaded from a TOML/JSON file by the application crate (enable
/// the `serde` feature) and passed to `SimBuilder`.  The defaults are the
/// tuning the simulation was designed around: a 60-unit hex edge, trains
/// topping out at 3 world units per tick.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Hex edge length in world units.
    pub edge_len: f32,

    /// Speed ceiling, world units per tick.
    pub max_speed: f32,

    /// Speed change per tick.  Symmetric: the same bound applies to
    /// accelerating and braking.
    pub acceleration: f32,

    /// Heading change per tick per unit of current speed.  Faster trains turn
    /// proportionally faster.
    pub turn_rate_factor: f32,

    /// Hard cap on heading change per tick, radians.
    pub max_turn_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            edge_len: 60.0,
            max_speed: 3.0,
            acceleration: 0.02,
            turn_rate_factor: 1.0 / 80.0,
            max_turn_rate: 0.05,
        }
    }
}
