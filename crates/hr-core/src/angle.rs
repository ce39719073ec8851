//! Angle helpers over the `[0, 2π)` heading convention.
//!
//! Train headings and cell bearings both live in `[0, 2π)`, so every rotation
//! has to survive the 0/2π wraparound.  `rotate_toward` always takes the
//! shorter arc; a naive `current < target` comparison would spin a train the
//! long way round whenever the arc crosses zero.

use std::f32::consts::{PI, TAU};

/// Normalize an angle into `[0, 2π)`.
#[inline]
pub fn normalize(a: f32) -> f32 {
    a.rem_euclid(TAU)
}

/// Unsigned shorter-arc distance between two angles, in `[0, π]`.
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    if d > PI { TAU - d } else { d }
}

/// Step `current` toward `target` by at most `max_step`, along the shorter
/// arc.  Snaps exactly to `target` once within `max_step`.  Both inputs and
/// the result are in `[0, 2π)`.
pub fn rotate_toward(current: f32, target: f32, max_step: f32) -> f32 {
    let target = normalize(target);
    // Signed shorter-arc difference in (-π, π].
    let diff = (target - current + PI).rem_euclid(TAU) - PI;
    if diff.abs() <= max_step {
        target
    } else {
        normalize(current + max_step.copysign(diff))
    }
}
