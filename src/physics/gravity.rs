//! Central-body gravity solver.
//!
//! Applies the pull of the central mass to one satellite per call:
//! the force is one-directional, so the central body is never perturbed
//! and satellites never attract each other.

use crate::engine::state::{PointMass, Satellite};

/// Default minimum separation used to clamp the distance before
/// normalizing, so a satellite sitting exactly on the central body
/// cannot produce a division by zero.
pub const DEFAULT_MIN_DISTANCE: f64 = 1e-6;

/// Gravity solver for the central mass.
#[derive(Debug, Clone)]
pub struct GravitySolver {
    /// Game-tuned gravitational constant.
    g: f64,
    /// Minimum separation used for normalization and the force law.
    min_distance: f64,
}

impl GravitySolver {
    /// Create a solver with the given gravitational constant and
    /// minimum separation clamp.
    #[must_use]
    pub const fn new(g: f64, min_distance: f64) -> Self {
        Self { g, min_distance }
    }

    /// Gravitational constant in use.
    #[must_use]
    pub const fn gravitational_constant(&self) -> f64 {
        self.g
    }

    /// Scalar force magnitude at the given separation.
    ///
    /// `F = G * m_central * m_satellite / d²`, with `d` clamped to the
    /// configured minimum.
    #[must_use]
    pub fn force_magnitude(&self, central_mass: f64, satellite_mass: f64, distance: f64) -> f64 {
        let d = distance.max(self.min_distance);
        self.g * central_mass * satellite_mass / (d * d)
    }

    /// Accumulate one tick of gravity into the satellite's velocity.
    ///
    /// Only the satellite changes; the attracting body is read-only.
    pub fn apply(&self, central: &impl PointMass, satellite: &mut Satellite) {
        let displacement = central.position() - satellite.position;
        let distance = displacement.magnitude().max(self.min_distance);
        let unit = displacement.scale(1.0 / distance);

        let force = self.g * central.mass() * satellite.mass / (distance * distance);
        satellite.velocity = satellite.velocity + unit.scale(force);
    }
}

impl Default for GravitySolver {
    fn default() -> Self {
        Self::new(1.0, DEFAULT_MIN_DISTANCE)
    }
}
