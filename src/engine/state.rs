//! Kinematic state for orbiting bodies.
//!
//! Implements the world state with:
//! - 2D vector algebra for positions and velocities
//! - The central mass and its satellites
//! - Per-satellite flight status and fuel accounting
//!
//! The physics components depend only on the [`PointMass`] contract
//! (position + mass); anything cosmetic (orientation, trails, sprites)
//! lives outside this crate and reads positions through telemetry.

use serde::{Deserialize, Serialize};

/// 2D vector for positions and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component (screen convention: grows downward).
    pub y: f64,
}

impl Vec2 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Magnitude squared.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Magnitude (length).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Normalize to unit vector.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < f64::EPSILON {
            Self::zero()
        } else {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        }
    }

    /// Scale by scalar.
    #[must_use]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    /// Check if all components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::ops::Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Minimal positional/mass contract the physics depends on.
///
/// Both the central body and satellites implement this; the gravity solver
/// only ever sees this surface of the attracting body.
pub trait PointMass {
    /// Current position.
    fn position(&self) -> Vec2;
    /// Mass in game units.
    fn mass(&self) -> f64;
}

/// Flight status of a satellite.
///
/// `Crashed` is terminal: velocity is forced to zero and the satellite no
/// longer receives thrust, gravity, or integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightStatus {
    /// Normal powered flight.
    #[default]
    Flying,
    /// Fuel reached zero; a fixed horizontal drift is imposed each tick.
    FuelExhausted,
    /// Entered the atmosphere; velocity pinned to zero for the rest of
    /// the run.
    Crashed,
}

/// The central mass every satellite orbits.
///
/// Created once at mission start; its position never changes during a run
/// and gravity is one-directional, so satellites never perturb it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralBody {
    name: String,
    position: Vec2,
    mass: f64,
}

impl CentralBody {
    /// Create the central body.
    #[must_use]
    pub fn new(name: impl Into<String>, position: Vec2, mass: f64) -> Self {
        Self {
            name: name.into(),
            position,
            mass,
        }
    }

    /// Body name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PointMass for CentralBody {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}

/// One orbiting satellite.
///
/// Position and velocity are mutated every tick by the engine. Distance to
/// the central body is never stored: it is recomputed from the current
/// positions on demand so it can never go stale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Satellite {
    /// Satellite name (display only).
    pub name: String,
    /// Mass in game units; enters the force product symmetrically with
    /// the central mass.
    pub mass: f64,
    /// Current position.
    pub position: Vec2,
    /// Current velocity.
    pub velocity: Vec2,
    fuel: u32,
    status: FlightStatus,
}

impl Satellite {
    /// Create a new satellite with full status.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        position: Vec2,
        velocity: Vec2,
        fuel: u32,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            fuel,
            status: FlightStatus::Flying,
        }
    }

    /// Remaining fuel units.
    #[must_use]
    pub const fn fuel(&self) -> u32 {
        self.fuel
    }

    /// Current flight status.
    #[must_use]
    pub const fn status(&self) -> FlightStatus {
        self.status
    }

    /// Whether the satellite has entered the atmosphere.
    #[must_use]
    pub fn is_crashed(&self) -> bool {
        self.status == FlightStatus::Crashed
    }

    /// Euclidean distance to another body, recomputed from current
    /// positions.
    #[must_use]
    pub fn distance_to(&self, other: &impl PointMass) -> f64 {
        (self.position - other.position()).magnitude()
    }

    /// Heading toward another body in degrees, for a dish pointing
    /// tail-first (display only, derived purely from positions).
    #[must_use]
    pub fn heading_to(&self, other: &impl PointMass) -> f64 {
        let d = self.position - other.position();
        d.x.atan2(d.y).to_degrees() - 90.0
    }

    /// Kinetic energy in game units.
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    /// Debit fuel, saturating at zero.
    pub(crate) fn burn_fuel(&mut self, cost: u32) {
        self.fuel = self.fuel.saturating_sub(cost);
    }

    /// Update flight status.
    pub(crate) fn set_status(&mut self, status: FlightStatus) {
        self.status = status;
    }
}

impl PointMass for Satellite {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn mass(&self) -> f64 {
        self.mass
    }
}
