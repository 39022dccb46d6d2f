//! Thrust controller.
//!
//! Converts discrete directional commands into velocity deltas and debits
//! the satellite's fuel. At most one command is consumed per satellite per
//! tick; the engine buffers the latest command between ticks.

use serde::{Deserialize, Serialize};

use crate::engine::state::{FlightStatus, Satellite, Vec2};

/// A discrete thrust command for one tick.
///
/// Axis convention is screen-style: y grows downward, so `Up` subtracts
/// from the y velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThrustCommand {
    /// Fire toward the top of the screen.
    Up,
    /// Fire toward the bottom of the screen.
    Down,
    /// Fire left.
    Left,
    /// Fire right.
    Right,
    /// No thrust this tick.
    #[default]
    None,
}

impl ThrustCommand {
    /// Velocity delta for this command at the given magnitude, or `None`
    /// for a coasting tick.
    #[must_use]
    pub fn delta(self, magnitude: f64) -> Option<Vec2> {
        match self {
            Self::Up => Some(Vec2::new(0.0, -magnitude)),
            Self::Down => Some(Vec2::new(0.0, magnitude)),
            Self::Left => Some(Vec2::new(-magnitude, 0.0)),
            Self::Right => Some(Vec2::new(magnitude, 0.0)),
            Self::None => None,
        }
    }
}

/// Thrust controller with fixed per-burn delta and fuel cost.
#[derive(Debug, Clone)]
pub struct ThrustController {
    /// Velocity change per burn along one axis.
    delta: f64,
    /// Fuel units debited per burn.
    fuel_cost: u32,
}

impl ThrustController {
    /// Create a controller with the given burn delta and fuel cost.
    #[must_use]
    pub const fn new(delta: f64, fuel_cost: u32) -> Self {
        Self { delta, fuel_cost }
    }

    /// Velocity change per burn.
    #[must_use]
    pub const fn delta(&self) -> f64 {
        self.delta
    }

    /// Fuel cost per burn.
    #[must_use]
    pub const fn fuel_cost(&self) -> u32 {
        self.fuel_cost
    }

    /// Apply one command to one satellite.
    ///
    /// Returns `true` if the thruster actually fired, so the caller can
    /// emit the audio cue. A burn is rejected outright — no velocity
    /// change, no fuel debit — when the command is `None`, the tank is
    /// empty, or the satellite is no longer flying.
    pub fn apply(&self, satellite: &mut Satellite, command: ThrustCommand) -> bool {
        if satellite.status() != FlightStatus::Flying || satellite.fuel() == 0 {
            return false;
        }

        let Some(delta) = command.delta(self.delta) else {
            return false;
        };

        satellite.velocity = satellite.velocity + delta;
        satellite.burn_fuel(self.fuel_cost);
        true
    }
}

impl Default for ThrustController {
    fn default() -> Self {
        Self::new(0.05, 2)
    }
}
