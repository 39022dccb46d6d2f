//! Physics components.
//!
//! Each component mutates exactly one satellite per call and depends only
//! on the kinematic state contract:
//! - Gravity solver: central-body pull into satellite velocity
//! - Thrust controller: discrete commands into velocity deltas and fuel
//! - Telemetry: rolling distance window into apoapsis/periapsis/eccentricity
//!
//! Ordering between components is owned by the engine, not by the
//! components themselves.

pub mod gravity;
pub mod telemetry;
pub mod thrust;

pub use gravity::GravitySolver;
pub use telemetry::{EccentricityTracker, TelemetryFrame};
pub use thrust::{ThrustCommand, ThrustController};
