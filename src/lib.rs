//! # orbitar
//!
//! Two-body orbital mechanics and telemetry engine for thrust-controlled
//! satellites.
//!
//! A deterministic, fixed-tick simulation core implementing:
//! - Central-body gravity applied per satellite, one-directionally
//! - Discrete thrust commands with a depletable fuel budget
//! - Rolling-window apoapsis/periapsis/eccentricity telemetry
//! - A per-satellite flight state machine (flying, fuel-exhausted, crashed)
//!
//! The crate is presentation-agnostic: a surrounding frame loop feeds one
//! optional thrust command per satellite into the engine, steps it once
//! per frame, and reads plain-value telemetry frames and event cues back
//! out. Rendering, audio, and input polling live entirely outside.
//!
//! ## Example
//!
//! ```rust
//! use orbitar::prelude::*;
//!
//! let config = MissionConfig::builder().seed(42).build();
//! let mut engine = OrbitEngine::new(config).expect("valid config");
//!
//! engine.command(0, ThrustCommand::Up).expect("satellite 0 exists");
//! engine.step().expect("tick");
//!
//! let frames = engine.telemetry();
//! assert_eq!(frames.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod config;
pub mod engine;
pub mod error;
pub mod physics;
pub mod scenarios;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{MissionConfig, MissionConfigBuilder, SatelliteSpawn};
    pub use crate::engine::{
        CentralBody, FlightStatus, MissionEvent, OrbitEngine, OrbitRng, PointMass, Satellite,
        TickClock, Vec2,
    };
    pub use crate::error::{OrbitError, OrbitResult};
    pub use crate::physics::{
        EccentricityTracker, GravitySolver, TelemetryFrame, ThrustCommand, ThrustController,
    };
    pub use crate::scenarios::Scenario;
}

/// Re-export for public API
pub use error::{OrbitError, OrbitResult};

use engine::{MissionEvent, OrbitEngine};
use physics::TelemetryFrame;

/// Run a complete unpiloted mission for a fixed duration.
///
/// Builds an engine from the configuration, steps it with no thrust input
/// for `duration_seconds` of game time, and returns the final telemetry
/// along with everything that happened.
///
/// # Errors
///
/// Returns error if the configuration is invalid or the simulation state
/// stops being finite.
///
/// # Example
///
/// ```rust
/// use orbitar::scenarios;
///
/// let result = orbitar::run_mission(scenarios::primary_only(), 10.0)
///     .expect("mission runs");
/// assert_eq!(result.frames.len(), 1);
/// ```
pub fn run_mission(
    config: config::MissionConfig,
    duration_seconds: f64,
) -> OrbitResult<MissionResult> {
    let ticks_per_second = config.clock.ticks_per_second;
    let mut engine = OrbitEngine::new(config)?;

    let ticks = (duration_seconds * f64::from(ticks_per_second)) as u64;
    let mut events = Vec::new();

    for _ in 0..ticks {
        engine.step()?;
        events.append(&mut engine.drain_events());
    }

    Ok(MissionResult {
        ticks: engine.tick_count(),
        frames: engine.telemetry(),
        crashed: engine.satellites().iter().filter(|s| s.is_crashed()).count(),
        events,
    })
}

/// Result of running an unpiloted mission.
#[derive(Debug, Clone)]
pub struct MissionResult {
    /// Number of ticks completed.
    pub ticks: u64,
    /// Final telemetry frame per satellite.
    pub frames: Vec<TelemetryFrame>,
    /// Number of satellites that crashed during the run.
    pub crashed: usize,
    /// Every event emitted during the run, in order.
    pub events: Vec<MissionEvent>,
}
