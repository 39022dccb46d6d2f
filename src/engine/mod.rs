//! Core simulation engine.
//!
//! Owns the full simulation context — central body, satellites, telemetry
//! trackers, clock, RNG, and pending commands — and advances it one fixed
//! tick at a time. No ambient globals: the surrounding frame loop holds an
//! [`OrbitEngine`] and calls [`OrbitEngine::step`] once per frame.
//!
//! # Tick contract
//!
//! The per-tick order below is load-bearing; reordering it changes
//! trajectories. For each satellite, every tick:
//!
//! 1. apply the pending thrust command;
//! 2. compute the distance to the central body;
//! 3. apply gravity;
//! 4. integrate position;
//! 5. record the distance sample / evaluate the telemetry window;
//! 6. evaluate fuel and atmosphere transitions.
//!
//! Satellites are mutually independent: the same sequence simply repeats
//! for each one, and the central body is only ever read.

pub mod clock;
pub mod rng;
pub mod state;

use serde::{Deserialize, Serialize};

pub use clock::TickClock;
pub use rng::OrbitRng;
pub use state::{CentralBody, FlightStatus, PointMass, Satellite, Vec2};

use crate::config::MissionConfig;
use crate::error::{OrbitError, OrbitResult};
use crate::physics::{
    EccentricityTracker, GravitySolver, TelemetryFrame, ThrustCommand, ThrustController,
};

/// Side effects of a tick, drained by the presentation layer.
///
/// The engine never performs I/O itself; audio cues and status labels are
/// fire-and-forget events consumed by external collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionEvent {
    /// A thruster fired (audio cue).
    ThrustFired {
        /// Index of the satellite that fired.
        satellite: usize,
    },
    /// A satellite's tank reached zero.
    FuelDepleted {
        /// Index of the satellite that ran dry.
        satellite: usize,
    },
    /// A satellite entered the atmosphere.
    AtmosphericEntry {
        /// Index of the satellite that crashed.
        satellite: usize,
    },
}

impl std::fmt::Display for MissionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ThrustFired { satellite } => {
                write!(f, "satellite {satellite}: thruster fired")
            }
            Self::FuelDepleted { satellite } => {
                write!(f, "satellite {satellite}: fuel depleted")
            }
            Self::AtmosphericEntry { satellite } => {
                write!(f, "satellite {satellite}: atmospheric entry")
            }
        }
    }
}

/// Main simulation engine.
///
/// Built once from a [`MissionConfig`]; stepped by the frame loop;
/// read back through [`OrbitEngine::telemetry`] and
/// [`OrbitEngine::drain_events`].
#[derive(Debug, Clone)]
pub struct OrbitEngine {
    /// The central mass (read-only during a run).
    central: CentralBody,
    /// Satellites in processing order.
    satellites: Vec<Satellite>,
    /// One telemetry tracker per satellite, index-aligned.
    trackers: Vec<EccentricityTracker>,
    /// Per-satellite atmosphere thresholds, index-aligned.
    atmosphere: Vec<f64>,
    /// Buffered commands, consumed (and reset) by the next tick.
    pending: Vec<ThrustCommand>,
    gravity: GravitySolver,
    thrust: ThrustController,
    clock: TickClock,
    /// Events produced since the last drain.
    events: Vec<MissionEvent>,
    /// Horizontal drift imposed while fuel-exhausted.
    exhausted_drift: f64,
}

impl OrbitEngine {
    /// Create an engine from a mission configuration.
    ///
    /// Satellites spawn at seeded-random positions inside their configured
    /// bands, moving horizontally at their configured speed with a
    /// randomized sign.
    ///
    /// # Errors
    ///
    /// Returns error if configuration validation fails.
    pub fn new(config: MissionConfig) -> OrbitResult<Self> {
        config.validate_all()?;

        let mut rng = OrbitRng::new(config.reproducibility.seed);

        let central = CentralBody::new(
            config.central_body.name.clone(),
            Vec2::new(config.central_body.position[0], config.central_body.position[1]),
            config.central_body.mass,
        );

        let mut satellites = Vec::with_capacity(config.satellites.len());
        let mut trackers = Vec::with_capacity(config.satellites.len());
        let mut atmosphere = Vec::with_capacity(config.satellites.len());

        for spawn in &config.satellites {
            let position = Vec2::new(
                rng.gen_range_f64(spawn.x_range[0], spawn.x_range[1]),
                rng.gen_range_f64(spawn.y_range[0], spawn.y_range[1]),
            );
            let velocity = Vec2::new(spawn.initial_speed * rng.gen_sign(), 0.0);

            satellites.push(Satellite::new(
                spawn.name.clone(),
                spawn.mass,
                position,
                velocity,
                config.physics.initial_fuel,
            ));
            trackers.push(EccentricityTracker::new(
                config.telemetry.window_seconds,
                config.clock.ticks_per_second,
            ));
            atmosphere.push(spawn.atmosphere_threshold);
        }

        let pending = vec![ThrustCommand::None; satellites.len()];

        Ok(Self {
            central,
            satellites,
            trackers,
            atmosphere,
            pending,
            gravity: GravitySolver::new(
                config.physics.gravitational_constant,
                config.physics.min_gravity_distance,
            ),
            thrust: ThrustController::new(config.physics.thrust_delta, config.physics.fuel_cost),
            clock: TickClock::new(config.clock.ticks_per_second),
            events: Vec::new(),
            exhausted_drift: config.physics.exhausted_drift,
        })
    }

    /// The central body.
    #[must_use]
    pub const fn central(&self) -> &CentralBody {
        &self.central
    }

    /// All satellites in processing order.
    #[must_use]
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// One satellite by index.
    #[must_use]
    pub fn satellite(&self, index: usize) -> Option<&Satellite> {
        self.satellites.get(index)
    }

    /// Telemetry tracker for one satellite.
    #[must_use]
    pub fn tracker(&self, index: usize) -> Option<&EccentricityTracker> {
        self.trackers.get(index)
    }

    /// Number of ticks taken so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.clock.tick_count()
    }

    /// Buffer a thrust command for the next tick.
    ///
    /// At most one command per satellite per tick; the last write before
    /// the tick wins.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::InvalidSatellite`] for an out-of-range index.
    pub fn command(&mut self, index: usize, command: ThrustCommand) -> OrbitResult<()> {
        let slot = self
            .pending
            .get_mut(index)
            .ok_or(OrbitError::InvalidSatellite {
                index,
                count: self.satellites.len(),
            })?;
        *slot = command;
        Ok(())
    }

    /// Advance the simulation by one tick.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::NonFiniteValue`] if a satellite's state stops
    /// being finite; all physically degenerate inputs (zero separation,
    /// empty windows, empty tanks) are absorbed by guards instead.
    pub fn step(&mut self) -> OrbitResult<()> {
        let tick = self.clock.tick();

        for i in 0..self.satellites.len() {
            let command = std::mem::take(&mut self.pending[i]);
            let sat = &mut self.satellites[i];

            if sat.status() == FlightStatus::Crashed {
                // Terminal: physics frozen, telemetry stays live.
                let distance = sat.distance_to(&self.central);
                self.trackers[i].record(distance, tick);
                continue;
            }

            // 1. pending thrust
            if self.thrust.apply(sat, command) {
                self.events.push(MissionEvent::ThrustFired { satellite: i });
            }

            // 2. distance, shared by gravity, sampling, and transitions
            let distance = sat.distance_to(&self.central);

            // 3. gravity
            self.gravity.apply(&self.central, sat);

            // 4. integrate
            sat.position = sat.position + sat.velocity;
            if !sat.position.is_finite() || !sat.velocity.is_finite() {
                return Err(OrbitError::NonFiniteValue {
                    location: format!("satellite {i} state"),
                });
            }

            // 5. telemetry sample
            self.trackers[i].record(distance, tick);

            // 6. state transitions
            self.transition(i, distance);
        }

        Ok(())
    }

    /// Run the engine for a number of ticks.
    ///
    /// # Errors
    ///
    /// Returns error if any step fails.
    pub fn run_for_ticks(&mut self, ticks: u64) -> OrbitResult<()> {
        for _ in 0..ticks {
            self.step()?;
        }
        Ok(())
    }

    /// Run until the predicate over the satellites returns true.
    ///
    /// # Errors
    ///
    /// Returns error if any step fails.
    pub fn run_until<F>(&mut self, predicate: F) -> OrbitResult<()>
    where
        F: Fn(&[Satellite]) -> bool,
    {
        while !predicate(&self.satellites) {
            self.step()?;
        }
        Ok(())
    }

    /// One telemetry frame per satellite, all values recomputed from
    /// current state.
    #[must_use]
    pub fn telemetry(&self) -> Vec<TelemetryFrame> {
        self.satellites
            .iter()
            .zip(&self.trackers)
            .map(|(sat, tracker)| TelemetryFrame {
                name: sat.name.clone(),
                x: sat.position.x,
                y: sat.position.y,
                distance: sat.distance_to(&self.central),
                heading: sat.heading_to(&self.central),
                fuel: sat.fuel(),
                apoapsis: tracker.apoapsis(),
                periapsis: tracker.periapsis(),
                eccentricity: tracker.eccentricity(),
                crashed: sat.is_crashed(),
            })
            .collect()
    }

    /// Drain the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<MissionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Evaluate the fuel and atmosphere state machine for one satellite.
    fn transition(&mut self, index: usize, distance: f64) {
        let threshold = self.atmosphere[index];
        let drift = self.exhausted_drift;
        let sat = &mut self.satellites[index];

        match sat.status() {
            FlightStatus::Crashed => {}
            FlightStatus::Flying => {
                if distance <= threshold {
                    sat.set_status(FlightStatus::Crashed);
                    sat.velocity = Vec2::zero();
                    self.events
                        .push(MissionEvent::AtmosphericEntry { satellite: index });
                } else if sat.fuel() == 0 {
                    sat.set_status(FlightStatus::FuelExhausted);
                    sat.velocity.x = drift;
                    self.events
                        .push(MissionEvent::FuelDepleted { satellite: index });
                }
            }
            FlightStatus::FuelExhausted => {
                if distance <= threshold {
                    sat.set_status(FlightStatus::Crashed);
                    sat.velocity = Vec2::zero();
                    self.events
                        .push(MissionEvent::AtmosphericEntry { satellite: index });
                } else {
                    // Re-pinned every tick: gravity may bend the fall but
                    // the drift always wins the horizontal component.
                    sat.velocity.x = drift;
                }
            }
        }
    }
}
