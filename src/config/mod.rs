//! Mission configuration with YAML schema and validation.
//!
//! Implements mistake-proofing through:
//! - Type-safe configuration structs
//! - Compile-time validation via serde
//! - Runtime semantic validation
//!
//! Every tuning constant of the simulation is a configuration field:
//! nothing is hard-coded in the physics. Defaults reproduce the reference
//! mission (mass-2000 central body at (400, 330), 30 Hz ticks, 10 s
//! telemetry window, 0.05 burn delta, 2-unit burn cost, 100-unit tanks).

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{OrbitError, OrbitResult};

/// Top-level mission configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct MissionConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Mission metadata.
    #[serde(default)]
    pub mission: MissionMeta,

    /// Reproducibility settings.
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Physics tuning constants.
    #[validate(nested)]
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// Tick rate settings.
    #[validate(nested)]
    #[serde(default)]
    pub clock: ClockConfig,

    /// Telemetry window settings.
    #[validate(nested)]
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// The central mass.
    #[validate(nested)]
    #[serde(default)]
    pub central_body: CentralBodyConfig,

    /// Satellites to spawn, in processing order.
    #[validate(nested)]
    #[serde(default = "default_satellites")]
    pub satellites: Vec<SatelliteSpawn>,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_satellites() -> Vec<SatelliteSpawn> {
    vec![SatelliteSpawn::default()]
}

impl MissionConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> OrbitResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OrbitResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> MissionConfigBuilder {
        MissionConfigBuilder::default()
    }

    /// Run schema validation plus semantic checks.
    ///
    /// # Errors
    ///
    /// Returns error if any constraint is violated.
    pub fn validate_all(&self) -> OrbitResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> OrbitResult<()> {
        if self.satellites.is_empty() {
            return Err(OrbitError::config("mission requires at least one satellite"));
        }

        if !self.central_body.position.iter().all(|c| c.is_finite()) {
            return Err(OrbitError::config("central body position must be finite"));
        }

        for spawn in &self.satellites {
            for (axis, range) in [("x", &spawn.x_range), ("y", &spawn.y_range)] {
                if !range.iter().all(|c| c.is_finite()) {
                    return Err(OrbitError::config(format!(
                        "satellite '{}' has a non-finite {axis} spawn range",
                        spawn.name
                    )));
                }
                if range[0] > range[1] {
                    return Err(OrbitError::config(format!(
                        "satellite '{}' has an inverted {axis} spawn range",
                        spawn.name
                    )));
                }
            }
            if !spawn.initial_speed.is_finite() || spawn.initial_speed < 0.0 {
                return Err(OrbitError::config(format!(
                    "satellite '{}' initial speed must be finite and non-negative",
                    spawn.name
                )));
            }
        }

        if !self.physics.exhausted_drift.is_finite() {
            return Err(OrbitError::config("exhausted drift must be finite"));
        }

        Ok(())
    }

    /// Number of ticks in one telemetry window.
    #[must_use]
    pub const fn window_ticks(&self) -> u64 {
        self.telemetry.window_seconds as u64 * self.clock.ticks_per_second as u64
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            mission: MissionMeta::default(),
            reproducibility: ReproducibilityConfig::default(),
            physics: PhysicsConfig::default(),
            clock: ClockConfig::default(),
            telemetry: TelemetryConfig::default(),
            central_body: CentralBodyConfig::default(),
            satellites: default_satellites(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct MissionConfigBuilder {
    seed: Option<u64>,
    ticks_per_second: Option<u32>,
    window_seconds: Option<u32>,
    gravitational_constant: Option<f64>,
    satellites: Vec<SatelliteSpawn>,
}

impl MissionConfigBuilder {
    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tick rate.
    #[must_use]
    pub const fn ticks_per_second(mut self, ticks_per_second: u32) -> Self {
        self.ticks_per_second = Some(ticks_per_second);
        self
    }

    /// Set the telemetry window length in seconds.
    #[must_use]
    pub const fn window_seconds(mut self, window_seconds: u32) -> Self {
        self.window_seconds = Some(window_seconds);
        self
    }

    /// Set the gravitational constant.
    #[must_use]
    pub const fn gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = Some(g);
        self
    }

    /// Add a satellite. If no satellite is added the default spawn is
    /// used.
    #[must_use]
    pub fn satellite(mut self, spawn: SatelliteSpawn) -> Self {
        self.satellites.push(spawn);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> MissionConfig {
        let mut config = MissionConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = seed;
        }
        if let Some(ticks_per_second) = self.ticks_per_second {
            config.clock.ticks_per_second = ticks_per_second;
        }
        if let Some(window_seconds) = self.window_seconds {
            config.telemetry.window_seconds = window_seconds;
        }
        if let Some(g) = self.gravitational_constant {
            config.physics.gravitational_constant = g;
        }
        if !self.satellites.is_empty() {
            config.satellites = self.satellites;
        }

        config
    }
}

/// Mission metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissionMeta {
    /// Mission name.
    #[serde(default)]
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

/// Reproducibility settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReproducibilityConfig {
    /// Master seed for spawn placement.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Physics tuning constants.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PhysicsConfig {
    /// Game-tuned gravitational constant.
    #[validate(range(min = 0.000_000_000_001))]
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,

    /// Minimum separation used to clamp gravity normalization.
    #[validate(range(min = 0.000_000_000_001))]
    #[serde(default = "default_min_gravity_distance")]
    pub min_gravity_distance: f64,

    /// Velocity change per thruster burn along one axis.
    #[validate(range(min = 0.000_000_000_001))]
    #[serde(default = "default_thrust_delta")]
    pub thrust_delta: f64,

    /// Fuel units debited per burn.
    #[validate(range(min = 1))]
    #[serde(default = "default_fuel_cost")]
    pub fuel_cost: u32,

    /// Fuel units each satellite starts with.
    #[serde(default = "default_initial_fuel")]
    pub initial_fuel: u32,

    /// Horizontal velocity imposed while fuel-exhausted, conveying the
    /// inevitable orbital decay.
    #[serde(default = "default_exhausted_drift")]
    pub exhausted_drift: f64,
}

const fn default_gravitational_constant() -> f64 {
    1.0
}

const fn default_min_gravity_distance() -> f64 {
    1e-6
}

const fn default_thrust_delta() -> f64 {
    0.05
}

const fn default_fuel_cost() -> u32 {
    2
}

const fn default_initial_fuel() -> u32 {
    100
}

const fn default_exhausted_drift() -> f64 {
    2.0
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: default_gravitational_constant(),
            min_gravity_distance: default_min_gravity_distance(),
            thrust_delta: default_thrust_delta(),
            fuel_cost: default_fuel_cost(),
            initial_fuel: default_initial_fuel(),
            exhausted_drift: default_exhausted_drift(),
        }
    }
}

/// Tick rate settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClockConfig {
    /// Fixed tick rate in Hz.
    #[validate(range(min = 1, max = 1000))]
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,
}

const fn default_ticks_per_second() -> u32 {
    30
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: default_ticks_per_second(),
        }
    }
}

/// Telemetry window settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TelemetryConfig {
    /// Eccentricity evaluation window in seconds.
    #[validate(range(min = 1))]
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u32,
}

const fn default_window_seconds() -> u32 {
    10
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            window_seconds: default_window_seconds(),
        }
    }
}

/// The central mass.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CentralBodyConfig {
    /// Body name.
    #[validate(length(min = 1))]
    #[serde(default = "default_central_name")]
    pub name: String,

    /// Mass in game units.
    #[validate(range(min = 0.000_001))]
    #[serde(default = "default_central_mass")]
    pub mass: f64,

    /// Fixed position `[x, y]`.
    #[serde(default = "default_central_position")]
    pub position: [f64; 2],
}

fn default_central_name() -> String {
    "sun".to_string()
}

const fn default_central_mass() -> f64 {
    2000.0
}

const fn default_central_position() -> [f64; 2] {
    [400.0, 330.0]
}

impl Default for CentralBodyConfig {
    fn default() -> Self {
        Self {
            name: default_central_name(),
            mass: default_central_mass(),
            position: default_central_position(),
        }
    }
}

/// Spawn parameters for one satellite.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SatelliteSpawn {
    /// Satellite name.
    #[validate(length(min = 1))]
    pub name: String,

    /// Mass in game units.
    #[validate(range(min = 0.000_001))]
    #[serde(default = "default_satellite_mass")]
    pub mass: f64,

    /// Spawn band for the x coordinate, `[min, max]`.
    #[serde(default = "default_x_range")]
    pub x_range: [f64; 2],

    /// Spawn band for the y coordinate, `[min, max]`.
    #[serde(default = "default_y_range")]
    pub y_range: [f64; 2],

    /// Initial horizontal speed; the sign is randomized at spawn.
    #[serde(default = "default_initial_speed")]
    pub initial_speed: f64,

    /// Distance at or below which the satellite enters the atmosphere.
    #[validate(range(min = 0.0))]
    #[serde(default = "default_atmosphere_threshold")]
    pub atmosphere_threshold: f64,
}

const fn default_satellite_mass() -> f64 {
    1.0
}

const fn default_x_range() -> [f64; 2] {
    [380.0, 385.0]
}

const fn default_y_range() -> [f64; 2] {
    [80.0, 85.0]
}

const fn default_initial_speed() -> f64 {
    3.0
}

const fn default_atmosphere_threshold() -> f64 {
    68.0
}

impl Default for SatelliteSpawn {
    fn default() -> Self {
        Self {
            name: "satellite".to_string(),
            mass: default_satellite_mass(),
            x_range: default_x_range(),
            y_range: default_y_range(),
            initial_speed: default_initial_speed(),
            atmosphere_threshold: default_atmosphere_threshold(),
        }
    }
}

impl SatelliteSpawn {
    /// Spawn a satellite at an exact position with an exact velocity.
    ///
    /// Degenerate ranges pin the coordinates; useful for tests and
    /// scripted missions.
    #[must_use]
    pub fn fixed(name: impl Into<String>, mass: f64, x: f64, y: f64, speed: f64) -> Self {
        Self {
            name: name.into(),
            mass,
            x_range: [x, x],
            y_range: [y, y],
            initial_speed: speed,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MissionConfig::default();

        assert_eq!(config.schema_version, "1.0");
        assert_eq!(config.reproducibility.seed, 42);
        assert!((config.physics.gravitational_constant - 1.0).abs() < f64::EPSILON);
        assert!((config.physics.thrust_delta - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.physics.fuel_cost, 2);
        assert_eq!(config.physics.initial_fuel, 100);
        assert_eq!(config.clock.ticks_per_second, 30);
        assert_eq!(config.telemetry.window_seconds, 10);
        assert!((config.central_body.mass - 2000.0).abs() < f64::EPSILON);
        assert_eq!(config.satellites.len(), 1);
    }

    #[test]
    fn test_config_window_ticks() {
        let config = MissionConfig::default();
        assert_eq!(config.window_ticks(), 300);
    }

    #[test]
    fn test_config_defaults_validate() {
        let config = MissionConfig::default();
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = MissionConfig::builder()
            .seed(12345)
            .ticks_per_second(60)
            .window_seconds(5)
            .gravitational_constant(0.5)
            .build();

        assert_eq!(config.reproducibility.seed, 12345);
        assert_eq!(config.clock.ticks_per_second, 60);
        assert_eq!(config.telemetry.window_seconds, 5);
        assert!((config.physics.gravitational_constant - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_builder_satellites() {
        let config = MissionConfig::builder()
            .satellite(SatelliteSpawn::fixed("probe", 1.0, 400.0, 250.0, 0.0))
            .satellite(SatelliteSpawn::fixed("relay", 1.0, 400.0, 200.0, 0.0))
            .build();

        assert_eq!(config.satellites.len(), 2);
        assert_eq!(config.satellites[0].name, "probe");
    }

    #[test]
    fn test_config_yaml_parse() {
        let yaml = r"
reproducibility:
  seed: 7
clock:
  ticks_per_second: 30
satellites:
  - name: earth
    mass: 1.05
    x_range: [380.0, 385.0]
    y_range: [80.0, 85.0]
";
        let config = MissionConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.reproducibility.seed, 7);
        assert_eq!(config.satellites[0].name, "earth");
        assert!((config.satellites[0].mass - 1.05).abs() < f64::EPSILON);
        // Omitted fields take reference defaults.
        assert!((config.satellites[0].atmosphere_threshold - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_yaml_rejects_unknown_fields() {
        let yaml = r"
warp_drive: enabled
";
        assert!(MissionConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_zero_tick_rate() {
        let yaml = r"
clock:
  ticks_per_second: 0
";
        assert!(MissionConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_zero_window() {
        let yaml = r"
telemetry:
  window_seconds: 0
";
        assert!(MissionConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_negative_gravity() {
        let yaml = r"
physics:
  gravitational_constant: -1.0
";
        assert!(MissionConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_empty_satellites() {
        let yaml = r"
satellites: []
";
        assert!(MissionConfig::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_config_rejects_inverted_range() {
        let mut config = MissionConfig::default();
        config.satellites[0].x_range = [385.0, 380.0];
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_config_rejects_negative_initial_speed() {
        let mut config = MissionConfig::default();
        config.satellites[0].initial_speed = -3.0;
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_config_rejects_non_finite_central_position() {
        let mut config = MissionConfig::default();
        config.central_body.position = [f64::NAN, 330.0];
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_satellite_spawn_fixed() {
        let spawn = SatelliteSpawn::fixed("probe", 2.0, 400.0, 250.0, 0.0);
        assert_eq!(spawn.name, "probe");
        assert!((spawn.x_range[0] - spawn.x_range[1]).abs() < f64::EPSILON);
        assert!((spawn.initial_speed - 0.0).abs() < f64::EPSILON);
        // Untouched fields keep their defaults.
        assert!((spawn.atmosphere_threshold - 68.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let config = MissionConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = MissionConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.clock.ticks_per_second, config.clock.ticks_per_second);
        assert_eq!(parsed.satellites.len(), config.satellites.len());
    }
}
