//! Prebuilt mission configurations.
//!
//! The reference mission places four inner planets around a mass-2000
//! central body, each spawning in its own narrow band with a randomized
//! horizontal push; `primary_only` trims that down to the one satellite
//! the player usually flies.

use serde::{Deserialize, Serialize};

use crate::config::{MissionConfig, SatelliteSpawn};

/// Mission scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// One flyable satellite around the central body.
    #[default]
    PrimaryOnly,
    /// Four satellites in stacked spawn bands.
    InnerSystem,
}

impl Scenario {
    /// Build the mission configuration for this scenario.
    #[must_use]
    pub fn config(self) -> MissionConfig {
        match self {
            Self::PrimaryOnly => primary_only(),
            Self::InnerSystem => inner_system(),
        }
    }
}

/// Single-satellite reference mission.
#[must_use]
pub fn primary_only() -> MissionConfig {
    let mut config = MissionConfig::default();
    config.mission.name = "primary-only".to_string();
    config.satellites = vec![SatelliteSpawn {
        name: "earth".to_string(),
        mass: 1.05,
        x_range: [380.0, 385.0],
        y_range: [80.0, 85.0],
        ..SatelliteSpawn::default()
    }];
    config
}

/// Four-satellite reference mission.
///
/// Spawn bands stack the satellites above the central body at increasing
/// altitudes; masses alternate slightly so trajectories diverge.
#[must_use]
pub fn inner_system() -> MissionConfig {
    let mut config = MissionConfig::default();
    config.mission.name = "inner-system".to_string();
    config.satellites = vec![
        SatelliteSpawn {
            name: "mercury".to_string(),
            mass: 1.05,
            x_range: [380.0, 385.0],
            y_range: [170.0, 175.0],
            ..SatelliteSpawn::default()
        },
        SatelliteSpawn {
            name: "venus".to_string(),
            mass: 1.0,
            x_range: [375.0, 380.0],
            y_range: [118.0, 122.0],
            ..SatelliteSpawn::default()
        },
        SatelliteSpawn {
            name: "earth".to_string(),
            mass: 1.05,
            x_range: [380.0, 385.0],
            y_range: [80.0, 85.0],
            ..SatelliteSpawn::default()
        },
        SatelliteSpawn {
            name: "mars".to_string(),
            mass: 1.0,
            x_range: [385.0, 387.0],
            y_range: [60.0, 63.0],
            ..SatelliteSpawn::default()
        },
    ];
    config
}
