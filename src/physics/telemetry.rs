//! Orbital shape telemetry.
//!
//! Accumulates one distance sample per tick and, at fixed window
//! boundaries, derives apoapsis, periapsis, and eccentricity from the
//! window's extrema. Between boundaries the last computed values are
//! carried forward so displays never go blank.

use serde::{Deserialize, Serialize};

/// Rolling-window tracker for one satellite's orbital shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EccentricityTracker {
    /// Ticks per evaluation window.
    window_ticks: u64,
    /// Distance samples for the current window.
    samples: Vec<f64>,
    /// Maximum distance observed in the last completed window.
    apoapsis: f64,
    /// Minimum distance observed in the last completed window.
    periapsis: f64,
    /// `(apoapsis - periapsis) / (apoapsis + periapsis)` for the last
    /// completed window; 0 = circular, toward 1 = highly elongated.
    eccentricity: f64,
}

impl EccentricityTracker {
    /// Create a tracker evaluating every `window_seconds` at the given
    /// tick rate.
    #[must_use]
    pub fn new(window_seconds: u32, ticks_per_second: u32) -> Self {
        let window_ticks = u64::from(window_seconds) * u64::from(ticks_per_second);
        Self {
            window_ticks,
            samples: Vec::with_capacity(window_ticks as usize),
            apoapsis: 0.0,
            periapsis: 0.0,
            eccentricity: 0.0,
        }
    }

    /// Ticks per evaluation window.
    #[must_use]
    pub const fn window_ticks(&self) -> u64 {
        self.window_ticks
    }

    /// Number of samples recorded in the current window.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Apoapsis of the last completed window (0.0 before the first).
    #[must_use]
    pub const fn apoapsis(&self) -> f64 {
        self.apoapsis
    }

    /// Periapsis of the last completed window (0.0 before the first).
    #[must_use]
    pub const fn periapsis(&self) -> f64 {
        self.periapsis
    }

    /// Eccentricity of the last completed window (0.0 before the first).
    #[must_use]
    pub const fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Record one distance sample for the given tick.
    ///
    /// Mid-window calls only append; when `tick_count` lands on a window
    /// boundary the extrema are recomputed, the eccentricity derived, and
    /// the sample buffer cleared. Returns `true` when a window closed.
    ///
    /// A boundary with no samples, or whose extrema sum to zero, skips
    /// recomputation and carries the previous values forward.
    pub fn record(&mut self, distance: f64, tick_count: u64) -> bool {
        self.samples.push(distance);

        if self.window_ticks == 0 || tick_count % self.window_ticks != 0 {
            return false;
        }

        if !self.samples.is_empty() {
            let apoapsis = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let periapsis = self.samples.iter().copied().fold(f64::INFINITY, f64::min);

            if apoapsis + periapsis > 0.0 {
                self.apoapsis = apoapsis;
                self.periapsis = periapsis;
                self.eccentricity = (apoapsis - periapsis) / (apoapsis + periapsis);
            }
        }

        self.samples.clear();
        true
    }
}

/// Per-satellite readout handed to the presentation layer once per frame.
///
/// Plain values only; none of the engine's internal structures leak out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryFrame {
    /// Satellite name.
    pub name: String,
    /// Current x position.
    pub x: f64,
    /// Current y position.
    pub y: f64,
    /// Distance to the central body, recomputed from current positions.
    pub distance: f64,
    /// Heading toward the central body in degrees (display only).
    pub heading: f64,
    /// Remaining fuel units.
    pub fuel: u32,
    /// Apoapsis of the last completed telemetry window.
    pub apoapsis: f64,
    /// Periapsis of the last completed telemetry window.
    pub periapsis: f64,
    /// Eccentricity of the last completed telemetry window.
    pub eccentricity: f64,
    /// Whether the satellite has entered the atmosphere.
    pub crashed: bool,
}
