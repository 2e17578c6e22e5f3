//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – time scaling and sub-steps per frame
//! - [`ParametersConfig`] – physical constants and the singularity guard
//! - [`BodyConfig`]       – initial state and behaviour of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A cut-down scenario matching these types:
//!
//! ```yaml
//! engine:
//!   days_per_second: 10.0   # simulated days per real second
//!   substeps: 100           # physics iterations per frame
//!   fps: 60.0               # headless frame rate
//!
//! parameters:
//!   G: 6.674e-11            # gravitational constant
//!   dist_threshold: 1.0e5   # closer than this poisons the acceleration
//!   central_mass: 1.99e30   # orbital placements orbit this mass
//!
//! bodies:
//!   - name: Sun
//!     m: 1.99e30
//!     radius: 6.96e8
//!   - name: Earth
//!     m: 5.97e24
//!     radius: 6.37e6
//!     placement: !orbital { radius_au: 0.983, angle: 0.0, period_days: 365.25 }
//!   - name: Moon
//!     m: 7.35e22
//!     radius: 1.74e6
//!     gravity_coupled: false
//!     motion: !scripted { reference: Earth, orbit_radius: 3.844e8, rate: 2.662e-6 }
//!   - name: Rocket
//!     m: 2.0e4
//!     radius: 75.0
//!     placement: !cartesian { x: [1.5e11, 0.0], v: [0.0, 3.0e4] }
//!     fuel: { dry_mass: 1.0e4, initial_fuel: 1.0e4, burn_rate: 5.0 }
//! ```
//!
//! The engine maps this configuration into its runtime scenario, see
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario).

use serde::Deserialize;

use crate::simulation::engine::{DAYS_PER_SECOND, SUBSTEP_COUNT};
use crate::simulation::orbit::angle_from_dhm;
use crate::simulation::params::{DIST_THRESHOLD, G_SI, SUN_M};

/// Frame timing for the step driver
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default = "default_days_per_second")]
    pub days_per_second: f64, // simulated days that pass per real second
    #[serde(default = "default_substeps")]
    pub substeps: u32, // physics iterations per frame
    #[serde(default = "default_fps")]
    pub fps: f64, // frame rate of the headless loop
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            days_per_second: DAYS_PER_SECOND,
            substeps: SUBSTEP_COUNT,
            fps: default_fps(),
        }
    }
}

/// Physical constants for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_dist_threshold")]
    pub dist_threshold: f64, // near-collision distance
    #[serde(default = "default_central_mass")]
    pub central_mass: f64, // mass that orbital placements are resolved against
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: G_SI,
            dist_threshold: DIST_THRESHOLD,
            central_mass: SUN_M,
        }
    }
}

/// An angle either as decimal degrees or as `[degrees, hours, minutes]`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum AngleConfig {
    Degrees(f64),
    Dhm([f64; 3]),
}

impl AngleConfig {
    pub fn degrees(&self) -> f64 {
        match *self {
            AngleConfig::Degrees(d) => d,
            AngleConfig::Dhm([d, h, m]) => angle_from_dhm(d, h, m),
        }
    }
}

impl Default for AngleConfig {
    fn default() -> Self {
        AngleConfig::Degrees(0.0)
    }
}

/// Initial position, one of two exclusive forms
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "snake_case")]
pub enum PlacementConfig {
    /// Explicit coordinates in meters and m/s
    Cartesian {
        x: [f64; 2],
        #[serde(default)]
        v: [f64; 2],
    },
    /// Around the central mass. A circular-orbit velocity is derived when
    /// `circular` is set or a positive `period_days` is given.
    Orbital {
        radius_au: f64,
        #[serde(default)]
        angle: AngleConfig,
        #[serde(default)]
        circular: bool,
        #[serde(default)]
        period_days: Option<f64>,
    },
}

impl Default for PlacementConfig {
    fn default() -> Self {
        PlacementConfig::Cartesian {
            x: [0.0, 0.0],
            v: [0.0, 0.0],
        }
    }
}

/// Motion strategy
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "snake_case")]
pub enum MotionConfig {
    #[default]
    Gravity,
    /// Circular motion around an earlier body, looked up by name
    Scripted {
        reference: String,
        orbit_radius: f64, // meters
        rate: f64,         // radians per simulated second
        #[serde(default)]
        angle: AngleConfig,
    },
}

/// Fuel burn for a rocket-like body
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct FuelConfig {
    pub dry_mass: f64,     // kg
    pub initial_fuel: f64, // kg
    pub burn_rate: f64,    // kg/s
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub m: f64,      // mass in kg, replaced by dry + fuel when `fuel` is set
    pub radius: f64, // meters, only used by renderers
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub motion: MotionConfig,
    #[serde(default = "default_true")]
    pub gravity_coupled: bool,
    #[serde(default)]
    pub fuel: Option<FuelConfig>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // frame timing
    #[serde(default)]
    pub parameters: ParametersConfig, // physical constants
    pub bodies: Vec<BodyConfig>, // bodies in insertion order
}

fn default_days_per_second() -> f64 {
    DAYS_PER_SECOND
}

fn default_substeps() -> u32 {
    SUBSTEP_COUNT
}

fn default_fps() -> f64 {
    60.0
}

fn default_g() -> f64 {
    G_SI
}

fn default_dist_threshold() -> f64 {
    DIST_THRESHOLD
}

fn default_central_mass() -> f64 {
    SUN_M
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_placements_and_defaults() {
        let yaml = r#"
bodies:
  - name: Sun
    m: 1.99e30
    radius: 6.96e8
  - name: Mercury
    m: 3.30e23
    radius: 2.44e6
    placement: !orbital { radius_au: 0.309, angle: [129, 15, 25.9], period_days: 87.97 }
  - name: Moon
    m: 7.35e22
    radius: 1.74e6
    gravity_coupled: false
    motion: !scripted { reference: Mercury, orbit_radius: 1.0e7, rate: 1.0e-5 }
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.engine.substeps, SUBSTEP_COUNT);
        assert_eq!(cfg.parameters.G, G_SI);
        assert_eq!(cfg.bodies.len(), 3);
        assert!(matches!(cfg.bodies[0].placement, PlacementConfig::Cartesian { .. }));
        assert!(cfg.bodies[0].gravity_coupled);

        match &cfg.bodies[1].placement {
            PlacementConfig::Orbital { angle, period_days, .. } => {
                assert_eq!(*angle, AngleConfig::Dhm([129.0, 15.0, 25.9]));
                assert_eq!(*period_days, Some(87.97));
            }
            other => panic!("unexpected placement {other:?}"),
        }
        assert!(!cfg.bodies[2].gravity_coupled);
        assert!(matches!(&cfg.bodies[2].motion, MotionConfig::Scripted { reference, .. } if reference == "Mercury"));
    }
}
