//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the physics constants shared by every sub-step:
//! - gravitational constant `G`,
//! - the near-collision distance threshold,
//! - the central mass used for orbital placement

use super::error::SimError;

/// Gravitational constant used by the solar-system scenario
pub const G_SI: f64 = 6.674e-11;
/// No two coupled bodies should get closer than this (meters)
pub const DIST_THRESHOLD: f64 = 1e5;
/// Mass of the sun (kg)
pub const SUN_M: f64 = 1.99e30;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64,              // gravitational constant
    pub dist_threshold: f64, // singularity guard distance
    pub central_mass: f64,   // mass orbital placements are resolved against
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: G_SI,
            dist_threshold: DIST_THRESHOLD,
            central_mass: SUN_M,
        }
    }
}

impl Parameters {
    /// All three values must be positive and finite. A non-positive
    /// threshold would switch the singularity guard off.
    pub fn validate(&self) -> Result<(), SimError> {
        let checks = [
            ("G", self.G),
            ("dist_threshold", self.dist_threshold),
            ("central_mass", self.central_mass),
        ];
        for (field, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::InvalidParameters(format!(
                    "{field} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}
