//! Read-only views over the simulation state for overlays and reports
//!
//! Nothing here mutates the system.

use std::fmt;

use super::orbit::SECS_IN_A_DAY;
use super::states::{Body, NVec2, System};

/// Calendar year the simulation clock starts at
pub const START_YEAR: i32 = 2030;
pub const DAYS_IN_A_YEAR: f64 = 365.25;
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl Body {
    /// Position of `other` relative to this body
    pub fn coords_rel_to(&self, other: &Body) -> NVec2 {
        other.x - self.x
    }

    /// Velocity of `other` relative to this body
    pub fn vel_rel_to(&self, other: &Body) -> NVec2 {
        other.v - self.v
    }

    pub fn dist_to(&self, other: &Body) -> f64 {
        self.coords_rel_to(other).norm()
    }

    pub fn speed(&self) -> f64 {
        self.v.norm()
    }
}

/// Coarse calendar position of the simulation clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimDate {
    pub year: i32,
    pub month: &'static str,
}

impl SimDate {
    /// Date after `sim_seconds` of simulated time
    pub fn from_elapsed(sim_seconds: f64) -> Self {
        let years = sim_seconds / (SECS_IN_A_DAY * DAYS_IN_A_YEAR);
        // floor keeps negative fractions in range
        let month = ((years.rem_euclid(1.0) * 12.0).floor() as usize).min(11);
        Self {
            year: START_YEAR + years.floor() as i32,
            month: MONTH_NAMES[month],
        }
    }
}

impl fmt::Display for SimDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

impl System {
    pub fn days_elapsed(&self) -> f64 {
        self.t / SECS_IN_A_DAY
    }

    pub fn date(&self) -> SimDate {
        SimDate::from_elapsed(self.t)
    }

    /// Distance between two bodies looked up by name
    pub fn distance(&self, a: &str, b: &str) -> Option<f64> {
        let (a, b) = (self.body(self.find(a)?)?, self.body(self.find(b)?)?);
        Some(a.dist_to(b))
    }
}
