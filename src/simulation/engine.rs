//! Frame-level step driver
//!
//! Turns the wall-clock frame timing handed in by the frame loop into
//! simulated time and runs a fixed number of sub-steps per frame.

use super::error::SimError;
use super::forces::AccelSet;
use super::integrator::substep;
use super::orbit::SECS_IN_A_DAY;
use super::params::Parameters;
use super::states::System;

/// Simulated days per real second in the stock scenario
pub const DAYS_PER_SECOND: f64 = 10.0;
/// Physics iterations per frame
pub const SUBSTEP_COUNT: u32 = 100;
/// Relative slack when matching a frame's start against the simulated clock
const CLOCK_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct Engine {
    pub time_scale: f64, // simulated seconds per real second
    pub substeps: u32,   // sub-steps per frame
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_days_per_second(DAYS_PER_SECOND, SUBSTEP_COUNT)
    }
}

impl Engine {
    pub fn from_days_per_second(days_per_second: f64, substeps: u32) -> Self {
        Self {
            time_scale: days_per_second * SECS_IN_A_DAY,
            substeps,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(SimError::InvalidEngine(format!(
                "time scale must be positive, got {}",
                self.time_scale
            )));
        }
        if self.substeps == 0 {
            return Err(SimError::InvalidEngine("at least one sub-step per frame is required".into()));
        }
        Ok(())
    }
}

/// Advance `sys` by one frame.
///
/// `frame_delta` and `total_elapsed` are wall-clock seconds from the frame
/// loop: the length of this frame and the time since the run started,
/// including this frame. The frame must start where the previous one ended
/// (up to rounding); a total that runs backwards is rejected. On error the
/// system is left partially advanced and should be dropped.
pub fn step(
    frame_delta: f64,
    total_elapsed: f64,
    sys: &mut System,
    forces: &AccelSet,
    engine: &Engine,
    params: &Parameters,
) -> Result<(), SimError> {
    if !(frame_delta.is_finite() && total_elapsed.is_finite())
        || frame_delta < 0.0
        || total_elapsed < frame_delta
    {
        return Err(SimError::InvalidFrameTime {
            delta: frame_delta,
            total: total_elapsed,
        });
    }

    let sim_dt = frame_delta * engine.time_scale;
    let sim_total = total_elapsed * engine.time_scale;
    let substep_dt = sim_dt / f64::from(engine.substeps);

    // simulated time at the start of this frame
    let frame_start = sim_total - sim_dt;
    if frame_start < sys.t - CLOCK_TOLERANCE * sys.t.abs().max(1.0) {
        return Err(SimError::InvalidFrameTime {
            delta: frame_delta,
            total: total_elapsed,
        });
    }

    for k in 1..=engine.substeps {
        let elapsed = frame_start + f64::from(k) * substep_dt;
        substep(sys, forces, params, substep_dt, elapsed)?;
    }
    Ok(())
}
