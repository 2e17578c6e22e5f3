//! Headless stand-in for a renderer: drives the scenario at a fixed frame
//! rate and reports body state between frames.

use crate::simulation::error::SimError;
use crate::simulation::orbit::AU;
use crate::simulation::scenario::Scenario;

/// Which bodies to report and how often
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub every: u32,                       // frames between reports, 0 disables
    pub distance: Option<(String, String)>, // pair whose separation is reported
}

/// Run `frames` frames at `fps`, injecting the frame timing the way a real
/// frame loop would. Returns the number of frames completed.
pub fn run_headless(scenario: &mut Scenario, frames: u32, fps: f64, report: &ReportConfig) -> Result<u32, SimError> {
    tracing::info!(frames, fps, bodies = scenario.system.len(), "run_headless: starting");

    let frame_delta = 1.0 / fps;
    for frame in 1..=frames {
        let total = frame_delta * f64::from(frame);
        scenario.step(frame_delta, total)?;

        if report.every > 0 && frame % report.every == 0 {
            report_frame(scenario, frame, report);
        }
    }
    Ok(frames)
}

fn report_frame(scenario: &Scenario, frame: u32, report: &ReportConfig) {
    let sys = &scenario.system;
    tracing::info!(
        frame,
        days = sys.days_elapsed(),
        date = %sys.date(),
        "frame"
    );
    if let Some((a, b)) = &report.distance {
        if let Some(d) = sys.distance(a, b) {
            tracing::info!("distance {a} - {b}: {} km", (d / 1000.0).floor());
        }
    }
    for b in &sys.bodies {
        tracing::debug!(
            body = %b.name,
            x_au = b.x.x / AU,
            y_au = b.x.y / AU,
            speed = b.speed(),
            mass = b.m,
            "body state"
        );
    }
}
