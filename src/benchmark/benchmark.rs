use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::orbit::{orbital_period, AU};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Motion, Placement};

/// Helper to build a sun plus `n` planets on circular orbits
fn make_scenario(n: usize, engine: Engine) -> Result<Scenario, SimError> {
    let params = Parameters::default();
    let mut scenario = Scenario::new(engine, params.clone())?;

    let sun = Body::new("Sun", params.central_mass, 6.96e8, Placement::Cartesian {
        x: Default::default(),
        v: Default::default(),
    }, Motion::GravityIntegrated, &params)?;
    scenario.add_body(sun)?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic layout, no rand needed
        let placement = Placement::Orbital {
            radius_au: 0.3 + 0.05 * i_f,
            angle_deg: (i_f * 37.0) % 360.0,
            circular: true,
        };
        let planet = Body::new(format!("P{i}"), 5.97e24, 6.37e6, placement, Motion::GravityIntegrated, &params)?;
        scenario.add_body(planet)?;
    }
    Ok(scenario)
}

/// Time one 60 fps frame (all sub-steps) for a range of body counts.
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() -> Result<(), SimError> {
    let ns = [8, 16, 32, 64, 128, 256];
    let frames: u32 = 20; // frames per body count
    let frame_delta = 1.0 / 60.0;

    println!("N,frame_ms");
    for n in ns {
        let mut scenario = make_scenario(n, Engine::default())?;

        // Warm up
        scenario.step(frame_delta, frame_delta)?;

        let t0 = Instant::now();
        for f in 0..frames {
            let total = frame_delta * f64::from(f + 2);
            scenario.step(frame_delta, total)?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / f64::from(frames);

        println!("{},{:.6}", n + 1, ms);
    }
    Ok(())
}

/// Closed-orbit error after one Keplerian period for increasing sub-step
/// counts. A single light satellite at 1 AU around the sun.
pub fn bench_substeps() -> Result<(), SimError> {
    let params = Parameters::default();
    let period = orbital_period(params.G, params.central_mass, AU);
    let frames: u32 = 365;

    println!("substeps,rel_error,ms");
    for substeps in [10, 30, 100, 300, 1000] {
        // one real second per simulated period
        let engine = Engine { time_scale: period, substeps };
        let mut scenario = Scenario::new(engine, params.clone())?;
        scenario.add_body(Body::new("Sun", params.central_mass, 6.96e8, Placement::Cartesian {
            x: Default::default(),
            v: Default::default(),
        }, Motion::GravityIntegrated, &params)?)?;
        let satellite = scenario.add_body(Body::new("Satellite", 1.0e3, 1.0, Placement::Orbital {
            radius_au: 1.0,
            angle_deg: 0.0,
            circular: true,
        }, Motion::GravityIntegrated, &params)?)?;

        let start = scenario.system.position(satellite).unwrap_or_default();
        let frame_delta = 1.0 / f64::from(frames);

        let t0 = Instant::now();
        for f in 1..=frames {
            scenario.step(frame_delta, frame_delta * f64::from(f))?;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0;

        let end = scenario.system.position(satellite).unwrap_or_default();
        println!("{},{:.3e},{:.3}", substeps, (end - start).norm() / AU, ms);
    }
    Ok(())
}
