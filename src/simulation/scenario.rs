//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The frame loop owns a `Scenario`, calls [`Scenario::step`] once per frame
//! and reads body state back between frames.

use crate::configuration::config::{BodyConfig, MotionConfig, PlacementConfig, ScenarioConfig};
use crate::simulation::engine::{self, Engine};
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::fuel::FuelModel;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyId, Motion, NVec2, Placement, System};

/// A fully-initialized simulation: settings, state and force laws
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    /// Empty scenario with Newtonian gravity registered
    pub fn new(engine: Engine, parameters: Parameters) -> Result<Self, SimError> {
        engine.validate()?;
        parameters.validate()?;
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            dist_threshold: parameters.dist_threshold,
        });

        Ok(Self {
            engine,
            parameters,
            system: System::new(),
            forces,
        })
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine::from_days_per_second(e_cfg.days_per_second, e_cfg.substeps);

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dist_threshold: p_cfg.dist_threshold,
            central_mass: p_cfg.central_mass,
        };

        let mut scenario = Self::new(engine, parameters)?;

        // Bodies in file order, so scripted references can only point backwards
        for bc in &cfg.bodies {
            let body = scenario.body_from_config(bc)?;
            scenario.add_body(body)?;
        }

        tracing::info!(
            bodies = scenario.system.len(),
            time_scale = scenario.engine.time_scale,
            substeps = scenario.engine.substeps,
            "scenario built"
        );
        Ok(scenario)
    }

    fn body_from_config(&self, bc: &BodyConfig) -> Result<Body, SimError> {
        let placement = match bc.placement {
            PlacementConfig::Cartesian { x, v } => Placement::Cartesian {
                x: NVec2::new(x[0], x[1]),
                v: NVec2::new(v[0], v[1]),
            },
            PlacementConfig::Orbital { radius_au, angle, circular, period_days } => Placement::Orbital {
                radius_au,
                angle_deg: angle.degrees(),
                circular: circular || period_days.is_some_and(|p| p > 0.0),
            },
        };

        let motion = match &bc.motion {
            MotionConfig::Gravity => Motion::GravityIntegrated,
            MotionConfig::Scripted { reference, orbit_radius, rate, angle } => {
                let Some(id) = self.system.find(reference) else {
                    return Err(SimError::UnknownReference {
                        name: bc.name.clone(),
                        reference: reference.clone(),
                    });
                };
                Motion::ScriptedAngular {
                    reference: id,
                    orbit_radius: *orbit_radius,
                    rate: *rate,
                    angle: angle.degrees().to_radians(),
                }
            }
        };

        let mut body = Body::new(bc.name.clone(), bc.m, bc.radius, placement, motion, &self.parameters)?;
        if !bc.gravity_coupled {
            body = body.uncoupled();
        }
        if let Some(f) = bc.fuel {
            let fuel = FuelModel::new(f.dry_mass, f.initial_fuel, f.burn_rate);
            body = body.with_fuel(fuel)?;
            tracing::debug!(body = %bc.name, burnout_s = ?fuel.burnout_time(), "fuel model attached");
        }
        Ok(body)
    }

    /// Register a body; see [`System::add_body`]
    pub fn add_body(&mut self, body: Body) -> Result<BodyId, SimError> {
        self.system.add_body(body, &self.parameters)
    }

    /// Advance one frame; see [`engine::step`]
    pub fn step(&mut self, frame_delta: f64, total_elapsed: f64) -> Result<(), SimError> {
        engine::step(
            frame_delta,
            total_elapsed,
            &mut self.system,
            &self.forces,
            &self.engine,
            &self.parameters,
        )
    }
}
