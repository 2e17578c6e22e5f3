//! Core state types for the slingshot simulation.
//!
//! Defines the 2D body and system structs:
//! - `Body` holds one point mass with its coupling flag, motion strategy and
//!   optional fuel model
//! - `System` owns the ordered body list and the current simulated time `t`
//!
//! Bodies are only ever appended; a `BodyId` stays valid for the whole run.

use nalgebra::Vector2;

use super::error::SimError;
use super::fuel::FuelModel;
use super::integrator::scripted_state;
use super::orbit::{circular_speed, polar_position, tangential_velocity, AU};
use super::params::Parameters;

pub type NVec2 = Vector2<f64>;

/// Index handle into [`System::bodies`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

/// How a body's state is advanced each sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Position/velocity integrated from the accumulated gravity
    GravityIntegrated,
    /// Closed-form circular motion around `reference`
    ScriptedAngular {
        reference: BodyId,
        orbit_radius: f64, // meters
        rate: f64,         // radians per simulated second
        angle: f64,        // current angle in radians
    },
}

/// Where a body starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Explicit position (m) and velocity (m/s)
    Cartesian { x: NVec2, v: NVec2 },
    /// Polar placement around the central mass. With `circular` set the
    /// initial velocity is the circular-orbit velocity, otherwise zero.
    Orbital {
        radius_au: f64,
        angle_deg: f64,
        circular: bool,
    },
}

impl Placement {
    /// Resolve into a `(position, velocity)` pair against the central mass
    pub fn resolve(&self, params: &Parameters) -> Result<(NVec2, NVec2), SimError> {
        match *self {
            Placement::Cartesian { x, v } => Ok((x, v)),
            Placement::Orbital { radius_au, angle_deg, circular } => {
                if !(radius_au.is_finite() && radius_au > 0.0) {
                    return Err(SimError::InvalidOrbitRadius(radius_au));
                }
                let r = radius_au * AU;
                let x = polar_position(r, angle_deg.to_radians());
                let v = if circular {
                    tangential_velocity(circular_speed(params.G, params.central_mass, r), angle_deg)
                } else {
                    NVec2::zeros()
                };
                Ok((x, v))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub x: NVec2,     // position
    pub v: NVec2,     // velocity
    pub m: f64,       // mass
    pub radius: f64,  // radius (rendering only)
    pub gravity_coupled: bool, // exerts and feels gravity in the accumulator
    pub motion: Motion,
    pub fuel: Option<FuelModel>,
}

impl Body {
    /// Build a gravity-coupled body from a placement and motion strategy.
    ///
    /// Scripted bodies get their real position once they are added to a
    /// system, since it depends on the reference body.
    pub fn new(
        name: impl Into<String>,
        m: f64,
        radius: f64,
        placement: Placement,
        motion: Motion,
        params: &Parameters,
    ) -> Result<Self, SimError> {
        let name = name.into();
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidMass { name, mass: m });
        }
        let (x, v) = placement.resolve(params)?;
        if let Motion::ScriptedAngular { orbit_radius, rate, angle, .. } = motion {
            if !(orbit_radius.is_finite() && orbit_radius > 0.0) {
                return Err(SimError::InvalidOrbitRadius(orbit_radius));
            }
            if !(rate.is_finite() && angle.is_finite()) {
                return Err(SimError::NonFinite { name, quantity: "scripted motion" });
            }
        }

        Ok(Self {
            name,
            x,
            v,
            m,
            radius,
            gravity_coupled: true,
            motion,
            fuel: None,
        })
    }

    /// Exclude this body from force coupling in both directions
    pub fn uncoupled(mut self) -> Self {
        self.gravity_coupled = false;
        self
    }

    /// Attach a fuel model; the body's mass becomes `dry + initial fuel`
    pub fn with_fuel(mut self, fuel: FuelModel) -> Result<Self, SimError> {
        fuel.validate(&self.name)?;
        self.m = fuel.total_mass(0.0)?;
        self.fuel = Some(fuel);
        Ok(self)
    }

    /// Recompute mass from the fuel model, if any.
    /// `elapsed` is cumulative simulated seconds since the start of the run.
    pub fn update_mass(&mut self, elapsed: f64) -> Result<(), SimError> {
        let Some(fuel) = self.fuel else {
            return Ok(());
        };
        let was_fuelled = self.m - fuel.dry_mass >= 0.0;
        self.m = fuel.total_mass(elapsed)?;
        if was_fuelled && fuel.fuel_mass(elapsed)? < 0.0 {
            // unclamped, fuel keeps going negative
            tracing::warn!(body = %self.name, elapsed, mass = self.m, "fuel exhausted, mass model is unclamped");
        }
        Ok(())
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().all(|c| c.is_finite())
            && self.v.iter().all(|c| c.is_finite())
            && self.m.is_finite()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64,            // simulated seconds since start
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    pub fn position(&self, id: BodyId) -> Option<NVec2> {
        self.body(id).map(|b| b.x)
    }

    pub fn velocity(&self, id: BodyId) -> Option<NVec2> {
        self.body(id).map(|b| b.v)
    }

    pub fn mass(&self, id: BodyId) -> Option<f64> {
        self.body(id).map(|b| b.m)
    }

    /// Append a body and hand back its id.
    /// Names must be unique and scripted references must already exist.
    pub fn add_body(&mut self, mut body: Body, params: &Parameters) -> Result<BodyId, SimError> {
        if self.find(&body.name).is_some() {
            return Err(SimError::DuplicateBody(body.name));
        }
        if let Motion::ScriptedAngular { reference, orbit_radius, angle, .. } = body.motion {
            let Some(parent) = self.body(reference) else {
                return Err(SimError::UnknownReference {
                    name: body.name,
                    reference: format!("#{}", reference.0),
                });
            };
            let (x, v) = scripted_state(parent.x, parent.m, orbit_radius, angle, params.G);
            body.x = x;
            body.v = v;
        }

        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        Ok(id)
    }
}
