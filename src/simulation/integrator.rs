//! Fixed-step kinematic integrator for the slingshot system
//!
//! One sub-step is split in phases so that no body sees a mix of updated and
//! stale state:
//! 1. accelerations for every body from the state left by the previous sub-step
//! 2. position/velocity updates for every body
//! 3. mass updates for fuel-burning bodies

use super::error::SimError;
use super::forces::{AccelSet, NetAccel};
use super::orbit::{circular_speed, polar_position};
use super::params::Parameters;
use super::states::{Body, Motion, NVec2, System};

/// Advance one gravity-integrated body by `dt`.
///
/// Uses `x += v dt + a dt^2 / 2` with the velocity from before the step, then
/// `v += a dt`. A poisoned acceleration nulls the velocity and leaves the
/// position where it is.
pub fn kinematic_update(body: &mut Body, accel: NetAccel, dt: f64) {
    match accel {
        NetAccel::Poison => {
            body.v = NVec2::zeros();
        }
        NetAccel::Vector(a) => {
            body.x += body.v * dt + 0.5 * a * dt * dt;
            body.v += a * dt;
        }
    }
}

/// Position and velocity of a body on a circular orbit of radius
/// `orbit_radius` at `angle` (radians) around a reference at `ref_x` with mass
/// `ref_m`. The velocity is the circular-orbit speed, tangential to the
/// radius vector.
#[allow(non_snake_case)]
pub fn scripted_state(ref_x: NVec2, ref_m: f64, orbit_radius: f64, angle: f64, G: f64) -> (NVec2, NVec2) {
    let x = ref_x + polar_position(orbit_radius, angle);
    let tangent = angle + std::f64::consts::FRAC_PI_2;
    let v = polar_position(circular_speed(G, ref_m, orbit_radius), tangent);
    (x, v)
}

/// Advance a scripted body by `dt`, ignoring any acceleration.
/// `reference` is the `(position, mass)` of its reference body at the start
/// of the sub-step.
#[allow(non_snake_case)]
pub fn scripted_update(body: &mut Body, reference: (NVec2, f64), dt: f64, G: f64) {
    let Motion::ScriptedAngular { orbit_radius, rate, angle, .. } = &mut body.motion else {
        return;
    };
    *angle += *rate * dt;
    let (x, v) = scripted_state(reference.0, reference.1, *orbit_radius, *angle, G);
    body.x = x;
    body.v = v;
}

/// Advance the whole system by one sub-step of `dt` simulated seconds.
/// `elapsed` is the cumulative simulated time at the end of this sub-step and
/// drives the fuel model.
pub fn substep(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
    dt: f64,
    elapsed: f64,
) -> Result<(), SimError> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, nothing to do
        return Ok(());
    }

    // Phase 1: every acceleration from the pre-update state
    let accels = forces.accumulate_accels(sys);

    // Scripted bodies follow where their reference was at the start of the step
    let snapshot: Vec<(NVec2, f64)> = sys.bodies.iter().map(|b| (b.x, b.m)).collect();

    // Phase 2: apply updates
    for (b, a) in sys.bodies.iter_mut().zip(accels) {
        match b.motion {
            Motion::GravityIntegrated => kinematic_update(b, a, dt),
            Motion::ScriptedAngular { reference, .. } => {
                let Some(&parent) = snapshot.get(reference.0) else {
                    return Err(SimError::UnknownReference {
                        name: b.name.clone(),
                        reference: format!("#{}", reference.0),
                    });
                };
                scripted_update(b, parent, dt, params.G)
            }
        }
    }

    // Phase 3: fuel burn on the global clock
    for b in sys.bodies.iter_mut() {
        b.update_mass(elapsed)?;
    }

    sys.t = elapsed;

    for b in &sys.bodies {
        if !b.is_finite() {
            return Err(SimError::NonFinite {
                name: b.name.clone(),
                quantity: "state",
            });
        }
    }
    Ok(())
}
