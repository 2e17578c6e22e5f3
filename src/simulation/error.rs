use thiserror::Error;

/// Hard failures of the integrator core.
///
/// Near-collisions are not errors; they surface as
/// [`NetAccel::Poison`](crate::simulation::forces::NetAccel::Poison) and are
/// consumed by the integrator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("elapsed simulated time must be non-negative, got {0}")]
    NegativeElapsed(f64),

    #[error("invalid frame time: delta {delta}, total {total}")]
    InvalidFrameTime { delta: f64, total: f64 },

    #[error("{name}: {quantity} is no longer finite")]
    NonFinite { name: String, quantity: &'static str },

    #[error("{name}: mass must be positive and finite, got {mass}")]
    InvalidMass { name: String, mass: f64 },

    #[error("orbit radius must be positive and finite, got {0}")]
    InvalidOrbitRadius(f64),

    #[error("{name}: invalid fuel model: {reason}")]
    InvalidFuelModel { name: String, reason: &'static str },

    #[error("{name}: scripted reference {reference} is not a known body")]
    UnknownReference { name: String, reference: String },

    #[error("a body named {0} already exists")]
    DuplicateBody(String),

    #[error("invalid engine setting: {0}")]
    InvalidEngine(String),

    #[error("invalid physics parameter: {0}")]
    InvalidParameters(String),
}
