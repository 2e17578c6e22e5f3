pub mod states;
pub mod params;
pub mod error;
pub mod orbit;
pub mod fuel;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod scenario;
pub mod diagnostics;
