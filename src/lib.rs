pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod visualization;

pub use simulation::states::{Body, BodyId, Motion, Placement, System, NVec2};
pub use simulation::forces::{Acceleration, AccelSet, NetAccel, NewtonianGravity};
pub use simulation::integrator::{kinematic_update, scripted_update, substep};
pub use simulation::engine::{step, Engine};
pub use simulation::error::SimError;
pub use simulation::fuel::FuelModel;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;
pub use simulation::diagnostics::SimDate;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_substeps};
