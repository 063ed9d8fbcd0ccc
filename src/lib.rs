pub mod error;
pub mod simulation;
pub mod configuration;
pub mod output;

pub use error::{Result, SimError};

pub use simulation::vector::Vec3;
pub use simulation::states::{Body, System};
pub use simulation::params::{Parameters, G_SI};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{prime_accelerations, Integrator, Leapfrog};
pub use simulation::diagnostics::{AngleTracker, ConservationMonitor, ConservationState};
pub use simulation::scenario::Scenario;
pub use simulation::engine::{run, RunSummary};

pub use configuration::config::{BodyConfig, IntegratorConfig, OutputConfig, ParametersConfig, ScenarioConfig};

pub use output::sink::{CsvSink, MemorySink, Sample, SampleSink};
pub use output::progress::ProgressTracker;
