//! Driver loop: steps a `Scenario`, samples it and reports progress

use tracing::{debug, info, trace, warn};

use crate::error::Result;
use crate::output::progress::ProgressTracker;
use crate::output::sink::SampleSink;
use crate::simulation::diagnostics::{orbital_radius, ConservationMonitor, ConservationState};
use crate::simulation::scenario::Scenario;

/// Relative energy drift above which the end-of-run summary is a warning
pub const ENERGY_DRIFT_WARN: f64 = 1e-3;

/// What a finished run looked like
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub steps: u64,
    pub samples: u64,
    pub final_time: f64,
    pub energy_drift: f64, // relative
    pub final_radius: Option<f64>, // sampled body to the first fixed body
}

/// Run `scenario` for its configured number of steps
///
/// Steps, sampling and progress count from the step the scenario is at when
/// `run` starts, so a scenario that was already advanced runs another
/// `total_steps`. The sampled body is recorded at the start and then every
/// `sample_stride` steps. Any error aborts the run; samples already handed
/// to the sink stay there.
pub fn run(scenario: &mut Scenario, sink: &mut dyn SampleSink) -> Result<RunSummary> {
    let params = scenario.parameters.clone();
    let baseline = ConservationState::new(&scenario.system, params.G);
    let mut progress = ProgressTracker::new(params.total_steps);
    let mut samples = 0;
    let start = scenario.system.step;

    info!(
        integrator = scenario.integrator.name(),
        bodies = scenario.system.bodies.len(),
        dt = params.dt,
        total_steps = params.total_steps,
        start_step = start,
        duration = params.duration(),
        sample_stride = params.sample_stride,
        sample_body = %scenario.sampled().name,
        "starting run"
    );

    record(scenario, sink, &mut samples)?;
    report_progress(&mut progress, 0);

    for _ in 0..params.total_steps {
        scenario.step()?;
        let done = scenario.system.step - start;
        if done % params.sample_stride == 0 {
            record(scenario, sink, &mut samples)?;
        }
        report_progress(&mut progress, done);
    }

    sink.finish()?;

    let monitor = ConservationMonitor::check(&baseline, &scenario.system, params.G);
    let final_radius = scenario.center().map(|c| orbital_radius(scenario.sampled(), c));
    let summary = RunSummary {
        steps: scenario.system.step - start,
        samples,
        final_time: scenario.system.time(params.dt),
        energy_drift: monitor.energy_error,
        final_radius,
    };

    debug!(
        angular_momentum_drift = monitor.relative_angular_momentum_error(&baseline),
        "conservation check"
    );
    if summary.energy_drift > ENERGY_DRIFT_WARN {
        warn!(energy_drift = summary.energy_drift, "energy drift above {ENERGY_DRIFT_WARN}");
    }
    info!(
        steps = summary.steps,
        samples = summary.samples,
        final_time = summary.final_time,
        energy_drift = summary.energy_drift,
        "run complete"
    );

    Ok(summary)
}

fn record(scenario: &Scenario, sink: &mut dyn SampleSink, samples: &mut u64) -> Result<()> {
    let body = scenario.sampled();
    let step = scenario.system.step;
    trace!(step, x = body.x.x(), y = body.x.y(), z = body.x.z(), "sample");
    sink.record(step, scenario.system.time(scenario.parameters.dt), body)?;
    *samples += 1;
    Ok(())
}

fn report_progress(progress: &mut ProgressTracker, step: u64) {
    if let Some(p) = progress.update(step) {
        info!(percent = p, "{p}% complete");
    }
}
