//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing), validates it and produces the
//! runtime bundle consumed by the engine:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at step 0, accelerations primed)
//! - active force set (`AccelSet`)
//! - the integrator and the output settings

use std::collections::HashSet;
use std::path::PathBuf;

use crate::configuration::config::{BodyConfig, IntegratorConfig, ParametersConfig, ScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{prime_accelerations, Integrator, Leapfrog};
use crate::simulation::params::{steps_for_duration, Parameters};
use crate::simulation::states::{Body, System};
use crate::simulation::vector::Vec3;

/// Fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, the set of active
/// force laws and the integrator that advances them
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub integrator: Box<dyn Integrator + Send + Sync>,
    pub output_path: PathBuf,
    pub sample_body: usize, // index into system.bodies
}

impl Scenario {
    /// Validate `cfg` and build a scenario ready for its first step
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = build_parameters(&cfg.parameters)?;
        let bodies = cfg.bodies.iter().map(build_body).collect::<Result<Vec<Body>>>()?;
        let system = System::new(bodies);

        let sample_body = match &cfg.output.sample_body {
            Some(name) => system
                .index_of(name)
                .ok_or_else(|| SimError::invalid(format!("sample_body `{name}` is not a body")))?,
            None => system.bodies.len().saturating_sub(1),
        };

        let integrator: Box<dyn Integrator + Send + Sync> = match cfg.integrator {
            IntegratorConfig::Leapfrog => Box::new(Leapfrog),
        };

        Self::from_parts(parameters, system, integrator, cfg.output.path, sample_body)
    }

    /// Assemble a scenario from runtime pieces
    /// Validates parameters and bodies, registers Newtonian gravity and primes the step-0 accelerations
    pub fn from_parts(
        parameters: Parameters,
        mut system: System,
        integrator: Box<dyn Integrator + Send + Sync>,
        output_path: PathBuf,
        sample_body: usize,
    ) -> Result<Self> {
        parameters.validate()?;
        validate_bodies(&system.bodies)?;
        if sample_body >= system.bodies.len() {
            return Err(SimError::invalid(format!("sample body index {sample_body} out of range")));
        }

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        prime_accelerations(&mut system, &forces, parameters.dt)?;

        Ok(Self {
            parameters,
            system,
            forces,
            integrator,
            output_path,
            sample_body,
        })
    }

    /// Advance the system by one step with the configured integrator
    pub fn step(&mut self) -> Result<()> {
        self.integrator.advance(&mut self.system, &self.forces, self.parameters.dt)
    }

    pub fn sampled(&self) -> &Body {
        &self.system.bodies[self.sample_body]
    }

    /// First fixed body, the reference frame for radius reporting
    pub fn center(&self) -> Option<&Body> {
        self.system.bodies.iter().find(|b| b.fixed)
    }
}

fn build_parameters(p: &ParametersConfig) -> Result<Parameters> {
    let total_steps = match (p.total_steps, p.t_end) {
        (Some(_), Some(_)) => return Err(SimError::invalid("give either total_steps or t_end, not both")),
        (None, None) => return Err(SimError::invalid("one of total_steps or t_end is required")),
        (Some(n), None) => n,
        (None, Some(t_end)) => steps_for_duration(t_end, p.dt)?,
    };

    let parameters = Parameters {
        dt: p.dt,
        total_steps,
        sample_stride: p.sample_stride,
        G: p.G,
        eps2: p.eps2,
    };
    parameters.validate()?;
    Ok(parameters)
}

fn build_body(bc: &BodyConfig) -> Result<Body> {
    let x = Vec3::from(bc.x);
    let v = Vec3::from(bc.v);
    if !(x.is_finite() && v.is_finite()) {
        return Err(SimError::invalid(format!("body `{}` has non-finite coordinates", bc.name)));
    }
    if bc.fixed && v != Vec3::zeros() {
        return Err(SimError::invalid(format!("fixed body `{}` must have zero velocity", bc.name)));
    }
    Ok(if bc.fixed {
        Body::fixed(bc.name.clone(), x, bc.m)
    } else {
        Body::new(bc.name.clone(), x, v, bc.m)
    })
}

fn validate_bodies(bodies: &[Body]) -> Result<()> {
    if bodies.is_empty() {
        return Err(SimError::invalid("scenario has no bodies"));
    }

    let mut names = HashSet::new();
    for b in bodies {
        if b.name.is_empty() {
            return Err(SimError::invalid("body names must not be empty"));
        }
        if !names.insert(b.name.as_str()) {
            return Err(SimError::invalid(format!("duplicate body name `{}`", b.name)));
        }
        if !(b.m.is_finite() && b.m >= 0.0) {
            return Err(SimError::invalid(format!("body `{}` has invalid mass {}", b.name, b.m)));
        }
        if b.fixed && b.m == 0.0 {
            return Err(SimError::invalid(format!("fixed body `{}` must be massive", b.name)));
        }
    }

    if !bodies.iter().any(Body::is_source) {
        return Err(SimError::invalid("at least one body must have positive mass"));
    }

    // Two bodies sharing a position are rejected up front, whether or not
    // the pair interacts
    for (i, bi) in bodies.iter().enumerate() {
        if let Some(bj) = bodies[(i + 1)..].iter().find(|bj| bj.x == bi.x) {
            return Err(SimError::SingularConfiguration {
                step: 0,
                first: bi.name.clone(),
                second: bj.name.clone(),
            });
        }
    }
    Ok(())
}
