//! Configuration types for loading orbit scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`IntegratorConfig`] – which stepping scheme to use
//! - [`ParametersConfig`] – step size, run length, sampling and constants
//! - [`OutputConfig`]     – where samples go and which body is sampled
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! ```yaml
//! integrator: leapfrog      # optional, only scheme available
//!
//! parameters:
//!   dt: 3600.0              # fixed step size (s)
//!   total_steps: 8760       # or `t_end: 3.1536e7` (steps = floor(t_end / dt))
//!   sample_stride: 10       # optional, default 10
//!   G: 6.67408e-11          # optional, SI value by default
//!   eps2: 0.0               # optional softening (m^2)
//!
//! output:
//!   path: earth.csv         # optional, default samples.csv
//!   sample_body: earth      # optional, default last body
//!
//! bodies:
//!   - name: sun
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 1.989e30
//!     fixed: true
//!   - name: earth
//!     x: [1.496e11, 0.0, 0.0]
//!     v: [0.0, 29780.0, 0.0]
//!     m: 5.972e24
//! ```
//!
//! Validation happens when the config is turned into a runtime scenario.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::params::{DEFAULT_SAMPLE_STRIDE, G_SI};

/// Which integrator the engine uses
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IntegratorConfig {
    #[serde(rename = "leapfrog")] // velocity-Verlet leapfrog, symplectic, fixed step size
    #[default]
    Leapfrog,
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64, // time step size (s)
    #[serde(default)]
    pub total_steps: Option<u64>, // number of steps, exclusive with t_end
    #[serde(default)]
    pub t_end: Option<f64>, // total simulated duration (s), exclusive with total_steps
    #[serde(default = "default_stride")]
    pub sample_stride: u64, // write every n-th step
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub eps2: f64, // softening - 0 makes coincident bodies a hard error
}

/// Where samples are written
#[derive(Deserialize, Debug, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf, // CSV destination
    #[serde(default)]
    pub sample_body: Option<String>, // body whose position is sampled, default the last one
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            sample_body: None,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String, // unique name, used to pick the sampled body
    pub x: [f64; 3], // initial position (m)
    #[serde(default)]
    pub v: [f64; 3], // initial velocity (m/s)
    pub m: f64, // mass (kg), 0 for a test particle
    #[serde(default)]
    pub fixed: bool, // held at `x`, the frame of the simulation
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub integrator: IntegratorConfig,
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn default_stride() -> u64 {
    DEFAULT_SAMPLE_STRIDE
}

fn default_g() -> f64 {
    G_SI
}

fn default_path() -> PathBuf {
    PathBuf::from("samples.csv")
}
