//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed step size and number of steps,
//! - output sample stride,
//! - gravitational constant and softening (`G`, `eps2`)

use crate::error::{Result, SimError};

/// Gravitational constant in SI units
pub const G_SI: f64 = 6.67408e-11;

/// Default number of steps between output samples
pub const DEFAULT_SAMPLE_STRIDE: u64 = 10;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // step size (s)
    pub total_steps: u64, // number of steps to advance
    pub sample_stride: u64, // steps between samples
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 disables it
}

impl Parameters {
    /// SI parameters with the default stride and no softening
    pub fn new(dt: f64, total_steps: u64) -> Self {
        Self {
            dt,
            total_steps,
            sample_stride: DEFAULT_SAMPLE_STRIDE,
            G: G_SI,
            eps2: 0.0,
        }
    }

    /// Reject settings the integrator cannot run with
    pub fn validate(&self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::invalid(format!("dt must be positive, got {}", self.dt)));
        }
        if self.total_steps == 0 {
            return Err(SimError::invalid("run must cover at least one step"));
        }
        if self.sample_stride == 0 {
            return Err(SimError::invalid("sample_stride must be at least 1"));
        }
        if !(self.G.is_finite() && self.G > 0.0) {
            return Err(SimError::invalid(format!("G must be positive, got {}", self.G)));
        }
        if !(self.eps2.is_finite() && self.eps2 >= 0.0) {
            return Err(SimError::invalid(format!("eps2 must be non-negative, got {}", self.eps2)));
        }
        Ok(())
    }

    /// Simulated duration covered by the run
    pub fn duration(&self) -> f64 {
        self.total_steps as f64 * self.dt
    }
}

/// Number of whole `dt` steps in `t_end`
///
/// A quotient within rounding of an integer counts as that integer, so
/// `t_end = 0.3, dt = 0.1` gives 3 steps rather than 2.
pub fn steps_for_duration(t_end: f64, dt: f64) -> Result<u64> {
    if !(t_end.is_finite() && t_end > 0.0) {
        return Err(SimError::invalid(format!("t_end must be positive, got {t_end}")));
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimError::invalid(format!("dt must be positive, got {dt}")));
    }
    let q = t_end / dt;
    let nearest = q.round();
    let steps = if (q - nearest).abs() <= STEP_ROUNDING_EPS * nearest.max(1.0) {
        nearest
    } else {
        q.floor()
    };
    // u64::MAX as f64 rounds up to 2^64, which does not fit
    if steps >= u64::MAX as f64 {
        return Err(SimError::invalid(format!("t_end / dt = {q} steps does not fit in u64")));
    }
    Ok(steps as u64)
}

/// Relative tolerance for treating `t_end / dt` as a whole number of steps
const STEP_ROUNDING_EPS: f64 = 1e-9;
