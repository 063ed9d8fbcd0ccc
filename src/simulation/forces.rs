//! Force / acceleration contributors for the orbit integrator
//!
//! Defines the acceleration trait, the set that sums contributions per
//! body, and direct Newtonian gravity over massive sources

use crate::error::{Result, SimError};
use crate::simulation::states::System;
use crate::simulation::vector::Vec3;

/// Collection of acceleration terms (gravity, drag, etc)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - fixed bodies always end up with zero acceleration
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [Vec3]) -> Result<()> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = Vec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        for (a, b) in out.iter_mut().zip(sys.bodies.iter()) {
            if b.fixed {
                *a = Vec3::zeros();
            }
        }
        Ok(())
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [Vec3]) -> Result<()>;
}

/// Acceleration on a body at `xi` due to a source of mass `mj` at `xj`:
/// `-G * mj * (xi - xj) / (|xi - xj|^2 + eps2)^(3/2)`
///
/// Returns `None` when the softened separation is exactly zero.
#[allow(non_snake_case)]
pub fn pairwise_accel(xi: Vec3, xj: Vec3, mj: f64, G: f64, eps2: f64) -> Option<Vec3> {
    let r = xi.sub(xj);
    let d2 = r.norm_squared() + eps2;
    if d2 == 0.0 {
        return None;
    }
    let inv_r = d2.sqrt().recip();
    let inv_r3 = inv_r * inv_r * inv_r;
    Some(r.scale(-G * mj * inv_r3))
}

/// Newtonian gravity, direct sum over massive sources
///
/// Unlike a symmetric pair loop, every non-fixed body `i` sums pulls from
/// every other body `j` with `m_j > 0`. A test particle (`m == 0`) is
/// therefore pulled but never pulls, and a fixed body is never updated.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 = exact inverse square
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [Vec3]) -> Result<()> {
        for (i, bi) in sys.bodies.iter().enumerate() {
            if bi.fixed {
                continue;
            }
            for (j, bj) in sys.bodies.iter().enumerate() {
                if i == j || !bj.is_source() {
                    continue;
                }
                let a = pairwise_accel(bi.x, bj.x, bj.m, self.G, self.eps2).ok_or_else(|| {
                    SimError::SingularConfiguration {
                        step: sys.step,
                        first: bi.name.clone(),
                        second: bj.name.clone(),
                    }
                })?;
                out[i] = out[i] + a;
            }
        }
        Ok(())
    }
}
