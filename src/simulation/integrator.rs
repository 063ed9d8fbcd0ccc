//! Fixed-step time integrators for the orbit system
//!
//! `Integrator` is the single stepping abstraction ("advance the state by
//! one `dt`"). `Leapfrog` is the velocity-Verlet form that carries the
//! acceleration of each body from one step to the next, so each step costs
//! one force evaluation.

use super::forces::AccelSet;
use super::states::System;
use super::vector::Vec3;
use crate::error::{Result, SimError};

/// Advance a [`System`] by one fixed time step
///
/// Implementations must commit atomically: on error the system is left
/// exactly as it was before the call.
pub trait Integrator {
    fn name(&self) -> &'static str;

    fn advance(&self, sys: &mut System, forces: &AccelSet, dt: f64) -> Result<()>;
}

/// Store the accelerations at the current step in every body
/// Must run once before the first `advance`
pub fn prime_accelerations(sys: &mut System, forces: &AccelSet, dt: f64) -> Result<()> {
    let mut a0 = vec![Vec3::zeros(); sys.bodies.len()];
    forces.accumulate_accels(sys.time(dt), &*sys, &mut a0)?;
    for (b, a) in sys.bodies.iter_mut().zip(a0) {
        b.a = a;
    }
    check_finite(sys)
}

/// Leapfrog in velocity-Verlet form
///
/// ```text
/// x_n+1 = x_n + dt v_n + dt^2/2 a_n
/// a_n+1 = a(x_n+1)
/// v_n+1 = v_n + dt/2 (a_n + a_n+1)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Integrator for Leapfrog {
    fn name(&self) -> &'static str {
        "leapfrog"
    }

    fn advance(&self, sys: &mut System, forces: &AccelSet, dt: f64) -> Result<()> {
        let n = sys.bodies.len();
        if n == 0 { // no bodies, only the clock moves
            sys.step += 1;
            return Ok(());
        }

        let half_dt = 0.5 * dt;
        let half_dt2 = 0.5 * dt * dt;

        // New generation is built on a copy; `sys` stays the old generation
        // until everything below succeeded
        let mut next = sys.clone();

        // Drift: x_n+1 = x_n + dt v_n + dt^2/2 a_n
        for b in next.bodies.iter_mut().filter(|b| !b.fixed) {
            b.x = b.x + b.v * dt + b.a * half_dt2;
        }

        next.step += 1;

        // a_n+1 from the complete x_n+1 snapshot
        let mut a_new = vec![Vec3::zeros(); n];
        forces.accumulate_accels(next.time(dt), &next, &mut a_new)?;

        // Kick with the averaged acceleration: v_n+1 = v_n + dt/2 (a_n + a_n+1)
        for (b, a) in next.bodies.iter_mut().zip(a_new) {
            if b.fixed {
                b.v = Vec3::zeros();
                b.a = Vec3::zeros();
                continue;
            }
            b.v = b.v + (b.a + a) * half_dt;
            b.a = a;
        }

        check_finite(&next)?;
        *sys = next;
        Ok(())
    }
}

fn check_finite(sys: &System) -> Result<()> {
    match sys.bodies.iter().find(|b| !(b.x.is_finite() && b.v.is_finite() && b.a.is_finite())) {
        Some(b) => Err(SimError::NonFiniteState {
            step: sys.step,
            body: b.name.clone(),
        }),
        None => Ok(()),
    }
}
