//! Conservation diagnostics for orbit runs.
//!
//! Tracks energy and angular momentum against a baseline to expose
//! integration drift, plus the orbital angle swept around a center body.

use std::f64::consts::PI;

use super::states::{Body, System};
use super::vector::Vec3;

/// Sum of 1/2 m v^2 over all bodies
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Pairwise potential -G m_i m_j / r_ij over every massive pair
/// Coincident pairs are skipped
#[allow(non_snake_case)]
pub fn potential_energy(sys: &System, G: f64) -> f64 {
    let n = sys.bodies.len();
    let mut u = 0.0;
    for i in 0..n {
        let bi = &sys.bodies[i];
        for bj in &sys.bodies[(i + 1)..n] {
            let r = bi.x.distance(bj.x);
            if r > 0.0 {
                u -= G * bi.m * bj.m / r;
            }
        }
    }
    u
}

#[allow(non_snake_case)]
pub fn total_energy(sys: &System, G: f64) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, G)
}

/// Total angular momentum about the origin: sum_i m_i (r_i x v_i)
pub fn angular_momentum(sys: &System) -> Vec3 {
    sys.bodies
        .iter()
        .fold(Vec3::zeros(), |acc, b| acc + b.x.cross(b.v) * b.m)
}

/// Distance of `body` from `center`
pub fn orbital_radius(body: &Body, center: &Body) -> f64 {
    body.x.distance(center.x)
}

/// Baseline conservation quantities to track drift.
#[derive(Debug, Clone)]
pub struct ConservationState {
    pub baseline_energy: f64,
    pub baseline_angular_momentum: Vec3,
}

impl ConservationState {
    #[allow(non_snake_case)]
    pub fn new(sys: &System, G: f64) -> Self {
        Self {
            baseline_energy: total_energy(sys, G),
            baseline_angular_momentum: angular_momentum(sys),
        }
    }
}

/// Conservation errors at the current step.
#[derive(Debug, Clone)]
pub struct ConservationMonitor {
    /// Relative energy error: |E - E0| / |E0|
    pub energy_error: f64,
    /// Absolute angular momentum error: L - L0
    pub angular_momentum_error: Vec3,
}

impl ConservationMonitor {
    #[allow(non_snake_case)]
    pub fn check(baseline: &ConservationState, sys: &System, G: f64) -> Self {
        let energy = total_energy(sys, G);

        // Relative energy error (absolute when the baseline is ~0)
        let energy_error = if baseline.baseline_energy.abs() > 1e-12 {
            (energy - baseline.baseline_energy).abs() / baseline.baseline_energy.abs()
        } else {
            (energy - baseline.baseline_energy).abs()
        };

        Self {
            energy_error,
            angular_momentum_error: angular_momentum(sys) - baseline.baseline_angular_momentum,
        }
    }

    /// Angular momentum error relative to the baseline magnitude
    pub fn relative_angular_momentum_error(&self, baseline: &ConservationState) -> f64 {
        let l0 = baseline.baseline_angular_momentum.norm();
        if l0 > 0.0 {
            self.angular_momentum_error.norm() / l0
        } else {
            self.angular_momentum_error.norm()
        }
    }

    pub fn is_violated(&self, baseline: &ConservationState, energy_tol: f64, ang_momentum_tol: f64) -> bool {
        self.energy_error > energy_tol
            || self.relative_angular_momentum_error(baseline) > ang_momentum_tol
    }
}

/// Accumulates the unwrapped angle swept in the xy-plane around a center.
///
/// Each `update` adds the wrapped difference to the previous polar angle, so
/// steps must be small enough that a body moves less than half a turn
/// between updates.
#[derive(Debug, Clone)]
pub struct AngleTracker {
    last: f64,
    swept: f64,
}

impl AngleTracker {
    pub fn new(body: Vec3, center: Vec3) -> Self {
        Self {
            last: polar_angle(body, center),
            swept: 0.0,
        }
    }

    pub fn update(&mut self, body: Vec3, center: Vec3) -> f64 {
        let theta = polar_angle(body, center);
        let mut d = theta - self.last;
        if d > PI {
            d -= 2.0 * PI;
        } else if d < -PI {
            d += 2.0 * PI;
        }
        self.swept += d;
        self.last = theta;
        self.swept
    }

    /// Signed angle swept so far (radians, counter-clockwise positive)
    pub fn swept(&self) -> f64 {
        self.swept
    }
}

fn polar_angle(body: Vec3, center: Vec3) -> f64 {
    body.dy(center).atan2(body.dx(center))
}
