//! Core state types for the orbit simulation.
//!
//! - `Body`   one gravitating (or test) body with its current kinematic state
//! - `System` the ordered list of bodies and the logical step counter
//!
//! Simulated time is never stored; it is always `step * dt`.

use super::vector::Vec3;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub name: String,
    pub x: Vec3, // position (m)
    pub v: Vec3, // velocity (m/s)
    pub a: Vec3, // acceleration at the current step (m/s^2)
    pub m: f64, // mass (kg), 0 for a test particle
    pub fixed: bool, // held in place, frame origin of the simulation
}

impl Body {
    /// A free body with zero initial acceleration
    pub fn new(name: impl Into<String>, x: Vec3, v: Vec3, m: f64) -> Self {
        Self {
            name: name.into(),
            x,
            v,
            a: Vec3::zeros(),
            m,
            fixed: false,
        }
    }

    /// A body held at `x` with zero velocity and acceleration
    pub fn fixed(name: impl Into<String>, x: Vec3, m: f64) -> Self {
        Self {
            fixed: true,
            ..Self::new(name, x, Vec3::zeros(), m)
        }
    }

    /// Massless bodies feel gravity but never pull on anything
    pub fn is_source(&self) -> bool {
        self.m > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub step: u64, // logical step counter
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, step: 0 }
    }

    /// Simulated time for the current step
    pub fn time(&self, dt: f64) -> f64 {
        self.step as f64 * dt
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }
}
