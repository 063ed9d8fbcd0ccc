//! Immutable 3D vector used for positions, velocities and accelerations
//!
//! `Vec3` wraps an `nalgebra` vector so the rest of the crate only sees the
//! operations the integrator needs. Every operation returns a new value;
//! the only fallible one is division by a scalar

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector3;

use crate::error::{Result, SimError};

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3(NVec3);

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(NVec3::new(x, y, z))
    }

    pub fn zeros() -> Self {
        Self(NVec3::zeros())
    }

    pub fn x(self) -> f64 {
        self.0.x
    }

    pub fn y(self) -> f64 {
        self.0.y
    }

    pub fn z(self) -> f64 {
        self.0.z
    }

    /// Component-wise sum
    pub fn add(self, b: Vec3) -> Vec3 {
        Self(self.0 + b.0)
    }

    /// Component-wise difference `self - b`
    pub fn sub(self, b: Vec3) -> Vec3 {
        Self(self.0 - b.0)
    }

    pub fn scale(self, k: f64) -> Vec3 {
        Self(self.0 * k)
    }

    /// Divide every component by `k`
    /// Fails instead of producing inf/NaN when `k == 0`
    pub fn div(self, k: f64) -> Result<Vec3> {
        if k == 0.0 {
            return Err(SimError::DivisionByZero);
        }
        Ok(Self(self.0 / k))
    }

    pub fn dot(self, b: Vec3) -> f64 {
        self.0.dot(&b.0)
    }

    /// Right-handed cross product `self x b`
    pub fn cross(self, b: Vec3) -> Vec3 {
        Self(self.0.cross(&b.0))
    }

    pub fn norm(self) -> f64 {
        self.0.norm()
    }

    pub fn norm_squared(self) -> f64 {
        self.0.norm_squared()
    }

    /// Euclidean distance between `self` and `b`
    pub fn distance(self, b: Vec3) -> f64 {
        self.sub(b).norm()
    }

    pub fn dx(self, b: Vec3) -> f64 {
        self.0.x - b.0.x
    }

    pub fn dy(self, b: Vec3) -> f64 {
        self.0.y - b.0.y
    }

    pub fn dz(self, b: Vec3) -> f64 {
        self.0.z - b.0.z
    }

    pub fn is_finite(self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    pub fn as_array(self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(c: [f64; 3]) -> Self {
        Vec3::new(c[0], c[1], c[2])
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::sub(self, rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Self(-self.0)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, k: f64) -> Vec3 {
        self.scale(k)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v.scale(self)
    }
}
