//! Fixed-size 3-vector used for NED and ECEF directions.

use core::ops::{Add, Index, IndexMut, Mul, Neg, Sub};
use core::slice::SliceIndex;

use crate::math::sqrt;
use crate::{Error, Result};

/// A 3-component vector of `f64`.
///
/// In the local horizon frame the components are North, East, Down.
#[derive(PartialEq, Default, Copy, Clone, Debug)]
pub struct Vector3(pub [f64; 3]);

impl<I: SliceIndex<[f64]>> Index<I> for Vector3 {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        &self.0[index]
    }
}

impl<I: SliceIndex<[f64]>> IndexMut<I> for Vector3 {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0.map(|x| x * rhs))
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|x| -x))
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self([self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2]])
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Self(components)
    }
}

impl Vector3 {
    /// Creates a vector from its three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// Returns the components as an array.
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        self.0
    }

    /// Scalar product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(x, y)| x * y)
            .fold(0.0, |x, y| x + y)
    }

    /// Vector product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }

    /// Euclidean length.
    #[must_use]
    pub fn norm(&self) -> f64 {
        sqrt(self.dot(self))
    }

    /// Scale to unit length.
    ///
    /// # Errors
    /// Returns `InvalidOrientation` for a zero-length or non-finite vector.
    pub fn normalized(&self) -> Result<Self> {
        if self.0.iter().any(|c| !c.is_finite()) {
            return Err(Error::invalid_orientation("vector has non-finite components"));
        }
        let norm = self.norm();
        if norm <= f64::MIN_POSITIVE {
            return Err(Error::invalid_orientation("vector has zero length"));
        }
        Ok(*self * (1.0 / norm))
    }
}
