//! 6D spatial vectors.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use gyre_math::{Scalar, Vec3};

/// 6D spatial vector — either a motion vector (twist) or force vector
/// (wrench). Angular part first, linear part second; the same ordering is
/// used by every 6x6 block matrix in this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialVec<S> {
    pub angular: Vec3<S>,
    pub linear: Vec3<S>,
}

impl<S: Scalar> SpatialVec<S> {
    #[inline]
    pub fn new(angular: Vec3<S>, linear: Vec3<S>) -> Self {
        Self { angular, linear }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(Vec3::zero(), Vec3::zero())
    }

    /// Component by index, angular first. Index must be < 6.
    #[inline]
    pub fn get(self, i: usize) -> S {
        if i < 3 {
            self.angular.get(i)
        } else {
            self.linear.get(i - 3)
        }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.angular.dot(rhs.angular) + self.linear.dot(rhs.linear)
    }

    /// Spatial cross product for motion vectors, v ×ₘ w.
    pub fn cross_motion(self, rhs: Self) -> Self {
        Self::new(
            self.angular.cross(rhs.angular),
            self.angular.cross(rhs.linear) + self.linear.cross(rhs.angular),
        )
    }

    /// Spatial cross product for force vectors, v ×* f.
    pub fn cross_force(self, rhs: Self) -> Self {
        Self::new(
            self.angular.cross(rhs.angular) + self.linear.cross(rhs.linear),
            self.angular.cross(rhs.linear),
        )
    }
}

impl<S: Scalar> Add for SpatialVec<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.angular + rhs.angular, self.linear + rhs.linear)
    }
}

impl<S: Scalar> Sub for SpatialVec<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.angular - rhs.angular, self.linear - rhs.linear)
    }
}

impl<S: Scalar> Neg for SpatialVec<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.angular, -self.linear)
    }
}

impl<S: Scalar> Mul<S> for SpatialVec<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.angular * rhs, self.linear * rhs)
    }
}

impl<S: Scalar> AddAssign for SpatialVec<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for SpatialVec<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
