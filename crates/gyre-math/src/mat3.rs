//! 3x3 matrix, column-major, generic over the scalar type.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::scalar::Scalar;
use crate::vec3::Vec3;

/// Column-major 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3<S> {
    pub c0: Vec3<S>,
    pub c1: Vec3<S>,
    pub c2: Vec3<S>,
}

impl<S: Scalar> Mat3<S> {
    /// Build from entries in row-major reading order.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        m00: S, m01: S, m02: S, //
        m10: S, m11: S, m12: S, //
        m20: S, m21: S, m22: S,
    ) -> Self {
        Self {
            c0: Vec3::new(m00, m10, m20),
            c1: Vec3::new(m01, m11, m21),
            c2: Vec3::new(m02, m12, m22),
        }
    }

    #[inline]
    pub fn from_columns(c0: Vec3<S>, c1: Vec3<S>, c2: Vec3<S>) -> Self {
        Self { c0, c1, c2 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_columns(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(Vec3::splat(S::ONE))
    }

    #[inline]
    pub fn from_diagonal(d: Vec3<S>) -> Self {
        Self::new(
            d.x, S::ZERO, S::ZERO, //
            S::ZERO, d.y, S::ZERO, //
            S::ZERO, S::ZERO, d.z,
        )
    }

    /// Rotation about a unit axis by the given angle (Rodrigues form).
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let k = crate::skew(&axis);
        Self::identity() + k * s + k.mul_mat(&k) * (S::ONE - c)
    }

    /// Entry at (row, col). Both must be < 3.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        match col {
            0 => self.c0.get(row),
            1 => self.c1.get(row),
            2 => self.c2.get(row),
            _ => unreachable!("Mat3 column out of range"),
        }
    }

    #[inline]
    pub fn row(&self, r: usize) -> Vec3<S> {
        Vec3::new(self.c0.get(r), self.c1.get(r), self.c2.get(r))
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.row(0), self.row(1), self.row(2))
    }

    pub fn mul_mat(&self, rhs: &Self) -> Self {
        Self::from_columns(*self * rhs.c0, *self * rhs.c1, *self * rhs.c2)
    }

    pub fn determinant(&self) -> S {
        self.c0.dot(self.c1.cross(self.c2))
    }

    /// Closed-form inverse via the adjugate. The matrix must be non-singular;
    /// no check is performed.
    pub fn inverse(&self) -> Self {
        let r0 = self.c1.cross(self.c2);
        let r1 = self.c2.cross(self.c0);
        let r2 = self.c0.cross(self.c1);
        let inv_det = self.c0.dot(r0).recip();
        Self::new(
            r0.x, r0.y, r0.z, //
            r1.x, r1.y, r1.z, //
            r2.x, r2.y, r2.z,
        ) * inv_det
    }

    /// Solve `self * x = b` for x by direct inversion. Small fixed dimension
    /// makes this the right trade; singular input is the caller's problem.
    #[inline]
    pub fn solve(&self, b: Vec3<S>) -> Vec3<S> {
        self.inverse() * b
    }
}

impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, v: Vec3<S>) -> Vec3<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_columns(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_columns(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_columns(-self.c0, -self.c1, -self.c2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_columns(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs)
    }
}

impl<S: Scalar> AddAssign for Mat3<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Mat3<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
