//! 4x4 matrix for homogeneous transforms.

use core::ops::{Add, Mul, Neg, Sub};

use crate::mat3::Mat3;
use crate::scalar::Scalar;
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// Column-major 4x4 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4<S> {
    pub c0: Vec4<S>,
    pub c1: Vec4<S>,
    pub c2: Vec4<S>,
    pub c3: Vec4<S>,
}

impl<S: Scalar> Mat4<S> {
    #[inline]
    pub fn from_columns(c0: Vec4<S>, c1: Vec4<S>, c2: Vec4<S>, c3: Vec4<S>) -> Self {
        Self { c0, c1, c2, c3 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_columns(Vec4::zero(), Vec4::zero(), Vec4::zero(), Vec4::zero())
    }

    pub fn identity() -> Self {
        Self::from_columns(
            Vec4::new(S::ONE, S::ZERO, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, S::ONE, S::ZERO, S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, S::ONE, S::ZERO),
            Vec4::new(S::ZERO, S::ZERO, S::ZERO, S::ONE),
        )
    }

    /// Homogeneous rigid transform: rotation in the top-left block,
    /// translation in the top-right column, bottom row [0 0 0 1].
    pub fn from_rotation_translation(rot: &Mat3<S>, t: Vec3<S>) -> Self {
        Self::from_columns(
            Vec4::new(rot.c0.x, rot.c0.y, rot.c0.z, S::ZERO),
            Vec4::new(rot.c1.x, rot.c1.y, rot.c1.z, S::ZERO),
            Vec4::new(rot.c2.x, rot.c2.y, rot.c2.z, S::ZERO),
            Vec4::new(t.x, t.y, t.z, S::ONE),
        )
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        match col {
            0 => self.c0.get(row),
            1 => self.c1.get(row),
            2 => self.c2.get(row),
            3 => self.c3.get(row),
            _ => unreachable!("Mat4 column out of range"),
        }
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(
            Vec4::new(self.c0.x, self.c1.x, self.c2.x, self.c3.x),
            Vec4::new(self.c0.y, self.c1.y, self.c2.y, self.c3.y),
            Vec4::new(self.c0.z, self.c1.z, self.c2.z, self.c3.z),
            Vec4::new(self.c0.w, self.c1.w, self.c2.w, self.c3.w),
        )
    }

    pub fn mul_mat(&self, rhs: &Self) -> Self {
        Self::from_columns(*self * rhs.c0, *self * rhs.c1, *self * rhs.c2, *self * rhs.c3)
    }
}

impl<S: Scalar> Mul<Vec4<S>> for Mat4<S> {
    type Output = Vec4<S>;
    #[inline]
    fn mul(self, v: Vec4<S>) -> Vec4<S> {
        self.c0 * v.x + self.c1 * v.y + self.c2 * v.z + self.c3 * v.w
    }
}

impl<S: Scalar> Add for Mat4<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_columns(
            self.c0 + rhs.c0,
            self.c1 + rhs.c1,
            self.c2 + rhs.c2,
            self.c3 + rhs.c3,
        )
    }
}

impl<S: Scalar> Sub for Mat4<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_columns(
            self.c0 - rhs.c0,
            self.c1 - rhs.c1,
            self.c2 - rhs.c2,
            self.c3 - rhs.c3,
        )
    }
}

impl<S: Scalar> Neg for Mat4<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_columns(-self.c0, -self.c1, -self.c2, -self.c3)
    }
}

impl<S: Scalar> Mul<S> for Mat4<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_columns(self.c0 * rhs, self.c1 * rhs, self.c2 * rhs, self.c3 * rhs)
    }
}
