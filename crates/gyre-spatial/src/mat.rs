//! Block-structured 6x6 spatial matrices.

use core::ops::{Add, AddAssign, Mul, Neg, Sub};

use gyre_math::{Mat3, Scalar};

use crate::vec::SpatialVec;

/// 6x6 matrix stored as four named 3x3 blocks, angular-first:
///
/// ```text
/// | aa  al |
/// | la  ll |
/// ```
///
/// Keeping the blocks named avoids 6x6 index gymnastics and lets the
/// structurally-zero blocks of transforms and inertias stay explicit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialMat<S> {
    pub aa: Mat3<S>,
    pub al: Mat3<S>,
    pub la: Mat3<S>,
    pub ll: Mat3<S>,
}

impl<S: Scalar> SpatialMat<S> {
    #[inline]
    pub fn new(aa: Mat3<S>, al: Mat3<S>, la: Mat3<S>, ll: Mat3<S>) -> Self {
        Self { aa, al, la, ll }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(Mat3::zero(), Mat3::zero(), Mat3::zero(), Mat3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(
            Mat3::identity(),
            Mat3::zero(),
            Mat3::zero(),
            Mat3::identity(),
        )
    }

    /// Entry at (row, col) of the dense 6x6 view. Both must be < 6.
    pub fn get(&self, row: usize, col: usize) -> S {
        match (row < 3, col < 3) {
            (true, true) => self.aa.get(row, col),
            (true, false) => self.al.get(row, col - 3),
            (false, true) => self.la.get(row - 3, col),
            (false, false) => self.ll.get(row - 3, col - 3),
        }
    }

    pub fn transpose(&self) -> Self {
        Self::new(
            self.aa.transpose(),
            self.la.transpose(),
            self.al.transpose(),
            self.ll.transpose(),
        )
    }

    pub fn mul_vec(&self, v: &SpatialVec<S>) -> SpatialVec<S> {
        SpatialVec::new(
            self.aa * v.angular + self.al * v.linear,
            self.la * v.angular + self.ll * v.linear,
        )
    }

    pub fn mul_mat(&self, rhs: &Self) -> Self {
        Self::new(
            self.aa.mul_mat(&rhs.aa) + self.al.mul_mat(&rhs.la),
            self.aa.mul_mat(&rhs.al) + self.al.mul_mat(&rhs.ll),
            self.la.mul_mat(&rhs.aa) + self.ll.mul_mat(&rhs.la),
            self.la.mul_mat(&rhs.al) + self.ll.mul_mat(&rhs.ll),
        )
    }
}

impl<S: Scalar> Add for SpatialMat<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.aa + rhs.aa,
            self.al + rhs.al,
            self.la + rhs.la,
            self.ll + rhs.ll,
        )
    }
}

impl<S: Scalar> Sub for SpatialMat<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.aa - rhs.aa,
            self.al - rhs.al,
            self.la - rhs.la,
            self.ll - rhs.ll,
        )
    }
}

impl<S: Scalar> Neg for SpatialMat<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.aa, -self.al, -self.la, -self.ll)
    }
}

impl<S: Scalar> Mul<S> for SpatialMat<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.aa * rhs, self.al * rhs, self.la * rhs, self.ll * rhs)
    }
}

impl<S: Scalar> Mul<SpatialVec<S>> for SpatialMat<S> {
    type Output = SpatialVec<S>;
    #[inline]
    fn mul(self, v: SpatialVec<S>) -> SpatialVec<S> {
        self.mul_vec(&v)
    }
}

impl<S: Scalar> AddAssign for SpatialMat<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyre_math::Vec3;

    #[test]
    fn identity_fixes_vectors() {
        let v = SpatialVec::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0));
        let out = SpatialMat::<f64>::identity() * v;
        assert_eq!(out, v);
    }

    #[test]
    fn dense_view_matches_blocks() {
        let m = SpatialMat::new(
            Mat3::from_diagonal(Vec3::new(1.0, 2.0, 3.0)),
            Mat3::from_diagonal(Vec3::new(4.0, 5.0, 6.0)),
            Mat3::from_diagonal(Vec3::new(7.0, 8.0, 9.0)),
            Mat3::from_diagonal(Vec3::new(10.0, 11.0, 12.0)),
        );
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 4), 5.0);
        assert_eq!(m.get(4, 1), 8.0);
        assert_eq!(m.get(5, 5), 12.0);
        assert_eq!(m.get(0, 5), 0.0);
    }

    #[test]
    fn block_product_matches_nalgebra() {
        let a = SpatialMat::new(
            Mat3::new(1.0, 2.0, 0.0, -1.0, 0.5, 3.0, 0.0, 1.0, 2.0),
            Mat3::new(0.5, 0.0, 1.0, 2.0, -2.0, 0.0, 1.0, 1.0, 1.0),
            Mat3::new(3.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 3.0),
            Mat3::new(0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0),
        );
        let b = a.transpose();

        let dense_a = nalgebra::Matrix6::from_fn(|r, c| a.get(r, c));
        let dense_b = nalgebra::Matrix6::from_fn(|r, c| b.get(r, c));
        let dense = dense_a * dense_b;

        let ours = a.mul_mat(&b);
        for r in 0..6 {
            for c in 0..6 {
                assert!(
                    (ours.get(r, c) - dense[(r, c)]).abs() < 1e-12,
                    "entry ({r},{c})"
                );
            }
        }
    }
}
