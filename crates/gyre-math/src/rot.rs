//! Closed-form congruence rotation kernels, B = E·A·Eᵗ.
//!
//! Support code for frame changes of 3x3 inertia blocks. The factored
//! multiply-add sequences below replace the two general matrix products of
//! the naive evaluation and are exact (not approximate) for orthonormal E;
//! the identities are documented in the appendix of Featherstone's
//! "Rigid Body Dynamics Algorithms".

use crate::mat3::Mat3;
use crate::scalar::Scalar;

/// The six distinct coefficients of a symmetric 3x3 matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymMat3<S> {
    pub xx: S,
    pub xy: S,
    pub xz: S,
    pub yy: S,
    pub yz: S,
    pub zz: S,
}

impl<S: Scalar> SymMat3<S> {
    #[inline]
    pub fn new(xx: S, xy: S, xz: S, yy: S, yz: S, zz: S) -> Self {
        Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO, S::ZERO, S::ZERO)
    }

    /// Read the upper triangle; the lower triangle is ignored.
    #[inline]
    pub fn from_mat3(m: &Mat3<S>) -> Self {
        Self::new(
            m.get(0, 0),
            m.get(0, 1),
            m.get(0, 2),
            m.get(1, 1),
            m.get(1, 2),
            m.get(2, 2),
        )
    }

    pub fn to_mat3(&self) -> Mat3<S> {
        Mat3::new(
            self.xx, self.xy, self.xz, //
            self.xy, self.yy, self.yz, //
            self.xz, self.yz, self.zz,
        )
    }
}

/// B = E·A·Eᵗ for symmetric A, touching only the six independent
/// coefficients. E must be orthonormal; not checked.
pub fn rot_symmetric_eaet<S: Scalar>(e: &Mat3<S>, a: &SymMat3<S>) -> SymMat3<S> {
    let (exx, exy) = (e.get(0, 0), e.get(0, 1));
    let (eyx, eyy, eyz) = (e.get(1, 0), e.get(1, 1), e.get(1, 2));
    let (ezx, ezy, ezz) = (e.get(2, 0), e.get(2, 1), e.get(2, 2));

    // Trace-preserving decomposition: work with L = A - A.zz*I plus the
    // axial part, so only two rows of intermediates are needed.
    let lxx = a.xx - a.zz;
    let lxy = a.xy;
    let lyy = a.yy - a.zz;
    let lzx = a.xz + a.xz;
    let lzy = a.yz + a.yz;

    let yxx = eyx * lxx + eyy * lxy + eyz * lzx;
    let yxy = eyx * lxy + eyy * lyy + eyz * lzy;
    let yyx = ezx * lxx + ezy * lxy + ezz * lzx;
    let yyy = ezx * lxy + ezy * lyy + ezz * lzy;

    let v1 = -a.yz;
    let v2 = a.xz;
    let evx = exx * v1 + exy * v2;
    let evy = eyx * v1 + eyy * v2;
    let evz = ezx * v1 + ezy * v2;

    let bxy = yxx * exx + yxy * exy + evz;
    let bxz = yyx * exx + yyy * exy - evy;
    let byz = yyx * eyx + yyy * eyy + evx;

    let zyy = yxx * eyx + yxy * eyy;
    let zzz = yyx * ezx + yyy * ezy;
    let bxx = lxx + lyy - zyy - zzz + a.zz;
    let byy = zyy + a.zz;
    let bzz = zzz + a.zz;

    SymMat3::new(bxx, bxy, bxz, byy, byz, bzz)
}

/// B = E·A·Eᵗ for arbitrary A. E must be orthonormal; not checked.
pub fn rot_eaet<S: Scalar>(e: &Mat3<S>, a: &Mat3<S>) -> Mat3<S> {
    let (exx, exy, exz) = (e.get(0, 0), e.get(0, 1), e.get(0, 2));
    let (eyx, eyy, eyz) = (e.get(1, 0), e.get(1, 1), e.get(1, 2));
    let (ezx, ezy, ezz) = (e.get(2, 0), e.get(2, 1), e.get(2, 2));

    let (axx, axy, axz) = (a.get(0, 0), a.get(0, 1), a.get(0, 2));
    let (ayx, ayy, ayz) = (a.get(1, 0), a.get(1, 1), a.get(1, 2));
    let (azx, azy, azz) = (a.get(2, 0), a.get(2, 1), a.get(2, 2));

    let lxx = axx - azz;
    let lxy = axy;
    let lyx = ayx;
    let lyy = ayy - azz;
    let lzx = azx + axz;
    let lzy = azy + ayz;

    let v1 = -ayz;
    let v2 = axz;
    let evx = exx * v1 + exy * v2;
    let evy = eyx * v1 + eyy * v2;
    let evz = ezx * v1 + ezy * v2;

    let yxx = exx * lxx + exy * lyx + exz * lzx;
    let yxy = exx * lxy + exy * lyy + exz * lzy;
    let yyx = eyx * lxx + eyy * lyx + eyz * lzx;
    let yyy = eyx * lxy + eyy * lyy + eyz * lzy;
    let yzx = ezx * lxx + ezy * lyx + ezz * lzx;
    let yzy = ezx * lxy + ezy * lyy + ezz * lzy;

    let bxx = yxx * exx + yxy * exy + azz;
    let byy = yyx * eyx + yyy * eyy + azz;
    let bzz = yzx * ezx + yzy * ezy + azz;

    let bxy = yxx * eyx + yxy * eyy - evz;
    let byx = yyx * exx + yyy * exy + evz;
    let bxz = yxx * ezx + yxy * ezy + evy;
    let bzx = yzx * exx + yzy * exy - evy;
    let byz = yyx * ezx + yyy * ezy - evx;
    let bzy = yzx * eyx + yzy * eyy + evx;

    Mat3::new(
        bxx, bxy, bxz, //
        byx, byy, byz, //
        bzx, bzy, bzz,
    )
}
