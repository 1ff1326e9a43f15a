//! The 6x6 spatial inertia tensor.

use core::ops::{Add, AddAssign};

use gyre_math::rot::{rot_symmetric_eaet, SymMat3};
use gyre_math::{skew, Mat3, Scalar, Vec3};

use crate::mat::SpatialMat;
use crate::transform::SpatialTransform;
use crate::vec::SpatialVec;

/// Spatial inertia of a rigid body, the 6x6 tensor
///
/// ```text
/// | I      [h]x |        h = m·c (first moment of mass)
/// | [h]xᵀ  m·E  |
/// ```
///
/// stored through its structured blocks: the rotational inertia `I` about
/// the reference-frame origin (the given tensor is used as-is, no
/// parallel-axis shift is applied), the first moment `h`, and the mass `m`.
/// Symmetry and the fixed zero pattern of the dense form hold by
/// construction across every mutation.
///
/// Mass must stay positive for the tensor to remain physically meaningful;
/// like every precondition in this crate it is debug-asserted only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaMatrix<S> {
    rot: Mat3<S>,
    mom: Vec3<S>,
    mass: S,
}

impl<S: Scalar> InertiaMatrix<S> {
    /// The empty tensor: only the structural zero pattern, every physical
    /// quantity zero. Useful as an accumulator seed.
    #[inline]
    pub fn zero() -> Self {
        Self {
            rot: Mat3::zero(),
            mom: Vec3::zero(),
            mass: S::ZERO,
        }
    }

    /// Build from mass, center of mass, and rotational inertia.
    ///
    /// `com` and `tensor` must be expressed in the same reference frame;
    /// `tensor` is taken about that frame's origin, not about the COM.
    pub fn new(mass: S, com: Vec3<S>, tensor: Mat3<S>) -> Self {
        debug_assert!(mass > S::ZERO, "inertia requires positive mass");
        Self {
            rot: tensor,
            mom: com * mass,
            mass,
        }
    }

    /// Reset all structured blocks from the given inertia properties.
    /// Same contract as [`Self::new`].
    pub fn fill(&mut self, mass: S, com: Vec3<S>, tensor: Mat3<S>) {
        *self = Self::new(mass, com, tensor);
    }

    /// Inertia of a point mass at the given position; the rotational block
    /// is the parallel-axis term `m·[c]x·[c]xᵀ` alone.
    pub fn point_mass(mass: S, pos: Vec3<S>) -> Self {
        let sx = skew(&pos);
        Self {
            rot: sx.mul_mat(&sx.transpose()) * mass,
            mom: pos * mass,
            mass,
        }
    }

    /// Inertia of a uniform rod along the Y axis, centered at the origin.
    pub fn rod(mass: S, length: S) -> Self {
        let i = mass * length * length / S::from_f64(12.0);
        Self {
            rot: Mat3::from_diagonal(Vec3::new(i, S::ZERO, i)),
            mom: Vec3::zero(),
            mass,
        }
    }

    /// Inertia of a uniform sphere centered at the origin.
    pub fn sphere(mass: S, radius: S) -> Self {
        let i = S::from_f64(2.0 / 5.0) * mass * radius * radius;
        Self {
            rot: Mat3::from_diagonal(Vec3::splat(i)),
            mom: Vec3::zero(),
            mass,
        }
    }

    #[inline]
    pub fn mass(&self) -> S {
        self.mass
    }

    /// Center of mass, recovered as first-moment over mass.
    #[inline]
    pub fn com(&self) -> Vec3<S> {
        self.mom / self.mass
    }

    /// The rotational-inertia block (classical 3x3 inertia tensor, about
    /// the reference-frame origin).
    #[inline]
    pub fn rotational_inertia(&self) -> Mat3<S> {
        self.rot
    }

    /// Rescale the tensor for a new total mass, leaving the center of mass
    /// untouched. Corresponds to changing the body's density while keeping
    /// its geometry, so the moments of inertia scale along and positive
    /// definiteness is preserved.
    pub fn change_mass(&mut self, new_mass: S) {
        debug_assert!(new_mass > S::ZERO, "inertia requires positive mass");
        let scale = new_mass / self.mass;
        self.rot = self.rot * scale;
        self.mom = self.mom * scale;
        self.mass = new_mass;
    }

    /// Move the center of mass, correcting the rotational-inertia block so
    /// the tensor stays consistent:
    ///
    /// ```text
    /// I' = I - m·[c]x·[c]xᵀ + m·[c']x·[c']xᵀ
    /// ```
    ///
    /// The correction consumes the first moment both before and after the
    /// move, so the old value is read out before being overwritten.
    /// Mass is unchanged.
    pub fn change_com(&mut self, new_com: Vec3<S>) {
        let new_mom = new_com * self.mass;
        let sx_new = skew(&new_mom);
        let sx_old = skew(&self.mom);
        self.rot += (sx_new.mul_mat(&sx_new.transpose())
            - sx_old.mul_mat(&sx_old.transpose()))
            * self.mass.recip();
        self.mom = new_mom;
    }

    /// Overwrite the rotational-inertia block. No consistency with mass or
    /// center of mass is implied.
    #[inline]
    pub fn change_rotational_inertia(&mut self, tensor: Mat3<S>) {
        self.rot = tensor;
    }

    /// Materialize the dense 6x6 form, fixed zeros included.
    pub fn to_matrix(&self) -> SpatialMat<S> {
        let sx = skew(&self.mom);
        SpatialMat::new(
            self.rot,
            sx,
            sx.transpose(),
            Mat3::from_diagonal(Vec3::splat(self.mass)),
        )
    }

    /// Re-derive the structured blocks from a 6x6 matrix that is assumed to
    /// be an inertia. The angular block is copied, the first moment is read
    /// from the canonical off-diagonal entries, and the mass from the
    /// linear diagonal — the fixed symmetric pattern is re-imposed rather
    /// than trusting every entry of the input. Nothing prevents passing a
    /// matrix that is not an inertia; garbage in, garbage out.
    pub fn from_matrix(m: &SpatialMat<S>) -> Self {
        Self {
            rot: m.aa,
            mom: Vec3::new(m.al.get(2, 1), m.al.get(0, 2), m.al.get(1, 0)),
            mass: m.ll.get(0, 0),
        }
    }

    /// Accumulate another inertia expressed in the same frame; used to
    /// combine rigid sub-bodies into a composite.
    pub fn accumulate(&mut self, other: &Self) {
        self.rot += other.rot;
        self.mom += other.mom;
        self.mass += other.mass;
    }

    /// Accumulate from a 6x6 matrix assumed to be an inertia, with the same
    /// canonical-entry extraction as [`Self::from_matrix`].
    pub fn add_matrix(&mut self, m: &SpatialMat<S>) {
        self.rot += m.aa;
        self.mom += Vec3::new(m.al.get(2, 1), m.al.get(0, 2), m.al.get(1, 0));
        self.mass += m.ll.get(0, 0);
    }

    /// The product `I · v`, computed blockwise: maps a motion vector to the
    /// corresponding momentum (or a test acceleration to a force).
    pub fn mul_vec(&self, v: &SpatialVec<S>) -> SpatialVec<S> {
        SpatialVec::new(
            self.rot * v.angular + self.mom.cross(v.linear),
            v.linear * self.mass - self.mom.cross(v.angular),
        )
    }

    /// Re-express the inertia in another frame: with `self` expressed in
    /// frame B and `x` the pose of B in A, returns the inertia expressed
    /// in A. Equivalent to the dense congruence `X* · I · X*ᵀ` with the
    /// force-form transform matrix, computed structurally: the symmetric
    /// congruence kernel rotates the 3x3 block, then the origin shift goes
    /// through [`Self::change_com`].
    pub fn transformed(&self, x: &SpatialTransform<S>) -> Self {
        let mut out = Self {
            rot: rot_symmetric_eaet(&x.rot, &SymMat3::from_mat3(&self.rot)).to_mat3(),
            mom: x.rot * self.mom,
            mass: self.mass,
        };
        let new_com = out.com() + x.pos;
        out.change_com(new_com);
        out
    }
}

impl<S: Scalar> Default for InertiaMatrix<S> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: Scalar> Add for InertiaMatrix<S> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self.accumulate(&rhs);
        self
    }
}

impl<S: Scalar> AddAssign for InertiaMatrix<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.accumulate(&rhs);
    }
}
