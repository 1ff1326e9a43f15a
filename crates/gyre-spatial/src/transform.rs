//! Compact Plücker coordinate transforms.

use gyre_math::{skew, Mat3, Mat4, Scalar, Vec3};

use crate::mat::SpatialMat;
use crate::vec::SpatialVec;

/// Rigid coordinate transform between two frames A and B, stored compactly
/// as a rotation and a translation instead of a 6x6 matrix.
///
/// `rot` is the orientation of frame B expressed in A; `pos` is the origin
/// of B expressed in A. The `apply_*` methods map quantities expressed in B
/// to A, the `inv_apply_*` methods go the other way. Neither orthonormality
/// of `rot` nor any other property is validated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialTransform<S> {
    /// Orientation of frame B expressed in frame A.
    pub rot: Mat3<S>,
    /// Origin of frame B expressed in frame A.
    pub pos: Vec3<S>,
}

impl<S: Scalar> SpatialTransform<S> {
    #[inline]
    pub fn new(rot: Mat3<S>, pos: Vec3<S>) -> Self {
        Self { rot, pos }
    }

    /// Identity transform; the neutral element for composition accumulators.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Mat3::identity(), Vec3::zero())
    }

    /// Pure translation.
    #[inline]
    pub fn from_translation(pos: Vec3<S>) -> Self {
        Self::new(Mat3::identity(), pos)
    }

    /// Pure rotation about the X axis.
    pub fn rot_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Mat3::new(
                S::ONE, S::ZERO, S::ZERO, //
                S::ZERO, c, -s, //
                S::ZERO, s, c,
            ),
            Vec3::zero(),
        )
    }

    /// Pure rotation about the Y axis.
    pub fn rot_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Mat3::new(
                c, S::ZERO, s, //
                S::ZERO, S::ONE, S::ZERO, //
                -s, S::ZERO, c,
            ),
            Vec3::zero(),
        )
    }

    /// Pure rotation about the Z axis.
    pub fn rot_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Mat3::new(
                c, -s, S::ZERO, //
                s, c, S::ZERO, //
                S::ZERO, S::ZERO, S::ONE,
            ),
            Vec3::zero(),
        )
    }

    /// Pure rotation about an arbitrary unit axis.
    pub fn from_axis_angle(axis: Vec3<S>, angle: S) -> Self {
        Self::new(Mat3::from_axis_angle(axis, angle), Vec3::zero())
    }

    /// Transform a motion vector expressed in B into A coordinates.
    pub fn apply_motion(&self, v: &SpatialVec<S>) -> SpatialVec<S> {
        let angular = self.rot * v.angular;
        let linear = self.pos.cross(angular) + self.rot * v.linear;
        SpatialVec::new(angular, linear)
    }

    /// Transform a motion vector expressed in A into B coordinates.
    pub fn inv_apply_motion(&self, v: &SpatialVec<S>) -> SpatialVec<S> {
        let rt = self.rot.transpose();
        SpatialVec::new(
            rt * v.angular,
            rt * ((-self.pos).cross(v.angular) + v.linear),
        )
    }

    /// Transform a force vector expressed in B into A coordinates.
    pub fn apply_force(&self, f: &SpatialVec<S>) -> SpatialVec<S> {
        let linear = self.rot * f.linear;
        let angular = self.pos.cross(linear) + self.rot * f.angular;
        SpatialVec::new(angular, linear)
    }

    /// Transform a force vector expressed in A into B coordinates.
    pub fn inv_apply_force(&self, f: &SpatialVec<S>) -> SpatialVec<S> {
        let rt = self.rot.transpose();
        SpatialVec::new(
            rt * ((-self.pos).cross(f.linear) + f.angular),
            rt * f.linear,
        )
    }

    /// Transform a point expressed in B into A coordinates.
    #[inline]
    pub fn apply_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.rot * p + self.pos
    }

    /// Transform a point expressed in A into B coordinates.
    #[inline]
    pub fn inv_apply_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.rot.transpose() * (p - self.pos)
    }

    /// The 6x6 matrix equivalent to [`Self::apply_motion`]:
    ///
    /// ```text
    /// | R       0 |
    /// | [t]x·R  R |
    /// ```
    pub fn to_motion_matrix(&self) -> SpatialMat<S> {
        let tx_r = skew(&self.pos).mul_mat(&self.rot);
        SpatialMat::new(self.rot, Mat3::zero(), tx_r, self.rot)
    }

    /// The 6x6 matrix equivalent to [`Self::apply_force`]; the dual of the
    /// motion form, with the cross block moved above the diagonal:
    ///
    /// ```text
    /// | R  [t]x·R |
    /// | 0       R |
    /// ```
    pub fn to_force_matrix(&self) -> SpatialMat<S> {
        let tx_r = skew(&self.pos).mul_mat(&self.rot);
        SpatialMat::new(self.rot, tx_r, Mat3::zero(), self.rot)
    }

    /// The 4x4 homogeneous matrix equivalent to [`Self::apply_point`].
    pub fn to_homogeneous(&self) -> Mat4<S> {
        Mat4::from_rotation_translation(&self.rot, self.pos)
    }

    /// Composition: with `self` the pose of B in A and `other` the pose of
    /// C in B, returns the pose of C in A.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.rot.mul_mat(&other.rot),
            self.pos + self.rot * other.pos,
        )
    }

    /// The transform with the roles of A and B exchanged.
    pub fn inverse(&self) -> Self {
        let rt = self.rot.transpose();
        Self::new(rt, -(rt * self.pos))
    }
}

impl<S: Scalar> Default for SpatialTransform<S> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn arb_pos() -> impl Strategy<Value = Vec3<f64>> {
        (-10.0..10.0_f64, -10.0..10.0_f64, -10.0..10.0_f64)
            .prop_map(|(x, y, z)| Vec3::new(x, y, z))
    }

    fn arb_angle() -> impl Strategy<Value = f64> {
        -std::f64::consts::PI..std::f64::consts::PI
    }

    fn arb_unit_axis() -> impl Strategy<Value = Vec3<f64>> {
        (-1.0..1.0_f64, -1.0..1.0_f64, -1.0..1.0_f64)
            .prop_filter("non-zero axis", |(x, y, z)| x * x + y * y + z * z > 0.01)
            .prop_map(|(x, y, z)| {
                let v = Vec3::new(x, y, z);
                v / v.norm()
            })
    }

    fn arb_transform() -> impl Strategy<Value = SpatialTransform<f64>> {
        (arb_unit_axis(), arb_angle(), arb_pos()).prop_map(|(axis, angle, pos)| {
            SpatialTransform::new(Mat3::from_axis_angle(axis, angle), pos)
        })
    }

    fn arb_spatial_vec() -> impl Strategy<Value = SpatialVec<f64>> {
        (arb_pos(), arb_pos()).prop_map(|(a, l)| SpatialVec::new(a, l))
    }

    proptest! {
        #[test]
        fn motion_round_trips(xf in arb_transform(), v in arb_spatial_vec()) {
            let back = xf.inv_apply_motion(&xf.apply_motion(&v));
            for i in 0..6 {
                prop_assert!((back.get(i) - v.get(i)).abs() < EPS,
                    "component {}: {} vs {}", i, back.get(i), v.get(i));
            }
        }

        #[test]
        fn force_round_trips(xf in arb_transform(), f in arb_spatial_vec()) {
            let back = xf.inv_apply_force(&xf.apply_force(&f));
            for i in 0..6 {
                prop_assert!((back.get(i) - f.get(i)).abs() < EPS,
                    "component {}: {} vs {}", i, back.get(i), f.get(i));
            }
        }

        #[test]
        fn apply_motion_matches_matrix(xf in arb_transform(), v in arb_spatial_vec()) {
            let applied = xf.apply_motion(&v);
            let mat = xf.to_motion_matrix().mul_vec(&v);
            for i in 0..6 {
                prop_assert!((applied.get(i) - mat.get(i)).abs() < EPS);
            }
        }

        #[test]
        fn apply_force_matches_matrix(xf in arb_transform(), f in arb_spatial_vec()) {
            let applied = xf.apply_force(&f);
            let mat = xf.to_force_matrix().mul_vec(&f);
            for i in 0..6 {
                prop_assert!((applied.get(i) - mat.get(i)).abs() < EPS);
            }
        }

        #[test]
        fn inv_apply_motion_matches_nalgebra_inverse(
            xf in arb_transform(),
            v in arb_spatial_vec(),
        ) {
            // Independent oracle: invert the dense 6x6 motion matrix.
            let m = xf.to_motion_matrix();
            let dense = nalgebra::Matrix6::from_fn(|r, c| m.get(r, c));
            let inv = dense.try_inverse().expect("rigid transform is invertible");
            let vd = nalgebra::Vector6::from_fn(|i, _| v.get(i));
            let expected = inv * vd;

            let ours = xf.inv_apply_motion(&v);
            for i in 0..6 {
                prop_assert!((ours.get(i) - expected[i]).abs() < 1e-7,
                    "component {}: {} vs {}", i, ours.get(i), expected[i]);
            }
        }

        #[test]
        fn compose_with_inverse_is_identity(xf in arb_transform()) {
            let result = xf.compose(&xf.inverse());
            let id = SpatialTransform::identity();
            for r in 0..3 {
                for c in 0..3 {
                    prop_assert!((result.rot.get(r, c) - id.rot.get(r, c)).abs() < EPS,
                        "rot[{},{}]: {} vs {}", r, c, result.rot.get(r, c), id.rot.get(r, c));
                }
            }
            prop_assert!((result.pos - id.pos).norm() < EPS);
        }

        #[test]
        fn compose_is_associative(
            a in arb_transform(),
            b in arb_transform(),
            c in arb_transform(),
        ) {
            let ab_c = a.compose(&b).compose(&c);
            let a_bc = a.compose(&b.compose(&c));
            for r in 0..3 {
                for col in 0..3 {
                    prop_assert!((ab_c.rot.get(r, col) - a_bc.rot.get(r, col)).abs() < EPS);
                }
            }
            prop_assert!((ab_c.pos - a_bc.pos).norm() < EPS);
        }

        #[test]
        fn duality_holds_for_all_transforms(xf in arb_transform()) {
            let force = xf.to_force_matrix();
            let inv_motion_t = xf.inverse().to_motion_matrix().transpose();
            for r in 0..6 {
                for c in 0..6 {
                    prop_assert!((force.get(r, c) - inv_motion_t.get(r, c)).abs() < EPS,
                        "entry ({},{})", r, c);
                }
            }
        }

        #[test]
        fn power_balance_is_frame_invariant(
            xf in arb_transform(),
            v in arb_spatial_vec(),
            f in arb_spatial_vec(),
        ) {
            // <X v, X* f> = <v, f>: motion/force duality in its physical form.
            let lhs = xf.apply_motion(&v).dot(xf.apply_force(&f));
            let rhs = v.dot(f);
            prop_assert!((lhs - rhs).abs() < 1e-7, "{} vs {}", lhs, rhs);
        }
    }
}
