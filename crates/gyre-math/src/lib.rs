//! Scalar abstraction and fixed-size linear algebra for the gyre
//! spatial-algebra core.
//!
//! Everything is generic over [`Scalar`] so the same closed-form kernels run
//! under plain floats or forward-mode autodiff numbers ([`Dual`]) without
//! source changes.

pub mod backend;
pub mod dual;
pub mod mat3;
pub mod mat4;
pub mod rot;
pub mod scalar;
pub mod vec3;
pub mod vec4;

pub use backend::{DefaultScalars, ScalarBinding, ScalarsOf};
pub use dual::Dual;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use scalar::Scalar;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Cross-product matrix [v]× such that [v]× w = v × w.
#[inline]
pub fn skew<S: Scalar>(v: &Vec3<S>) -> Mat3<S> {
    Mat3::new(
        S::ZERO, -v.z, v.y, //
        v.z, S::ZERO, -v.x, //
        -v.y, v.x, S::ZERO,
    )
}
