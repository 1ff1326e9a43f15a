//! gyre — scalar-generic spatial algebra core for rigid-body dynamics.
//!
//! This is the umbrella crate that re-exports the value types and kernels
//! from the sub-crates. Code-generated dynamics layers depend on this crate
//! and parametrize over [`Scalar`] to pick their numeric backend.

pub use gyre_math::{
    self, skew, DefaultScalars, Dual, Mat3, Mat4, Scalar, ScalarBinding, ScalarsOf, Vec3, Vec4,
};
pub use gyre_spatial::{self, InertiaMatrix, SpatialMat, SpatialTransform, SpatialVec};
