//! 6D spatial algebra for rigid-body dynamics, generic over the scalar type.
//!
//! Follows the conventions of Featherstone's "Rigid Body Dynamics
//! Algorithms": spatial vectors are [angular; linear], and the 6x6 matrices
//! are handled as four named 3x3 blocks in the same ordering.

pub mod inertia;
pub mod mat;
pub mod transform;
pub mod vec;

pub use inertia::InertiaMatrix;
pub use mat::SpatialMat;
pub use transform::SpatialTransform;
pub use vec::SpatialVec;
