//! Numeric-backend selection for generated robot descriptors.
//!
//! A code generator emits one descriptor type per robot. Descriptors that
//! want a non-default backend (say, autodiff) declare it by implementing
//! [`ScalarBinding`]; descriptors that declare nothing are used through
//! [`DefaultScalars`], which binds plain `f64`. Resolution happens entirely
//! at compile time and has no failure mode: an absent declaration is the
//! normal case, not an error.

use core::marker::PhantomData;

use crate::scalar::Scalar;

/// Capability trait binding a robot descriptor to its numeric backend.
pub trait ScalarBinding {
    type Scalars: Scalar;
}

/// Adapter equipping any descriptor with the default `f64` backend.
pub struct DefaultScalars<D = ()> {
    _descriptor: PhantomData<D>,
}

impl<D> ScalarBinding for DefaultScalars<D> {
    type Scalars = f64;
}

/// The scalar type a descriptor resolves to.
pub type ScalarsOf<D> = <D as ScalarBinding>::Scalars;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::Dual;
    use core::any::TypeId;

    struct AdRobot;

    impl ScalarBinding for AdRobot {
        type Scalars = Dual<f64>;
    }

    // Declares nothing; gets the default through the adapter.
    struct LegacyRobot;

    #[test]
    fn declared_backend_is_resolved() {
        assert_eq!(
            TypeId::of::<ScalarsOf<AdRobot>>(),
            TypeId::of::<Dual<f64>>()
        );
    }

    #[test]
    fn undeclared_backend_falls_back_to_f64() {
        assert_eq!(
            TypeId::of::<ScalarsOf<DefaultScalars<LegacyRobot>>>(),
            TypeId::of::<f64>()
        );
    }

    #[test]
    fn resolved_scalar_is_usable_in_generic_code() {
        fn twice<S: Scalar>(x: S) -> S {
            x + x
        }
        let y: ScalarsOf<DefaultScalars<LegacyRobot>> = twice(2.5);
        assert_eq!(y, 5.0);
    }
}
