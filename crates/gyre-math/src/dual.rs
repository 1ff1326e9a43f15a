//! Forward-mode autodiff scalar.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::scalar::Scalar;

/// Dual number `val + der·ε` with one derivative channel.
///
/// Running a kernel over `Dual<f64>` evaluates the function and its
/// derivative with respect to whichever input was seeded with [`Dual::var`]
/// in a single pass. Comparisons and [`Scalar::value`] act on the value part
/// only, so branches taken by the generic code match the plain-float run.
#[derive(Clone, Copy, Debug)]
pub struct Dual<S> {
    /// Function value.
    pub val: S,
    /// Derivative of the value w.r.t. the seeded input.
    pub der: S,
}

impl<S: Scalar> Dual<S> {
    #[inline]
    pub fn new(val: S, der: S) -> Self {
        Self { val, der }
    }

    /// The differentiation variable: derivative seeded to one.
    #[inline]
    pub fn var(val: S) -> Self {
        Self {
            val,
            der: S::ONE,
        }
    }

    /// A constant: derivative zero.
    #[inline]
    pub fn constant(val: S) -> Self {
        Self {
            val,
            der: S::ZERO,
        }
    }

    /// The propagated derivative.
    #[inline]
    pub fn derivative(self) -> S {
        self.der
    }
}

impl<S: Scalar> PartialEq for Dual<S> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.val == other.val
    }
}

impl<S: Scalar> PartialOrd for Dual<S> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.val.partial_cmp(&other.val)
    }
}

impl<S: Scalar> fmt::Display for Dual<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}ε", self.val, self.der)
    }
}

impl<S: Scalar> Add for Dual<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.val + rhs.val, self.der + rhs.der)
    }
}

impl<S: Scalar> Sub for Dual<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.val - rhs.val, self.der - rhs.der)
    }
}

impl<S: Scalar> Mul for Dual<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.val * rhs.val,
            self.val * rhs.der + self.der * rhs.val,
        )
    }
}

impl<S: Scalar> Div for Dual<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        let inv = rhs.val.recip();
        Self::new(
            self.val * inv,
            (self.der - self.val * inv * rhs.der) * inv,
        )
    }
}

impl<S: Scalar> Neg for Dual<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.val, -self.der)
    }
}

impl<S: Scalar> AddAssign for Dual<S> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<S: Scalar> SubAssign for Dual<S> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<S: Scalar> MulAssign for Dual<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<S: Scalar> DivAssign for Dual<S> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<S: Scalar> Scalar for Dual<S> {
    const ZERO: Self = Dual {
        val: S::ZERO,
        der: S::ZERO,
    };
    const ONE: Self = Dual {
        val: S::ONE,
        der: S::ZERO,
    };

    #[inline]
    fn from_f64(v: f64) -> Self {
        Self::constant(S::from_f64(v))
    }

    #[inline]
    fn value(self) -> f64 {
        self.val.value()
    }

    #[inline]
    fn sin(self) -> Self {
        let (s, c) = self.val.sin_cos();
        Self::new(s, self.der * c)
    }

    #[inline]
    fn cos(self) -> Self {
        let (s, c) = self.val.sin_cos();
        Self::new(c, -(self.der * s))
    }

    #[inline]
    fn tan(self) -> Self {
        let t = self.val.tan();
        Self::new(t, self.der * (S::ONE + t * t))
    }

    #[inline]
    fn exp(self) -> Self {
        let e = self.val.exp();
        Self::new(e, self.der * e)
    }

    #[inline]
    fn sqrt(self) -> Self {
        let r = self.val.sqrt();
        Self::new(r, self.der / (r + r))
    }

    #[inline]
    fn abs(self) -> Self {
        if self.val < S::ZERO {
            -self
        } else {
            self
        }
    }

    #[inline]
    fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.val.sin_cos();
        (Self::new(s, self.der * c), Self::new(c, -(self.der * s)))
    }
}
