//! Tolerance-based comparison of floating-point values and of the vectors, matrices and
//! quaternions built from them.
//!
//! Transform math accumulates rounding error quickly, so results are compared with a
//! [`Comparison`] instead of `==`. The library itself only uses [`Comparison::Mixed`] with
//! [`Float::TOLERANCE`]: it is absolute for elements near zero (matrices are full of those) and
//! relative for large ones (translations, far planes).
//!
//! [`Float::TOLERANCE`]: crate::Float::TOLERANCE

mod impls;

use std::{fmt, panic::Location};

use crate::Float;

/// How two scalars `a` and `b` are compared, together with the tolerance to use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison<T> {
    /// `|a - b| <= tol`
    Abs(T),
    /// `|a - b| <= tol * max(|a|, |b|)`
    ///
    /// Any non-zero value needs a tolerance of at least 1.0 to compare equal to 0.0.
    Rel(T),
    /// `|a - b| <= tol * max(1, |a|, |b|)`
    Mixed(T),
}

impl<T: Float> Comparison<T> {
    /// The comparison used by the `approx_equals` methods of this crate.
    pub const DEFAULT: Self = Self::Mixed(T::TOLERANCE);

    /// Returns whether `a` and `b` are equal under this comparison.
    ///
    /// Infinities only equal infinities of the same sign, and NaN equals nothing.
    pub fn admits(self, a: T, b: T) -> bool {
        if !a.is_finite() || !b.is_finite() {
            return a == b;
        }

        let diff = (a - b).abs();
        match self {
            Self::Abs(tol) => diff <= tol,
            Self::Rel(tol) => diff <= a.abs().max(b.abs()) * tol,
            Self::Mixed(tol) => diff <= T::ONE.max(a.abs()).max(b.abs()) * tol,
        }
    }
}

/// Types whose values can be compared elementwise with a [`Comparison`].
///
/// Compound values are equal if every pair of corresponding scalars is.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type the comparison tolerance is expressed in.
    type Scalar: Float;

    fn approx_eq(&self, other: &Rhs, comparison: Comparison<Self::Scalar>) -> bool;
}

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion runs when the guard is dropped. Calling [`Asserter::abs`], [`Asserter::rel`] or
/// [`Asserter::mixed`] before that adds a comparison; the values are equal if *any* of the added
/// comparisons admits them. Without any, [`Comparison::DEFAULT`] is used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    comparisons: Vec<Comparison<T::Scalar>>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            comparisons: Vec::new(),
        }
    }

    /// Also accept values whose absolute difference is at most `tolerance`.
    pub fn abs(&mut self, tolerance: T::Scalar) -> &mut Self {
        self.comparisons.push(Comparison::Abs(tolerance));
        self
    }

    /// Also accept values whose relative difference is at most `tolerance`.
    pub fn rel(&mut self, tolerance: T::Scalar) -> &mut Self {
        self.comparisons.push(Comparison::Rel(tolerance));
        self
    }

    /// Also accept values that pass a [`Comparison::Mixed`] with `tolerance`.
    pub fn mixed(&mut self, tolerance: T::Scalar) -> &mut Self {
        self.comparisons.push(Comparison::Mixed(tolerance));
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.comparisons.is_empty() {
            self.comparisons.push(Comparison::DEFAULT);
        }

        let equal = self
            .comparisons
            .iter()
            .any(|&cmp| self.left.approx_eq(self.right, cmp));
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            fail(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

// Panicking from `drop` reports the wrong location, so the caller's is printed explicitly.
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    let msg = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{msg}\n  left: {left:?}\n right: {right:?}")
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two values are approximately equal (see [`ApproxEq`]).
///
/// Returns an [`Asserter`] for picking the comparison. Without one, the values are compared like
/// the `approx_equals` methods do.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(Mat4f::from_rotation_z(0.3).rotation(), Quat::from_rotation_z(0.3)).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two values are *not* approximately equal (see [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(Quatf::IDENTITY, Quat::from_rotation_x(0.01));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::Comparison;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "off by one")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "off by {}", "one");
    }

    #[test]
    fn default_comparison() {
        // Accumulated f32 rounding stays within the library tolerance.
        let sum = (0..10).fold(0.0f32, |acc, _| acc + 0.1);
        assert_approx_eq!(sum, 1.0);
        assert_approx_ne!(1.0f32, 1.00001);
        assert_eq!(Comparison::<f32>::DEFAULT, Comparison::Mixed(1e-6));
    }

    #[test]
    fn any_comparison_suffices() {
        assert_approx_eq!(1000.0, 1001.0).abs(0.5).rel(0.01);
        assert_approx_eq!(0.0, 0.5).rel(0.01).abs(1.0);
    }

    #[test]
    fn modes() {
        assert!(Comparison::Abs(0.5).admits(1.0, 1.4));
        assert!(!Comparison::Abs(0.5).admits(100.0, 100.6));

        assert!(Comparison::Rel(0.01).admits(100.0, 100.6));
        assert!(Comparison::Rel(2.0).admits(1.0, -1.0));
        assert!(!Comparison::Rel(0.9).admits(0.0, 1e-9));

        // Absolute near zero, relative for large magnitudes.
        assert!(Comparison::Mixed(1e-6).admits(0.0f64, 0.0000005));
        assert!(!Comparison::Mixed(1e-6).admits(0.0f64, 0.000002));
        assert!(Comparison::Mixed(1e-6).admits(1.0e6f64, 1.0e6 + 0.5));
        assert!(!Comparison::Mixed(1e-6).admits(1.0e6f64, 1.0e6 + 2.0));
    }

    #[test]
    fn zero_tolerance_is_exact() {
        for cmp in [Comparison::Abs(0.0), Comparison::Rel(0.0), Comparison::Mixed(0.0)] {
            assert!(cmp.admits(-1.0f32, -1.0));
            assert!(!cmp.admits(1.0f32, 1.0 + f32::EPSILON));
        }
    }

    #[test]
    fn non_finite() {
        for cmp in [Comparison::Abs(1.0f32), Comparison::Rel(1.0), Comparison::Mixed(1.0)] {
            assert!(!cmp.admits(f32::NAN, f32::NAN));
            assert!(!cmp.admits(f32::NAN, 0.0));
            assert!(cmp.admits(f32::INFINITY, f32::INFINITY));
            assert!(!cmp.admits(f32::INFINITY, f32::NEG_INFINITY));
            assert!(!cmp.admits(f32::MAX, f32::INFINITY));
        }
    }
}
