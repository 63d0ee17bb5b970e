//! Element-type traits. Matrices and vectors work with any [`Number`]; everything involving angles
//! or lengths needs a [`Float`].

use std::ops;

/// Trigonometric functions, with angles in radians.
pub trait Trig: Sized {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    /// Four-quadrant arctangent of `self / other`.
    fn atan2(self, other: Self) -> Self;

    fn sin_cos(self) -> (Self, Self)
    where
        Self: Copy,
    {
        (self.sin(), self.cos())
    }
}

pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Ordering helpers for floats, which are only [`PartialOrd`].
///
/// NaN handling follows [`f32::min`] and [`f32::max`]: a NaN operand is ignored.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Restricts `self` to `[min, max]`, e.g. before an `acos`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Additive identity, usable in `const` contexts such as [`Vector::ZERO`](crate::Vector::ZERO).
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity, used to build the `IDENTITY` constants.
pub trait One {
    const ONE: Self;
}

/// Element types of vectors and matrices: signed integers and floats.
///
/// Anything with arithmetic operators and `0`/`1` constants qualifies.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// Implemented for [`f32`] and [`f64`]. Rotations, projections and decompositions are only
/// available for float matrices and quaternions.
pub trait Float: Number + Trig + Sqrt + MinMax + PartialOrd {
    /// The constant π.
    const PI: Self;
    /// `0.5`.
    const HALF: Self;
    /// `2.0`.
    const TWO: Self;
    /// Positive infinity.
    const INFINITY: Self;

    /// Tolerance shared by the numerical guards of the library and by the approximate equality
    /// predicates (`approx_equals`).
    ///
    /// It is `1e-6` for both [`f32`] and [`f64`].
    const TOLERANCE: Self;

    fn abs(self) -> Self;
    fn exp(self) -> Self;
    /// Natural logarithm.
    fn ln(self) -> Self;
    fn is_finite(self) -> bool;
    /// Converts an angle in degrees to radians.
    fn to_radians(self) -> Self;
}

macro_rules! float_impls {
    ($($ty:ident),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl MinMax for $ty {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Float for $ty {
                const PI: Self = std::$ty::consts::PI;
                const HALF: Self = 0.5;
                const TWO: Self = 2.0;
                const INFINITY: Self = $ty::INFINITY;
                const TOLERANCE: Self = 0.000001;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn exp(self) -> Self {
                    self.exp()
                }

                fn ln(self) -> Self {
                    self.ln()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }

                fn to_radians(self) -> Self {
                    self.to_radians()
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! int_consts {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(i8, i16, i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    fn generic_sin_cos<T: Float>(angle: T) -> (T, T) {
        Trig::sin_cos(angle)
    }

    #[test]
    fn float_consts() {
        assert_eq!(<f32 as Float>::TOLERANCE, 1e-6);
        assert_eq!(<f64 as Float>::TOLERANCE, 1e-6);
        assert_eq!(<f32 as Float>::HALF + <f32 as Float>::HALF, 1.0);
        assert!(!<f64 as Float>::INFINITY.is_finite());
    }

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(1.0000001f32, -1.0, 1.0), 1.0);
        assert_eq!(MinMax::clamp(-3.0f64, -1.0, 1.0), -1.0);
        assert_eq!(MinMax::clamp(f32::NAN, -1.0, 1.0), -1.0);
    }

    #[test]
    fn sin_cos() {
        let (s, c) = generic_sin_cos(0.0f32);
        assert_eq!((s, c), (0.0, 1.0));
        assert_eq!(Float::to_radians(180.0f64), std::f64::consts::PI);
    }
}
