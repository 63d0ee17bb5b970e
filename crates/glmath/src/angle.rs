use crate::Float;

/// An angle measured in degrees.
///
/// Everything else in this crate takes angles in radians. This wrapper exists so that APIs
/// expecting degrees (like [`Quat::from_euler`][crate::Quat::from_euler]) can't be called with
/// radians by accident.
///
/// # Examples
///
/// ```
/// # use glmath::*;
/// assert_eq!(Degrees(180.0f64).to_radians(), std::f64::consts::PI);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Degrees<T>(pub T);

impl<T: Float> Degrees<T> {
    /// Converts this angle to radians.
    pub fn to_radians(self) -> T {
        self.0.to_radians()
    }
}

impl<T> From<T> for Degrees<T> {
    fn from(degrees: T) -> Self {
        Self(degrees)
    }
}
