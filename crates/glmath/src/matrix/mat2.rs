//! 2x2 matrices: inversion, 2D rotation and scaling, and LDU factorization.

use crate::{Float, Mat2, Number, Vec2};

impl<T: Number> Mat2<T> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    /// Returns the adjugate: the diagonal swapped, the off-diagonal negated.
    pub fn adjoint(&self) -> Self {
        let [[a, c], [b, d]] = self.0;
        Self([[d, -c], [-b, a]])
    }

    /// Inverts this 2x2 matrix, or returns [`None`] if its determinant is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Matrix::from_rows([
    ///     [2.0, 1.0],
    ///     [0.0, 4.0],
    /// ]);
    /// let inv = mat.invert().unwrap();
    /// assert_eq!(inv, Matrix::from_rows([
    ///     [0.5, -0.125],
    ///     [0.0, 0.25],
    /// ]));
    /// assert_eq!(mat * inv, Mat2::IDENTITY);
    /// assert_eq!(Mat2f::ZERO.invert(), None);
    /// ```
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("matrix is singular, cannot invert");
            return None;
        }

        Some(self.adjoint() * (T::ONE / det))
    }

    /// Creates a matrix scaling the X and Y axes by the elements of `factors`.
    pub fn from_scaling(factors: Vec2<T>) -> Self {
        Self::from_diagonal(factors)
    }

    /// Returns `self * Mat2::from_scaling(factors)`, scaling before applying `self`.
    pub fn scale(self, factors: Vec2<T>) -> Self {
        self * Self::from_scaling(factors)
    }

    /// Factors the matrix into `(L, D, U)` with `self == L * D * U`.
    ///
    /// `L` is unit lower triangular, `D` diagonal, and `U` unit upper triangular. Returns [`None`]
    /// if the top-left element is zero, since the factorization needs it as the first pivot (no
    /// row exchanges are done).
    ///
    /// ```
    /// # use glmath::*;
    /// let a = Matrix::from_rows([
    ///     [4.0, 3.0],
    ///     [6.0, 3.0],
    /// ]);
    /// let (l, d, u) = a.ldu().unwrap();
    /// assert_eq!(l * d * u, a);
    /// assert_eq!(d, Matrix::from_diagonal([4.0, -1.5]));
    /// ```
    pub fn ldu(&self) -> Option<(Self, Self, Self)> {
        let [[a00, a10], [a01, a11]] = self.0;
        if a00 == T::ZERO {
            log::trace!("LDU factorization needs a non-zero pivot at (0, 0)");
            return None;
        }

        let l10 = a10 / a00;
        let u01 = a01 / a00;
        let lower = Self([[T::ONE, l10], [T::ZERO, T::ONE]]);
        let diag = Self([[a00, T::ZERO], [T::ZERO, a11 - l10 * a01]]);
        let upper = Self([[T::ONE, T::ZERO], [u01, T::ONE]]);
        Some((lower, diag, upper))
    }
}

impl<T: Float> Mat2<T> {
    /// Creates a matrix rotating counterclockwise by `radians` (from +X towards +Y).
    ///
    /// ```
    /// # use glmath::*;
    /// let rot = Mat2f::from_rotation(std::f32::consts::FRAC_PI_2);
    /// assert_approx_eq!(rot * Vec2f::X, Vec2f::Y).abs(1e-6);
    /// ```
    pub fn from_rotation(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        Self([[c, s], [-s, c]])
    }

    /// Returns `self * Mat2::from_rotation(radians)`, rotating before applying `self`.
    pub fn rotate(self, radians: T) -> Self {
        self * Self::from_rotation(radians)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use crate::{assert_approx_eq, vec2, Mat2f, Matrix};

    #[test]
    fn invert() {
        let mat = Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = mat.invert().unwrap();
        assert_approx_eq!(inv, Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]])).abs(1e-12);
        assert_eq!(mat.adjoint(), Matrix::from_rows([[6.0, -7.0], [-2.0, 4.0]]));
    }

    #[test]
    fn rotation() {
        let rot = Mat2f::from_rotation(PI / 2.0);
        assert_approx_eq!(rot, Matrix::from_columns([[0.0, 1.0], [-1.0, 0.0]])).abs(1e-6);
        assert_approx_eq!(rot.determinant(), 1.0).abs(1e-6);
        assert_approx_eq!(rot * vec2(1.0, 2.0), vec2(-2.0, 1.0)).abs(1e-6);

        let a = Matrix::from_columns([[1.0, 2.0], [3.0, 4.0]]);
        assert_approx_eq!(a.rotate(PI / 2.0), Matrix::from_columns([[3.0, 4.0], [-1.0, -2.0]]))
            .abs(1e-6);
        assert_approx_eq!(Mat2f::IDENTITY.rotate(0.3).rotate(-0.3), Mat2f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn scaling() {
        let a = Matrix::from_columns([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(
            a.scale(vec2(2.0, 3.0)),
            Matrix::from_columns([[2.0, 4.0], [9.0, 12.0]])
        );
        assert_eq!(Mat2f::from_scaling(vec2(2.0, 3.0)) * vec2(1.0, 1.0), [2.0, 3.0]);
    }

    #[test]
    fn ldu() {
        let a = Matrix::from_rows([[4.0, 3.0], [6.0, 3.0]]);
        let (l, d, u) = a.ldu().unwrap();
        assert_eq!(l, Matrix::from_rows([[1.0, 0.0], [1.5, 1.0]]));
        assert_eq!(d, Matrix::from_diagonal([4.0, -1.5]));
        assert_eq!(u, Matrix::from_rows([[1.0, 0.75], [0.0, 1.0]]));
        assert_eq!(l * d * u, a);
        assert_eq!(d.determinant(), a.determinant());

        let b = Matrix::from_rows([[2.0f32, -1.0], [0.5, 3.0]]);
        let (l, d, u) = b.ldu().unwrap();
        assert_approx_eq!(l * d * u, b).abs(1e-6);

        assert_eq!(Matrix::from_rows([[0.0, 1.0], [1.0, 0.0]]).ldu(), None);
    }
}
