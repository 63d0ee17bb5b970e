//! Indexing, comparison and multiplication. Element-wise matrix sums are not provided.

use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{
    approx::{ApproxEq, Comparison},
    traits::Number,
    Matrix, Vector,
};

/// Indexed by `(row, col)`.
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[col][row]
    }
}

impl<T: PartialEq<U>, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>>
    for Matrix<T, R, C>
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: ApproxEq, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C> {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, comparison: Comparison<T::Scalar>) -> bool {
        self.0.approx_eq(&other.0, comparison)
    }
}

/// Transforms a column vector.
impl<T: Number, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, v: Vector<T, C>) -> Vector<T, R> {
        Vector::from_fn(|row| self.row(row).dot(v))
    }
}

/// Composes two transforms; the result applies `rhs` first.
///
/// Operands are taken by value, so `a = a * b`, `b = a * b` and `a = a * a` all work.
impl<T: Number, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        Matrix::from_fn(|row, col| self.row(row).dot(rhs.column(col)))
    }
}

/// Scales every element.
impl<T: Number, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, factor: T) -> Self {
        self.map(|elem| elem * factor)
    }
}

/// `a *= b` is `a = a * b`.
impl<T: Number, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}
