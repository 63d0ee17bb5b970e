use std::{array, fmt};

use crate::{
    approx::{ApproxEq, Comparison},
    Float, Number, One, Sqrt, Vector, Zero,
};

mod mat2;
mod mat4;
mod ops;
mod projection;

pub type Mat1<T> = Matrix<T, 1, 1>;
pub type Mat1f = Mat1<f32>;
/// 2D linear transforms (rotation, scaling).
pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat2f = Mat2<f32>;
/// 3D linear transforms: rotation matrices, normal matrices, the upper-left block of a [`Mat4`].
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat3f = Mat3<f32>;
/// Affine and projective 3D transforms in homogeneous coordinates.
pub type Mat4<T> = Matrix<T, 4, 4>;
pub type Mat4f = Mat4<f32>;

/// An `R`x`C` matrix, stored column by column.
///
/// The flattened storage order puts element `(row, col)` at index `col * R + row`, which is what
/// OpenGL and WebGPU expect for uniform matrices. With `T: bytemuck::Pod` a matrix can be cast to
/// bytes directly.
///
/// Indexing takes `(row, col)`, as in mathematical notation, even though storage is column-major:
///
/// ```
/// # use glmath::*;
/// let mut m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
/// assert_eq!(m[(1, 3)], 2.0);
/// assert_eq!(m.as_slice()[3 * 4 + 1], 2.0);
/// m[(1, 3)] = -2.0;
/// assert_eq!(m.translation(), vec3(1.0, -2.0, 3.0));
/// ```
///
/// Most transforms are built with the constructors on [`Mat4`] (`from_translation`, `look_at`,
/// `perspective`, ...). [`Matrix::from_rows`] and [`Matrix::from_columns`] take raw elements.
#[derive(Clone, Copy, Hash)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from its rows, written in reading order.
    ///
    /// ```
    /// # use glmath::*;
    /// // Scale X by 2, then move by (5, 0, 0).
    /// let m = Matrix::from_rows([
    ///     [2.0, 0.0, 0.0, 5.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// assert_eq!(m, Mat4f::from_translation(vec3(5.0, 0.0, 0.0)) * Mat4f::from_scaling(vec3(2.0, 1.0, 1.0)));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transpose()
    }

    /// Builds a matrix from its columns, which is also the storage order.
    ///
    /// For an affine transform the columns are the images of the X, Y and Z axes followed by the
    /// translation.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Calls `f(row, col)` for every element.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| f(row, col))))
    }

    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Mirrors the matrix along its diagonal. For a rotation matrix this is the inverse.
    pub fn transpose(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns column `col`. Panics if it is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        self.0[col].into()
    }

    /// Returns row `row`. Panics if it is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// The elements in column-major order, ready for a uniform upload.
    pub fn as_slice(&self) -> &[T] {
        self.0.as_flattened()
    }

    /// Returns the Frobenius norm: the square root of the sum of all squared elements.
    pub fn frobenius_norm(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.as_slice()
            .iter()
            .fold(T::ZERO, |acc, &elem| acc + elem * elem)
            .sqrt()
    }

    /// Returns whether all elements of `self` and `other` are approximately equal, using
    /// [`Comparison::DEFAULT`].
    pub fn approx_equals(&self, other: &Self) -> bool
    where
        T: Float + ApproxEq<Scalar = T>,
    {
        self.approx_eq(other, Comparison::DEFAULT)
    }

    /// Like [`Matrix::approx_equals`], but with a caller-provided mixed tolerance.
    pub fn approx_equals_with(&self, other: &Self, tolerance: T) -> bool
    where
        T: Float + ApproxEq<Scalar = T>,
    {
        self.approx_eq(other, Comparison::Mixed(tolerance))
    }

    /// Same as `==`; every element must match exactly.
    pub fn exact_equals(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self == other
    }
}

/// Prints rows in reading order, not in storage order.
impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Row<'a, T, const R: usize, const C: usize>(&'a Matrix<T, R, C>, usize);

        impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Row<'_, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let Row(mat, row) = *self;
                f.debug_list()
                    .entries((0..C).map(|col| &mat[(row, col)]))
                    .finish()
            }
        }

        f.debug_list()
            .entries((0..R).map(|row| Row(self, row)))
            .finish()
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One> Matrix<T, 1, 1> {
    pub const IDENTITY: Self = Self([[T::ONE]]);
}

impl<T: Zero + One> Matrix<T, 2, 2> {
    pub const IDENTITY: Self = Self([[T::ONE, T::ZERO], [T::ZERO, T::ONE]]);
}

impl<T: Zero + One> Matrix<T, 3, 3> {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Zero + One> Matrix<T, 4, 4> {
    /// The transform that leaves every point where it is.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE, T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE, T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE, T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE],
    ]);
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Builds a square matrix with `diag` on its diagonal and zeroes elsewhere.
    ///
    /// With `[sx, sy, sz, 1]` this is a scaling transform.
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sum of the diagonal. For a 3x3 rotation by angle θ this is `1 + 2cos(θ)`.
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self[(i, i)])
    }
}

// `determinant`/`adjoint`/`invert` exist per size; 2x2 and 4x4 live in their own modules.

impl<T: Number> Matrix<T, 1, 1> {
    #[inline]
    pub fn determinant(&self) -> T {
        self[(0, 0)]
    }

    /// Returns the reciprocal, or [`None`] for the zero matrix.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("matrix is singular, cannot invert");
            return None;
        }

        Some(Self([[T::ONE / det]]))
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Returns the determinant, expanded along the first column.
    ///
    /// Rotations have determinant 1; a negative determinant means the matrix mirrors.
    pub fn determinant(&self) -> T {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.0;
        a00 * (a22 * a11 - a12 * a21)
            + a01 * (a12 * a20 - a22 * a10)
            + a02 * (a21 * a10 - a11 * a20)
    }

    /// Returns the adjugate (transposed cofactor matrix), which is `determinant * inverse`.
    pub fn adjoint(&self) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.0;

        #[rustfmt::skip]
        let adj = Self([
            [a11 * a22 - a12 * a21, a02 * a21 - a01 * a22, a01 * a12 - a02 * a11],
            [a12 * a20 - a10 * a22, a00 * a22 - a02 * a20, a02 * a10 - a00 * a12],
            [a10 * a21 - a11 * a20, a01 * a20 - a00 * a21, a00 * a11 - a01 * a10],
        ]);
        adj
    }

    /// Inverts the matrix, or returns [`None`] if its determinant is exactly zero.
    ///
    /// Nearly singular matrices are inverted anyway and may produce huge elements.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("matrix is singular, cannot invert");
            return None;
        }

        Some(self.adjoint() * (T::ONE / det))
    }
}

/// Takes the columns, in storage order.
impl<T, const R: usize, const C: usize> From<[[T; R]; C]> for Matrix<T, R, C> {
    #[inline]
    fn from(columns: [[T; R]; C]) -> Self {
        Self(columns)
    }
}
