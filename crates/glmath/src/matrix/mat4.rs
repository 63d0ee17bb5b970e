//! 4x4 matrix algebra, and affine transforms built from (and decomposed into) translation,
//! rotation and scale.

use crate::{Float, Mat3, Matrix, Number, Quat, Vec3, Vector};

impl<T: Number> Matrix<T, 4, 4> {
    /// The twelve 2x2 minors shared by [`Matrix::determinant`] and [`Matrix::adjoint`].
    ///
    /// The first six come from the upper two rows, the last six from the lower two.
    fn minors(&self) -> [T; 12] {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.0;

        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// This is computed from products of 2x2 minors (a Laplace expansion), not by elimination.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat.determinant(), 1.0);
    /// assert_eq!(Mat4f::from_scaling(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();
        b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06
    }

    /// Returns the adjugate (the transposed cofactor matrix) of this matrix.
    ///
    /// For invertible matrices, this is the inverse scaled by the determinant. It is still defined
    /// for singular matrices.
    pub fn adjoint(&self) -> Self {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.0;
        let [b00, b01, b02, b03, b04, b05, b06, b07, b08, b09, b10, b11] = self.minors();

        Self([
            [
                a11 * b11 - a12 * b10 + a13 * b09,
                a02 * b10 - a01 * b11 - a03 * b09,
                a31 * b05 - a32 * b04 + a33 * b03,
                a22 * b04 - a21 * b05 - a23 * b03,
            ],
            [
                a12 * b08 - a10 * b11 - a13 * b07,
                a00 * b11 - a02 * b08 + a03 * b07,
                a32 * b02 - a30 * b05 - a33 * b01,
                a20 * b05 - a22 * b02 + a23 * b01,
            ],
            [
                a10 * b10 - a11 * b08 + a13 * b06,
                a01 * b08 - a00 * b10 - a03 * b06,
                a30 * b04 - a31 * b02 + a33 * b00,
                a21 * b02 - a20 * b04 - a23 * b00,
            ],
            [
                a11 * b07 - a10 * b09 - a12 * b06,
                a00 * b09 - a01 * b07 + a02 * b06,
                a31 * b01 - a30 * b03 - a32 * b00,
                a20 * b03 - a21 * b01 + a22 * b00,
            ],
        ])
    }

    /// Inverts this 4x4 matrix, or returns [`None`] if its determinant is zero.
    ///
    /// Only an exactly-zero determinant is rejected. Nearly singular matrices still produce a
    /// result, but it may be numerically unstable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat.invert(), Some(Mat4f::from_translation(vec3(-1.0, -2.0, -3.0))));
    /// assert_eq!(Mat4f::ZERO.invert(), None);
    /// ```
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("4x4 matrix is singular, cannot invert");
            return None;
        }

        Some(self.adjoint() * (T::ONE / det))
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a translation matrix.
    pub fn from_translation(translation: Vec3<T>) -> Self {
        let mut mat = Self::IDENTITY;
        mat.0[3] = translation.extend(T::ONE).into_array();
        mat
    }

    /// Creates a (non-uniform) scaling matrix.
    pub fn from_scaling(scale: Vec3<T>) -> Self {
        Self::from_diagonal(scale.extend(T::ONE))
    }

    /// Creates a matrix rotating by `radians` around `axis`.
    ///
    /// `axis` does not need to be normalized. Returns [`None`] if its length is below
    /// [`Float::TOLERANCE`], since it then does not define a direction.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Option<Self> {
        let len = axis.length();
        if len < T::TOLERANCE {
            log::trace!("rotation axis is too short to define a direction");
            return None;
        }
        let [x, y, z] = (axis / len).into_array();

        let (s, c) = radians.sin_cos();
        let t = T::ONE - c;

        Some(Self([
            [x * x * t + c, y * x * t + z * s, z * x * t - y * s, T::ZERO],
            [x * y * t - z * s, y * y * t + c, z * y * t + x * s, T::ZERO],
            [x * z * t + y * s, y * z * t - x * s, z * z * t + c, T::ZERO],
            [T::ZERO, T::ZERO, T::ZERO, T::ONE],
        ]))
    }

    /// Creates a matrix rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.0[1] = [T::ZERO, c, s, T::ZERO];
        mat.0[2] = [T::ZERO, -s, c, T::ZERO];
        mat
    }

    /// Creates a matrix rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.0[0] = [c, T::ZERO, -s, T::ZERO];
        mat.0[2] = [s, T::ZERO, c, T::ZERO];
        mat
    }

    /// Creates a matrix rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let mut mat = Self::IDENTITY;
        mat.0[0] = [c, s, T::ZERO, T::ZERO];
        mat.0[1] = [-s, c, T::ZERO, T::ZERO];
        mat
    }

    /// Creates a matrix that rotates by `rotation` and then translates by `translation`.
    pub fn from_rotation_translation(rotation: Quat<T>, translation: Vec3<T>) -> Self {
        Self::from_translation_rotation_scale(translation, rotation, Vector::splat(T::ONE))
    }

    /// Creates the affine transform `T * R * S`: the result scales by `scale`, then rotates by
    /// `rotation`, then translates by `translation`.
    ///
    /// The rotation part is expanded directly from the quaternion and scaled per column, without
    /// multiplying intermediate matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let t = vec3(1.0, 2.0, 3.0);
    /// let r = Quat::from_rotation_y(0.7);
    /// let s = vec3(5.0, 6.0, 7.0);
    /// let mat = Mat4f::from_translation_rotation_scale(t, r, s);
    ///
    /// assert_eq!(mat.translation(), t);
    /// assert_approx_eq!(mat.scaling(), s).abs(1e-5);
    /// assert_approx_eq!(mat.rotation(), r).abs(1e-5);
    /// ```
    pub fn from_translation_rotation_scale(
        translation: Vec3<T>,
        rotation: Quat<T>,
        scale: Vec3<T>,
    ) -> Self {
        let rot = Mat3::from(rotation);
        Matrix::from_columns([
            (rot.column(0) * scale.x).extend(T::ZERO),
            (rot.column(1) * scale.y).extend(T::ZERO),
            (rot.column(2) * scale.z).extend(T::ZERO),
            translation.extend(T::ONE),
        ])
    }

    /// Returns the translation component of this affine transform (the first three elements of
    /// the last column).
    pub fn translation(&self) -> Vec3<T> {
        self.column(3).truncate()
    }

    /// Returns the scaling component of this transform: the length of each of the three basis
    /// columns.
    ///
    /// This is only accurate if the transform contains no shear. Reflections are reported as
    /// positive scale.
    pub fn scaling(&self) -> Vec3<T> {
        Vector::from_fn(|col| self.column(col).truncate().length())
    }

    /// Returns the rotation component of this transform.
    ///
    /// Each basis column is divided by its scale (see [`Matrix::scaling`]) and the resulting
    /// rotation matrix is converted by branching on the trace or the largest diagonal element.
    ///
    /// Matrices containing a reflection (negative determinant) do not yield a meaningful rotation.
    pub fn rotation(&self) -> Quat<T> {
        let scale = self.scaling();
        let m = |row: usize, col: usize| self[(row, col)] / scale[col];

        let (m00, m11, m22) = (m(0, 0), m(1, 1), m(2, 2));
        let trace = m00 + m11 + m22;
        let quarter = T::HALF * T::HALF;

        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO; // 4w
            Quat::from_components(
                (m(2, 1) - m(1, 2)) / s,
                (m(0, 2) - m(2, 0)) / s,
                (m(1, 0) - m(0, 1)) / s,
                quarter * s,
            )
        } else if m00 > m11 && m00 > m22 {
            let s = (T::ONE + m00 - m11 - m22).sqrt() * T::TWO; // 4x
            Quat::from_components(
                quarter * s,
                (m(0, 1) + m(1, 0)) / s,
                (m(0, 2) + m(2, 0)) / s,
                (m(2, 1) - m(1, 2)) / s,
            )
        } else if m11 > m22 {
            let s = (T::ONE + m11 - m00 - m22).sqrt() * T::TWO; // 4y
            Quat::from_components(
                (m(0, 1) + m(1, 0)) / s,
                quarter * s,
                (m(1, 2) + m(2, 1)) / s,
                (m(0, 2) - m(2, 0)) / s,
            )
        } else {
            let s = (T::ONE + m22 - m00 - m11).sqrt() * T::TWO; // 4z
            Quat::from_components(
                (m(0, 2) + m(2, 0)) / s,
                (m(1, 2) + m(2, 1)) / s,
                quarter * s,
                (m(1, 0) - m(0, 1)) / s,
            )
        }
    }

    /// Splits this transform into translation, rotation and scale.
    ///
    /// This is the inverse of [`Matrix::from_translation_rotation_scale`] for transforms without
    /// shear or reflection.
    pub fn decompose(&self) -> (Vec3<T>, Quat<T>, Vec3<T>) {
        (self.translation(), self.rotation(), self.scaling())
    }

    /// Returns `self * Mat4::from_translation(v)`: `v` is applied before the existing transform.
    pub fn translate(self, v: Vec3<T>) -> Self {
        let mut mat = self;
        let moved = self.column(0) * v.x + self.column(1) * v.y + self.column(2) * v.z;
        mat.0[3] = (self.column(3) + moved).into_array();
        mat
    }

    /// Returns `self * Mat4::from_scaling(v)`, scaling the first three columns.
    pub fn scale(self, v: Vec3<T>) -> Self {
        let mut mat = self;
        for (col, factor) in v.into_array().into_iter().enumerate() {
            mat.0[col] = (self.column(col) * factor).into_array();
        }
        mat
    }

    /// Returns `self * Mat4::from_axis_angle(axis, radians)`.
    ///
    /// Returns [`None`] if `axis` is too short to define a direction.
    pub fn rotate(self, axis: Vec3<T>, radians: T) -> Option<Self> {
        Some(self * Self::from_axis_angle(axis, radians)?)
    }

    /// Returns `self * Mat4::from_rotation_x(radians)`.
    pub fn rotate_x(self, radians: T) -> Self {
        self * Self::from_rotation_x(radians)
    }

    /// Returns `self * Mat4::from_rotation_y(radians)`.
    pub fn rotate_y(self, radians: T) -> Self {
        self * Self::from_rotation_y(radians)
    }

    /// Returns `self * Mat4::from_rotation_z(radians)`.
    pub fn rotate_z(self, radians: T) -> Self {
        self * Self::from_rotation_z(radians)
    }

    /// Returns the upper-left 3x3 part of this matrix.
    pub fn to_mat3(&self) -> Mat3<T> {
        Matrix::from_fn(|row, col| self[(row, col)])
    }

    /// Returns the matrix for transforming surface normals: the inverse transpose of the upper-left
    /// 3x3 part.
    ///
    /// Returns [`None`] if that part is singular.
    pub fn normal_matrix(&self) -> Option<Mat3<T>> {
        self.to_mat3().invert().map(Matrix::transpose)
    }

    /// Transforms a point, including the translation and the perspective divide.
    ///
    /// A resulting `w` of exactly zero is treated as 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let mat = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(mat.transform_point(vec3(1.0, 1.0, 1.0)), vec3(2.0, 3.0, 4.0));
    /// ```
    pub fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        let v = *self * point.extend(T::ONE);
        let w = if v.w == T::ZERO { T::ONE } else { v.w };
        v.truncate() / w
    }
}

impl<T: Float> From<Quat<T>> for Matrix<T, 4, 4> {
    fn from(rotation: Quat<T>) -> Self {
        Self::from_rotation_translation(rotation, Vector::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, vec3, vec4, Degrees, Mat4f, Vec3f};

    use super::*;

    /// A translation by `(1, 2, 3)`.
    fn mat_a() -> Mat4f {
        Mat4f::from_columns([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ])
    }

    /// A translation by `(4, 5, 6)`.
    fn mat_b() -> Mat4f {
        Mat4f::from_translation(vec3(4.0, 5.0, 6.0))
    }

    #[test]
    fn determinant() {
        assert_eq!(mat_a().determinant(), 1.0);
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(mat.determinant(), 30);
        assert_eq!(mat.transpose().determinant(), 30);
    }

    #[test]
    fn invert() {
        let expected = Mat4f::from_translation(vec3(-1.0, -2.0, -3.0));

        let a = mat_a();
        assert_approx_eq!(a.invert().unwrap(), expected);

        let mut a = mat_a();
        a = a.invert().unwrap();
        assert_approx_eq!(a, expected);

        let rot = Mat4f::from_rotation_x(0.3).rotate_y(1.2).translate(vec3(1.0, -2.0, 0.5));
        let inv = rot.invert().unwrap();
        assert!((rot * inv).approx_equals_with(&Mat4f::IDENTITY, 1e-5));
        assert!((inv * rot).approx_equals_with(&Mat4f::IDENTITY, 1e-5));
    }

    #[test]
    fn invert_singular() {
        assert_eq!(Mat4f::ZERO.invert(), None);

        #[rustfmt::skip]
        let rank3 = Mat4f::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [2.0, 4.0, 6.0, 8.0],
            [0.0, 1.0, 0.0, 1.0],
            [1.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(rank3.determinant(), 0.0);
        assert_eq!(rank3.invert(), None);

        // Singular matrices still have an adjugate.
        assert_ne!(rank3.adjoint(), Mat4f::ZERO);
    }

    #[test]
    fn adjoint() {
        let expected = Mat4f::from_translation(vec3(-1.0, -2.0, -3.0));
        assert_approx_eq!(mat_a().adjoint(), expected);

        let scale = Mat4f::from_scaling(vec3(2.0, 4.0, 8.0));
        assert_eq!(scale.adjoint(), Mat4f::from_diagonal([32.0, 16.0, 8.0, 64.0]));
        assert_eq!(scale.adjoint() * (1.0 / scale.determinant()), scale.invert().unwrap());
    }

    #[test]
    fn multiply_aliasing() {
        let expected = Mat4f::from_translation(vec3(5.0, 7.0, 9.0));

        assert_eq!(mat_a() * mat_b(), expected);

        let mut a = mat_a();
        a = a * mat_b();
        assert_eq!(a, expected);

        let a = mat_a();
        let mut b = mat_b();
        b = a * b;
        assert_eq!(b, expected);
        assert_eq!(a, mat_a());

        let mut a = mat_a();
        a = a * a;
        assert_eq!(a, Mat4f::from_translation(vec3(2.0, 4.0, 6.0)));

        let mut a = mat_a();
        a *= mat_b();
        assert_eq!(a, expected);
    }

    #[test]
    fn translate_scale() {
        assert_eq!(
            mat_a().translate(vec3(4.0, 5.0, 6.0)),
            Mat4f::from_translation(vec3(5.0, 7.0, 9.0))
        );

        let scaled = mat_a().scale(vec3(4.0, 5.0, 6.0));
        assert_eq!(
            scaled,
            Mat4f::from_columns([
                [4.0, 0.0, 0.0, 0.0],
                [0.0, 5.0, 0.0, 0.0],
                [0.0, 0.0, 6.0, 0.0],
                [1.0, 2.0, 3.0, 1.0],
            ])
        );
        assert_eq!(scaled, mat_a() * Mat4f::from_scaling(vec3(4.0, 5.0, 6.0)));
    }

    #[test]
    fn rotate() {
        let (s, c) = FRAC_PI_2.sin_cos();
        let expected = Mat4f::from_columns([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [1.0, 2.0, 3.0, 1.0],
        ]);

        let rotated = mat_a().rotate(Vec3f::X, FRAC_PI_2).unwrap();
        assert_approx_eq!(rotated, expected).abs(1e-6);
        assert_approx_eq!(mat_a().rotate_x(FRAC_PI_2), expected).abs(1e-6);

        // Axes don't have to be normalized.
        let rotated = mat_a().rotate(vec3(10.0, 0.0, 0.0), FRAC_PI_2).unwrap();
        assert_approx_eq!(rotated, expected).abs(1e-6);

        assert_eq!(mat_a().rotate(Vec3f::ZERO, FRAC_PI_2), None);
        assert_eq!(Mat4f::from_axis_angle(vec3(1e-7, 0.0, 0.0), 1.0), None);
    }

    #[test]
    fn rotate_yz() {
        let (s, c) = FRAC_PI_2.sin_cos();
        assert_approx_eq!(
            mat_a().rotate_y(FRAC_PI_2),
            Mat4f::from_columns([
                [c, 0.0, -s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [s, 0.0, c, 0.0],
                [1.0, 2.0, 3.0, 1.0],
            ])
        )
        .abs(1e-6);
        assert_approx_eq!(
            mat_a().rotate_z(FRAC_PI_2),
            Mat4f::from_columns([
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [1.0, 2.0, 3.0, 1.0],
            ])
        )
        .abs(1e-6);

        for angle in [0.3, -1.1, 2.5] {
            assert_approx_eq!(
                Mat4f::from_rotation_y(angle),
                Mat4f::from_axis_angle(Vec3f::Y, angle).unwrap()
            )
            .abs(1e-6);
            assert_approx_eq!(
                Mat4f::from_rotation_z(angle),
                Mat4f::from_axis_angle(Vec3f::Z, angle).unwrap()
            )
            .abs(1e-6);
        }
    }

    #[test]
    fn translation() {
        assert_eq!(Mat4f::IDENTITY.translation(), Vec3f::ZERO);
        assert_eq!(mat_b().translation(), vec3(4.0, 5.0, 6.0));

        let q = Quat::from_axis_angle(vec3(0.26726124, 0.534522474, 0.8017837), 0.55);
        let mat = Mat4f::from_rotation_translation(q, vec3(5.0, 6.0, 7.0));
        assert_eq!(mat.translation(), vec3(5.0, 6.0, 7.0));
    }

    #[test]
    fn scaling() {
        assert_eq!(Mat4f::IDENTITY.scaling(), vec3(1.0, 1.0, 1.0));
        assert_eq!(
            Mat4f::from_scaling(vec3(4.0, 5.0, 6.0)).scaling(),
            vec3(4.0, 5.0, 6.0)
        );

        let q = Quat::from_axis_angle(Vec3f::X, 0.5);
        let mat = Mat4f::from_rotation_translation(q, vec3(5.0, 6.0, 7.0));
        assert_approx_eq!(mat.scaling(), vec3(1.0, 1.0, 1.0)).abs(1e-6);

        let q = Quat::from_axis_angle(Vec3f::Y, 0.7);
        let mat = Mat4f::from_translation_rotation_scale(vec3(1.0, 2.0, 3.0), q, vec3(5.0, 6.0, 7.0));
        assert_approx_eq!(mat.scaling(), vec3(5.0, 6.0, 7.0)).abs(1e-5);
    }

    #[test]
    fn rotation() {
        assert_approx_eq!(Mat4f::IDENTITY.rotation(), Quat::IDENTITY);
        assert_approx_eq!(mat_b().rotation(), Quat::IDENTITY);

        let axis = vec3(1.0, 5.0, 2.0).normalize();
        let angle = 0.78972;
        let q = Quat::from_axis_angle(axis, angle);
        let mat = Mat4f::from_rotation_translation(q, vec3(5.0, 6.0, 7.0));

        let (out_axis, out_angle) = mat.rotation().axis_angle();
        assert_approx_eq!(out_axis, axis).abs(1e-5);
        assert_approx_eq!(out_angle, angle).abs(1e-5);
    }

    #[test]
    fn rotation_branches() {
        // Rotations of ~180° have a negative trace and exercise each diagonal branch.
        for axis in [Vec3f::X, Vec3f::Y, Vec3f::Z, vec3(1.0, 1.0, 0.0).normalize()] {
            let q = Quat::from_axis_angle(axis, PI * 0.95);
            let scale = vec3(2.0, 0.5, 3.0);
            let mat = Mat4f::from_translation_rotation_scale(Vec3f::ZERO, q, scale);
            assert!(Mat3::from(q).trace() < 0.0);

            let out = mat.rotation();
            assert!(
                out.approx_equals_with(&q, 1e-5) || out.approx_equals_with(&-q, 1e-5),
                "{out:?} != {q:?}"
            );
        }
    }

    #[test]
    fn decompose_roundtrip() {
        let t = vec3(-3.0, 0.5, 12.0);
        let r = Quat::from_euler(Degrees(30.0), Degrees(-45.0), Degrees(10.0));
        let s = vec3(1.5, 2.0, 0.25);

        let (t2, r2, s2) = Mat4f::from_translation_rotation_scale(t, r, s).decompose();
        assert_eq!(t2, t);
        assert_approx_eq!(r2, r).abs(1e-5);
        assert_approx_eq!(s2, s).abs(1e-5);

        // `T * R * S` equals the product of the individual matrices.
        let composed = Mat4f::from_translation(t) * Mat4f::from(r) * Mat4f::from_scaling(s);
        assert!(Mat4f::from_translation_rotation_scale(t, r, s).approx_equals(&composed));
    }

    #[test]
    fn quat_matrix_agrees_with_axis_angle() {
        let axis = vec3(0.3, -1.0, 0.6);
        let q = Quat::from_axis_angle(axis.normalize(), 1.3);
        let mat = Mat4f::from_axis_angle(axis, 1.3).unwrap();
        assert_approx_eq!(Mat4f::from(q), mat).abs(1e-6);
    }

    #[test]
    fn normal_matrix() {
        let mat = Mat4f::from_scaling(vec3(2.0, 4.0, 8.0)).translate(vec3(1.0, 1.0, 1.0));
        let normal = mat.normal_matrix().unwrap();
        assert_eq!(normal, Matrix::from_diagonal([0.5, 0.25, 0.125]));

        assert_eq!(Mat4f::from_scaling(vec3(1.0, 0.0, 1.0)).normal_matrix(), None);
    }

    #[test]
    fn transform_point() {
        let mat = Mat4f::from_rotation_z(FRAC_PI_2).translate(vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(mat.transform_point(Vec3f::ZERO), vec3(0.0, 1.0, 0.0)).abs(1e-6);

        let mat = Mat4f::from_diagonal([1.0, 1.0, 1.0, 2.0]);
        assert_eq!(mat.transform_point(vec3(2.0, 4.0, 6.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(mat * vec4(2.0, 4.0, 6.0, 1.0), vec4(2.0, 4.0, 6.0, 2.0));
    }

    #[test]
    fn frobenius_norm() {
        assert_approx_eq!(mat_a().frobenius_norm(), (4.0f32 + 1.0 + 4.0 + 9.0).sqrt());
    }
}
