//! View and projection matrices.
//!
//! All of these use a right-handed eye space (the camera looks down -Z) and map depth to the clip
//! space range `[-1, 1]`, as OpenGL does. Perspective projections put `-1` into the `w` row of
//! the third column, so `w_clip = -z_eye`.

use crate::{Float, Matrix, Vec3, Vector};

/// Normalizes `v`, leaving zero-length vectors as zero instead of producing NaN.
fn normalize_or_zero<T: Float>(v: Vec3<T>) -> Vec3<T> {
    let len = v.length();
    if len == T::ZERO {
        v
    } else {
        v / len
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Creates a view matrix for a camera at `eye` looking at `center`.
    ///
    /// The result maps the viewing direction `center - eye` to -Z, `up` (projected onto the plane
    /// perpendicular to the viewing direction) to +Y, and their right-handed cross product to +X.
    /// The translation is folded in, so `eye` maps to the origin.
    ///
    /// If `eye` and `center` coincide (within [`Float::TOLERANCE`] per component), there is no
    /// viewing direction and the identity matrix is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let view = Mat4f::look_at(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0), Vec3f::Y);
    /// assert_eq!(view, Mat4f::from_translation(vec3(0.0, 0.0, -1.0)));
    /// ```
    pub fn look_at(eye: Vec3<T>, center: Vec3<T>, up: Vec3<T>) -> Self {
        let forward = eye - center;
        if forward.as_array().iter().all(|d| d.abs() < T::TOLERANCE) {
            log::trace!("`look_at` eye and center coincide, returning identity");
            return Self::IDENTITY;
        }

        let z = forward.normalize();
        let x = normalize_or_zero(up.cross(z));
        let y = normalize_or_zero(z.cross(x));

        Matrix::from_rows([
            x.extend(-x.dot(eye)),
            y.extend(-y.dot(eye)),
            z.extend(-z.dot(eye)),
            Vector::W,
        ])
    }

    /// Creates a matrix that places an object at `eye` and orients its +Z axis away from `target`.
    ///
    /// Unlike [`Matrix::look_at`], this is a model (object-to-world) transform rather than a
    /// view transform, and `up` is used verbatim as the second basis column: it is not made
    /// perpendicular to the viewing direction. The result is only orthonormal if `up` is a unit
    /// vector perpendicular to `eye - target`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let model = Mat4f::target_to(vec3(0.0, 0.0, 1.0), vec3(0.0, 0.0, -1.0), Vec3f::Y);
    /// assert_eq!(model, Mat4f::from_translation(vec3(0.0, 0.0, 1.0)));
    /// ```
    pub fn target_to(eye: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        let z = normalize_or_zero(eye - target);
        let x = normalize_or_zero(up.cross(z));

        Matrix::from_columns([
            x.extend(T::ZERO),
            up.extend(T::ZERO),
            z.extend(T::ZERO),
            eye.extend(T::ONE),
        ])
    }

    /// Creates a symmetric perspective projection matrix.
    ///
    /// - `fovy`: vertical field of view in radians.
    /// - `aspect`: width divided by height of the viewport.
    /// - `near`, `far`: distances to the clipping planes. With `far` set to [`None`] or to
    ///   infinity, the far plane is placed at infinity.
    ///
    /// The infinite projection is the limit of the finite one as `far` goes to infinity: the depth
    /// terms `(far + near) / (near - far)` and `2 * far * near / (near - far)` tend to `-1` and
    /// `-2 * near`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let proj = Mat4f::perspective(std::f32::consts::FRAC_PI_2, 1.0, 0.0, Some(1.0));
    /// assert_approx_eq!(proj, Mat4f::from_columns([
    ///     [1.0, 0.0, 0.0, 0.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, -1.0, -1.0],
    ///     [0.0, 0.0, 0.0, 0.0],
    /// ])).abs(1e-6);
    /// ```
    pub fn perspective(fovy: T, aspect: T, near: T, far: Option<T>) -> Self {
        let f = T::ONE / (fovy * T::HALF).tan();

        let (depth_scale, depth_offset) = match far.filter(|far| far.is_finite()) {
            Some(far) => {
                let nf = T::ONE / (near - far);
                ((far + near) * nf, T::TWO * far * near * nf)
            }
            None => (-T::ONE, -T::TWO * near),
        };

        let mut mat = Self::ZERO;
        mat[(0, 0)] = f / aspect;
        mat[(1, 1)] = f;
        mat[(2, 2)] = depth_scale;
        mat[(3, 2)] = -T::ONE;
        mat[(2, 3)] = depth_offset;
        mat
    }

    /// Creates a perspective projection matrix for an arbitrary (possibly off-axis) view frustum.
    ///
    /// `left`, `right`, `bottom` and `top` describe the frustum bounds on the near plane.
    ///
    /// For a symmetric frustum this agrees with [`Matrix::perspective`].
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let rl = T::ONE / (right - left);
        let tb = T::ONE / (top - bottom);
        let nf = T::ONE / (near - far);

        let mut mat = Self::ZERO;
        mat[(0, 0)] = near * T::TWO * rl;
        mat[(1, 1)] = near * T::TWO * tb;
        mat[(0, 2)] = (right + left) * rl;
        mat[(1, 2)] = (top + bottom) * tb;
        mat[(2, 2)] = (far + near) * nf;
        mat[(3, 2)] = -T::ONE;
        mat[(2, 3)] = far * near * T::TWO * nf;
        mat
    }

    /// Creates an orthographic projection matrix, mapping the given box to the clip space cube.
    pub fn ortho(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let lr = T::ONE / (left - right);
        let bt = T::ONE / (bottom - top);
        let nf = T::ONE / (near - far);

        let mut mat = Self::IDENTITY;
        mat[(0, 0)] = -T::TWO * lr;
        mat[(1, 1)] = -T::TWO * bt;
        mat[(2, 2)] = T::TWO * nf;
        mat[(0, 3)] = (left + right) * lr;
        mat[(1, 3)] = (top + bottom) * bt;
        mat[(2, 3)] = (far + near) * nf;
        mat
    }
}
