mod ops;

use crate::{
    approx::{ApproxEq, Comparison},
    vec3, vec4, Degrees, Float, Mat3, Matrix, Number, One, Vec3, Vector, Zero,
};

/// A rotation in 3D, represented as a unit quaternion `(x, y, z, w)`.
///
/// `(x, y, z)` is the rotation axis scaled by the sine of half the angle and `w` is the cosine of
/// half the angle; all four are accessible as fields. `q` and `-q` describe the same rotation.
/// Non-unit quaternions are accepted everywhere, but only unit ones are rotations.
///
/// Multiplication (`a * b`) is the Hamilton product. When both operands are rotations, the result
/// applies `b` first and `a` second. Multiplying with a [`Vec3`] rotates the vector.
///
/// [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented, so quaternions can be uploaded
/// to GPU buffers when the element type allows this.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

/// A quaternion with [`f32`] elements.
pub type Quatf = Quat<f32>;

impl<T: Zero + One> Quat<T> {
    /// The rotation by zero radians.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Wraps `(x, y, z, w)` components stored in a [`Vector`], `w` last.
    pub fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Takes the vector part `x, y, z` first and the scalar part `w` last.
    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the `(x, y, z, w)` components as a [`Vector`].
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }
}

impl<T: Number> Quat<T> {
    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Squared length; 1 for rotations. Rotating a vector by a non-unit quaternion also scales it
    /// by this factor.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Returns the conjugate `(-x, -y, -z, w)`.
    ///
    /// For unit quaternions, this is the inverse rotation and cheaper than [`Quat::invert`].
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`), component-wise.
    ///
    /// The result is not normalized.
    pub fn lerp(self, other: Self, t: T) -> Self {
        Self::from_vec(self.vec.lerp(other.vec, t))
    }

    /// Returns whether all components of `self` and `other` are exactly equal.
    ///
    /// This is the same as `==`.
    pub fn exact_equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: Float> Quat<T> {
    /// Creates a rotation of `radians` around `axis`.
    ///
    /// `axis` is expected to be normalized. It is not normalized here, so a non-unit axis yields a
    /// non-unit quaternion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quat::from_axis_angle(Vec3f::X, std::f32::consts::FRAC_PI_2);
    /// assert_approx_eq!(q, Quat::from_components(0.707106, 0.0, 0.0, 0.707106)).abs(1e-6);
    /// ```
    #[doc(alias = "set_axis_angle")]
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        let v = axis * sin;
        Self::from_components(v.x, v.y, v.z, cos)
    }

    /// Creates a rotation of `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a rotation of `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a rotation of `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Returns `self * Quat::from_rotation_x(radians)`: the X rotation is applied first.
    pub fn rotate_x(self, radians: T) -> Self {
        self * Self::from_rotation_x(radians)
    }

    /// Returns `self * Quat::from_rotation_y(radians)`.
    pub fn rotate_y(self, radians: T) -> Self {
        self * Self::from_rotation_y(radians)
    }

    /// Returns `self * Quat::from_rotation_z(radians)`.
    pub fn rotate_z(self, radians: T) -> Self {
        self * Self::from_rotation_z(radians)
    }

    /// Creates a rotation from Euler angles given in degrees.
    ///
    /// The rotation around X is applied first, then the one around Y, then the one around Z. The
    /// result equals `Quat::from_rotation_z(z) * Quat::from_rotation_y(y) * Quat::from_rotation_x(x)`
    /// (with the angles converted to radians).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quat::from_euler(Degrees(-90.0), Degrees(0.0), Degrees(0.0));
    /// assert_approx_eq!(q * Vec3f::Y, vec3(0.0, 0.0, -1.0)).abs(1e-6);
    /// ```
    #[doc(alias = "euler")]
    pub fn from_euler(x: Degrees<T>, y: Degrees<T>, z: Degrees<T>) -> Self {
        let (sx, cx) = (x.to_radians() * T::HALF).sin_cos();
        let (sy, cy) = (y.to_radians() * T::HALF).sin_cos();
        let (sz, cz) = (z.to_radians() * T::HALF).sin_cos();

        Self::from_components(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Converts a rotation matrix to a quaternion.
    ///
    /// If the trace is positive, the real part is computed first. Otherwise the computation starts
    /// at the largest diagonal element, which keeps the square root argument away from zero.
    ///
    /// The result is only normalized if `m` is a pure rotation. If `m` contains uniform scaling,
    /// call [`Quat::normalize`] on the result.
    pub fn from_mat3(m: Mat3<T>) -> Self {
        let trace = m.trace();
        if trace > T::ZERO {
            let root = (trace + T::ONE).sqrt(); // 2w
            let w = T::HALF * root;
            let root = T::HALF / root; // 1/(4w)
            return Self::from_components(
                (m[(2, 1)] - m[(1, 2)]) * root,
                (m[(0, 2)] - m[(2, 0)]) * root,
                (m[(1, 0)] - m[(0, 1)]) * root,
                w,
            );
        }

        let mut i = 0;
        if m[(1, 1)] > m[(0, 0)] {
            i = 1;
        }
        if m[(2, 2)] > m[(i, i)] {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let mut vec = Vector::ZERO;
        let root = (m[(i, i)] - m[(j, j)] - m[(k, k)] + T::ONE).sqrt();
        vec[i] = T::HALF * root;
        let root = T::HALF / root;
        vec[3] = (m[(k, j)] - m[(j, k)]) * root;
        vec[j] = (m[(i, j)] + m[(j, i)]) * root;
        vec[k] = (m[(i, k)] + m[(k, i)]) * root;
        Self::from_vec(vec)
    }

    /// Creates a rotation from the three axes of a camera-like frame.
    ///
    /// - `view` is the direction the frame looks at.
    /// - `right` and `up` complete the frame.
    ///
    /// The rows of the 3x3 matrix `[right; up; -view]` are converted via [`Quat::from_mat3`] and
    /// the result is normalized. With the OpenGL defaults (`view = -Z`, `right = X`, `up = Y`),
    /// this is the identity rotation.
    #[doc(alias = "set_axes")]
    pub fn from_axes(view: Vec3<T>, right: Vec3<T>, up: Vec3<T>) -> Self {
        Self::from_mat3(Matrix::from_rows([right, up, -view])).normalize()
    }

    /// Creates the shortest rotation that turns the unit vector `from` into the unit vector `to`.
    ///
    /// If the vectors point in opposite directions, the rotation is by π around an axis
    /// perpendicular to `from` (`X × from`, or `Y × from` if that is too short).
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quat::rotation_to(Vec3f::Y, Vec3f::X);
    /// assert_approx_eq!(q * Vec3f::Y, Vec3f::X).abs(1e-6);
    /// ```
    pub fn rotation_to(from: Vec3<T>, to: Vec3<T>) -> Self {
        let dot = from.dot(to);
        if dot < T::TOLERANCE - T::ONE {
            log::trace!("`rotation_to` vectors are opposed, rotating around a perpendicular axis");
            let mut axis = Vec3::<T>::X.cross(from);
            if axis.length() < T::TOLERANCE {
                axis = Vec3::<T>::Y.cross(from);
            }
            Self::from_axis_angle(axis.normalize(), T::PI)
        } else if dot > T::ONE - T::TOLERANCE {
            Self::IDENTITY
        } else {
            let axis = from.cross(to);
            Self::from_components(axis.x, axis.y, axis.z, T::ONE + dot).normalize()
        }
    }

    /// Returns the rotation axis and angle (in radians) of this unit quaternion.
    ///
    /// The angle lies in `[0, 2π]`. If the angle is (close to) a multiple of 2π, the axis is
    /// arbitrary and the X axis is returned.
    ///
    /// Converting the result back via [`Quat::from_axis_angle`] reproduces `self`.
    #[doc(alias = "get_axis_angle")]
    pub fn axis_angle(&self) -> (Vec3<T>, T) {
        let radians = self.w.clamp(-T::ONE, T::ONE).acos() * T::TWO;
        let sin = (radians * T::HALF).sin();
        let axis = if sin > T::TOLERANCE {
            vec3(self.x, self.y, self.z) / sin
        } else {
            Vec3::<T>::X
        };
        (axis, radians)
    }

    /// Returns the angle (in radians) of the rotation that turns `self` into `other`, in
    /// `[0, 2π]`.
    ///
    /// This is the angle of `self.conjugate() * other`, so both quaternions should be normalized.
    ///
    /// The angle comes from `acos` of a value close to 1 when the inputs are close, so it is
    /// imprecise near zero: with `f32`, `a.angle_to(a)` is typically around `1e-3`, not `0`.
    /// The result also depends on the sign of `other`. `a.angle_to(-a)` is 2π, even though `a`
    /// and `-a` are the same rotation.
    #[doc(alias = "get_angle")]
    pub fn angle_to(self, other: Self) -> T {
        (self.conjugate() * other).axis_angle().1
    }

    /// Returns the multiplicative inverse of this quaternion.
    ///
    /// The zero quaternion has no inverse; it is returned unchanged.
    pub fn invert(self) -> Self {
        let dot = self.length2();
        if dot == T::ZERO {
            log::trace!("inverting the zero quaternion");
            return self;
        }
        Self::from_vec(self.conjugate().vec / dot)
    }

    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Scales to unit length, turning any non-zero quaternion into a rotation.
    ///
    /// The zero quaternion is returned unchanged.
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > T::ZERO {
            Self::from_vec(self.vec / len)
        } else {
            self
        }
    }

    /// Spherical linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Interpolation always takes the shorter arc: if the quaternions lie in opposite hemispheres,
    /// `other` is negated first (which represents the same rotation). When the quaternions are
    /// (nearly) equal, this falls back to a normalized linear interpolation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use glmath::*;
    /// let q = Quatf::IDENTITY.slerp(Quat::from_components(0.0, 1.0, 0.0, 0.0), 0.5);
    /// assert_approx_eq!(q, Quat::from_components(0.0, 0.707106, 0.0, 0.707106)).abs(1e-6);
    /// ```
    pub fn slerp(self, other: Self, t: T) -> Self {
        let mut cos = self.dot(other);
        let mut other = other;
        if cos < T::ZERO {
            cos = -cos;
            other = -other;
        }

        if T::ONE - cos > T::TOLERANCE {
            let omega = cos.acos();
            let sin = omega.sin();
            let scale0 = ((T::ONE - t) * omega).sin() / sin;
            let scale1 = (t * omega).sin() / sin;
            Self::from_vec(self.vec * scale0 + other.vec * scale1)
        } else {
            self.lerp(other, t).normalize()
        }
    }

    /// Spherical quadrangle interpolation between `self` and `d`, using `b` and `c` as control
    /// points.
    pub fn sqlerp(self, b: Self, c: Self, d: Self, t: T) -> Self {
        let outer = self.slerp(d, t);
        let inner = b.slerp(c, t);
        outer.slerp(inner, T::TWO * t * (T::ONE - t))
    }

    /// Natural logarithm.
    pub fn ln(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        let r = (x * x + y * y + z * z).sqrt();
        let t = if r > T::ZERO {
            r.atan2(w) / r
        } else {
            T::ZERO
        };
        Self::from_components(x * t, y * t, z * t, T::HALF * self.length2().ln())
    }

    /// Exponential function.
    pub fn exp(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        let r = (x * x + y * y + z * z).sqrt();
        let et = w.exp();
        let s = if r > T::ZERO {
            et * r.sin() / r
        } else {
            T::ZERO
        };
        Self::from_components(x * s, y * s, z * s, et * r.cos())
    }

    /// Raises this unit quaternion to a real power.
    ///
    /// For rotations, this scales the rotation angle by `exponent`: `pow(q, 2.0)` equals `q * q`
    /// and `pow(q, -1.0)` equals the conjugate. The result is normalized.
    ///
    /// The logarithm taken is the principal one, which puts the half-angle of `self` in `[0, π]`,
    /// so `q.pow(k).pow(1.0 / k)` only returns `q` while `k` times that half-angle stays below π.
    /// Quaternions with `w >= 0` have a half-angle of at most π/2 and round-trip for `|k| < 2`.
    /// With `w < 0`, `k = 2` already returns `-q` (the same rotation), and larger powers can
    /// land on a different rotation.
    pub fn pow(self, exponent: T) -> Self {
        Self::from_vec(self.ln().vec * exponent).exp().normalize()
    }

    /// Converts this unit quaternion to a 3x3 rotation matrix.
    pub fn to_mat3(self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let xx = x * x2;
        let xy = x * y2;
        let xz = x * z2;
        let yy = y * y2;
        let yz = y * z2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;

        Matrix::from_columns([
            [T::ONE - (yy + zz), xy + wz, xz - wy],
            [xy - wz, T::ONE - (xx + zz), yz + wx],
            [xz + wy, yz - wx, T::ONE - (xx + yy)],
        ])
    }

    /// Rotates `v` by this unit quaternion.
    ///
    /// Same as `self * v`.
    pub fn rotate_vector(self, v: Vec3<T>) -> Vec3<T> {
        let q = vec3(self.x, self.y, self.z);
        let uv = q.cross(v);
        let uuv = q.cross(uv);
        v + uv * (T::TWO * self.w) + uuv * T::TWO
    }

    /// Returns whether all components of `self` and `other` are approximately equal, using
    /// [`Comparison::DEFAULT`].
    ///
    /// `q` and `-q` represent the same rotation, but do not compare equal.
    pub fn approx_equals(&self, other: &Self) -> bool
    where
        T: ApproxEq<Scalar = T>,
    {
        self.approx_eq(other, Comparison::DEFAULT)
    }

    /// Like [`Quat::approx_equals`], but with a caller-provided mixed tolerance.
    pub fn approx_equals_with(&self, other: &Self, tolerance: T) -> bool
    where
        T: ApproxEq<Scalar = T>,
    {
        self.approx_eq(other, Comparison::Mixed(tolerance))
    }
}

impl<T: Float> From<Quat<T>> for Matrix<T, 3, 3> {
    fn from(rotation: Quat<T>) -> Self {
        rotation.to_mat3()
    }
}
