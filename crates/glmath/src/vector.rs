use std::{array, fmt};

use crate::{
    approx::{ApproxEq, Comparison},
    traits::{Float, Number, Sqrt},
    One, Zero,
};

mod ops;
pub(crate) mod view;

/// A 2D vector, used for texture coordinates and 2D transforms.
pub type Vec2<T> = Vector<T, 2>;
pub type Vec2f = Vec2<f32>;
/// A 3D vector: positions, directions, scale factors and rotation axes.
pub type Vec3<T> = Vector<T, 3>;
pub type Vec3f = Vec3<f32>;
/// A 4D vector, mostly homogeneous coordinates and matrix columns.
pub type Vec4<T> = Vector<T, 4>;
pub type Vec4f = Vec4<f32>;

/// A column vector of `N` elements.
///
/// Create one with [`vec2`], [`vec3`] or [`vec4`], from an array via [`From`], or with
/// [`Vector::splat`] and [`Vector::from_fn`]. The constants [`Vector::ZERO`] and `X`, `Y`, `Z`,
/// `W` (unit axes) cover the common cases.
///
/// Vectors of 2 to 4 elements expose them as fields `x`, `y`, `z` and `w`; all vectors can be
/// indexed like arrays.
///
/// The layout is that of `[T; N]`, so with `T: bytemuck::Pod` a vector can be written into a
/// vertex or uniform buffer directly.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// The origin, or the null direction.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = Self([T::ONE, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// The +X axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// The +Y axis, "up" in most of the examples of this crate.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// The +Z axis. Right-handed views look down -Z.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// The homogeneous unit; also the identity quaternion's components.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Returns a vector with every element set to `elem`.
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Vec3f::splat(2.0), vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector from a closure that receives each element index.
    ///
    /// ```
    /// # use glmath::*;
    /// let m = Mat4f::from_translation(vec3(1.0, 2.0, 3.0));
    /// let column = Vector::from_fn(|row| m[(row, 3)]);
    /// assert_eq!(column, vec4(1.0, 2.0, 3.0, 1.0));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Unwraps the elements, typically for destructuring.
    ///
    /// ```
    /// # use glmath::*;
    /// let [x, y, z] = vec3(1, 2, 3).into_array();
    /// assert_eq!(x + y + z, 6);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the dot product of `self` and `other`.
    ///
    /// For unit vectors this is the cosine of the angle between them; it is 0 for perpendicular
    /// directions.
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
    /// assert_eq!(Vec3f::X.dot(Vec3f::Z), 0.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i] * other.0[i])
    }

    /// Returns the squared length, avoiding the square root of [`Vector::length`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the Euclidean length.
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(0.0, 3.0, 4.0).length(), 5.0);
    /// ```
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// The zero vector yields NaN elements. Callers that may see one (the view builders, axis-angle
    /// constructors) check the length first.
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3f::Z);
    /// assert!(Vec3f::ZERO.normalize().x.is_nan());
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Interpolates linearly from `self` (`t = 0`) to `other` (`t = 1`).
    pub fn lerp(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Returns whether all elements of `self` and `other` are approximately equal, using
    /// [`Comparison::DEFAULT`].
    pub fn approx_equals(&self, other: &Self) -> bool
    where
        T: Float + ApproxEq<Scalar = T>,
    {
        self.approx_eq(other, Comparison::DEFAULT)
    }

    /// Like [`Vector::approx_equals`], but with a caller-provided mixed tolerance.
    pub fn approx_equals_with(&self, other: &Self, tolerance: T) -> bool
    where
        T: Float + ApproxEq<Scalar = T>,
    {
        self.approx_eq(other, Comparison::Mixed(tolerance))
    }
}

impl<T> Vector<T, 3> {
    /// Appends a fourth element; `1` turns a point into homogeneous coordinates, `0` a
    /// direction.
    pub fn extend(self, w: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, w])
    }

    /// Returns the cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs, and follows the right-hand rule.
    ///
    /// ```
    /// # use glmath::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        vec3(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Float> Vector<T, 3> {
    /// Returns the angle between `self` and `other` in radians, in `[0, π]`.
    ///
    /// Neither input has to be normalized. If either is the zero vector, there is no angle to
    /// measure and π/2 is returned.
    ///
    /// ```
    /// # use glmath::*;
    /// assert_approx_eq!(Vec3f::X.angle(Vec3f::Y), std::f32::consts::FRAC_PI_2);
    /// assert_approx_eq!(Vec3f::X.angle(-Vec3f::X * 5.0), std::f32::consts::PI);
    /// ```
    pub fn angle(self, other: Self) -> T {
        let magnitude = (self.length2() * other.length2()).sqrt();
        if magnitude == T::ZERO {
            log::trace!("angle involving a zero vector, returning π/2");
            return T::PI * T::HALF;
        }
        (self.dot(other) / magnitude).clamp(-T::ONE, T::ONE).acos()
    }

    /// Rotates the point `self` around the X axis through `origin`, by `radians`.
    pub fn rotate_x(self, origin: Self, radians: T) -> Self {
        let [x, y, z] = (self - origin).0;
        let (s, c) = radians.sin_cos();
        vec3(x, y * c - z * s, y * s + z * c) + origin
    }

    /// Rotates the point `self` around the Y axis through `origin`, by `radians`.
    pub fn rotate_y(self, origin: Self, radians: T) -> Self {
        let [x, y, z] = (self - origin).0;
        let (s, c) = radians.sin_cos();
        vec3(z * s + x * c, y, z * c - x * s) + origin
    }

    /// Rotates the point `self` around the Z axis through `origin`, by `radians`.
    ///
    /// ```
    /// # use glmath::*;
    /// let p = vec3(0.0, 6.0, -5.0).rotate_z(vec3(0.0, 0.0, -5.0), std::f32::consts::PI);
    /// assert_approx_eq!(p, vec3(0.0, -6.0, -5.0)).abs(1e-6);
    /// ```
    pub fn rotate_z(self, origin: Self, radians: T) -> Self {
        let [x, y, z] = (self - origin).0;
        let (s, c) = radians.sin_cos();
        vec3(x * c - y * s, x * s + y * c, z) + origin
    }
}

impl<T> Vector<T, 4> {
    /// Drops `w`. Does not divide by it; see [`Mat4::transform_point`] for that.
    ///
    /// [`Mat4::transform_point`]: crate::Mat4::transform_point
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(elems: [T; N]) -> Self {
        Self(elems)
    }
}

/// Formats as a tuple, `(x, y, z)`.
impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
