use std::{
    fmt,
    ops::{Deref, DerefMut, Mul, MulAssign, Neg},
};

use crate::{
    approx::{ApproxEq, Comparison},
    vector::view::XYZW,
    Float, Number, Quat, Vec3, Vector,
};

impl<T> Deref for Quat<T> {
    type Target = XYZW<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.vec
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.vec
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("Quat");
        for elem in self.vec.as_slice() {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, comparison: Comparison<T::Scalar>) -> bool {
        self.vec.approx_eq(&other.vec, comparison)
    }
}

/// Negates all four components.
///
/// The result represents the same rotation as `self`.
impl<T: Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Quat::from_vec(-self.vec)
    }
}

/// Hamilton product.
///
/// Operands are taken by value, so `a = a * b` and `b = a * b` are fine.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();

        Quat::from_components(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector, see [`Quat::rotate_vector`].
impl<T: Float> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        self.rotate_vector(rhs)
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Quat::from_vec(vec)
    }
}

impl<T> From<Quat<T>> for Vector<T, 4> {
    fn from(quat: Quat<T>) -> Self {
        quat.into_vec()
    }
}
