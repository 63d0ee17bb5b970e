//! Operators: indexing, comparison, and the vector-space operations the transform code needs.
//!
//! Vectors add and subtract element-wise and scale by a scalar. There is no element-wise product;
//! non-uniform scaling is done by matrices.

use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use crate::approx::{ApproxEq, Comparison};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N> {
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const N: usize> Eq for Vector<T, N> {}

/// Allows `assert_eq!(v, [1, 2, 3])`.
impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Vector<T, N> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.0 == *other
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for Vector<T, N> {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, comparison: Comparison<T::Scalar>) -> bool {
        self.0.approx_eq(&other.0, comparison)
    }
}

/// Reverses the direction.
impl<T: Neg<Output = T>, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

macro_rules! elementwise {
    ($($op:ident::$method:ident),+) => {
        $(
            impl<T: $op<Output = T> + Copy, const N: usize> $op for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Vector::from_fn(|i| $op::$method(self.0[i], rhs.0[i]))
                }
            }
        )+
    };
}

macro_rules! scale_by {
    ($($op:ident::$method:ident),+) => {
        $(
            impl<T: $op<Output = T> + Copy, const N: usize> $op<T> for Vector<T, N> {
                type Output = Self;

                #[inline]
                fn $method(self, factor: T) -> Self {
                    self.map(|elem| $op::$method(elem, factor))
                }
            }
        )+
    };
}

elementwise!(Add::add, Sub::sub);
scale_by!(Mul::mul, Div::div);
