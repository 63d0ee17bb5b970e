use super::{ApproxEq, Comparison};

macro_rules! scalar {
    ($($ty:ty),+) => {
        $(
            impl ApproxEq for $ty {
                type Scalar = Self;

                #[inline]
                fn approx_eq(&self, other: &Self, comparison: Comparison<Self>) -> bool {
                    comparison.admits(*self, *other)
                }
            }
        )+
    };
}
scalar!(f32, f64);

// Vectors and matrices store their elements in (nested) arrays.
impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    type Scalar = T::Scalar;

    fn approx_eq(&self, other: &Self, comparison: Comparison<T::Scalar>) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.approx_eq(b, comparison))
    }
}
