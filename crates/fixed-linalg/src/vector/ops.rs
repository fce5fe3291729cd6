//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }

    fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, max_ulps)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Generates element-wise `Vector op Vector` and `Vector op= Vector` impls.
macro_rules! elementwise {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            impl<T, const N: usize> $trait<Vector<T, N>> for Vector<T, N>
            where
                T: $trait + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    Vector::from_fn(|i| self.0[i] $op rhs.0[i])
                }
            }

            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
                        lhs.$assign_method(rhs);
                    }
                }
            }
        )+
    };
}

elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// NB: element-wise `Vector * Vector` rules out a more generic `Mul<U> for Vector<T, N>` scaling impl,
// so scaling is only supported by the element type itself.

/// Generates `Vector op Scalar` and `Vector op= Scalar` impls.
macro_rules! scaling {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:tt;)+) => {
        $(
            impl<T, const N: usize> $trait<T> for Vector<T, N>
            where
                T: $trait + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $op rhs)
                }
            }

            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    for lhs in &mut self.0 {
                        lhs.$assign_method(rhs);
                    }
                }
            }
        )+
    };
}

scaling! {
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vec3f};

    #[test]
    fn arithmetic() {
        assert_eq!(vec2(1, 2) + vec2(10, 20), vec2(11, 22));
        assert_eq!(vec2(1, 2) - vec2(10, 20), vec2(-9, -18));
        assert_eq!(vec2(3, 4) * vec2(2, 3), vec2(6, 12));
        assert_eq!(vec2(8, 9) / vec2(2, 3), vec2(4, 3));
        assert_eq!(-vec3(1, -2, 3), vec3(-1, 2, -3));
    }

    #[test]
    fn scaling() {
        assert_eq!(vec3(1, 2, 3) * 2, vec3(2, 4, 6));
        assert_eq!(vec3(2.0, 4.0, 6.0) / 2.0, vec3(1.0, 2.0, 3.0));

        let mut v = Vec3f::X;
        v *= 3.0;
        v /= 2.0;
        assert_eq!(v, [1.5, 0.0, 0.0]);
    }

    #[test]
    fn assign() {
        let mut v = vec2(1, 1);
        v += vec2(1, 2);
        assert_eq!(v, vec2(2, 3));
        v -= vec2(2, 2);
        assert_eq!(v, vec2(0, 1));
        v *= vec2(5, 5);
        assert_eq!(v, vec2(0, 5));
    }
}
