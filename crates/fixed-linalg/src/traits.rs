//! Scalar capabilities required by the vector and matrix operations.

use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types with a multiplicative inverse for every non-zero value.
///
/// Only floating-point types implement this. Matrix inversion is bounded on it, so integer matrices
/// are rejected at compile time instead of truncating or panicking on a zero divisor.
pub trait Recip {
    /// Returns `1 / self`.
    fn recip(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is what the closed-form determinant and inverse formulas need from their scalar type.
/// Unsigned integers are excluded, since they can't be negated.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! float_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }
            impl Sqrt for $types {
                #[inline]
                fn sqrt(self) -> Self {
                    <$types>::sqrt(self)
                }
            }
            impl Recip for $types {
                #[inline]
                fn recip(self) -> Self {
                    <$types>::recip(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn two<T: Number>() -> T {
        T::ONE + T::ONE
    }

    #[test]
    fn number_consts() {
        assert_eq!(two::<i32>(), 2);
        assert_eq!(two::<f64>(), 2.0);
        assert_eq!(i8::ZERO - i8::ONE, -1);
    }

    #[test]
    fn sqrt() {
        assert_eq!(Sqrt::sqrt(16.0f32), 4.0);
        assert_eq!(Sqrt::sqrt(2.25f64), 1.5);
    }

    #[test]
    fn recip() {
        assert_eq!(Recip::recip(4.0f32), 0.25);
        assert_eq!(Recip::recip(-0.5f64), -2.0);
        assert_eq!(Recip::recip(0.0f64), f64::INFINITY);
    }
}
