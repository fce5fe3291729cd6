use super::ApproxEq;

macro_rules! float_impls {
    ($($float:ty),+) => {
        $(
            impl ApproxEq for $float {
                type Epsilon = Self;

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
                        return self == other;
                    }

                    (self - other).abs() <= epsilon
                }

                fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // `-0.0` == `+0.0`
                    }

                    if self.is_nan() || other.is_nan() {
                        return false;
                    }

                    let diff = self.to_bits().abs_diff(other.to_bits());
                    u64::from(diff) <= u64::from(max_ulps)
                }
            }
        )+
    };
}

float_impls!(f32, f64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &U, epsilon: Self::Epsilon) -> bool {
        T::abs_diff_eq(self, other, epsilon)
    }

    fn ulps_diff_eq(&self, other: &U, max_ulps: u32) -> bool {
        T::ulps_diff_eq(self, other, max_ulps)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &[U], epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }

    fn ulps_diff_eq(&self, other: &[U], max_ulps: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, max_ulps))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Epsilon = T::Epsilon;

    fn abs_diff_eq(&self, other: &[U; N], epsilon: Self::Epsilon) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), epsilon)
    }

    fn ulps_diff_eq(&self, other: &[U; N], max_ulps: u32) -> bool {
        self.as_slice().ulps_diff_eq(other.as_slice(), max_ulps)
    }
}
