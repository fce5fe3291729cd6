use std::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use crate::{approx::ApproxEq, Vector};

use super::Point;

impl<T, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Point<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, const N: usize> ApproxEq for Point<T, N>
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

/// Point - Point = Vector: the offset from `rhs` to `self`.
impl<T, const N: usize> Sub for Point<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vector<T, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

/// Point + Vector = Point.
impl<T, const N: usize> Add<Vector<T, N>> for Point<T, N>
where
    T: Add<Output = T> + Copy,
{
    type Output = Point<T, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        Point(self.0 + rhs)
    }
}

/// Point - Vector = Point.
impl<T, const N: usize> Sub<Vector<T, N>> for Point<T, N>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Point<T, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        Point(self.0 - rhs)
    }
}

impl<T, const N: usize> AddAssign<Vector<T, N>> for Point<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.0 += rhs;
    }
}

impl<T, const N: usize> SubAssign<Vector<T, N>> for Point<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.0 -= rhs;
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec2, vec3, Point2, Point3};

    #[test]
    fn offsets() {
        let a = Point3::from([1, 2, 3]);
        let b = Point3::from([4, 4, 4]);
        assert_eq!(b - a, vec3(3, 2, 1));
        assert_eq!(a - b, vec3(-3, -2, -1));
        assert_eq!(a + (b - a), b);
        assert_eq!(b - (b - a), a);
    }

    #[test]
    fn assign() {
        let mut p = Point2::from([0.5, 0.5]);
        p += vec2(1.0, -1.0);
        assert_eq!(p, Point2::from([1.5, -0.5]));
        p -= vec2(1.5, 1.5);
        assert_eq!(p, Point2::from([0.0, -2.0]));
    }

    #[test]
    fn approx() {
        let p = Point2::from([0.1 + 0.2, 1.0]);
        assert_approx_eq!(p, Point2::from([0.3, 1.0]));
        assert_approx_eq!(p, Point2::from([0.3, 1.0])).ulps(1);
    }
}
