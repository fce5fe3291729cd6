//! Approximate equality.
//!
//! [`ApproxEq`] is the near-equality primitive behind the element-wise comparisons of
//! [`equal`][crate::equal] and [`equal_eps`][crate::equal_eps], and behind the
//! [`assert_approx_eq!`][crate::assert_approx_eq] test macro. Its default tolerance is provided by
//! [`DefaultEpsilon`].

mod impls;

use std::{fmt, panic::Location};

/// Near-equality of floating-point values and of containers holding them.
///
/// A container is near-equal to another when each pair of elements is. Elements are visited in
/// index order and the first mismatch ends the comparison.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The tolerance type, which is the underlying float type ([`f32`] or [`f64`]).
    type Epsilon: DefaultEpsilon + Copy;

    /// Returns whether `self` and `other` differ by at most `epsilon`.
    ///
    /// An infinity only matches an infinity of the same sign. `NaN` matches nothing, not even
    /// itself.
    fn abs_diff_eq(&self, other: &Rhs, epsilon: Self::Epsilon) -> bool;

    /// Returns whether `self` and `other` are at most `max_ulps` representable values apart.
    ///
    /// Both zeroes match each other. Otherwise values of opposite sign never match, and `NaN`
    /// matches nothing.
    fn ulps_diff_eq(&self, other: &Rhs, max_ulps: u32) -> bool;
}

/// Default tolerances of a scalar type.
pub trait DefaultEpsilon {
    /// Tolerance of [`ApproxEq::abs_diff_eq`] when the caller does not pick one.
    ///
    /// Used by [`equal`][crate::equal] and by a bare [`assert_approx_eq!`][crate::assert_approx_eq].
    const DEFAULT_EPSILON: Self;

    /// Default distance for [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS: u32;
}

impl DefaultEpsilon for f32 {
    const DEFAULT_EPSILON: Self = 1.0e-5;
    const DEFAULT_ULPS: u32 = 4;
}

impl DefaultEpsilon for f64 {
    const DEFAULT_EPSILON: Self = 1.0e-10;
    const DEFAULT_ULPS: u32 = 4;
}

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The check runs when the value is dropped at the end of the statement, so the tolerance can be
/// chained onto the macro call. Without [`eps`][Asserter::eps] or [`ulps`][Asserter::ulps] the
/// values are compared against [`DEFAULT_EPSILON`][DefaultEpsilon::DEFAULT_EPSILON]. With both,
/// passing either test counts as a match.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    eps: Option<T::Epsilon>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            eps: None,
            ulps: None,
        }
    }

    /// Compares with [`ApproxEq::abs_diff_eq`] and the given tolerance.
    pub fn eps(&mut self, eps: T::Epsilon) -> &mut Self {
        self.eps = Some(eps);
        self
    }

    /// Compares with [`ApproxEq::ulps_diff_eq`], allowing `ulps` representable values in between.
    ///
    /// Suits values of any magnitude, but not values near zero.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn matches(&self) -> bool {
        let eps = match (self.eps, self.ulps) {
            (None, None) => Some(T::Epsilon::DEFAULT_EPSILON),
            (eps, _) => eps,
        };
        let by_eps = eps.is_some_and(|eps| self.left.abs_diff_eq(self.right, eps));
        let by_ulps = self.ulps.is_some_and(|ulps| self.left.ulps_diff_eq(self.right, ulps));
        by_eps || by_ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, so the message names the macro's call site.
    fn drop(&mut self) {
        if self.matches() != (self.kind == AssertionKind::Eq) {
            report(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn report(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    let context = msg.map(|msg| format!(": {msg}")).unwrap_or_default();
    panic!(
        "assertion `left {op} right` failed at {location}{context}\n  left: {left:?}\n right: {right:?}"
    )
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Like [`assert_eq!`], but passes when the two sides are [`ApproxEq`] instead of equal.
///
/// The returned [`Asserter`] picks the tolerance.
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let third = 1.0f32 / 3.0;
/// assert_approx_eq!(third * 3.0, 1.0);
/// assert_approx_eq!(2.5, 2.0).eps(0.5);
/// assert_approx_eq!(0.5, 0.5 + f64::EPSILON / 2.0).ulps(1);
/// assert_approx_eq!(vec3(0.1 + 0.2, 0.0, 1.0), vec3(0.3, 0.0, 1.0));
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// The negation of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// assert_approx_ne!(2.5, 2.0).eps(0.25);
/// assert_approx_ne!(vec2(1.0f32, 0.0), vec2(1.0, 0.001));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Ne, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}
