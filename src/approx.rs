//! Approximate equality.
//!
//! Two flavors are provided:
//!
//! - [`NearlyEq`] is the comparison the transform algebra itself relies on (eg. to decide whether
//!   a vector is already normalized). It is a fixed, *absolute* comparison against
//!   [`Float::EPSILON`][crate::Float::EPSILON], so it only makes sense for values of magnitude
//!   around 1 (unit vectors, rotation matrices, normalized quaternions).
//! - [`ApproxEq`] is a configurable comparison (absolute, relative or ULPs-based) meant for tests,
//!   driven by the [`assert_approx_eq!`][crate::assert_approx_eq] and
//!   [`assert_approx_ne!`][crate::assert_approx_ne] macros.

mod impls;

use std::{fmt, panic::Location};

/// Component-wise *nearly equal* comparison (`~==`).
///
/// Scalars are nearly equal if `|a - b| < EPSILON`. Compound values are nearly equal if all of
/// their components are. NaN is never nearly equal to anything.
///
/// The comparison is representation-wise: a [`Quat`][crate::Quat] and its negation describe the
/// same rotation, but are *not* nearly equal.
pub trait NearlyEq<Rhs: ?Sized = Self> {
    /// Returns `true` if `self` and `other` differ by less than the nearly-equal tolerance in every
    /// component.
    fn nearly_eq(&self, other: &Rhs) -> bool;
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their fields are.
///
/// For more information on the subtleties of approximate floating-point number comparison, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type representing the tolerance for absolute and relative comparisons ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// The values are equal if their absolute difference is at most `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// The values are equal if their absolute difference is at most `rel_tolerance` times the
    /// larger of the two magnitudes.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Compares `self` and `other` by counting the [*units in the last place*] (ULPs) between them.
    ///
    /// `NaN` is never equal to anything. `-0.0` and `+0.0` are equal, other values with differing
    /// signs are not.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by [`Asserter`] when no comparison method is configured.
pub trait DefaultTolerances {
    /// Default tolerance for *absolute comparisons* via [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for *relative comparisons* via [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for *ULPs comparisons* via [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] can select the comparison(s) to perform. If several
/// are selected, the values compare equal if *any* of them says so.
///
/// Without explicit configuration, the values compare equal if an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`] or a relative comparison with [`DEFAULT_REL_TOLERANCE`] succeeds. For
/// floats, the default absolute tolerance is the crate's nearly-equal epsilon.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
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
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Perform an *absolute comparison* with the given tolerance.
    ///
    /// Best suited for values close to zero, such as the off-diagonal entries of a rotation matrix.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* with the given tolerance.
    ///
    /// Best suited for values far from zero, such as translations or projection matrix entries.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Perform a comparison by counting the [*units in the last place*] between the values.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |abs| self.left.abs_diff_eq(self.right, abs));
        let rel = self
            .rel
            .map_or(false, |rel| self.left.rel_diff_eq(self.right, rel));
        let ulps = self
            .ulps
            .map_or(false, |ulps| self.left.ulps_diff_eq(self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` does not work on destructors, so the location is captured in `new`.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location points into `drop`; the assertion's own location is printed instead.
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can configure the comparison.
///
/// # Examples
///
/// ```
/// # use vectormath::*;
/// let q = Quat::from_axis_angle(vec4(0.0, 0.0, 1.0, HALF_PI));
/// assert_approx_eq!(q * Vector3::X, Vector3::Y);
///
/// let far = vec3(1000.0, 0.0, 0.0);
/// assert_approx_eq!(far, vec3(1000.001, 0.0, 0.0)).rel(1e-5);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Counterpart of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use vectormath::*;
/// // The same rotation, but a different representation.
/// let q = Quat::from_axis_angle(vec4(1.0, 0.0, 0.0, 1.0));
/// assert_approx_ne!(q, -q);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::NearlyEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "decomposed scale")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 5.5, "decomposed scale");
    }

    #[test]
    fn default_tolerance_is_nearly_eq_epsilon() {
        assert_approx_eq!(1.0f64, 1.0 + 1e-13);
        assert_approx_ne!(0.0f64, 1e-11);
        assert_approx_eq!(0.0f32, 1e-5);
        assert_approx_ne!(0.0f32, 1e-3);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(100.0, 100.1).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_ne!(1000.0, 1001.0).rel(1e-4);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f64::EPSILON).ulps(0);
        assert_approx_eq!(-0.0, 0.0).ulps(0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(100);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(f64::MAX);
        assert_approx_ne!(f64::INFINITY, f64::MAX).rel(10000.0);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
    }

    #[test]
    fn nearly_eq_scalars() {
        assert!(1.0f64.nearly_eq(&(1.0 + 1e-13)));
        assert!(!1.0f64.nearly_eq(&(1.0 + 1e-11)));
        // Strict comparison: exactly `EPSILON` apart is not nearly equal.
        assert!(!0.0f64.nearly_eq(&1e-12));
        assert!(!f64::NAN.nearly_eq(&f64::NAN));
        assert!(!f64::INFINITY.nearly_eq(&f64::INFINITY));
        assert!(0.5f32.nearly_eq(&0.50001));
    }

    #[test]
    fn nearly_eq_arrays() {
        assert!([0.0f64, 1.0, 2.0].nearly_eq(&[1e-14, 1.0, 2.0 - 1e-14]));
        assert!(![0.0f64, 1.0].nearly_eq(&[0.0, 1.1]));
    }
}
