//! The crate-wide scalar type and its constants.

use crate::{approx::NearlyEq, Float};

/// The scalar type used by the [`Vector2`][crate::Vector2], [`Matrix4`][crate::Matrix4],
/// [`Quaternion`][crate::Quaternion], ... aliases.
///
/// This is [`f64`] by default, and [`f32`] if the `f32` cargo feature is enabled.
#[cfg(feature = "f32")]
pub type Real = f32;
/// The scalar type used by the [`Vector2`][crate::Vector2], [`Matrix4`][crate::Matrix4],
/// [`Quaternion`][crate::Quaternion], ... aliases.
///
/// This is [`f64`] by default, and [`f32`] if the `f32` cargo feature is enabled.
#[cfg(not(feature = "f32"))]
pub type Real = f64;

/// Archimedes' constant (π).
pub const PI: Real = <Real as Float>::PI;
/// π/2
pub const HALF_PI: Real = <Real as Float>::HALF_PI;
/// π/4
pub const QUARTER_PI: Real = <Real as Float>::QUARTER_PI;
/// The full circle constant (2π).
pub const TWO_PI: Real = <Real as Float>::TWO_PI;
pub const DEGREES_PER_RADIAN: Real = <Real as Float>::DEGREES_PER_RADIAN;
pub const RADIANS_PER_DEGREE: Real = <Real as Float>::RADIANS_PER_DEGREE;
/// Tolerance of [`nearly_equal`].
pub const EPSILON: Real = <Real as Float>::EPSILON;
/// The unit of least precision of [`Real`] around `1.0`.
pub const MACHINE_EPSILON: Real = <Real as Float>::MACHINE_EPSILON;

/// Returns `true` if `|a - b| < EPSILON`.
///
/// This is an absolute comparison, so it is only meaningful for values of magnitude around 1.
/// Comparisons involving NaN are always `false`.
///
/// # Examples
///
/// ```
/// # use vectormath::*;
/// assert!(nearly_equal(0.1 + 0.2, 0.3));
/// assert!(!nearly_equal(Real::NAN, Real::NAN));
/// ```
#[inline]
pub fn nearly_equal(a: Real, b: Real) -> bool {
    a.nearly_eq(&b)
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Real) -> Real {
    degrees * RADIANS_PER_DEGREE
}

/// Converts an angle in radians to degrees.
#[inline]
pub fn rad_to_deg(radians: Real) -> Real {
    radians * DEGREES_PER_RADIAN
}
