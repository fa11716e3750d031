//! Numeric capability traits shared by the vector, matrix and quaternion types.

use std::{fmt, ops};

use crate::approx::{ApproxEq, DefaultTolerances, NearlyEq};

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes sine and cosine of `self` at once.
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`] (resp.
/// [`f64::min`] and [`f64::max`]), so a NaN operand loses against a number. Integers use [`Ord`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

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

/// A trait for numeric types that support basic arithmetic operations.
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

/// Values that can be checked for, and forced into, finiteness.
pub trait Finite: Sized {
    /// Returns `true` if neither `self` nor any of its components is NaN or infinite.
    fn is_finite(&self) -> bool;

    /// Replaces NaN with zero and clamps infinities to the largest finite value of the same sign.
    #[must_use]
    fn make_finite(self) -> Self;
}

/// Floating-point scalars the transform algebra is implemented for.
///
/// This is implemented for [`f32`] and [`f64`]. The crate-wide scalar, [`Real`][crate::Real], is
/// one of the two depending on the enabled cargo feature.
pub trait Float:
    Number
    + Trig
    + Sqrt
    + MinMax
    + Finite
    + NearlyEq
    + ApproxEq<Tolerance = Self>
    + DefaultTolerances
    + PartialOrd
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + fmt::Debug
    + fmt::Display
{
    const TWO: Self;
    const HALF: Self;

    const PI: Self;
    const HALF_PI: Self;
    const QUARTER_PI: Self;
    const TWO_PI: Self;
    const DEGREES_PER_RADIAN: Self;
    const RADIANS_PER_DEGREE: Self;

    /// Absolute tolerance of the *nearly equal* comparison (see [`NearlyEq`]).
    const EPSILON: Self;
    /// Difference between `1.0` and the next larger representable number.
    const MACHINE_EPSILON: Self;
    /// Largest finite value.
    const MAX: Self;

    fn abs(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;

    /// Converts `self` from degrees to radians.
    fn to_radians(self) -> Self {
        self * Self::RADIANS_PER_DEGREE
    }

    /// Converts `self` from radians to degrees.
    fn to_degrees(self) -> Self {
        self * Self::DEGREES_PER_RADIAN
    }
}

macro_rules! int_impls {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! float_impls {
    ($t:ident, $epsilon:expr) => {
        impl Zero for $t {
            const ZERO: Self = 0.0;
        }

        impl One for $t {
            const ONE: Self = 1.0;
        }

        impl MinMax for $t {
            fn min(self, other: Self) -> Self {
                self.min(other)
            }

            fn max(self, other: Self) -> Self {
                self.max(other)
            }
        }

        impl Trig for $t {
            fn sin(self) -> Self {
                self.sin()
            }

            fn cos(self) -> Self {
                self.cos()
            }

            fn tan(self) -> Self {
                self.tan()
            }

            fn sin_cos(self) -> (Self, Self) {
                self.sin_cos()
            }

            fn asin(self) -> Self {
                self.asin()
            }

            fn acos(self) -> Self {
                self.acos()
            }

            fn atan2(self, other: Self) -> Self {
                self.atan2(other)
            }
        }

        impl Sqrt for $t {
            fn sqrt(self) -> Self {
                self.sqrt()
            }
        }

        impl Finite for $t {
            fn is_finite(&self) -> bool {
                $t::is_finite(*self)
            }

            fn make_finite(self) -> Self {
                if self.is_nan() {
                    0.0
                } else if self == $t::INFINITY {
                    $t::MAX
                } else if self == $t::NEG_INFINITY {
                    -$t::MAX
                } else {
                    self
                }
            }
        }

        impl Float for $t {
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;

            const PI: Self = std::$t::consts::PI;
            const HALF_PI: Self = std::$t::consts::FRAC_PI_2;
            const QUARTER_PI: Self = std::$t::consts::FRAC_PI_4;
            const TWO_PI: Self = std::$t::consts::TAU;
            const DEGREES_PER_RADIAN: Self = 180.0 / std::$t::consts::PI;
            const RADIANS_PER_DEGREE: Self = std::$t::consts::PI / 180.0;

            const EPSILON: Self = $epsilon;
            const MACHINE_EPSILON: Self = $t::EPSILON;
            const MAX: Self = $t::MAX;

            fn abs(self) -> Self {
                self.abs()
            }

            fn floor(self) -> Self {
                self.floor()
            }

            fn ceil(self) -> Self {
                self.ceil()
            }
        }
    };
}

// `f32` cannot resolve differences anywhere near 1e-12, so it gets a much coarser tolerance.
float_impls!(f32, 1e-4);
float_impls!(f64, 1e-12);
