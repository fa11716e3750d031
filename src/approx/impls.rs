use super::{ApproxEq, DefaultTolerances, NearlyEq};
use crate::Float;

macro_rules! float_impls {
    ($t:ty) => {
        impl DefaultTolerances for $t {
            const DEFAULT_ABS_TOLERANCE: Self = <$t as Float>::EPSILON;
            const DEFAULT_REL_TOLERANCE: Self = <$t>::EPSILON;
            const DEFAULT_ULPS_TOLERANCE: u32 = 4;
        }

        impl NearlyEq for $t {
            #[inline]
            fn nearly_eq(&self, other: &Self) -> bool {
                (self - other).abs() < <$t as Float>::EPSILON
            }
        }

        impl ApproxEq for $t {
            type Tolerance = Self;

            fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                if !self.is_finite() || !other.is_finite() {
                    // `inf == inf`, `-inf == -inf`, `inf != -inf`, `NaN != NaN`
                    return self == other;
                }

                (self - other).abs() <= abs_tolerance
            }

            fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
                if !self.is_finite() || !other.is_finite() {
                    return self == other;
                }

                let largest = self.abs().max(other.abs());
                (self - other).abs() <= largest * rel_tolerance
            }

            fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                if self.is_sign_negative() != other.is_sign_negative() {
                    return self == other; // `-0.0 == +0.0`
                }

                if self.is_nan() || other.is_nan() {
                    return false;
                }

                let diff = self.to_bits().abs_diff(other.to_bits());
                diff <= ulps_tolerance.into()
            }
        }
    };
}

float_impls!(f32);
float_impls!(f64);

impl<T: NearlyEq<U>, U, const N: usize> NearlyEq<[U; N]> for [T; N] {
    fn nearly_eq(&self, other: &[U; N]) -> bool {
        self.iter().zip(other).all(|(a, b)| a.nearly_eq(b))
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps_tolerance)
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}
