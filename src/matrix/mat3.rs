//! 3x3 matrices as 2D affine transforms.

use std::fmt;

use crate::{traits::Float, LengthError, Matrix, Number, One, Vector, Zero};

impl<T: Zero + One> Matrix<T, 3> {
    /// The identity matrix.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, T::ONE,  T::ZERO],
        [T::ZERO, T::ZERO, T::ONE ],
    ]);
}

impl<T> Matrix<T, 3> {
    /// Creates a matrix from its elements, in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m11: T, m12: T, m13: T,
        m21: T, m22: T, m23: T,
        m31: T, m32: T, m33: T,
    ) -> Self {
        Self([
            [m11, m12, m13],
            [m21, m22, m23],
            [m31, m32, m33],
        ])
    }

    /// Returns the elements of this matrix in row-major order (`m11`, `m12`, `m13`, `m21`, ...).
    pub fn to_array(self) -> [T; 9] {
        let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = self.0;
        [m11, m12, m13, m21, m22, m23, m31, m32, m33]
    }
}

impl<T: Number> Matrix<T, 3> {
    /// Creates a matrix that scales along the X and Y axes.
    #[rustfmt::skip]
    pub fn from_scale(scale: Vector<T, 2>) -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
            scale[0], z,        z,
            z,        scale[1], z,
            z,        z,        o,
        )
    }

    /// Creates a matrix that translates points by `translation`.
    ///
    /// The translation is stored in the last row.
    #[rustfmt::skip]
    pub fn from_translation(translation: Vector<T, 2>) -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
            o,              z,              z,
            z,              o,              z,
            translation[0], translation[1], o,
        )
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        (a * e * i + b * f * g + c * d * h) - (c * e * g + a * f * h + b * d * i)
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    #[rustfmt::skip]
    pub fn adjugate(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        Self::new(
            e * i - f * h, c * h - b * i, b * f - c * e,
            f * g - d * i, a * i - c * g, c * d - a * f,
            d * h - e * g, b * g - a * h, a * e - b * d,
        )
    }

    /// Computes the inverse of this matrix.
    ///
    /// No check for invertibility is performed: if the [`determinant`] is zero, the resulting
    /// elements are infinite or NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let m = Matrix3::from_translation(vec2(3.0, -1.0)) * Matrix3::from_rotation(0.5);
    /// assert_approx_eq!(m * m.inverse(), Matrix3::IDENTITY);
    /// ```
    ///
    /// [`determinant`]: Self::determinant
    pub fn inverse(&self) -> Self
    where
        T: fmt::Debug,
    {
        let det = self.determinant();
        if det == T::ZERO {
            log::debug!("inverting singular matrix {:?}", self);
        }
        self.adjugate() * (T::ONE / det)
    }
}

impl<T: Float> Matrix<T, 3> {
    /// Creates a matrix that rotates by `radians` around the origin.
    ///
    /// Positive angles rotate the X axis towards the Y axis, matching
    /// [`Vector::rotated_by`].
    #[rustfmt::skip]
    pub fn from_rotation(radians: T) -> Self {
        let (sin, cos) = radians.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
             cos, sin, z,
            -sin, cos, z,
             z,   z,   o,
        )
    }
}

impl<T> From<[T; 9]> for Matrix<T, 3> {
    #[rustfmt::skip]
    fn from([m11, m12, m13, m21, m22, m23, m31, m32, m33]: [T; 9]) -> Self {
        Self::new(
            m11, m12, m13,
            m21, m22, m23,
            m31, m32, m33,
        )
    }
}

impl<T> From<Matrix<T, 3>> for [T; 9] {
    fn from(m: Matrix<T, 3>) -> Self {
        m.to_array()
    }
}

impl<T: Copy> TryFrom<&[T]> for Matrix<T, 3> {
    type Error = LengthError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let array = <[T; 9]>::try_from(slice).map_err(|_| LengthError {
            expected: 9,
            actual: slice.len(),
        })?;
        Ok(array.into())
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T, 3> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_rows(&self.0, f)
    }
}
