//! 4x4 matrices as 3D affine and projective transforms.

use std::fmt;

use crate::{traits::Float, LengthError, Matrix, Number, One, Quat, Vector, Zero};

impl<T: Zero + One> Matrix<T, 4> {
    /// The identity matrix.
    ///
    /// Multiplying any vector with this matrix returns the vector unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE,  T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE,  T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE ],
    ]);
}

impl<T> Matrix<T, 4> {
    /// Creates a matrix from its elements, in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        m11: T, m12: T, m13: T, m14: T,
        m21: T, m22: T, m23: T, m24: T,
        m31: T, m32: T, m33: T, m34: T,
        m41: T, m42: T, m43: T, m44: T,
    ) -> Self {
        Self([
            [m11, m12, m13, m14],
            [m21, m22, m23, m24],
            [m31, m32, m33, m34],
            [m41, m42, m43, m44],
        ])
    }

    /// Returns the elements of this matrix in row-major order (`m11`, `m12`, `m13`, `m14`, `m21`,
    /// ...).
    pub fn to_array(self) -> [T; 16] {
        let [[m11, m12, m13, m14], [m21, m22, m23, m24], [m31, m32, m33, m34], [m41, m42, m43, m44]] =
            self.0;
        [
            m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44,
        ]
    }
}

impl<T: Number> Matrix<T, 4> {
    /// Creates a matrix that scales along the X, Y and Z axes.
    #[rustfmt::skip]
    pub fn from_scale(scale: Vector<T, 3>) -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
            scale[0], z,        z,        z,
            z,        scale[1], z,        z,
            z,        z,        scale[2], z,
            z,        z,        z,        o,
        )
    }

    /// Creates a matrix that translates points by `translation`.
    ///
    /// The translation is stored in the last row (`m41`, `m42`, `m43`).
    #[rustfmt::skip]
    pub fn from_translation(translation: Vector<T, 3>) -> Self {
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
            o,              z,              z,              z,
            z,              o,              z,              z,
            z,              z,              o,              z,
            translation[0], translation[1], translation[2], o,
        )
    }

    /// Returns the [determinant] of the matrix, computed via cofactor expansion along the first
    /// row.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        (0..4).fold(T::ZERO, |acc, col| acc + self.0[0][col] * self.cofactor(0, col))
    }

    /// Returns the [adjugate] of the matrix (the transpose of its cofactor matrix).
    ///
    /// [adjugate]: https://en.wikipedia.org/wiki/Adjugate_matrix
    pub fn adjugate(&self) -> Self {
        Self::from_fn(|row, col| self.cofactor(col, row))
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
    /// let m = Matrix4::IDENTITY
    ///     .scale(vec3(1.0, 2.0, 3.0))
    ///     .rotate(vec3(0.1, 0.2, 0.3))
    ///     .translate(vec3(-5.0, 0.0, 1.0));
    /// assert_approx_eq!(m * m.inverse(), Matrix4::IDENTITY);
    /// ```
    ///
    /// [`determinant`]: Self::determinant
    pub fn inverse(&self) -> Self
    where
        T: fmt::Debug,
    {
        let adjugate = self.adjugate();
        // Row 1 of `self` times column 1 of its adjugate.
        let det = (0..4).fold(T::ZERO, |acc, k| acc + self.0[0][k] * adjugate.0[k][0]);
        if det == T::ZERO {
            log::debug!("inverting singular matrix {:?}", self);
        }
        adjugate * (T::ONE / det)
    }

    /// Returns the signed determinant of the 3x3 matrix left when removing `row` and `col`.
    fn cofactor(&self, row: usize, col: usize) -> T {
        let minor = Matrix::<T, 3>::from_fn(|r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self.0[r][c]
        });
        let det = minor.determinant();
        if (row + col) % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Appends a translation to this transform (`self * Matrix4::from_translation(t)`).
    pub fn translate(self, translation: Vector<T, 3>) -> Self {
        self * Self::from_translation(translation)
    }

    /// Appends a scale to this transform (`self * Matrix4::from_scale(s)`).
    pub fn scale(self, scale: Vector<T, 3>) -> Self {
        self * Self::from_scale(scale)
    }

    /// Returns `true` if the last column is nearly `(0, 0, 0, _)`, ie. if the matrix performs no
    /// projection.
    pub fn is_affine(&self) -> bool
    where
        T: Float,
    {
        [self.m14, self.m24, self.m34]
            .iter()
            .all(|elem| elem.nearly_eq(&T::ZERO))
    }
}

impl<T: Float> Matrix<T, 4> {
    /// Creates a matrix rotating by `radians` around the X axis (Y towards Z).
    #[rustfmt::skip]
    pub fn from_rotation_x(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
            o,  z, z, z,
            z,  c, s, z,
            z, -s, c, z,
            z,  z, z, o,
        )
    }

    /// Creates a matrix rotating by `radians` around the Y axis (Z towards X).
    #[rustfmt::skip]
    pub fn from_rotation_y(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
            c, z, -s, z,
            z, o,  z, z,
            s, z,  c, z,
            z, z,  z, o,
        )
    }

    /// Creates a matrix rotating by `radians` around the Z axis (X towards Y).
    #[rustfmt::skip]
    pub fn from_rotation_z(radians: T) -> Self {
        let (s, c) = radians.sin_cos();
        let (o, z) = (T::ONE, T::ZERO);
        Self::new(
             c, s, z, z,
            -s, c, z, z,
             z, z, o, z,
             z, z, z, o,
        )
    }

    /// Creates a rotation matrix from an axis-angle [`Vector`].
    ///
    /// See [`Quat::from_axis_angle`] for the expected format.
    pub fn from_axis_angle(axis_angle: Vector<T, 4>) -> Self {
        Quat::from_axis_angle(axis_angle).into()
    }

    /// Appends Euler rotations (in radians) to this transform.
    ///
    /// The rotations are applied around the X axis first, then Y, then Z.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let m = Matrix4::IDENTITY.rotate(vec3(0.0, 0.0, HALF_PI));
    /// assert_approx_eq!(Vector3::X * m, Vector3::Y);
    /// ```
    pub fn rotate(self, radians: Vector<T, 3>) -> Self {
        self * Self::from_rotation_x(radians[0])
            * Self::from_rotation_y(radians[1])
            * Self::from_rotation_z(radians[2])
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fovy` is the vertical field of view in radians, `aspect` the ratio of width to height.
    ///
    /// # Panics
    ///
    /// Panics if `far` is not greater than `near`, or if `fovy` or `aspect` is not positive.
    #[rustfmt::skip]
    pub fn perspective(fovy: T, aspect: T, near: T, far: T) -> Self {
        let dz = far - near;

        assert!(dz > T::ZERO, "far value must be greater than near");
        assert!(fovy > T::ZERO, "field of view must be nonzero and positive");
        assert!(aspect > T::ZERO, "aspect ratio must be nonzero and positive");

        let (sin, cos) = (fovy * T::HALF).sin_cos();
        let cotangent = cos / sin;
        let z = T::ZERO;

        Self::new(
            cotangent / aspect, z,         z,                          z,
            z,                  cotangent, z,                          z,
            z,                  z,         -(far + near) / dz,         -T::ONE,
            z,                  z,         -T::TWO * near * far / dz,  z,
        )
    }

    /// Creates a perspective projection matrix from the horizontal and vertical field of view.
    pub fn perspective_fov_xy(fovx: T, fovy: T, near: T, far: T) -> Self {
        Self::perspective(fovy, fovx / fovy, near, far)
    }

    /// Creates a perspective projection matrix from the horizontal field of view and the aspect
    /// ratio.
    pub fn perspective_fov_x(fovx: T, aspect: T, near: T, far: T) -> Self {
        Self::perspective(fovx / aspect, aspect, near, far)
    }

    /// Creates a perspective projection matrix from the bounds of the near plane.
    ///
    /// # Panics
    ///
    /// Panics if `far` is not greater than `near`.
    #[rustfmt::skip]
    pub fn frustum(top: T, right: T, bottom: T, left: T, near: T, far: T) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;

        assert!(dz > T::ZERO, "far value must be greater than near");

        let z = T::ZERO;
        Self::new(
            T::TWO * near / dx,   z,                    z,                         z,
            z,                    T::TWO * near / dy,   z,                         z,
            (right + left) / dx,  (top + bottom) / dy,  -(far + near) / dz,        -T::ONE,
            z,                    z,                    -T::TWO * far * near / dz, z,
        )
    }

    /// Creates an orthographic projection matrix mapping the given box to the `-1..=1` cube.
    #[rustfmt::skip]
    pub fn orthographic(top: T, right: T, bottom: T, left: T, near: T, far: T) -> Self {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;

        let z = T::ZERO;
        Self::new(
            T::TWO / dx,          z,                     z,                   z,
            z,                    T::TWO / dy,           z,                   z,
            z,                    z,                     -T::TWO / dz,        z,
            -(right + left) / dx, -(top + bottom) / dy,  -(far + near) / dz,  T::ONE,
        )
    }
}

/// Converts a (unit) quaternion to the equivalent rotation matrix.
impl<T: Float> From<Quat<T>> for Matrix<T, 4> {
    #[rustfmt::skip]
    fn from(q: Quat<T>) -> Self {
        let [x, y, z, w] = q.into_array();
        let (o, n, two) = (T::ONE, T::ZERO, T::TWO);
        Self::new(
            o - two * (y * y + z * z), two * (x * y + z * w),     two * (x * z - y * w),     n,
            two * (x * y - z * w),     o - two * (x * x + z * z), two * (y * z + x * w),     n,
            two * (x * z + y * w),     two * (y * z - x * w),     o - two * (x * x + y * y), n,
            n,                         n,                         n,                         o,
        )
    }
}

impl<T> From<[T; 16]> for Matrix<T, 4> {
    #[rustfmt::skip]
    fn from(
        [m11, m12, m13, m14, m21, m22, m23, m24, m31, m32, m33, m34, m41, m42, m43, m44]: [T; 16],
    ) -> Self {
        Self::new(
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        )
    }
}

impl<T> From<Matrix<T, 4>> for [T; 16] {
    fn from(m: Matrix<T, 4>) -> Self {
        m.to_array()
    }
}

impl<T: Copy> TryFrom<&[T]> for Matrix<T, 4> {
    type Error = LengthError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let array = <[T; 16]>::try_from(slice).map_err(|_| LengthError {
            expected: 16,
            actual: slice.len(),
        })?;
        Ok(array.into())
    }
}

/// Prints the matrix, followed by its decomposition (translation, Euler rotation in degrees,
/// scale and rotation quaternion).
impl<T: Float> fmt::Display for Matrix<T, 4> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::fmt_rows(&self.0, f)?;
        writeln!(f)?;

        let (translation, rotation, scale) = self.decompose();
        writeln!(f, "affine: {}", self.is_affine())?;
        writeln!(f, "T: {:.3}", translation)?;
        writeln!(f, "R: {:.3}", rotation.to_rotation_vector() * T::DEGREES_PER_RADIAN)?;
        writeln!(f, "S: {:.3}", scale)?;
        write!(f, "Q: {:.3}", rotation)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        assert_approx_eq, deg_to_rad, vec3, vec4, Mat4, Matrix4, Quaternion, Vector3, Vector4,
        HALF_PI, PI, QUARTER_PI,
    };

    use super::*;

    #[test]
    fn elements() {
        let array: [f64; 16] = std::array::from_fn(|i| i as f64);
        let m = Mat4::from(array);
        assert_eq!(m.m11, 0.0);
        assert_eq!(m.m14, 3.0);
        assert_eq!(m.m41, 12.0);
        assert_eq!(m.to_array(), array);
        assert_eq!(Mat4::try_from(&array[..]), Ok(m));
        assert_eq!(
            Matrix4::try_from(&[1.0; 9][..]),
            Err(LengthError {
                expected: 16,
                actual: 9
            })
        );
    }

    #[test]
    fn determinant() {
        assert_eq!(Matrix4::ZERO.determinant(), 0.0);
        assert_eq!(Matrix4::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix4::from_scale(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_eq!(Matrix4::from_translation(vec3(2.0, 3.0, 4.0)).determinant(), 1.0);

        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [1,  0, 2, -1],
            [3,  0, 0,  5],
            [2,  1, 4, -3],
            [1,  0, 5,  0],
        ]);
        assert_eq!(m.determinant(), 30);
        assert_eq!(m.transpose().determinant(), 30);
        assert_eq!(m * m.adjugate(), Mat4::<i32>::IDENTITY * 30);
    }

    #[test]
    fn inverse() {
        let m = Matrix4::from_rotation_x(0.5)
            * Matrix4::from_scale(vec3(1.0, 2.0, -3.0))
            * Matrix4::from_translation(vec3(4.0, 5.0, 6.0));
        assert_approx_eq!(m * m.inverse(), Matrix4::IDENTITY);
        assert_approx_eq!(m.inverse() * m, Matrix4::IDENTITY);

        let t = Matrix4::from_translation(vec3(1.0, -2.0, 3.0));
        assert_eq!(t.inverse(), Matrix4::from_translation(vec3(-1.0, 2.0, -3.0)));

        let singular = Matrix4::from_scale(vec3(1.0, 1.0, 0.0));
        assert!(!crate::Finite::is_finite(&singular.inverse()));
    }

    #[test]
    fn elementary_rotations() {
        assert_approx_eq!(Vector3::Y * Matrix4::from_rotation_x(HALF_PI), Vector3::Z);
        assert_approx_eq!(Vector3::Z * Matrix4::from_rotation_y(HALF_PI), Vector3::X);
        assert_approx_eq!(Vector3::X * Matrix4::from_rotation_z(HALF_PI), Vector3::Y);

        for (axis, elementary) in [
            (Vector3::X, Matrix4::from_rotation_x(0.4)),
            (Vector3::Y, Matrix4::from_rotation_y(0.4)),
            (Vector3::Z, Matrix4::from_rotation_z(0.4)),
        ] {
            let from_quat = Matrix4::from(Quaternion::from_axis_angle(axis.extend(0.4)));
            assert_approx_eq!(elementary, from_quat);
            assert_approx_eq!(elementary, Matrix4::from_axis_angle(axis.extend(0.4)));
        }
    }

    #[test]
    fn builders() {
        let m = Matrix4::IDENTITY
            .scale(vec3(2.0, 2.0, 2.0))
            .rotate(vec3(0.0, 0.0, HALF_PI))
            .translate(vec3(0.0, 0.0, 5.0));
        assert_approx_eq!(vec3(1.0, 0.0, 0.0) * m, vec3(0.0, 2.0, 5.0));
        assert!(m.is_affine());

        // X first, then Y.
        let m = Matrix4::IDENTITY.rotate(vec3(HALF_PI, HALF_PI, 0.0));
        assert_approx_eq!(Vector3::Y * m, Vector3::X);
    }

    #[test]
    fn perspective() {
        let m = Matrix4::perspective(HALF_PI, 2.0, 1.0, 11.0);
        assert_approx_eq!(m.m11, 0.5);
        assert_approx_eq!(m.m22, 1.0);
        assert_approx_eq!(m.m33, -1.2);
        assert_eq!(m.m34, -1.0);
        assert_approx_eq!(m.m43, -2.2);
        assert_eq!(m.m44, 0.0);
        assert!(!m.is_affine());

        // The near plane maps to -1, the far plane to +1.
        let near = (vec4(0.0, 0.0, -1.0, 1.0) * m).to_real();
        let far = (vec4(0.0, 0.0, -11.0, 1.0) * m).to_real();
        assert_approx_eq!(near.z, -1.0);
        assert_approx_eq!(far.z, 1.0);

        assert_approx_eq!(Matrix4::perspective_fov_xy(PI, HALF_PI, 1.0, 11.0), m);
        assert_approx_eq!(Matrix4::perspective_fov_x(PI, 2.0, 1.0, 11.0), m);

        // Symmetric frustum with the same near plane bounds.
        let top = 1.0 * QUARTER_PI.tan();
        let f = Matrix4::frustum(top, top * 2.0, -top, -top * 2.0, 1.0, 11.0);
        assert_approx_eq!(f, m);
    }

    #[test]
    #[should_panic(expected = "far value must be greater than near")]
    fn perspective_inverted_planes() {
        Matrix4::perspective(HALF_PI, 1.0, 10.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "aspect ratio must be nonzero and positive")]
    fn perspective_zero_aspect() {
        Matrix4::perspective(HALF_PI, 0.0, 1.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "field of view must be nonzero and positive")]
    fn perspective_negative_fov() {
        Matrix4::perspective(-1.0, 1.0, 1.0, 10.0);
    }

    #[test]
    fn orthographic() {
        let m = Matrix4::orthographic(1.0, 4.0, -1.0, 0.0, 0.0, 10.0);
        assert!(m.is_affine());
        assert_approx_eq!(vec3(0.0, -1.0, 0.0) * m, vec3(-1.0, -1.0, -1.0));
        assert_approx_eq!(vec3(4.0, 1.0, -10.0) * m, vec3(1.0, 1.0, 1.0));
        assert_approx_eq!(vec3(2.0, 0.0, -5.0) * m, Vector3::ZERO);
    }

    #[test]
    fn quaternion_matrix() {
        let q = Quaternion::from_axis_angle(vec4(0.0, 0.0, 1.0, deg_to_rad(90.0)));
        let m = Matrix4::from(q);
        assert_approx_eq!(Vector3::X * m, Vector3::Y);
        assert_approx_eq!(Vector4::X * m, Vector4::Y);
        assert_approx_eq!(m.determinant(), 1.0);
        assert_approx_eq!(Matrix4::from(Quaternion::IDENTITY), Matrix4::IDENTITY);
    }

    #[test]
    fn display() {
        let m = Matrix4::from_translation(vec3(1.0, 2.0, 3.0));
        let s = m.to_string();
        assert!(s.starts_with("[   1.000,    0.000,    0.000,    0.000\n"));
        assert!(s.contains("    1.000,    2.000,    3.000,    1.000 ]\n"));
        assert!(s.contains("affine: true\n"));
        assert!(s.contains("T: (1.000, 2.000, 3.000)\n"));
        assert!(s.contains("S: (1.000, 1.000, 1.000)\n"));
    }
}
