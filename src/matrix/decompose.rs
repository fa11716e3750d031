use crate::{traits::Float, vec3, Matrix, Quat, Vector};

impl<T: Float> Matrix<T, 4> {
    /// Splits an affine transform into its translation, rotation and scale.
    ///
    /// This is the inverse of composing `scale`, `rotation` and `translation` in that order, ie.
    /// `Matrix4::from_scale(s) * Matrix4::from(r) * Matrix4::from_translation(t)`.
    ///
    /// The scale along each axis is the length of the corresponding row of the upper-left 3x3
    /// block. If the matrix mirrors space (its determinant is negative), the X scale is negated.
    ///
    /// `self` must be affine (see [`Matrix::is_affine`]) and must not contain shear, otherwise the
    /// result is meaningless. This is not detected, but a non-affine input is logged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let m = Matrix4::IDENTITY
    ///     .scale(vec3(1.0, 2.0, 3.0))
    ///     .rotate(vec3(0.0, 0.0, HALF_PI))
    ///     .translate(vec3(10.0, 0.0, 0.0));
    /// let (translation, rotation, scale) = m.decompose();
    /// assert_approx_eq!(translation, vec3(10.0, 0.0, 0.0));
    /// assert_approx_eq!(rotation * Vector3::X, Vector3::Y);
    /// assert_approx_eq!(scale, vec3(1.0, 2.0, 3.0));
    /// ```
    pub fn decompose(&self) -> (Vector<T, 3>, Quat<T>, Vector<T, 3>) {
        if !self.is_affine() {
            log::debug!("decomposing non-affine matrix {:?}", self);
        }

        let rows = [0, 1, 2].map(|i| self.row(i).xyz());
        let mut scale = vec3(rows[0].length(), rows[1].length(), rows[2].length());
        if self.determinant() < T::ZERO {
            scale.x = -scale.x;
        }

        let translation = vec3(self.m41, self.m42, self.m43);

        let mut rotation = *self;
        for (i, row) in rows.into_iter().enumerate() {
            let row = row / scale[i];
            for col in 0..3 {
                rotation[(i, col)] = row[col];
            }
        }

        (translation, Quat::from(rotation), scale)
    }
}
