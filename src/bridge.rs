//! Conversions to and from the types of other graphics and math libraries.
//!
//! # nalgebra
//!
//! [`nalgebra`] uses column vectors (`v' = M * v`), while this crate uses row vectors
//! (`v' = v * M`). Matrices are therefore transposed when converted in either direction, so that
//! both sides describe the same transform. As a consequence, the order of matrix products flips
//! at the boundary:
//!
//! ```
//! # use vectormath::*;
//! let a = Matrix4::from_translation(vec3(1.0, 2.0, 3.0));
//! let b = Matrix4::from_rotation_z(HALF_PI);
//! let na = |m: Matrix4| nalgebra::Matrix4::from(m);
//! ::approx::assert_relative_eq!(na(a * b), na(b) * na(a));
//! ```
//!
//! Quaternions and vectors convert component-wise. nalgebra's quaternions rotate vectors the same
//! way [`Quat`] does.

use nalgebra::{Scalar, SVector};

use crate::{Matrix, Matrix3, Quat, Real, Vector, Vector2};

impl<T: Scalar, const N: usize> From<Vector<T, N>> for SVector<T, N> {
    fn from(v: Vector<T, N>) -> Self {
        Self::from(v.into_array())
    }
}

impl<T: Scalar + Copy, const N: usize> From<SVector<T, N>> for Vector<T, N> {
    fn from(v: SVector<T, N>) -> Self {
        Vector::from_fn(|i| v[i])
    }
}

impl<T: Scalar> From<Vector<T, 2>> for nalgebra::Point2<T> {
    fn from(v: Vector<T, 2>) -> Self {
        let [x, y] = v.into_array();
        Self::new(x, y)
    }
}

impl<T: Scalar + Copy> From<nalgebra::Point2<T>> for Vector<T, 2> {
    fn from(p: nalgebra::Point2<T>) -> Self {
        Vector::from(p.coords)
    }
}

impl<T: Scalar> From<Vector<T, 3>> for nalgebra::Point3<T> {
    fn from(v: Vector<T, 3>) -> Self {
        let [x, y, z] = v.into_array();
        Self::new(x, y, z)
    }
}

impl<T: Scalar + Copy> From<nalgebra::Point3<T>> for Vector<T, 3> {
    fn from(p: nalgebra::Point3<T>) -> Self {
        Vector::from(p.coords)
    }
}

impl<T: Scalar + Copy> From<Matrix<T, 3>> for nalgebra::Matrix3<T> {
    fn from(m: Matrix<T, 3>) -> Self {
        Self::from_fn(|row, col| m[(col, row)])
    }
}

impl<T: Scalar + Copy> From<nalgebra::Matrix3<T>> for Matrix<T, 3> {
    fn from(m: nalgebra::Matrix3<T>) -> Self {
        Matrix::from_fn(|row, col| m[(col, row)])
    }
}

impl<T: Scalar + Copy> From<Matrix<T, 4>> for nalgebra::Matrix4<T> {
    fn from(m: Matrix<T, 4>) -> Self {
        Self::from_fn(|row, col| m[(col, row)])
    }
}

impl<T: Scalar + Copy> From<nalgebra::Matrix4<T>> for Matrix<T, 4> {
    fn from(m: nalgebra::Matrix4<T>) -> Self {
        Matrix::from_fn(|row, col| m[(col, row)])
    }
}

impl<T: Scalar> From<Quat<T>> for nalgebra::Quaternion<T> {
    fn from(q: Quat<T>) -> Self {
        let [x, y, z, w] = q.into_array();
        Self::new(w, x, y, z)
    }
}

impl<T: Scalar + Copy> From<nalgebra::Quaternion<T>> for Quat<T> {
    fn from(q: nalgebra::Quaternion<T>) -> Self {
        let [i, j, k, w] = [q.coords[0], q.coords[1], q.coords[2], q.coords[3]];
        Quat::from_components(i, j, k, w)
    }
}

/// Normalizes the quaternion.
impl<T: nalgebra::RealField> From<Quat<T>> for nalgebra::UnitQuaternion<T> {
    fn from(q: Quat<T>) -> Self {
        Self::new_normalize(q.into())
    }
}

impl<T: Scalar + Copy> From<nalgebra::UnitQuaternion<T>> for Quat<T> {
    fn from(q: nalgebra::UnitQuaternion<T>) -> Self {
        Quat::from(q.into_inner())
    }
}

/// A 2D affine transform in the `a b c d tx ty` form used by 2D graphics APIs.
///
/// Like [`Matrix3`], this transforms row vectors:
///
/// ```text
///                      | a  b  0 |
/// [x' y' 1] = [x y 1]  | c  d  0 |
///                      | tx ty 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: Real,
    pub b: Real,
    pub c: Real,
    pub d: Real,
    pub tx: Real,
    pub ty: Real,
}

impl AffineTransform {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    pub const fn new(a: Real, b: Real, c: Real, d: Real, tx: Real, ty: Real) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Returns the transform that applies `self` first, then `other`.
    pub fn concat(&self, other: &Self) -> Self {
        (Matrix3::from(*self) * Matrix3::from(*other)).into()
    }

    pub fn inverted(&self) -> Self {
        Matrix3::from(*self).inverse().into()
    }

    pub fn apply(&self, point: Vector2) -> Vector2 {
        point * Matrix3::from(*self)
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Drops the third column of the matrix.
impl From<Matrix3> for AffineTransform {
    fn from(m: Matrix3) -> Self {
        Self::new(m.m11, m.m12, m.m21, m.m22, m.m31, m.m32)
    }
}

impl From<AffineTransform> for Matrix3 {
    #[rustfmt::skip]
    fn from(t: AffineTransform) -> Self {
        Matrix3::new(
            t.a,  t.b,  0.0,
            t.c,  t.d,  0.0,
            t.tx, t.ty, 1.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use ::approx::assert_relative_eq;

    use crate::{
        assert_approx_eq, vec2, vec3, vec4, Matrix4, Quaternion, Vector3, EPSILON, HALF_PI,
    };

    use super::*;

    #[test]
    fn matrix_order_flips() {
        let a = Matrix4::from_scale(vec3(1.0, 2.0, 3.0)) * Matrix4::from_rotation_x(0.3);
        let b = Matrix4::from_translation(vec3(-1.0, 0.5, 4.0));
        let na = |m: Matrix4| nalgebra::Matrix4::from(m);
        assert_relative_eq!(na(a * b), na(b) * na(a), epsilon = EPSILON);
        assert_eq!(Matrix4::from(na(a)), a);

        let m = Matrix3::from_rotation(0.7) * Matrix3::from_translation(vec2(2.0, 1.0));
        let n = Matrix3::from_scale(vec2(3.0, -1.0));
        let na3 = |m: Matrix3| nalgebra::Matrix3::from(m);
        assert_relative_eq!(na3(m * n), na3(n) * na3(m), epsilon = EPSILON);
        assert_eq!(Matrix3::from(na3(m)), m);
    }

    #[test]
    fn same_transform() {
        let m = Matrix4::from_rotation_y(1.1) * Matrix4::from_translation(vec3(1.0, 2.0, 3.0));
        let p = vec3(0.5, -1.0, 2.0);

        let ours = p * m;
        let theirs = nalgebra::Matrix4::from(m).transform_point(&p.into());
        assert_approx_eq!(ours, Vector3::from(theirs));
    }

    #[test]
    fn quaternions() {
        let q = Quaternion::from_axis_angle(vec4(0.0, 0.6, 0.8, 2.0));
        let nq = nalgebra::Quaternion::from(q);
        assert_eq!(nq.w, q.w);
        assert_eq!(nq.i, q.x);
        assert_eq!(Quaternion::from(nq), q);

        let unit = nalgebra::UnitQuaternion::from(q);
        let v = vec3(1.0, -2.0, 0.5);
        let rotated = unit * nalgebra::Vector3::from(v);
        assert_approx_eq!(Vector3::from(rotated), q * v);
        assert_approx_eq!(Quaternion::from(unit), q);

        let expected = nalgebra::UnitQuaternion::from_axis_angle(&nalgebra::Vector3::z_axis(), HALF_PI);
        assert_approx_eq!(
            Quaternion::from(expected),
            Quaternion::from_rotation_z(HALF_PI)
        );
    }

    #[test]
    fn integer_quaternions() {
        let nq = nalgebra::Quaternion::new(4, 1, 2, 3);
        assert_eq!(Quat::from(nq), Quat::from_components(1, 2, 3, 4));
        assert_eq!(nalgebra::Quaternion::from(Quat::from(nq)), nq);
    }

    #[test]
    fn unit_quaternion_normalizes() {
        let q = Quaternion::from_components(0.0, 0.0, 0.0, 2.0);
        let unit = nalgebra::UnitQuaternion::from(q);
        assert_eq!(Quaternion::from(unit), Quaternion::IDENTITY);
    }

    #[test]
    fn vectors_and_points() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(nalgebra::Vector3::from(v), nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(nalgebra::Point3::from(v)), v);
        assert_eq!(
            Vector::from(nalgebra::Vector4::new(1, 2, 3, 4)),
            vec4(1, 2, 3, 4)
        );
        assert_eq!(
            nalgebra::Point2::from(vec2(1.0, -1.0)),
            nalgebra::Point2::new(1.0, -1.0)
        );
    }

    #[test]
    fn affine_transform() {
        let m = Matrix3::from_rotation(0.5) * Matrix3::from_translation(vec2(4.0, -2.0));
        let t = AffineTransform::from(m);
        assert_eq!(t.a, m.m11);
        assert_eq!(t.c, m.m21);
        assert_eq!(t.tx, 4.0);
        assert_eq!(t.ty, -2.0);
        assert_eq!(Matrix3::from(t), m);

        // The third column is not representable.
        let mut skewed = m;
        skewed.m13 = 1.0;
        assert_eq!(Matrix3::from(AffineTransform::from(skewed)), m);

        let p = vec2(1.0, 1.0);
        assert_approx_eq!(t.apply(p), p * m);
        assert_eq!(AffineTransform::default(), AffineTransform::IDENTITY);
        assert_eq!(AffineTransform::IDENTITY.apply(p), p);

        let u = AffineTransform::new(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
        assert_approx_eq!(t.concat(&u).apply(p), u.apply(t.apply(p)));
        assert_approx_eq!(t.inverted().apply(t.apply(p)), p);
    }
}
