use std::fmt;

use crate::{
    approx::{ApproxEq, NearlyEq},
    traits::{Finite, Float},
    vec3, vec4, LengthError, Matrix, One, Real, Vector, Zero,
};

mod ops;
mod view;

/// A quaternion with [`Real`] components.
pub type Quaternion = Quat<Real>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, where `w` is the real part. Equality, [`NearlyEq`] and [`ApproxEq`] compare
/// component-wise, so `q` and `-q` are considered different even though they describe the same
/// rotation.
///
/// # Rotating Vectors
///
/// Multiplying a quaternion with a [`Vector`] rotates the vector (`q * v`). For symmetry with
/// matrices, `v * q` is accepted too and does the same thing:
///
/// ```
/// # use vectormath::*;
/// let q = Quaternion::from_axis_angle(vec4(1.0, 0.0, 0.0, HALF_PI));
/// assert_approx_eq!(q * Vector3::Y, Vector3::Z);
/// assert_approx_eq!(Vector3::Y * q, Vector3::Y * Matrix4::from(q));
/// ```
///
/// The product of two quaternions `a * b` is the rotation that applies `b` first, then `a`. This
/// is the opposite order of matrix products, so
/// `Matrix4::from(a * b) ~= Matrix4::from(b) * Matrix4::from(a)`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::from_components(T::ZERO, T::ZERO, T::ZERO, T::ONE);
}

impl<T: Zero> Quat<T> {
    /// The quaternion with all components set to 0.
    pub const ZERO: Self = Self::from_components(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
}

impl<T> Quat<T> {
    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    pub const fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Returns the components as a [`Vector`] (`x`, `y`, `z`, `w`).
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the components as an array (`x`, `y`, `z`, `w`).
    pub fn into_array(self) -> [T; 4] {
        self.vec.into_array()
    }

    /// Returns the imaginary part `(x, y, z)`.
    pub fn xyz(self) -> Vector<T, 3> {
        self.vec.xyz()
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion rotating by `radians` around the X axis.
    pub fn from_rotation_x(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::from_components(sin, T::ZERO, T::ZERO, cos)
    }

    /// Creates a quaternion rotating by `radians` around the Y axis.
    pub fn from_rotation_y(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::from_components(T::ZERO, sin, T::ZERO, cos)
    }

    /// Creates a quaternion rotating by `radians` around the Z axis.
    pub fn from_rotation_z(radians: T) -> Self {
        let (sin, cos) = (radians * T::HALF).sin_cos();
        Self::from_components(T::ZERO, T::ZERO, sin, cos)
    }

    /// Creates a quaternion from a rotation in axis-angle form.
    ///
    /// The `x`, `y` and `z` components of `axis_angle` are the rotation axis, which must already
    /// be normalized. `w` is the angle in radians.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let q = Quaternion::from_axis_angle(vec4(0.0, 0.0, 1.0, PI));
    /// assert_approx_eq!(q, Quaternion::from_components(0.0, 0.0, 1.0, 0.0));
    /// ```
    pub fn from_axis_angle(axis_angle: Vector<T, 4>) -> Self {
        let (sin, cos) = (axis_angle.w * T::HALF).sin_cos();
        let [x, y, z] = (axis_angle.xyz() * sin).into_array();
        Self::from_components(x, y, z, cos)
    }

    /// Creates a quaternion from Euler angles, in radians.
    ///
    /// `pitch` rotates around the X axis, `yaw` around the Y axis, and `roll` around the Z axis.
    /// [`Quat::pitch`], [`Quat::yaw`] and [`Quat::roll`] recover the angles, as long as `yaw` is
    /// within `-π/2..=π/2` and the others within `-π..=π`.
    #[doc(alias = "euler")]
    pub fn from_pitch_yaw_roll(pitch: T, yaw: T, roll: T) -> Self {
        let (sx, cx) = (pitch * T::HALF).sin_cos();
        let (sy, cy) = (yaw * T::HALF).sin_cos();
        let (sz, cz) = (roll * T::HALF).sin_cos();

        Self::from_components(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }

    /// Returns the squared length of this quaternion.
    pub fn length_squared(&self) -> T {
        self.vec.length_squared()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it. When using quaternions to model rotations, it is
    /// advisable to ensure that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Like [`Vector::normalized`], quaternions whose squared length is nearly 0 or nearly 1 are
    /// returned unchanged.
    pub fn normalized(self) -> Self {
        Self {
            vec: self.vec.normalized(),
        }
    }

    /// Negates the imaginary part of `self`.
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Returns the multiplicative inverse of `self`.
    ///
    /// For unit quaternions this is the [`Quat::conjugate`], the opposite rotation.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.length_squared()
    }

    /// Spherically interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// Both quaternions should be normalized. No attempt is made to take the shortest path: if
    /// `self.dot(other)` is negative, the interpolation takes the long way around.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let a = Quaternion::IDENTITY;
    /// let b = Quaternion::from_rotation_z(HALF_PI);
    /// assert_approx_eq!(a.interpolated(b, 0.5), Quaternion::from_rotation_z(QUARTER_PI));
    /// ```
    #[doc(alias = "slerp")]
    pub fn interpolated(self, other: Self, t: T) -> Self {
        let dot = self.dot(other).clamp(-T::ONE, T::ONE);
        if dot.nearly_eq(&T::ONE) {
            return (self + (other - self) * t).normalized();
        }

        let theta = dot.acos() * t;
        let (sin, cos) = theta.sin_cos();
        self * cos + (other - self * dot).normalized() * sin
    }

    /// Converts `self` to axis-angle form: the normalized rotation axis in `x`, `y` and `z`, and
    /// the angle (in radians) in `w`.
    ///
    /// If the imaginary part is too short to recover an axis, `(0, 0, 1, 0)` (a rotation by 0
    /// radians around Z) is returned.
    pub fn to_axis_angle(self) -> Vector<T, 4> {
        let scale = self.xyz().length();
        if scale.nearly_eq(&T::ZERO) || scale.nearly_eq(&T::TWO_PI) {
            log::trace!("{:?} has no rotation axis, using Z", self);
            return Vector::<T, 4>::Z;
        }

        let [x, y, z, w] = self.vec.into_array();
        vec4(
            x / scale,
            y / scale,
            z / scale,
            w.clamp(-T::ONE, T::ONE).acos() * T::TWO,
        )
    }

    /// Rotation around the X axis, in radians (see [`Quat::from_pitch_yaw_roll`]).
    pub fn pitch(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (T::TWO * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z)
    }

    /// Rotation around the Y axis, in radians (see [`Quat::from_pitch_yaw_roll`]).
    pub fn yaw(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (-T::TWO * (x * z - w * y)).clamp(-T::ONE, T::ONE).asin()
    }

    /// Rotation around the Z axis, in radians (see [`Quat::from_pitch_yaw_roll`]).
    pub fn roll(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (T::TWO * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }

    /// Returns the Euler angles `(pitch, yaw, roll)` of this rotation, in radians.
    pub fn to_pitch_yaw_roll(&self) -> (T, T, T) {
        (self.pitch(), self.yaw(), self.roll())
    }

    /// Returns the Euler angles of this rotation as a [`Vector`] `(pitch, yaw, roll)`, in radians.
    pub fn to_rotation_vector(&self) -> Vector<T, 3> {
        vec3(self.pitch(), self.yaw(), self.roll())
    }
}

/// Extracts the rotation from the upper-left 3x3 block of a rotation matrix.
///
/// The block must be orthonormal (a pure rotation), see [`Matrix::decompose`] to handle matrices
/// that also scale.
impl<T: Float> From<Matrix<T, 4>> for Quat<T> {
    fn from(m: Matrix<T, 4>) -> Self {
        let trace = m.m11 + m.m22 + m.m33 + T::ONE;
        let quarter = T::HALF * T::HALF;

        // Compute the largest of the four components from the diagonal, and derive the others
        // from the off-diagonal elements, to avoid dividing by a tiny number.
        if trace > T::ZERO {
            let s = trace.sqrt() * T::TWO;
            Self::from_components(
                (m.m23 - m.m32) / s,
                (m.m31 - m.m13) / s,
                (m.m12 - m.m21) / s,
                quarter * s,
            )
        } else if m.m11 > m.m22.max(m.m33) {
            let s = (T::ONE + m.m11 - m.m22 - m.m33).sqrt() * T::TWO;
            Self::from_components(
                quarter * s,
                (m.m12 + m.m21) / s,
                (m.m13 + m.m31) / s,
                (m.m23 - m.m32) / s,
            )
        } else if m.m22 > m.m33 {
            let s = (T::ONE + m.m22 - m.m11 - m.m33).sqrt() * T::TWO;
            Self::from_components(
                (m.m12 + m.m21) / s,
                quarter * s,
                (m.m23 + m.m32) / s,
                (m.m31 - m.m13) / s,
            )
        } else {
            let s = (T::ONE + m.m33 - m.m11 - m.m22).sqrt() * T::TWO;
            Self::from_components(
                (m.m13 + m.m31) / s,
                (m.m23 + m.m32) / s,
                quarter * s,
                (m.m12 - m.m21) / s,
            )
        }
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    fn from(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }
}

impl<T> From<[T; 4]> for Quat<T> {
    fn from(array: [T; 4]) -> Self {
        Self { vec: array.into() }
    }
}

impl<T> From<Quat<T>> for [T; 4] {
    fn from(q: Quat<T>) -> Self {
        q.into_array()
    }
}

impl<T: Copy> TryFrom<&[T]> for Quat<T> {
    type Error = LengthError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        Vector::try_from(slice).map(Self::from_vec)
    }
}

impl<T: PartialEq> PartialEq for Quat<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: NearlyEq> NearlyEq for Quat<T> {
    fn nearly_eq(&self, other: &Self) -> bool {
        self.vec.nearly_eq(&other.vec)
    }
}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

impl<T: Finite> Finite for Quat<T> {
    fn is_finite(&self) -> bool {
        self.vec.is_finite()
    }

    fn make_finite(self) -> Self {
        Self {
            vec: self.vec.make_finite(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.as_array();
        f.debug_struct("Quat")
            .field("x", x)
            .field("y", y)
            .field("z", z)
            .field("w", w)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}
