use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use crate::{traits::Number, Quat, Vector};

/// Hamilton product.
///
/// The result rotates by `rhs` first, then by `self`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [lx, ly, lz, lw] = self.into_array();
        let [rx, ry, rz, rw] = rhs.into_array();
        Quat::from_components(
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry + ly * rw + lz * rx - lx * rz,
            lw * rz + lz * rw + lx * ry - ly * rx,
            lw * rw - lx * rx - ly * ry - lz * rz,
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector.
impl<T: Number> Mul<Vector<T, 3>> for Quat<T> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Vector<T, 3>) -> Self::Output {
        let two = T::ONE + T::ONE;
        let axis = self.xyz();
        let uv = axis.cross(rhs);
        let uuv = axis.cross(uv);
        rhs + uv * (two * self.w) + uuv * two
    }
}

/// Rotates a vector, like `Quat * Vector`.
impl<T: Number> Mul<Quat<T>> for Vector<T, 3> {
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Quat<T>) -> Self::Output {
        rhs * self
    }
}

impl<T: Number> MulAssign<Quat<T>> for Vector<T, 3> {
    fn mul_assign(&mut self, rhs: Quat<T>) {
        *self = rhs * *self;
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::from_vec(self.vec * rhs)
    }
}

impl<T: Number> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::from_vec(self.vec / rhs)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_vec(self.vec - rhs.vec)
    }
}

/// Component-wise negation.
///
/// `-q` describes the same rotation as `q`. Use [`Quat::inverse`] for the opposite rotation.
///
/// Note that some quaternion libraries define prefix `-` as the conjugate `(-x, -y, -z, w)`. Code
/// relying on that should call [`Quat::conjugate`] instead.
impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_vec(-self.vec)
    }
}
