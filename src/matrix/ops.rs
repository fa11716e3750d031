use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{
    approx::{ApproxEq, NearlyEq},
    traits::Number,
    Matrix, Vector,
};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

impl<T: NearlyEq, const N: usize> NearlyEq for Matrix<T, N> {
    fn nearly_eq(&self, other: &Self) -> bool {
        self.0.nearly_eq(&other.0)
    }
}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Row Vector * Matrix.
///
/// For 3-element vectors and 3x3 matrices this is a linear transform of the vector (no
/// translation). For 4-element vectors and 4x4 matrices, this is the full homogeneous product.
impl<T, const N: usize> Mul<Matrix<T, N>> for Vector<T, N>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Vector::from_fn(|col| (0..N).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

/// Transforms a 2D point by a 3x3 matrix, applying its translation.
impl<T> Mul<Matrix<T, 3>> for Vector<T, 2>
where
    T: Number,
{
    type Output = Vector<T, 2>;

    fn mul(self, rhs: Matrix<T, 3>) -> Self::Output {
        (self.extend(T::ONE) * rhs).xy()
    }
}

/// Transforms a 3D point by a 4x4 matrix, applying its translation.
///
/// No perspective division is performed: the `w` column of `rhs` is ignored.
impl<T> Mul<Matrix<T, 4>> for Vector<T, 3>
where
    T: Number,
{
    type Output = Vector<T, 3>;

    fn mul(self, rhs: Matrix<T, 4>) -> Self::Output {
        (self.extend(T::ONE) * rhs).xyz()
    }
}

impl<T, const N: usize> MulAssign<Matrix<T, N>> for Vector<T, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N>) {
        *self = *self * rhs;
    }
}

impl<T: Number> MulAssign<Matrix<T, 3>> for Vector<T, 2> {
    fn mul_assign(&mut self, rhs: Matrix<T, 3>) {
        *self = *self * rhs;
    }
}

impl<T: Number> MulAssign<Matrix<T, 4>> for Vector<T, 3> {
    fn mul_assign(&mut self, rhs: Matrix<T, 4>) {
        *self = *self * rhs;
    }
}

/// Matrix * Matrix.
///
/// `v * (a * b) == (v * a) * b`: the result applies `self` first and `rhs` second.
impl<T, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

impl<T, const N: usize> MulAssign<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: Matrix<T, N>) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const N: usize> MulAssign<T> for Matrix<T, N>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}
