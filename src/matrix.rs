use std::{array, fmt};

use crate::{
    traits::{Finite, Float, Number},
    One, Real, Vector, Zero,
};

mod decompose;
mod mat3;
mod mat4;
mod ops;
mod view;

pub use view::{M3, M4};

/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;

/// A 3x3 matrix with [`Real`] elements, used for 2D affine transforms.
pub type Matrix3 = Mat3<Real>;
/// A 4x4 matrix with [`Real`] elements, used for 3D affine and projective transforms.
pub type Matrix4 = Mat4<Real>;

/// A square, row-major `N`x`N` matrix with element type `T`.
///
/// Matrices transform *row vectors*, which are multiplied from the left: `v' = v * m`. As a
/// consequence, translations live in the last row, and the product `a * b` is the transform that
/// applies `a` first and `b` second:
///
/// ```
/// # use vectormath::*;
/// let a = Matrix4::from_translation(vec3(1.0, 0.0, 0.0));
/// let b = Matrix4::from_scale(vec3(2.0, 2.0, 2.0));
/// let p = vec3(1.0, 1.0, 1.0);
/// assert_eq!(p * (a * b), (p * a) * b);
/// assert_eq!(p * (a * b), vec3(4.0, 2.0, 2.0));
/// ```
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills the matrix from an array of rows, [`Matrix::from_fn`] invokes a
///   closure with the row and column of each element.
/// - [`Matrix3::new`] and [`Matrix4::new`] take the elements `m11` through `mNN` in row-major
///   order, just like they are written down.
/// - The transform constructors (`from_scale`, `from_translation`, `from_rotation`, projections,
///   ...) build the elementary matrices.
/// - [`Matrix::ZERO`] has every element set to 0, `Matrix::IDENTITY` is the identity transform.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, col)` tuples with 0-based indices.
/// The 3x3 and 4x4 matrices also expose their elements as fields `m11` to `m44` (1-based, row
/// first):
///
/// ```
/// # use vectormath::*;
/// let mut m = Matrix4::from_translation(vec3(5.0, 6.0, 7.0));
/// assert_eq!(m.m42, 6.0);
/// assert_eq!(m[(3, 1)], 6.0);
/// m.m43 = -1.0;
/// assert_eq!(m.row(3), vec4(5.0, 6.0, -1.0, 1.0));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat[(1, 0)], 2);
    /// ```
    pub fn from_rows<U: Into<Vector<T, N>>>(rows: [U; N]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    ///     [6, 7, 8],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3, 6],
    ///     [1, 4, 7],
    ///     [2, 5, 8],
    /// ]));
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self.0[col][row])
    }

    /// Returns row `i` (0-based) of the matrix.
    pub fn row(&self, i: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from(self.0[i])
    }

    /// Returns column `i` (0-based) of the matrix.
    pub fn column(&self, i: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][i])
    }

    /// Returns the rows of this matrix as nested arrays.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; N]; N] {
        &self.0
    }

    /// Converts this matrix into nested arrays, one per row.
    #[inline]
    pub fn into_rows(self) -> [[T; N]; N] {
        self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|r| r.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Linearly interpolates each element between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// This is *not* aware of rotations: interpolating between two rotation matrices generally
    /// does not yield a rotation matrix. Use [`Quat::interpolated`][crate::Quat::interpolated] for
    /// that.
    pub fn interpolated(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        Self::from_fn(|row, col| {
            let a = self.0[row][col];
            a + (other.0[row][col] - a) * t
        })
    }

    /// Returns `true` if `self` is *exactly* the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert!(Matrix3::IDENTITY.is_identity());
    /// assert!(!Matrix3::from_rotation(1e-15).is_identity());
    /// ```
    pub fn is_identity(&self) -> bool
    where
        T: Zero + One + PartialEq,
    {
        self.elements_match(|elem, expected| *elem == expected)
    }

    /// Returns `true` if every element of `self` is nearly equal to the identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert!(Matrix3::from_rotation(1e-15).is_nearly_identity());
    /// assert!(!Matrix3::from_rotation(0.1).is_nearly_identity());
    /// ```
    pub fn is_nearly_identity(&self) -> bool
    where
        T: Float,
    {
        self.elements_match(|elem, expected| elem.nearly_eq(&expected))
    }

    fn elements_match(&self, mut matches: impl FnMut(&T, T) -> bool) -> bool
    where
        T: Zero + One,
    {
        self.0.iter().enumerate().all(|(row, elems)| {
            elems.iter().enumerate().all(|(col, elem)| {
                let expected = if row == col { T::ONE } else { T::ZERO };
                matches(elem, expected)
            })
        })
    }
}

impl<T: Finite, const N: usize> Finite for Matrix<T, N> {
    fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(T::is_finite)
    }

    fn make_finite(self) -> Self {
        self.map(T::make_finite)
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a [T; N]);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Writes one row per line, with each element right-aligned and printed with 3 decimals.
fn fmt_rows<T: fmt::Display, const N: usize>(
    rows: &[[T; N]; N],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    for (i, row) in rows.iter().enumerate() {
        write!(f, "{}", if i == 0 { "[" } else { " " })?;
        for (col, elem) in row.iter().enumerate() {
            if col != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:>8.3}", elem)?;
        }
        if i + 1 == N {
            write!(f, " ]")?;
        } else {
            writeln!(f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{Matrix3, Matrix4};

    use super::*;

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(
            format!("{:?}", Matrix3::IDENTITY),
            "[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]"
        );
        assert_eq!(Matrix4::ZERO.trace(), 0.0);
        assert_eq!(Matrix4::IDENTITY.trace(), 4.0);
        assert!(Matrix4::IDENTITY.is_identity());
        assert!(!Matrix4::ZERO.is_nearly_identity());
    }

    #[test]
    fn rows_and_columns() {
        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [1, 2, 3],
            [4, 5, 6],
            [7, 8, 9],
        ]);
        assert_eq!(mat.row(1), [4, 5, 6]);
        assert_eq!(mat.column(1), [2, 5, 8]);
        assert_eq!(mat.transpose().row(1), [2, 5, 8]);
        assert_eq!(mat.get(2, 0), Some(&7));
        assert_eq!(mat.get(3, 0), None);
        assert_eq!(mat.into_rows()[2], [7, 8, 9]);
    }

    #[test]
    fn interpolate() {
        let a = Matrix3::IDENTITY;
        let b = Matrix3::ZERO;
        assert_eq!(a.interpolated(b, 0.0), a);
        assert_eq!(a.interpolated(b, 1.0), b);
        assert_eq!(a.interpolated(b, 0.5), Matrix3::IDENTITY * 0.5);
    }

    #[test]
    fn finite() {
        let mut m = Matrix4::IDENTITY;
        assert!(m.is_finite());
        m.m24 = Real::NAN;
        assert!(!m.is_finite());
        assert_eq!(m.make_finite(), Matrix4::IDENTITY);
    }

    #[test]
    fn bytes() {
        let m = Mat3::<f32>::IDENTITY;
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
        assert_eq!(floats, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }
}
