use std::{array, fmt};

use crate::{
    approx::{ApproxEq, NearlyEq},
    traits::{Finite, Float, MinMax, Number, Sqrt},
    LengthError, One, Real, Zero,
};

mod ops;
mod view;

pub use view::{WH, XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// A 2-dimensional vector with [`Real`] elements.
pub type Vector2 = Vec2<Real>;
/// A 3-dimensional vector with [`Real`] elements.
pub type Vector3 = Vec3<Real>;
/// A 4-dimensional vector with [`Real`] elements.
///
/// Besides homogeneous coordinates, this is also used to pass rotations in axis-angle form: `x`,
/// `y` and `z` hold the (normalized) rotation axis, `w` holds the angle in radians.
pub type Vector4 = Vec4<Real>;

/// An `N`-element vector storing elements of type `T`.
///
/// Vectors are treated as *row vectors* when multiplied with a [`Matrix`][crate::Matrix]: the
/// vector goes on the left (`v * m`).
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a value into each element, [`Vector::from_fn`] invokes a closure with
///   the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices via
///   [`TryFrom`] (failing with a [`LengthError`] if the length doesn't match).
/// - [`Vector::ZERO`] and [`Vector::ONE`] contain all-zeroes and all-ones, respectively.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, and `w`. 2-dimensional vectors, which are
///   also used as sizes, additionally expose `w` and `h` aliases for `x` and `y`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the elements in
///   declaration order (`x`, `y`, `z`, `w`).
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    ///
    /// This is also the axis-angle value [`Quat::to_axis_angle`][crate::Quat::to_axis_angle]
    /// falls back to for degenerate rotations.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut left = self.0.into_iter();
        let mut right = other.0.into_iter();
        Vector::from_fn(|_| match (left.next(), right.next()) {
            (Some(l), Some(r)) => (l, r),
            // Both iterators yield exactly `N` items.
            _ => unreachable!(),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array, in declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec4(1, 2, 3, 4).into_array(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec2(4, 0).length_squared(), 16);
    /// ```
    pub fn length_squared(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length_squared().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// If the squared length is already nearly 1, or nearly 0, `self` is returned unchanged: a
    /// zero-length vector stays zero instead of turning into NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalized(), Vector3::Z);
    /// assert_eq!(Vector3::ZERO.normalized(), Vector3::ZERO);
    /// ```
    pub fn normalized(self) -> Self
    where
        T: Float,
    {
        let length_squared = self.length_squared();
        if length_squared.nearly_eq(&T::ZERO) || length_squared.nearly_eq(&T::ONE) {
            return self;
        }
        self / length_squared.sqrt()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other` (at `t = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let a = vec3(0.0, 10.0, -2.0);
    /// let b = vec3(1.0, 20.0, 2.0);
    /// assert_eq!(a.interpolated(b, 0.5), vec3(0.5, 15.0, 0.0));
    /// ```
    pub fn interpolated(self, other: Self, t: T) -> Self
    where
        T: Number,
    {
        self + (other - self) * t
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps every element of `self` to the range `min..=max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec3(-2.0, 0.5, 7.0).clamp(0.0, 1.0), vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn clamp(self, min: T, max: T) -> Self
    where
        T: MinMax + Copy,
    {
        self.map(|elem| elem.clamp(min, max))
    }

    /// Returns `true` if every element of `self` is exactly 1.
    ///
    /// This is mostly useful to check whether a scale factor does anything.
    pub fn is_one(&self) -> bool
    where
        T: One + PartialEq,
    {
        self.0.iter().all(|elem| *elem == T::ONE)
    }

    /// Returns `true` if every element of `self` is nearly 1.
    pub fn is_nearly_one(&self) -> bool
    where
        T: Float,
    {
        self.0.iter().all(|elem| elem.nearly_eq(&T::ONE))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Computes the 2D cross product (the [perpendicular dot product]) of `self` and `other`.
    ///
    /// This is the Z coordinate of the 3D cross product of both vectors extended with `z = 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(Vector2::X.cross(Vector2::Y), 1.0);
    /// assert_eq!(Vector2::Y.cross(Vector2::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        let [x1, y1] = self.0;
        let [x2, y2] = other.0;
        x1 * y2 - y1 * x2
    }

    /// Rotates `self` by `radians` around the origin.
    ///
    /// Positive angles rotate from the X axis towards the Y axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_approx_eq!(Vector2::X.rotated_by(HALF_PI), Vector2::Y);
    /// ```
    pub fn rotated_by(self, radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = radians.sin_cos();
        let [x, y] = self.0;
        Vector([x * cos - y * sin, x * sin + y * cos])
    }

    /// Rotates `self` by `radians` around `pivot`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let p = vec2(2.0, 1.0).rotated_around(PI, vec2(1.0, 1.0));
    /// assert_approx_eq!(p, vec2(0.0, 1.0));
    /// ```
    pub fn rotated_around(self, radians: T, pivot: Self) -> Self
    where
        T: Float,
    {
        (self - pivot).rotated_by(radians) + pivot
    }

    /// Computes the signed angle (in radians, in `-π..=π`) that rotates `self` onto `other`.
    ///
    /// Both vectors should have a non-zero length. The angle between a vector and itself is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_approx_eq!(Vector2::X.angle_with(Vector2::Y), HALF_PI);
    /// assert_approx_eq!(Vector2::Y.angle_with(Vector2::X), -HALF_PI);
    /// ```
    pub fn angle_with(self, other: Self) -> T
    where
        T: Float,
    {
        if self == other {
            return T::ZERO;
        }

        let a = self.normalized();
        let b = other.normalized();
        let cross = a.cross(b);
        let dot = a.dot(b).clamp(-T::ONE, T::ONE);
        cross.atan2(dot)
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding its X and Y coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).xy();
    /// assert_eq!(v, vec2(-1.0, 2.0));
    /// ```
    pub fn xy(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Returns the X and Z coordinates of this vector.
    pub fn xz(self) -> Vector<T, 2> {
        let [x, _, z] = self.0;
        Vector([x, z])
    }

    /// Returns the Y and Z coordinates of this vector.
    pub fn yz(self) -> Vector<T, 2> {
        let [_, y, z] = self.0;
        Vector([y, z])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// Also see the [`From`] impl, which appends `w = 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both `self` and `other`. Swapping the arguments inverts its
    /// direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
    /// assert_eq!(Vector3::Y.cross(Vector3::X), -Vector3::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Drops the `w` component, yielding a 3-dimensional vector.
    ///
    /// Unlike [`Vector::to_real`], this does not perform a perspective division.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec4(1, 2, 3, 4).xyz(), vec3(1, 2, 3));
    /// ```
    pub fn xyz(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }

    /// Returns the X and Y coordinates of this vector.
    pub fn xy(self) -> Vector<T, 2> {
        let [x, y, _, _] = self.0;
        Vector([x, y])
    }

    /// Returns the X and Z coordinates of this vector.
    pub fn xz(self) -> Vector<T, 2> {
        let [x, _, z, _] = self.0;
        Vector([x, z])
    }

    /// Returns the Y and Z coordinates of this vector.
    pub fn yz(self) -> Vector<T, 2> {
        let [_, y, z, _] = self.0;
        Vector([y, z])
    }

    /// Converts homogeneous coordinates to their "real" representative by dividing by `w`.
    ///
    /// Vectors whose `w` is exactly 0 (directions) or exactly 1 are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// assert_eq!(vec4(2.0, 4.0, 6.0, 2.0).to_real(), vec4(1.0, 2.0, 3.0, 1.0));
    /// assert_eq!(vec4(2.0, 4.0, 6.0, 0.0).to_real(), vec4(2.0, 4.0, 6.0, 0.0));
    /// ```
    pub fn to_real(self) -> Self
    where
        T: Number,
    {
        let [x, y, z, w] = self.0;
        if w == T::ZERO || w == T::ONE {
            return self;
        }
        Vector([x / w, y / w, z / w, T::ONE])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = LengthError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        let array = <[T; N]>::try_from(slice).map_err(|_| LengthError {
            expected: N,
            actual: slice.len(),
        })?;
        Ok(Self(array))
    }
}

/// Turns a position into homogeneous coordinates (`w = 1`).
impl<T: One> From<Vector<T, 3>> for Vector<T, 4> {
    fn from(v: Vector<T, 3>) -> Self {
        v.extend(T::ONE)
    }
}

/// Drops the `w` component, like [`Vector::xyz`].
impl<T> From<Vector<T, 4>> for Vector<T, 3> {
    fn from(v: Vector<T, 4>) -> Self {
        v.xyz()
    }
}

impl<T: Finite, const N: usize> Finite for Vector<T, N> {
    fn is_finite(&self) -> bool {
        self.0.iter().all(T::is_finite)
    }

    fn make_finite(self) -> Self {
        self.map(T::make_finite)
    }
}

impl<T: NearlyEq, const N: usize> NearlyEq for Vector<T, N> {
    fn nearly_eq(&self, other: &Self) -> bool {
        self.0.nearly_eq(&other.0)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
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

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Finite, HALF_PI, PI, QUARTER_PI};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vector3::X.x, 1.0);
        assert_eq!(Vector3::X[0], 1.0);
        assert_eq!(Vector3::X.y, 0.0);
        assert_eq!(Vector3::Y.y, 1.0);
        assert_eq!(Vector4::W.w, 1.0);

        let mut size = vec2(0, 1);
        assert_eq!(size.w, 0);
        assert_eq!(size.h, 1);

        size.w = 777;
        assert_eq!(size.x, 777);
        assert_eq!(size[0], 777);
        size.y = 9;
        assert_eq!(size.h, 9);

        let mut v = vec4(1, 2, 3, 4);
        v.z = 30;
        assert_eq!(v.into_array(), [1, 2, 30, 4]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec4(0.0, 0.0, 0.0, 1.0)), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec4(0.0, 0.0, 0.0, 1.0)), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.2}", vec2(0.5, 1.0)), "(0.50, 1.00)");
    }

    #[test]
    fn normalized() {
        assert_approx_eq!(vec3(3.0, 0.0, 4.0).normalized(), vec3(0.6, 0.0, 0.8));
        assert_approx_eq!(vec2(-2.0, 0.0).normalized(), -Vector2::X);

        // Near-zero and near-unit vectors are passed through untouched.
        let tiny = vec3(1e-7, 0.0, 0.0);
        assert_eq!(tiny.normalized(), tiny);
        let almost_unit = vec4(1.0 + 1e-14, 0.0, 0.0, 0.0);
        assert_eq!(almost_unit.normalized(), almost_unit);
        assert_eq!(Vector4::ZERO.normalized(), Vector4::ZERO);
    }

    #[test]
    fn lengths() {
        assert_eq!(vec3(1.0, 2.0, 2.0).length(), 3.0);
        assert_eq!(vec4(1, 1, 1, 1).length_squared(), 4);
        assert_eq!(Vector2::ONE.length_squared(), 2.0);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(Vector2::X.dot(Vector2::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);
        assert_eq!(vec3(1, 2, 3).cross(vec3(1, 2, 3)), Vec3::<i32>::ZERO);
        assert_eq!(vec2(2.0, 0.0).cross(vec2(0.0, 3.0)), 6.0);
    }

    #[test]
    fn rotate_2d() {
        assert_approx_eq!(Vector2::X.rotated_by(HALF_PI), Vector2::Y);
        assert_approx_eq!(Vector2::Y.rotated_by(HALF_PI), -Vector2::X);
        assert_approx_eq!(Vector2::X.rotated_by(PI), -Vector2::X);
        assert_approx_eq!(
            vec2(3.0, 2.0).rotated_around(-HALF_PI, vec2(2.0, 2.0)),
            vec2(2.0, 1.0)
        );
    }

    #[test]
    fn angle_with() {
        assert_eq!(vec2(1.0, 1.0).angle_with(vec2(1.0, 1.0)), 0.0);
        assert_approx_eq!(Vector2::X.angle_with(vec2(1.0, 1.0)), QUARTER_PI);
        assert_approx_eq!(vec2(0.0, 5.0).angle_with(vec2(-3.0, 0.0)), HALF_PI);
        assert_approx_eq!(Vector2::X.angle_with(vec2(0.0, -2.0)), -HALF_PI);
        assert_approx_eq!(Vector2::X.angle_with(-Vector2::X), PI);
    }

    #[test]
    fn interpolate() {
        let a = vec4(0.0, 1.0, 2.0, 3.0);
        let b = vec4(4.0, 5.0, 6.0, 7.0);
        assert_eq!(a.interpolated(b, 0.0), a);
        assert_eq!(a.interpolated(b, 1.0), b);
        assert_eq!(a.interpolated(b, 0.25), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(a.interpolated(b, 2.0), vec4(8.0, 9.0, 10.0, 11.0));
    }

    #[test]
    fn homogeneous() {
        let p = vec3(1.0, 2.0, 3.0);
        let h = Vector4::from(p);
        assert_eq!(h, vec4(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector3::from(vec4(1.0, 2.0, 3.0, 9.0)), p);
        assert_eq!(vec4(2.0, 4.0, 6.0, 2.0).to_real(), h);
        assert_eq!(vec4(1.0, 1.0, 1.0, 0.0).to_real(), vec4(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn projections() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.xy(), vec2(1, 2));
        assert_eq!(v.xz(), vec2(1, 3));
        assert_eq!(v.yz(), vec2(2, 3));
        assert_eq!(v.xyz().xz(), vec2(1, 3));
        assert_eq!(v.xyz().yz(), vec2(2, 3));
    }

    #[test]
    fn slices() {
        let v = Vector4::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap();
        assert_eq!(v, vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            Vector3::try_from(&[1.0, 2.0][..]),
            Err(LengthError {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(vec2(5, 6).as_slice(), &[5, 6]);
    }

    #[test]
    fn finite() {
        let v = vec3(Real::NAN, Real::INFINITY, -1.0);
        assert!(!v.is_finite());
        let v = v.make_finite();
        assert!(v.is_finite());
        assert_eq!(v, vec3(0.0, Real::MAX, -1.0));
    }

    #[test]
    fn scale_checks() {
        assert!(Vector3::ONE.is_one());
        assert!(!Vector3::X.is_one());
        assert!(vec3(1.0, 1.0 + 1e-13, 1.0).is_nearly_one());
        assert!(!vec3(1.0, 1.1, 1.0).is_nearly_one());
    }

    #[test]
    fn clamp() {
        assert_eq!(vec3(-2, 5, 1).clamp(0, 3), vec3(0, 3, 1));
        assert_eq!(vec2(-1.0, 4.0).min(vec2(0.0, 1.0)), vec2(-1.0, 1.0));
        assert_eq!(vec2(-1.0, 4.0).max(vec2(0.0, 1.0)), vec2(0.0, 4.0));
    }

    #[test]
    fn bytes() {
        let points = [vec3(1.0f32, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
        let floats: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
