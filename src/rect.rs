//! Axis-aligned rectangles.
//!
//! Coordinates grow downwards: the top edge of a [`Rect`] is at `origin.y`, the bottom edge at
//! `origin.y + size.h`.

use std::fmt;

use crate::{
    approx::{ApproxEq, NearlyEq},
    vec2, Matrix3, Real, Vector2,
};

/// A position in 2D space.
pub type Point = Vector2;

/// A width and a height, accessible as `size.w` and `size.h`.
pub type Size = Vector2;

/// Insets from each edge of a [`Rect`], see [`Rect::inset_edges`].
///
/// Positive values shrink the rectangle, negative values grow it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    pub top: Real,
    pub left: Real,
    pub bottom: Real,
    pub right: Real,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: Real, left: Real, bottom: Real, right: Real) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Creates insets that are `amount` on every side.
    pub const fn uniform(amount: Real) -> Self {
        Self::new(amount, amount, amount, amount)
    }
}

/// An axis-aligned rectangle, described by its top-left corner and its size.
///
/// The size may be negative, in which case `origin` is not the top-left corner. Most methods
/// behave as if the rectangle was [`standardized`] first.
///
/// [`standardized`]: Rect::standardized
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::from_origin_size(Point::ZERO, Size::ZERO);

    /// Creates a rectangle extending downwards and right from `(x, y)`.
    pub const fn new(x: Real, y: Real, width: Real, height: Real) -> Self {
        Self::from_origin_size(vec2(x, y), vec2(width, height))
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates the rectangle spanned by two opposite corners.
    ///
    /// The result is standardized, so the corners may be given in any order.
    pub fn from_points(p1: Point, p2: Point) -> Self {
        Self::from_origin_size(p1, p2 - p1).standardized()
    }

    /// Creates a rectangle extending outwards from a center point.
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    /// Computes the bounding rectangle that encompasses `points`.
    ///
    /// Returns [`None`] if `points` is an empty iterator.
    pub fn bounding<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();

        let first = iter.next()?;
        let (mut min, mut max) = (first, first);

        for pt in iter {
            min = min.min(pt);
            max = max.max(pt);
        }

        Some(Self::from_origin_size(min, max - min))
    }

    /// Returns an equivalent rectangle with non-negative width and height.
    pub fn standardized(&self) -> Self {
        let mut res = *self;
        if res.size.w < 0.0 {
            res.origin.x += res.size.w;
            res.size.w = -res.size.w;
        }
        if res.size.h < 0.0 {
            res.origin.y += res.size.h;
            res.size.h = -res.size.h;
        }
        res
    }

    /// Returns the smallest rectangle with integer coordinates that contains `self`.
    pub fn integral(&self) -> Self {
        let r = self.standardized();
        let min = r.top_left().map(Real::floor);
        let max = r.bottom_right().map(Real::ceil);
        Self::from_origin_size(min, max - min)
    }

    /// Snaps the edges of `self` to pixel centers, so that a 1-pixel line drawn along them covers
    /// whole pixels.
    pub fn for_line_drawing(&self) -> Self {
        let r = self.standardized();
        let top_left = r.top_left().map(Real::floor) + Vector2::splat(0.5);
        let size = r.bottom_right().map(Real::ceil) - top_left - Vector2::ONE;
        Self::from_origin_size(top_left, size)
    }

    #[inline]
    pub fn left(&self) -> Real {
        self.standardized().origin.x
    }

    #[inline]
    pub fn right(&self) -> Real {
        let r = self.standardized();
        r.origin.x + r.size.w
    }

    #[inline]
    pub fn top(&self) -> Real {
        self.standardized().origin.y
    }

    #[inline]
    pub fn bottom(&self) -> Real {
        let r = self.standardized();
        r.origin.y + r.size.h
    }

    #[inline]
    pub fn width(&self) -> Real {
        self.size.w.abs()
    }

    #[inline]
    pub fn height(&self) -> Real {
        self.size.h.abs()
    }

    #[inline]
    pub fn area(&self) -> Real {
        self.width() * self.height()
    }

    /// Returns `true` if the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.size.w == 0.0 || self.size.h == 0.0
    }

    pub fn center(&self) -> Point {
        self.origin + self.size * 0.5
    }

    /// Moves the rectangle so that its center is at `center`, keeping its size.
    pub fn set_center(&mut self, center: Point) {
        self.origin = center - self.size * 0.5;
    }

    pub fn top_left(&self) -> Point {
        vec2(self.left(), self.top())
    }

    pub fn top_right(&self) -> Point {
        vec2(self.right(), self.top())
    }

    pub fn bottom_right(&self) -> Point {
        vec2(self.right(), self.bottom())
    }

    pub fn bottom_left(&self) -> Point {
        vec2(self.left(), self.bottom())
    }

    pub fn top_center(&self) -> Point {
        vec2(self.center().x, self.top())
    }

    pub fn middle_right(&self) -> Point {
        vec2(self.right(), self.center().y)
    }

    pub fn bottom_center(&self) -> Point {
        vec2(self.center().x, self.bottom())
    }

    pub fn middle_left(&self) -> Point {
        vec2(self.left(), self.center().y)
    }

    /// Returns the corners in clockwise order, starting at the top left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// Returns the midpoints of the edges in clockwise order, starting at the top.
    pub fn side_points(&self) -> [Point; 4] {
        [
            self.top_center(),
            self.middle_right(),
            self.bottom_center(),
            self.middle_left(),
        ]
    }

    /// Moves each edge towards the center by `dx` (left and right) and `dy` (top and bottom).
    ///
    /// Negative values grow the rectangle. If an inset exceeds half the size, that dimension
    /// collapses to 0 at the center.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let r = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// assert_eq!(r.inset(10.0, -20.0), Rect::new(10.0, -20.0, 80.0, 140.0));
    /// ```
    #[must_use]
    pub fn inset(&self, dx: Real, dy: Real) -> Self {
        self.inset_edges(EdgeInsets::new(dy, dx, dy, dx))
    }

    /// Moves each edge towards the center by the corresponding inset.
    #[must_use]
    pub fn inset_edges(&self, insets: EdgeInsets) -> Self {
        let r = self.standardized();
        let mut res = Self::new(
            r.origin.x + insets.left,
            r.origin.y + insets.top,
            r.size.w - insets.left - insets.right,
            r.size.h - insets.top - insets.bottom,
        );
        if res.size.w < 0.0 {
            res.origin.x += res.size.w * 0.5;
            res.size.w = 0.0;
        }
        if res.size.h < 0.0 {
            res.origin.y += res.size.h * 0.5;
            res.size.h = 0.0;
        }
        res
    }

    #[must_use]
    pub fn offset(&self, offset: Vector2) -> Self {
        Self {
            origin: self.origin + offset,
            ..*self
        }
    }

    /// Returns `true` if `point` lies inside `self` or on its boundary.
    pub fn contains_point(&self, point: Point) -> bool {
        self.left() <= point.x
            && self.top() <= point.y
            && self.right() >= point.x
            && self.bottom() >= point.y
    }

    /// Returns `true` if `other` lies completely inside `self`.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    /// Computes the intersection of `self` and `other`.
    ///
    /// Returns [`None`] when the intersection is empty (ie. the rectangles do not overlap).
    /// Rectangles that only touch produce a rectangle with zero width or height.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let min = self.top_left().max(other.top_left());
        let max = self.bottom_right().min(other.bottom_right());
        if min.x > max.x || min.y > max.y {
            return None;
        }

        Some(Self::from_origin_size(min, max - min))
    }

    /// Computes the smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let min = self.top_left().min(other.top_left());
        let max = self.bottom_right().max(other.bottom_right());
        Self::from_origin_size(min, max - min)
    }

    /// Computes the smallest rectangle containing all of `rects`.
    ///
    /// Returns [`Rect::ZERO`] if `rects` is empty.
    pub fn union_all<I: IntoIterator<Item = Rect>>(rects: I) -> Rect {
        let mut iter = rects.into_iter();
        match iter.next() {
            Some(first) => iter.fold(first.standardized(), |acc, r| acc.union(&r)),
            None => Rect::ZERO,
        }
    }

    /// Transforms the corners of `self` by `m` and returns their bounding rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vectormath::*;
    /// let r = Rect::new(0.0, 0.0, 2.0, 1.0);
    /// let rotated = r.transformed(&Matrix3::from_rotation(HALF_PI));
    /// assert_approx_eq!(rotated, Rect::new(-1.0, 0.0, 1.0, 2.0));
    /// ```
    pub fn transformed(&self, m: &Matrix3) -> Rect {
        let corners = self.corners().map(|p| p * *m);
        let mut min = corners[0];
        let mut max = corners[0];
        for p in &corners[1..] {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self::from_origin_size(min, max - min)
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rect @ ({},{})/{}x{}",
            self.origin.x, self.origin.y, self.size.w, self.size.h
        )
    }
}

impl NearlyEq for Rect {
    fn nearly_eq(&self, other: &Self) -> bool {
        self.origin.nearly_eq(&other.origin) && self.size.nearly_eq(&other.size)
    }
}

impl ApproxEq for Rect {
    type Tolerance = Real;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.origin.abs_diff_eq(&other.origin, abs_tolerance)
            && self.size.abs_diff_eq(&other.size, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.origin.rel_diff_eq(&other.origin, rel_tolerance)
            && self.size.rel_diff_eq(&other.size, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.origin.ulps_diff_eq(&other.origin, ulps_tolerance)
            && self.size.ulps_diff_eq(&other.size, ulps_tolerance)
    }
}
