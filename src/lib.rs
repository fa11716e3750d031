//! Vector, matrix and quaternion algebra for 2D and 3D graphics code.
//!
//! This library provides small, fixed-size, [`Copy`] value types for the geometry that shows up in
//! UI layout, animation and rendering code:
//!
//! - [`Vector2`], [`Vector3`] and [`Vector4`] for points, directions, sizes and homogeneous
//!   coordinates.
//! - [`Matrix3`] for 2D affine transforms and [`Matrix4`] for 3D affine and projective
//!   transforms.
//! - [`Quaternion`] as an alternative representation of 3D rotations.
//! - [`Rect`] for axis-aligned rectangles.
//!
//! The core of the library is the transform algebra: composing transforms, inverting them, and
//! converting rotations between matrices, quaternions, axis-angle form and Euler angles. An affine
//! [`Matrix4`] can be split back into translation, rotation and scale with [`Matrix::decompose`].
//!
//! # Conventions
//!
//! Vectors are *row vectors* and go on the left of a matrix: `v' = v * M`. Matrices are stored in
//! row-major order, with the translation in the last row. Composing transforms reads left to right,
//! so `v * (a * b)` applies `a` first, then `b`.
//!
//! ```
//! use vectormath::*;
//!
//! let m = Matrix4::from_scale(vec3(2.0, 2.0, 2.0))
//!     * Matrix4::from_rotation_z(HALF_PI)
//!     * Matrix4::from_translation(vec3(10.0, 0.0, 0.0));
//! assert_approx_eq!(vec3(1.0, 0.0, 0.0) * m, vec3(10.0, 2.0, 0.0));
//! ```
//!
//! Quaternions multiply the other way around, like function composition: `a * b` rotates by `b`
//! first. See [`Quat`] for details.
//!
//! # Scalar Type
//!
//! All types are generic over their element type, and the aliases ([`Vector3`], [`Matrix4`],
//! [`Quaternion`], ...) use [`Real`], which is [`f64`] by default and [`f32`] when the `f32` cargo
//! feature is enabled.
//!
//! # Degenerate Input
//!
//! No operation in this library fails at runtime. Numerically degenerate inputs produce documented
//! fallback values (eg. [`Vector::normalized`] leaves a zero vector unchanged) or non-finite
//! results (eg. inverting a singular matrix). Some of these cases are reported as `log` records
//! at *debug* or *trace* level. [`Finite`] can be used to detect and sanitize non-finite values.

pub mod approx;
mod bridge;
mod error;
mod matrix;
mod quat;
mod rect;
mod scalar;
mod traits;
mod vector;

pub use bridge::AffineTransform;
pub use error::LengthError;
pub use matrix::*;
pub use quat::*;
pub use rect::*;
pub use scalar::*;
pub use traits::*;
pub use vector::*;
