use thiserror::Error;

/// Error returned when building a vector, matrix or quaternion from a slice of the wrong length.
///
/// # Examples
///
/// ```
/// # use vectormath::*;
/// let err = Matrix3::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
/// assert_eq!(err, LengthError { expected: 9, actual: 3 });
/// assert_eq!(err.to_string(), "expected 9 elements, got 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} elements, got {actual}")]
pub struct LengthError {
    pub expected: usize,
    pub actual: usize,
}
