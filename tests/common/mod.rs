//! Helpers shared by the integration tests.

use vectormath::Real;

/// Absolute tolerance for values that went through a chain of transform operations.
#[cfg(not(feature = "f32"))]
pub const TOLERANCE: Real = 1e-9;
/// Absolute tolerance for values that went through a chain of transform operations.
#[cfg(feature = "f32")]
pub const TOLERANCE: Real = 1e-2;

/// Absolute tolerance for results that lose precision near a singularity (gimbal lock, slerp
/// between nearly opposite rotations).
#[cfg(not(feature = "f32"))]
pub const LOOSE_TOLERANCE: Real = 1e-6;
/// Absolute tolerance for results that lose precision near a singularity (gimbal lock, slerp
/// between nearly opposite rotations).
#[cfg(feature = "f32")]
pub const LOOSE_TOLERANCE: Real = 1e-2;

pub fn init_logger() {
    env_logger::builder()
        .is_test(true)
        .filter_module("vectormath", log::LevelFilter::Trace)
        .try_init()
        .ok();
}

/// Draws a uniformly distributed [`Real`] from `0.0..1.0`.
#[cfg(not(feature = "f32"))]
pub fn random_real(rng: &mut fastrand::Rng) -> Real {
    rng.f64()
}

/// Draws a uniformly distributed [`Real`] from `0.0..1.0`.
#[cfg(feature = "f32")]
pub fn random_real(rng: &mut fastrand::Rng) -> Real {
    rng.f32()
}
