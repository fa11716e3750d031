//! Randomized checks of the quaternion conversions and their interplay with `Matrix4`.

mod common;

use common::{init_logger, random_real, LOOSE_TOLERANCE, TOLERANCE};
use vectormath::*;

fn random_axis(rng: &mut fastrand::Rng) -> Vector3 {
    loop {
        let v = Vector3::from_fn(|_| random_real(rng)) * 2.0 - Vector3::ONE;
        let len = v.length();
        if len > 0.1 && len <= 1.0 {
            return v / len;
        }
    }
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quaternion {
    let angle = random_real(rng) * TWO_PI;
    Quaternion::from_axis_angle(random_axis(rng).extend(angle))
}

#[test]
fn axis_angle_round_trip() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(7);

    for _ in 0..500 {
        let axis = random_axis(&mut rng);
        // Stay away from 0 and 2π, where the axis cannot be recovered.
        let angle = 0.01 + random_real(&mut rng) * (TWO_PI - 0.02);

        let q = Quaternion::from_axis_angle(axis.extend(angle));
        let aa = q.to_axis_angle();
        assert_approx_eq!(aa.xyz(), axis).abs(TOLERANCE);
        assert_approx_eq!(aa.w, angle).abs(TOLERANCE);
    }
}

#[test]
fn matrix_round_trip() {
    let mut rng = fastrand::Rng::with_seed(0xdead);

    for _ in 0..500 {
        let q = random_rotation(&mut rng);
        let m = Matrix4::from(q);
        assert!(m.is_affine());
        assert_approx_eq!(m.determinant(), 1.0).abs(TOLERANCE);

        let back = Quaternion::from(m);
        assert_approx_eq!(Matrix4::from(back), m).abs(TOLERANCE);
    }
}

#[test]
fn composition_law() {
    let mut rng = fastrand::Rng::with_seed(1234);

    for _ in 0..200 {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        assert_approx_eq!(
            Matrix4::from(a * b),
            Matrix4::from(b) * Matrix4::from(a)
        )
        .abs(TOLERANCE);

        let v = Vector3::from_fn(|_| random_real(&mut rng));
        assert_approx_eq!((a * b) * v, v * Matrix4::from(a * b)).abs(TOLERANCE);
    }
}

#[test]
fn euler_round_trip() {
    let mut rng = fastrand::Rng::with_seed(99);

    for _ in 0..500 {
        let pitch = (random_real(&mut rng) * 2.0 - 1.0) * (PI - 0.01);
        let yaw = (random_real(&mut rng) * 2.0 - 1.0) * (HALF_PI - 0.01);
        let roll = (random_real(&mut rng) * 2.0 - 1.0) * (PI - 0.01);

        let q = Quaternion::from_pitch_yaw_roll(pitch, yaw, roll);
        assert_approx_eq!(q.to_rotation_vector(), vec3(pitch, yaw, roll))
            .abs(LOOSE_TOLERANCE);

        // Euler angles apply X, then Y, then Z, like `Matrix4::rotate`.
        let m = Matrix4::IDENTITY.rotate(vec3(pitch, yaw, roll));
        assert_approx_eq!(Matrix4::from(q), m).abs(TOLERANCE);
    }
}

#[test]
fn slerp_boundaries() {
    let mut rng = fastrand::Rng::with_seed(5);

    for _ in 0..200 {
        let a = random_rotation(&mut rng);
        let b = random_rotation(&mut rng);
        assert_approx_eq!(a.interpolated(b, 0.0), a).abs(TOLERANCE);
        assert_approx_eq!(a.interpolated(b, 1.0), b).abs(LOOSE_TOLERANCE);

        let t = random_real(&mut rng);
        assert_approx_eq!(a.interpolated(a, t), a);
        assert_approx_eq!(a.interpolated(b, t).length(), 1.0).abs(TOLERANCE);
    }
}

#[test]
fn rotating_y_around_x() {
    let q = Quaternion::from_axis_angle(vec4(1.0, 0.0, 0.0, HALF_PI));
    assert_approx_eq!(q * vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0));
}
