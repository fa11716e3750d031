//! Matrix composition, inversion and decomposition on randomized inputs.

mod common;

use common::{init_logger, random_real, LOOSE_TOLERANCE, TOLERANCE};
use vectormath::*;

fn random_matrix(rng: &mut fastrand::Rng) -> Matrix4 {
    Matrix::from_fn(|_, _| random_real(rng) * 4.0 - 2.0)
}

fn random_rotation(rng: &mut fastrand::Rng) -> Quaternion {
    let q = Quaternion::from_components(
        random_real(rng) - 0.5,
        random_real(rng) - 0.5,
        random_real(rng) - 0.5,
        random_real(rng) - 0.5,
    );
    q.normalized()
}

#[test]
fn associativity() {
    let mut rng = fastrand::Rng::with_seed(42);

    for _ in 0..100 {
        let (a, b, c) = (
            random_matrix(&mut rng),
            random_matrix(&mut rng),
            random_matrix(&mut rng),
        );
        assert_approx_eq!((a * b) * c, a * (b * c)).abs(TOLERANCE);

        let v = Vector3::from_fn(|_| random_real(&mut rng)).extend(1.0);
        assert_approx_eq!(v * (a * b), (v * a) * b).abs(TOLERANCE);
    }
}

#[test]
fn inverse_law() {
    let mut rng = fastrand::Rng::with_seed(3);

    let mut checked = 0;
    while checked < 100 {
        let m = random_matrix(&mut rng);
        if m.determinant().abs() < 0.1 {
            continue;
        }
        assert_approx_eq!(m * m.inverse(), Matrix4::IDENTITY).abs(LOOSE_TOLERANCE);
        assert_approx_eq!(m.inverse() * m, Matrix4::IDENTITY).abs(LOOSE_TOLERANCE);
        assert_approx_eq!(m.transpose().inverse(), m.inverse().transpose())
            .abs(LOOSE_TOLERANCE);
        checked += 1;
    }
}

#[test]
fn determinant_is_multiplicative() {
    let mut rng = fastrand::Rng::with_seed(11);

    for _ in 0..100 {
        let a = random_matrix(&mut rng);
        let b = random_matrix(&mut rng);
        assert_approx_eq!((a * b).determinant(), a.determinant() * b.determinant())
            .abs(LOOSE_TOLERANCE);
    }
}

#[test]
fn decompose_random_transforms() {
    init_logger();
    let mut rng = fastrand::Rng::with_seed(2024);

    for _ in 0..200 {
        let scale = vec3(
            0.1 + random_real(&mut rng) * 5.0,
            0.1 + random_real(&mut rng) * 5.0,
            0.1 + random_real(&mut rng) * 5.0,
        );
        let rotation = random_rotation(&mut rng);
        let translation =
            Vector3::from_fn(|_| random_real(&mut rng)) * 100.0 - Vector3::splat(50.0);

        let m = Matrix4::from_scale(scale)
            * Matrix4::from(rotation)
            * Matrix4::from_translation(translation);
        let (t, r, s) = m.decompose();
        assert_approx_eq!(t, translation).abs(TOLERANCE);
        assert_approx_eq!(s, scale).abs(TOLERANCE);
        assert_approx_eq!(Matrix4::from(r), Matrix4::from(rotation)).abs(TOLERANCE);

        // Recomposing yields the original matrix.
        let recomposed = Matrix4::from_scale(s) * Matrix4::from(r) * Matrix4::from_translation(t);
        assert_approx_eq!(recomposed, m).abs(TOLERANCE);
    }
}

#[test]
fn decompose_builder_chain() {
    let m = Matrix4::IDENTITY
        .rotate(vec3(deg_to_rad(30.0), 0.0, deg_to_rad(90.0)))
        .scale(vec3(1.0, 5.5, 3.0))
        .translate(vec3(1.0, 0.0, 3.0));
    let (translation, _, _) = m.decompose();
    assert_approx_eq!(translation, vec3(1.0, 0.0, 3.0));

    // Scaling first keeps the scale axis-aligned, so it can be recovered as well.
    let m = Matrix4::IDENTITY
        .scale(vec3(1.0, 5.5, 3.0))
        .rotate(vec3(deg_to_rad(30.0), 0.0, deg_to_rad(90.0)))
        .translate(vec3(1.0, 0.0, 3.0));
    let (translation, rotation, scale) = m.decompose();
    assert_approx_eq!(translation, vec3(1.0, 0.0, 3.0));
    assert_approx_eq!(scale, vec3(1.0, 5.5, 3.0));
    assert_approx_eq!(
        rotation.to_rotation_vector(),
        vec3(deg_to_rad(30.0), 0.0, deg_to_rad(90.0))
    );
}

#[test]
fn affine_2d() {
    let m = Matrix3::from_scale(vec2(2.0, 3.0))
        * Matrix3::from_rotation(HALF_PI)
        * Matrix3::from_translation(vec2(5.0, 5.0));
    let p = vec2(1.0, 1.0);
    assert_approx_eq!(p * m, vec2(2.0, 7.0));
    assert_approx_eq!((p * m) * m.inverse(), p);

    let t = AffineTransform::from(m);
    assert_approx_eq!(t.apply(p), p * m);
    assert_approx_eq!(Matrix3::from(t), m);
}

#[test]
fn array_bridging() {
    let m = Matrix4::from_translation(vec3(1.0, 2.0, 3.0));
    let array: [Real; 16] = m.into();
    assert_eq!(&array[12..], &[1.0, 2.0, 3.0, 1.0]);
    assert_eq!(Matrix4::from(array), m);
    assert_eq!(Matrix4::try_from(&array[..]), Ok(m));
    assert_eq!(
        Matrix4::try_from(&array[..9]),
        Err(LengthError {
            expected: 16,
            actual: 9
        })
    );

    let q: [Real; 4] = Quaternion::IDENTITY.into();
    assert_eq!(q, [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(Vector3::try_from(&[1.0, 2.0, 3.0][..]), Ok(vec3(1.0, 2.0, 3.0)));
}

#[test]
fn raw_memory() {
    let points = [vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)];
    let flat: &[Real] = bytemuck::cast_slice(&points);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    let m = Matrix4::IDENTITY;
    let elems: &[Real; 16] = bytemuck::cast_ref(&m);
    assert_eq!(elems[5], 1.0);
    assert_eq!(elems[4], 0.0);

    let q = Quaternion::from_components(1.0, 2.0, 3.0, 4.0);
    let bytes = bytemuck::bytes_of(&q);
    assert_eq!(bytes.len(), 4 * std::mem::size_of::<Real>());
}
