use approx::assert_abs_diff_eq;
use num_complex::Complex64;
use phasor::{ALPHA, Error, FromArrayLike, Phasor};

const MAGNITUDE: f64 = 10.0;

#[test]
fn canonical_angles() {
    let m = MAGNITUDE;
    let cases = [
        (0.0, Complex64::new(m, 0.0)),
        (30.0, Complex64::new(m * 3f64.sqrt() / 2.0, m / 2.0)),
        (45.0, Complex64::new(m / 2f64.sqrt(), m / 2f64.sqrt())),
        (60.0, Complex64::new(m / 2.0, m * 3f64.sqrt() / 2.0)),
        (90.0, Complex64::new(0.0, m)),
    ];
    for (angle, expected) in cases {
        let p = Phasor::new(m, angle);
        assert_abs_diff_eq!(p.real(), expected.re, epsilon = 1e-9);
        assert_abs_diff_eq!(p.imag(), expected.im, epsilon = 1e-9);
        assert_abs_diff_eq!(p, Phasor::from_complex(expected), epsilon = 1e-9);
    }
}

#[test]
fn full_turn_periodicity() {
    for theta in [0.0, 17.0, 123.0, 359.0] {
        assert_abs_diff_eq!(
            Phasor::new(MAGNITUDE, theta),
            Phasor::new(MAGNITUDE, theta + 360.0),
            epsilon = 1e-9
        );
    }
}

#[test]
fn conjugate_product_is_magnitude_squared() {
    let theta = 73.0;
    let z0 = Phasor::new(MAGNITUDE, theta);
    let z1 = Phasor::new(MAGNITUDE, -theta);
    let product = z0 * z1;
    assert_abs_diff_eq!(product, Phasor::from(z0.abs().powi(2)), epsilon = 1e-9);
    assert_abs_diff_eq!(product.imag(), 0.0, epsilon = 1e-9);
}

#[test]
fn half_turn_negates() {
    let theta = 211.0;
    let z0 = Phasor::new(MAGNITUDE, theta);
    let z1 = Phasor::new(MAGNITUDE, 180.0 + theta);
    assert_abs_diff_eq!(z0, -1.0 * z1, epsilon = 1e-9);
}

#[test]
fn alpha_constant() {
    assert_eq!(*ALPHA, Phasor::new(1.0, 120.0));
    let a_phase = Phasor::new(5.0, 0.0);
    let b_phase = Phasor::new(5.0, 120.0);
    assert_abs_diff_eq!(a_phase * *ALPHA, b_phase, epsilon = 1e-12);
}

#[test]
fn rectangular_round_trip() {
    for z in [
        Complex64::new(3.0, 4.0),
        Complex64::new(-2.5, 0.1),
        Complex64::new(-1e-3, -7.0),
        Complex64::new(0.0, -1.0),
    ] {
        let p = Phasor::from(z);
        assert_abs_diff_eq!(p.real(), z.re, epsilon = 1e-12);
        assert_abs_diff_eq!(p.imag(), z.im, epsilon = 1e-12);

        let rebuilt = Phasor::new(p.mag(), p.ang());
        assert_abs_diff_eq!(rebuilt.real(), z.re, epsilon = 1e-12);
        assert_abs_diff_eq!(rebuilt.imag(), z.im, epsilon = 1e-12);
    }
}

#[test]
fn ordering_ignores_angle() {
    assert!(Phasor::new(5.0, 0.0).mag_lt(Phasor::new(10.0, 999.0)));

    let a = Phasor::new(5.0, 0.0);
    let b = Phasor::new(5.0, 77.0);
    assert!(!a.mag_lt(b));
    assert!(!a.mag_gt(b));
}

#[test]
fn batch_construction() {
    let batch = Phasor::from_array_like([[1.0, 0.0], [2.0, 90.0]]).unwrap();
    assert_eq!(
        batch,
        FromArrayLike::Batch(vec![Phasor::new(1.0, 0.0), Phasor::new(2.0, 90.0)])
    );

    let single = Phasor::from_array_like([1.0, 0.0]).unwrap();
    assert_eq!(single, FromArrayLike::Single(Phasor::new(1.0, 0.0)));
}

#[test]
fn true_division() {
    let q = Phasor::new(10.0, 0.0) / Phasor::new(2.0, 0.0);
    assert_abs_diff_eq!(q, Phasor::new(5.0, 0.0), epsilon = 1e-12);

    let err = Phasor::new(10.0, 0.0).checked_div(Phasor::new(0.0, 30.0));
    assert_eq!(err, Err(Error::DivisionByZero));
}
