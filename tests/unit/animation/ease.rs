use super::*;

#[test]
fn endpoints_are_exact() {
    for curve in [Curve::Linear, Curve::OutCubic, Curve::InOutCubic] {
        assert_eq!(curve.apply(0.0), 0.0);
        assert_eq!(curve.apply(1.0), 1.0);
    }
}

#[test]
fn input_is_clamped() {
    for curve in [Curve::Linear, Curve::OutCubic, Curve::InOutCubic] {
        assert_eq!(curve.apply(-0.5), 0.0);
        assert_eq!(curve.apply(1.5), 1.0);
    }
}

#[test]
fn out_cubic_midpoint() {
    // 1 - (1 - 0.5)^3 = 0.875
    assert!((Curve::OutCubic.apply(0.5) - 0.875).abs() < 1e-12);
}

#[test]
fn in_out_cubic_is_symmetric() {
    // 4 * 0.25^3 = 0.0625 below the midpoint, mirrored above.
    assert!((Curve::InOutCubic.apply(0.25) - 0.0625).abs() < 1e-12);
    assert!((Curve::InOutCubic.apply(0.75) - 0.9375).abs() < 1e-12);
    assert!((Curve::InOutCubic.apply(0.5) - 0.5).abs() < 1e-12);
}

#[test]
fn curves_are_monotone() {
    for curve in [Curve::Linear, Curve::OutCubic, Curve::InOutCubic] {
        let mut prev = 0.0;
        for i in 0..=100u32 {
            let v = curve.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "{curve:?} decreased at step {i}");
            prev = v;
        }
    }
}
