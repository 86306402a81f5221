use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(3)).unwrap().is_empty());
}

#[test]
fn fps_conversions() {
    let fps = Fps::new(60, 1).unwrap();
    assert_eq!(fps.as_f64(), 60.0);
    assert_eq!(fps.frames_to_secs(150), 2.5);

    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 0.001);

    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn rgba8_hex_forms() {
    let c = Rgba8 {
        r: 0x2d,
        g: 0x34,
        b: 0x36,
        a: 255,
    };
    assert_eq!(c.to_hex_string(), "#2d3436");

    let c = Rgba8 {
        r: 0,
        g: 0,
        b: 255,
        a: 128,
    };
    assert_eq!(c.to_hex_string(), "#0000ff80");
}

#[test]
fn pose_transform_string_identity() {
    assert_eq!(
        Pose3D::default().to_transform_string(),
        "translateY(0%) rotateY(0deg) rotateX(0deg) scale(1)"
    );
}

#[test]
fn pose_transform_string_formats_components() {
    let pose = Pose3D {
        swivel_deg: 3.5,
        tilt_deg: 1.7,
        scale: 0.985,
        translate_y_pct: 0.0,
    };
    assert_eq!(
        pose.to_transform_string(),
        "translateY(0%) rotateY(3.5deg) rotateX(1.7deg) scale(0.985)"
    );

    let pose = Pose3D {
        swivel_deg: -2.625,
        tilt_deg: 0.0,
        scale: 1.05,
        translate_y_pct: -4.0,
    };
    assert_eq!(
        pose.to_transform_string(),
        "translateY(-4%) rotateY(-2.625deg) rotateX(0deg) scale(1.05)"
    );
}
