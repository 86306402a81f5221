use super::*;
use crate::animation::ease::Curve;
use crate::animation::spring::SpringConfig;

fn minimal_json() -> serde_json::Value {
    serde_json::json!({
        "fps": {"num": 30, "den": 1},
        "canvas": {"width": 1920, "height": 1080},
        "duration": 30,
        "source": {"Image": {"source": "stills/cover.jpg"}}
    })
}

fn comp_from(v: serde_json::Value) -> Composition {
    serde_json::from_value(v).unwrap()
}

#[test]
fn sweep_defaults_match_stock_reveal() {
    let comp = comp_from(minimal_json());
    assert_eq!(comp.sweep.swivel_start_deg, -30.0);
    assert_eq!(comp.sweep.swivel_end_deg, 0.0);
    assert_eq!(comp.sweep.tilt_start_deg, 15.0);
    assert_eq!(comp.sweep.tilt_end_deg, 0.0);
    assert_eq!(comp.sweep.scale_start, 1.1);
    assert_eq!(comp.sweep.scale_end, 1.0);
    assert_eq!(comp.sweep.translate_y_pct, 0.0);
    assert_eq!(comp.sweep.perspective_px, 1000.0);
    assert_eq!(comp.sweep.easing, Easing::Eased(Curve::OutCubic));
    assert!(matches!(comp.background, Background::Color(c) if c == Color::BLACK));
    assert!(comp.validate().is_ok());
}

#[test]
fn partial_sweep_keeps_remaining_defaults() {
    let mut v = minimal_json();
    v["sweep"] = serde_json::json!({
        "swivel_start_deg": 3.5,
        "swivel_end_deg": -3.5,
        "easing": "linear"
    });
    let comp = comp_from(v);
    assert_eq!(comp.sweep.swivel_start_deg, 3.5);
    assert_eq!(comp.sweep.tilt_start_deg, 15.0);
    assert_eq!(comp.sweep.easing, Easing::Eased(Curve::Linear));
}

#[test]
fn rejects_degenerate_timeline() {
    let mut v = minimal_json();
    v["duration"] = serde_json::json!(0);
    assert!(comp_from(v).validate().is_err());

    let mut v = minimal_json();
    v["fps"] = serde_json::json!({"num": 0, "den": 1});
    assert!(comp_from(v).validate().is_err());

    let mut v = minimal_json();
    v["canvas"] = serde_json::json!({"width": 0, "height": 1080});
    assert!(comp_from(v).validate().is_err());
}

#[test]
fn rejects_bad_sweep_values() {
    let mut v = minimal_json();
    v["sweep"] = serde_json::json!({"perspective_px": 0.0});
    assert!(comp_from(v).validate().is_err());

    let mut v = minimal_json();
    v["sweep"] = serde_json::json!({"scale_start": -1.0});
    assert!(comp_from(v).validate().is_err());
}

#[test]
fn rejects_bad_spring_constants() {
    let comp = Composition {
        sweep: Sweep {
            easing: Easing::Spring(SpringConfig {
                stiffness: -1.0,
                damping: 20.0,
                mass: 0.5,
            }),
            ..Sweep::default()
        },
        ..comp_from(minimal_json())
    };
    assert!(comp.validate().is_err());
}

#[test]
fn rejects_escaping_source_paths() {
    let mut v = minimal_json();
    v["source"] = serde_json::json!({"Image": {"source": "/abs/path.jpg"}});
    assert!(comp_from(v).validate().is_err());

    let mut v = minimal_json();
    v["source"] = serde_json::json!({"Image": {"source": "../escape.jpg"}});
    assert!(comp_from(v).validate().is_err());

    let mut v = minimal_json();
    v["source"] = serde_json::json!({"Image": {"source": "  "}});
    assert!(comp_from(v).validate().is_err());
}

#[test]
fn rejects_bad_media_controls() {
    let mut v = minimal_json();
    v["source"] = serde_json::json!({"Video": {"source": "clips/a.mp4", "playback_rate": 0.0}});
    assert!(comp_from(v).validate().is_err());

    let mut v = minimal_json();
    v["source"] = serde_json::json!({
        "FrameSequence": {"directory": "frames", "frame_count": 0}
    });
    assert!(comp_from(v).validate().is_err());
}

#[test]
fn playback_rate_defaults_to_realtime() {
    let mut v = minimal_json();
    v["source"] = serde_json::json!({"Video": {"source": "clips/a.mp4"}});
    let comp = comp_from(v);
    let Source::Video(video) = &comp.source else {
        panic!("expected video source");
    };
    assert_eq!(video.playback_rate, 1.0);
}

#[test]
fn background_accepts_hex_color() {
    let mut v = minimal_json();
    v["background"] = serde_json::json!({"Color": "#2d3436"});
    let comp = comp_from(v);
    assert!(comp.validate().is_ok());
    let Background::Color(c) = comp.background else {
        panic!("expected color background");
    };
    assert_eq!(c.to_rgba8().to_hex_string(), "#2d3436");
}
