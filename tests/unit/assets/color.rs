use super::*;
use serde_json::json;

#[test]
fn parses_hex_rgb_and_rgba() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);
}

#[test]
fn parses_rgba_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    assert!(serde_json::from_value::<Color>(json!([0.25, 0.5])).is_err());
}

#[test]
fn rejects_malformed_hex() {
    assert!(Color::from_hex("#12345").is_err());
    assert!(Color::from_hex("#gg0000").is_err());
}

#[test]
fn quantizes_to_rgba8() {
    let c = Color::from_hex("#2d3436").unwrap();
    assert_eq!(
        c.to_rgba8(),
        Rgba8 {
            r: 0x2d,
            g: 0x34,
            b: 0x36,
            a: 255,
        }
    );
    assert_eq!(c.to_rgba8().to_hex_string(), "#2d3436");

    // Out-of-range channels clamp instead of wrapping.
    let c = Color::rgba(2.0, -1.0, 0.5, 1.0);
    let q = c.to_rgba8();
    assert_eq!((q.r, q.g), (255, 0));
}
