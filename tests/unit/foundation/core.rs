use super::*;
use serde_json::json;

#[test]
fn parses_long_and_short_hex() {
    assert_eq!(
        Rgb8::parse_hex("#0077B5").unwrap(),
        Rgb8::new(0x00, 0x77, 0xb5)
    );
    assert_eq!(Rgb8::parse_hex("fff").unwrap(), Rgb8::WHITE);
    assert_eq!(Rgb8::parse_hex("#1a2").unwrap(), Rgb8::new(0x11, 0xaa, 0x22));
}

#[test]
fn rejects_malformed_hex() {
    assert!(Rgb8::parse_hex("#12345").is_err());
    assert!(Rgb8::parse_hex("#gg0000").is_err());
    assert!(Rgb8::parse_hex("").is_err());
    assert!(Rgb8::parse_hex("#ééé").is_err());
    assert!(Rgb8::parse_hex("#+f+f+f").is_err());
    assert!(Rgb8::parse_hex("+fffff").is_err());
    assert!(Rgb8::parse_hex("#-1-1-1").is_err());
}

#[test]
fn serde_uses_lowercase_hex_strings() {
    let c: Rgb8 = serde_json::from_value(json!("#F3F6F8")).unwrap();
    assert_eq!(c, Rgb8::new(0xf3, 0xf6, 0xf8));
    assert_eq!(serde_json::to_value(c).unwrap(), json!("#f3f6f8"));
}

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert_eq!(Canvas::new(4, 3).unwrap().pixel_count(), 12);
}

#[test]
fn seeded_rng_is_reproducible_and_in_range() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..64 {
        let x = a.next_f64_01();
        assert_eq!(x, b.next_f64_01());
        assert!((0.0..1.0).contains(&x));
    }
}
