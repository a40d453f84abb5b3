use super::*;

#[test]
fn rgb_literal_splits_channels() {
    let c = Rgba8::rgb(0xf97316);
    assert_eq!((c.r, c.g, c.b, c.a), (0xf9, 0x73, 0x16, 255));
    assert_eq!(c.hex(), "#f97316");
    assert!(c.is_opaque());
}

#[test]
fn with_alpha_keeps_rgb() {
    let c = Rgba8::rgb(0x112233).with_alpha(0x33);
    assert_eq!(c.hex(), "#112233");
    assert!((c.opacity() - 0.2).abs() < 1e-6);
}

#[test]
fn fmt_number_matches_card_text() {
    assert_eq!(fmt_number(3.0), "3");
    assert_eq!(fmt_number(-2.0), "-2");
    assert_eq!(fmt_number(2.5), "2.5");
    assert_eq!(fmt_number(f64::NAN), "NaN");
    assert_eq!(fmt_number(f64::INFINITY), "Infinity");
}

#[test]
fn truthiness_excludes_zero_and_nan() {
    assert!(is_truthy(Some(4.0)));
    assert!(is_truthy(Some(-1.0)));
    assert!(!is_truthy(Some(0.0)));
    assert!(!is_truthy(Some(f64::NAN)));
    assert!(!is_truthy(None));
}
