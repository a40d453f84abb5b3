use super::*;

#[derive(serde::Deserialize)]
struct Field {
    #[serde(default, deserialize_with = "lenient")]
    value: f64,
}

#[derive(serde::Deserialize)]
struct OptionalField {
    #[serde(default, deserialize_with = "lenient_opt")]
    value: Option<f64>,
}

#[test]
fn optional_null_reads_back_as_nan_and_missing_as_none() {
    let p: OptionalField = serde_json::from_str(r#"{"value": null}"#).unwrap();
    assert!(p.value.is_some_and(f64::is_nan));
    let p: OptionalField = serde_json::from_str("{}").unwrap();
    assert_eq!(p.value, None);
    let p: OptionalField = serde_json::from_str(r#"{"value": 3}"#).unwrap();
    assert_eq!(p.value, Some(3.0));
}

#[test]
fn null_reads_back_as_nan_and_missing_as_zero() {
    let p: Field = serde_json::from_str(r#"{"value": null}"#).unwrap();
    assert!(p.value.is_nan());
    let p: Field = serde_json::from_str("{}").unwrap();
    assert_eq!(p.value, 0.0);
    let p: Field = serde_json::from_str(r#"{"value": 7.5}"#).unwrap();
    assert_eq!(p.value, 7.5);
}

#[test]
fn coerce_number_follows_number_input() {
    assert_eq!(coerce_number("12"), 12.0);
    assert_eq!(coerce_number("  -3.5 "), -3.5);
    assert_eq!(coerce_number("1e3"), 1000.0);
    assert!(coerce_number("").is_nan());
    assert!(coerce_number("abc").is_nan());
    assert!(coerce_number("nan").is_nan());
    assert!(coerce_number("inf").is_nan());
    assert_eq!(coerce_number("Infinity"), f64::INFINITY);
}

#[test]
fn coerce_number_reads_radix_literals() {
    assert_eq!(coerce_number("0x10"), 16.0);
    assert_eq!(coerce_number("0XfF"), 255.0);
    assert_eq!(coerce_number(" 0o7 "), 7.0);
    assert_eq!(coerce_number("0b101"), 5.0);
    assert!(coerce_number("0x").is_nan());
    assert!(coerce_number("0b12").is_nan());
    assert!(coerce_number("-0x10").is_nan());
}

#[test]
fn percent_to_unit_clamps_and_falls_back() {
    assert_eq!(percent_to_unit(60.0, 0.6), 0.6);
    assert_eq!(percent_to_unit(150.0, 0.6), 1.0);
    assert_eq!(percent_to_unit(-5.0, 0.6), 0.0);
    assert_eq!(percent_to_unit(f64::NAN, 0.85), 0.85);
}
