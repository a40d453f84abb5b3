use super::*;
use crate::model::enums::ElementType;

#[test]
fn text_coerces_to_number_like_a_number_input() {
    assert_eq!(FieldValue::text(" 7 ").to_number().unwrap(), 7.0);
    assert_eq!(FieldValue::text("1e2").to_number().unwrap(), 100.0);
    assert!(FieldValue::text("").to_number().unwrap().is_nan());
    assert!(FieldValue::text("seven").to_number().unwrap().is_nan());
    assert!(FieldValue::Bool(true).to_number().is_err());
}

#[test]
fn optional_numbers_keep_empty_as_none() {
    assert_eq!(FieldValue::Empty.to_opt_number().unwrap(), None);
    assert_eq!(FieldValue::Number(3.0).to_opt_number().unwrap(), Some(3.0));
}

#[test]
fn enums_parse_wire_names() {
    let e: ElementType = FieldValue::text("WATER").to_enum().unwrap();
    assert_eq!(e, ElementType::Water);
    assert!(FieldValue::text("LAVA").to_enum::<ElementType>().is_err());
    assert!(FieldValue::Number(1.0).to_enum::<ElementType>().is_err());
    assert_eq!(
        FieldValue::Empty.to_opt_enum::<ElementType>().unwrap(),
        None
    );
}

#[test]
fn toggles_accept_text_forms() {
    assert!(FieldValue::text("true").to_bool().unwrap());
    assert!(!FieldValue::text("false").to_bool().unwrap());
    assert!(FieldValue::text("maybe").to_bool().is_err());
}

#[test]
fn display_formats_numbers_like_cards() {
    assert_eq!(FieldValue::Number(4.0).to_string(), "4");
    assert_eq!(FieldValue::Number(f64::NAN).to_string(), "NaN");
    assert_eq!(FieldValue::Empty.to_string(), "");
}
