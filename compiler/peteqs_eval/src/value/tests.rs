#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use peteqs_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn integers_render_without_decimal_point() {
    assert_eq!(Value::Number(30.0).to_string(), "30");
    assert_eq!(Value::Number(-4.0).to_string(), "-4");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(-0.0).to_string(), "0");
}

#[test]
fn large_and_tiny_magnitudes_use_exponent_form() {
    assert_eq!(format_number(1e24), "1e+24");
    assert_eq!(format_number(-1.5e24), "-1.5e+24");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.000_001), "0.000001");
    assert_eq!(format_number(1e-7), "1e-7");
}

#[test]
fn booleans_render_as_keywords() {
    assert_eq!(Value::Bool(true).to_string(), "VERDADEIRO");
    assert_eq!(Value::Bool(false).to_string(), "FALSO");
}

#[test]
fn arrays_render_in_key_order() {
    let mut elements = BTreeMap::new();
    elements.insert(ArrayKey::Number(OrderedNumber::new(2.0)), Value::Str("b".into()));
    elements.insert(ArrayKey::Number(OrderedNumber::new(1.0)), Value::Number(10.0));
    elements.insert(ArrayKey::Str("x".into()), Value::Bool(true));
    assert_eq!(Value::Array(elements).to_string(), "{1: 10, 2: b, 'x': VERDADEIRO}");
}

#[test]
fn negative_zero_key_is_zero() {
    assert_eq!(
        ArrayKey::from_value(Value::Number(-0.0)).unwrap(),
        ArrayKey::from_value(Value::Number(0.0)).unwrap()
    );
}

#[test]
fn keys_are_typed() {
    let number = ArrayKey::from_value(Value::Number(1.0)).unwrap();
    let text = ArrayKey::from_value(Value::Str("1".into())).unwrap();
    assert_ne!(number, text);
}

#[test]
fn arrays_cannot_be_keys() {
    let err = ArrayKey::from_value(Value::Array(Default::default())).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeError);
}

#[test]
fn type_names() {
    assert_eq!(Value::Number(1.0).type_name(), "número");
    assert_eq!(Value::Str(String::new()).type_name(), "texto");
    assert_eq!(Value::Bool(true).type_name(), "lógico");
    assert_eq!(Value::Array(Default::default()).type_name(), "vetor");
}
