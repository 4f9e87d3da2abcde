#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use peteqs_diagnostic::ErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn queue_is_consumed_in_order() {
    let mut input = InputHandler::queue(["a", "b"]);
    assert_eq!(input.next_input("x").unwrap(), "a");
    assert_eq!(input.next_input("y").unwrap(), "b");
    assert!(input.next_input("z").is_err());
}

#[test]
fn exhausted_queue_is_an_input_error() {
    let mut input = InputHandler::default();
    let err = input.next_input("idade").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InputError);
    assert_eq!(err.message, "nenhuma entrada disponível para LEIA idade");
}

#[test]
fn numeric_text_becomes_a_number() {
    assert_eq!(coerce_input("42".into()), Value::Number(42.0));
    assert_eq!(coerce_input("-3.5".into()), Value::Number(-3.5));
    assert_eq!(coerce_input(" 7 ".into()), Value::Number(7.0));
}

#[test]
fn other_text_stays_text() {
    for raw in ["Maria", "", "1.", ".5", "1e3", "--1", "12abc"] {
        assert_eq!(coerce_input(raw.to_string()), Value::Str(raw.to_string()), "{raw}");
    }
}
