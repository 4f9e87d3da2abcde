use super::*;
use pretty_assertions::assert_eq;

#[test]
fn loop_timeout_reports_whole_seconds() {
    let err = loop_timeout(Duration::from_secs(30));
    assert_eq!(err.kind, ErrorKind::TimeoutError);
    assert_eq!(
        err.message,
        "Tempo máximo de execução excedido (30 segundos)"
    );
}

#[test]
fn loop_timeout_reports_millis_for_short_ceilings() {
    let err = loop_timeout(Duration::from_millis(250));
    assert_eq!(err.message, "Tempo máximo de execução excedido (250 ms)");
}

#[test]
fn unclosed_block_names_construct_and_line() {
    let err = unclosed_block("PARA", 4);
    assert_eq!(err.kind, ErrorKind::ParseError);
    assert_eq!(err.line, Some(4));
    assert!(err.message.contains("PARA"));
    assert!(err.message.contains("linha 4"));
}

#[test]
fn wrong_arg_count_pluralizes() {
    assert_eq!(
        wrong_arg_count("dobro", 1, 2).message,
        "dobro espera 1 argumento, recebeu 2"
    );
    assert_eq!(
        wrong_arg_count("soma", 2, 0).message,
        "soma espera 2 argumentos, recebeu 0"
    );
}

#[test]
fn factories_assign_expected_kinds() {
    assert_eq!(undefined_variable("x").kind, ErrorKind::NameError);
    assert_eq!(undefined_callable("f").kind, ErrorKind::NameError);
    assert_eq!(binary_type_mismatch("<", "texto", "número").kind, ErrorKind::TypeError);
    assert_eq!(division_by_zero().kind, ErrorKind::RuntimeError);
    assert_eq!(input_exhausted("x").kind, ErrorKind::InputError);
    assert_eq!(undefined_variable("x").line, None);
}
