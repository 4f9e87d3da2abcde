#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn no_inputs_reads_stdin_and_streams() {
    let flags = parse_run_flags(&[]).unwrap();
    assert_eq!(flags.options.input, InputSource::Stdin);
    assert!(flags.options.stream);
    assert!(!flags.json);
}

#[test]
fn inputs_are_queued_in_order() {
    let flags = parse_run_flags(&args(&["--input=5", "--input=ana"])).unwrap();
    assert_eq!(
        flags.options.input,
        InputSource::Queue(vec!["5".to_string(), "ana".to_string()])
    );
    assert!(!flags.options.stream);
}

#[test]
fn json_disables_streaming() {
    let flags = parse_run_flags(&args(&["--json", "--stream"])).unwrap();
    assert!(flags.json);
    assert!(!flags.options.stream);
}

#[test]
fn limits() {
    let flags = parse_run_flags(&args(&["--input=1", "--timeout=0.5", "--max-depth=20"])).unwrap();
    assert_eq!(flags.options.timeout, Duration::from_millis(500));
    assert_eq!(flags.options.max_call_depth, 20);
}

#[test]
fn bad_flags_are_rejected() {
    assert!(parse_run_flags(&args(&["--timeout=abc"])).is_err());
    assert!(parse_run_flags(&args(&["--timeout=-1"])).is_err());
    assert!(parse_run_flags(&args(&["--max-depth=-3"])).is_err());
    assert!(parse_run_flags(&args(&["--verbose"])).is_err());
}
