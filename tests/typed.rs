use argline::{ArgParser, ArgType, Error, OptSpec};
mod common;
use common::*;

fn typed_parser() -> ArgParser {
    let mut parser = ArgParser::new("t");
    assert!(parser.register_option(OptSpec::new("", "int", ArgType::Int).required()));
    assert!(parser.register_option(OptSpec::new("", "hex", ArgType::Hex).required()));
    assert!(parser.register_option(OptSpec::new("", "float", ArgType::Float).required()));
    assert!(parser.register_option(OptSpec::new("", "string", ArgType::Str).required()));
    assert!(parser.register_option(OptSpec::new("v", "", ArgType::Bool)));
    parser
}

fn loaded_parser(hex_literal: &str) -> ArgParser {
    let mut parser = typed_parser();
    let args = argv(&[
        "--int", "1", "--hex", hex_literal, "--float", "0.1", "--string", "Hello", "-v",
    ]);
    assert!(parser.load_arguments(args).is_ok());
    parser
}

#[test]
fn scalars_convert_per_declared_type() {
    let parser = loaded_parser("FF");
    assert_eq!(parser.parse_option::<i32>("int").unwrap(), 1);
    assert_eq!(parser.parse_option::<i64>("hex").unwrap(), 255);
    assert_eq!(parser.parse_option::<String>("string").unwrap(), "Hello");
    assert!((parser.parse_option::<f32>("float").unwrap() - 0.1).abs() < 1e-4);
    assert!((parser.parse_option::<f64>("float").unwrap() - 0.1).abs() < 1e-4);
}

#[test]
fn hex_accepts_an_optional_prefix() {
    let parser = loaded_parser("FF");
    assert_eq!(parser.parse_option::<u32>("hex").unwrap(), 255);

    let parser = loaded_parser("0xFF");
    assert_eq!(parser.parse_option::<u32>("hex").unwrap(), 255);
}

#[test]
fn bool_option_coerces_its_set_flag() {
    let parser = loaded_parser("FF");
    assert!(parser.parse_option::<bool>("v").unwrap());
    assert_eq!(parser.parse_option::<i32>("v").unwrap(), 1);
}

#[test]
fn unset_and_unknown_options_yield_the_default() {
    let mut parser = typed_parser();
    let args =
        argv(&["--int", "1", "--hex", "FF", "--float", "0.1", "--string", "Hello"]);
    assert!(parser.load_arguments(args).is_ok());

    assert!(!parser.parse_option::<bool>("v").unwrap());
    assert_eq!(parser.parse_option::<i32>("v").unwrap(), 0);
    assert_eq!(parser.parse_option::<i32>("no-such").unwrap(), 0);
    assert_eq!(parser.parse_option::<String>("no-such").unwrap(), "");
}

#[test]
fn conversion_failure_carries_the_offending_string() {
    let parser = loaded_parser("FF");
    match parser.parse_option::<i32>("string").unwrap_err() {
        Error::BadValue { value } => assert_eq!(value, "Hello"),
        other => panic!("unexpected: {other:?}"),
    }

    let mut parser = typed_parser();
    let args = argv(&["--int", "abc", "--hex", "GG", "--float", "0.1", "--string", "x"]);
    assert!(parser.load_arguments(args).is_ok());
    match parser.parse_option::<i32>("int").unwrap_err() {
        Error::BadValue { value } => assert_eq!(value, "abc"),
        other => panic!("unexpected: {other:?}"),
    }
    match parser.parse_option::<u32>("hex").unwrap_err() {
        Error::BadValue { value } => assert_eq!(value, "GG"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn positionals_convert_textually() {
    let mut parser = ArgParser::new("t");
    parser.register_positional(2, &["N", "WORD"]);
    assert!(parser.load_arguments(argv(&["42", "hello"])).is_ok());

    assert_eq!(parser.parse_positional::<i32>(0).unwrap(), 42);
    assert_eq!(parser.parse_positional::<String>(1).unwrap(), "hello");
    assert_eq!(parser.positional_raw(0).unwrap(), "42");
}

#[test]
fn positional_errors_name_the_index() {
    let mut parser = ArgParser::new("t");
    parser.register_positional(1, &[]);
    assert!(parser.load_arguments(argv(&["notanumber"])).is_ok());

    match parser.parse_positional::<i64>(0).unwrap_err() {
        Error::BadPositional { index, value } => {
            assert_eq!(index, 0);
            assert_eq!(value, "notanumber");
        }
        other => panic!("unexpected: {other:?}"),
    }

    match parser.parse_positional::<i64>(5).unwrap_err() {
        Error::OutOfRange { index, len } => {
            assert_eq!(index, 5);
            assert_eq!(len, 1);
        }
        other => panic!("unexpected: {other:?}"),
    }

    assert!(matches!(parser.positional_raw(9), Err(Error::OutOfRange { index: 9, len: 1 })));
}

#[test]
#[should_panic(expected = "out of range")]
fn index_sugar_panics_out_of_range() {
    let parser = ArgParser::new("t");
    let _ = &parser[0];
}
