#![allow(dead_code)]

use argline::{ArgKey, ArgParser, ArgType, OptSpec};

/// Argument vector with a program path prepended.
#[must_use]
pub fn argv(rest: &[&str]) -> Vec<String> {
    std::iter::once("./prog").chain(rest.iter().copied()).map(String::from).collect()
}

#[must_use]
pub fn key(short: &str, long: &str) -> ArgKey {
    ArgKey::new(short, long)
}

/// Parser with a single required `-i`/`--input` string option.
#[must_use]
pub fn input_parser() -> ArgParser {
    let mut parser = ArgParser::new("test tool");
    assert!(parser
        .register_option(OptSpec::new("i", "input", ArgType::Str).required().desc("input file")));
    parser
}

/// Parser with a mandatory exclusive group `g` of boolean `-a` and `-b`.
#[must_use]
pub fn group_parser(mandatory: bool) -> ArgParser {
    let mut parser = ArgParser::new("test tool");
    assert!(parser.add_mutually_exclusive_group("g", mandatory));
    assert!(parser.register_option(OptSpec::new("a", "", ArgType::Bool).inherit_group().group("g")));
    assert!(parser.register_option(OptSpec::new("b", "", ArgType::Bool).inherit_group().group("g")));
    parser
}
