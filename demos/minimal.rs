//! Smallest useful schema: one required option, one flag, one positional.
//!
//! ```sh
//! cargo run --example minimal -- --input notes.txt -v out.txt
//! ```

use argline::{ArgParser, ArgType, OptSpec};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut parser = ArgParser::new("Copy a file, loudly on request.");
    parser.register_option(
        OptSpec::new("i", "input", ArgType::Str).required().desc("file to read"),
    );
    parser.register_option(OptSpec::new("v", "verbose", ArgType::Bool).desc("chatty output"));
    parser.register_option(
        OptSpec::new("j", "jobs", ArgType::Int).default_value("1").desc("worker count"),
    );
    parser.register_positional(1, &["DEST"]);

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = parser.load_arguments(&args) {
        eprintln!("{err}");
        let _ = parser.write_help(&mut std::io::stderr());
        return ExitCode::FAILURE;
    }
    if parser.option_is_set("help") {
        let _ = parser.write_help(&mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let input = match parser.parse_option::<String>("input") {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let jobs = parser.parse_option::<u32>("jobs").unwrap_or(1);
    if parser.parse_option::<bool>("verbose").unwrap_or(false) {
        println!("copying {input} -> {} with {jobs} workers", &parser[0]);
    }
    ExitCode::SUCCESS
}
