//! Mutually exclusive output formats: exactly one of --json / --yaml / --csv.
//!
//! ```sh
//! cargo run --example groups -- --json report
//! ```

use argline::{ArgParser, ArgType, OptSpec};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut parser = ArgParser::new("Render a report in one output format.");
    parser.add_mutually_exclusive_group("format", true);
    for (short, long) in [("", "json"), ("", "yaml"), ("", "csv")] {
        parser.register_option(
            OptSpec::new(short, long, ArgType::Bool).inherit_group().group("format"),
        );
    }
    parser.register_option(
        OptSpec::new("m", "mask", ArgType::Hex).default_value("0xFF").desc("section mask"),
    );
    parser.register_positional(1, &["REPORT"]);

    let args: Vec<String> = std::env::args().collect();
    if let Err(err) = parser.load_arguments(&args) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    if parser.option_is_set("help") {
        let _ = parser.write_help(&mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    let format = ["json", "yaml", "csv"]
        .iter()
        .find(|name| parser.option_is_set(name))
        .copied()
        .unwrap_or("json");
    let mask = parser.parse_option::<u64>("mask").unwrap_or(0xFF);
    println!("rendering {} as {format} (mask {mask:#x})", &parser[0]);
    ExitCode::SUCCESS
}
