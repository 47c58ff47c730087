use crate::{ArgKey, ArgParser, ArgType};
use core::fmt::Write;
use std::io;

/// Width of the option-name column in help text.
const OPT_WIDTH: usize = 25;

/// Name column form: `-s, --l`, or whichever half exists.
fn help_label(key: &ArgKey) -> String {
    match (key.get_short().is_empty(), key.get_long().is_empty()) {
        (false, false) => format!("-{}, --{}", key.get_short(), key.get_long()),
        (false, true) => format!("-{}", key.get_short()),
        (true, false) => format!("--{}", key.get_long()),
        (true, true) => String::new(),
    }
}

/// Usage form: `-s | --l`, or whichever half exists.
fn usage_label(key: &ArgKey) -> String {
    match (key.get_short().is_empty(), key.get_long().is_empty()) {
        (false, false) => format!("-{} | --{}", key.get_short(), key.get_long()),
        (false, true) => format!("-{}", key.get_short()),
        (true, false) => format!("--{}", key.get_long()),
        (true, true) => String::new(),
    }
}

const fn type_token(ty: ArgType) -> &'static str {
    match ty {
        ArgType::Bool => "",
        ArgType::Int => " <INT>",
        ArgType::Hex => " [0x]<HEX>",
        ArgType::Float => " <FLOAT>",
        ArgType::Str => " <STRING>",
    }
}

impl ArgParser {
    /// The `Usage:` line.
    ///
    /// Uses the text set through [`set_usage`](Self::set_usage) when
    /// present; otherwise synthesizes one from the schema: required options
    /// first, optional options bracketed, positional names last. The
    /// implicit help option is omitted.
    #[must_use]
    pub fn usage_text(&self) -> String {
        let mut parts: Vec<String> = vec![format!("Usage: {}", self.exec_name)];

        if let Some(text) = &self.usage {
            parts.push(text.clone());
            return parts.join(" ");
        }

        let mut required = Vec::new();
        let mut optional = Vec::new();
        for (key, entry) in self.schema.options() {
            if key.get_short() == "h" && key.get_long() == "help" {
                continue;
            }
            let arg = format!("{}{}", usage_label(key), type_token(entry.get_type()));
            if self.schema.is_required(key) {
                required.push(arg);
            } else {
                optional.push(format!("[ {arg} ]"));
            }
        }

        parts.extend(required);
        parts.extend(optional);
        parts.extend(self.positional.iter().map(|slot| slot.get_name().to_string()));
        parts.join(" ")
    }

    /// Full help text: the usage line, the program description, and the
    /// option list with descriptions and default values.
    #[must_use]
    pub fn help_text(&self) -> String {
        let mut out = self.usage_text();
        out.push('\n');
        let _ = writeln!(out, "{}", self.prog_desc);
        out.push('\n');
        out.push_str("Available options:\n");

        for (key, entry) in self.schema.options() {
            let label = help_label(key);
            let mut lines = entry.get_desc().split('\n');
            let first = lines.next().unwrap_or("");
            let _ = writeln!(out, "{label:<OPT_WIDTH$}{first}");
            for line in lines {
                let _ = writeln!(out, "{:<OPT_WIDTH$}{line}", "");
            }
            if entry.has_default() {
                let _ = writeln!(out, "{:<OPT_WIDTH$}Default value: {}", "", entry.get_value());
            }
            out.push('\n');
        }
        out
    }

    /// Render the help text into the host's sink.
    ///
    /// # Errors
    ///
    /// Propagates sink write failures.
    pub fn write_help<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.help_text().as_bytes())
    }
}
