use crate::util::{exec_file_name, strip_leading_dashes};
use crate::{ArgKey, ArgType, Error, OptEntry, OptSpec, PosSlot, Result, Schema};
use core::fmt::Write;

/// Command line argument parser: schema registry, token binder, validator,
/// and typed accessors over the bound result.
///
/// Options and positional slots are registered up front;
/// [`load_arguments`](Self::load_arguments) binds an argument vector against
/// them and then validates requiredness, group exclusivity, and positional
/// counts. A `-h`/`--help` boolean option is registered implicitly on
/// construction.
#[derive(Debug)]
pub struct ArgParser {
    pub(crate) schema: Schema,
    pub(crate) positional: Vec<PosSlot>,
    pub(crate) bound_positionals: usize,
    pub(crate) exec_name: String,
    pub(crate) prog_desc: String,
    pub(crate) usage: Option<String>,
}

impl ArgParser {
    #[must_use]
    pub fn new(prog_desc: impl Into<String>) -> Self {
        let mut parser = Self {
            schema: Schema::default(),
            positional: Vec::new(),
            bound_positionals: 0,
            exec_name: String::new(),
            prog_desc: prog_desc.into(),
            usage: None,
        };
        let ok = parser
            .schema
            .register(OptSpec::new("h", "help", ArgType::Bool).desc("Show help text and exit"));
        debug_assert!(ok);
        parser
    }

    /// Replace the synthesized usage line with caller-supplied text.
    pub fn set_usage(&mut self, text: impl Into<String>) {
        self.usage = Some(text.into());
    }

    /// Register one option; see [`OptSpec`] for the builder surface.
    /// Returns false (and changes nothing) on an empty key, a duplicate
    /// key, an unknown group, or `inherit_group` without a group.
    pub fn register_option(&mut self, spec: OptSpec) -> bool {
        self.schema.register(spec)
    }

    /// Append `count` positional slots. Slot `i` of this call is displayed
    /// as `names[i]` when given, else as `ARG_<i+1>`.
    pub fn register_positional(&mut self, count: usize, names: &[&str]) {
        for i in 0..count {
            let name = match names.get(i) {
                Some(n) => (*n).to_string(),
                None => format!("ARG_{}", i + 1),
            };
            self.positional.push(PosSlot { name, value: String::new() });
        }
    }

    /// Create a mutually exclusive group; false if the name already exists.
    pub fn add_mutually_exclusive_group(&mut self, name: &str, required: bool) -> bool {
        self.schema.add_group(name, required)
    }

    /// Add a registered option to a group directly. Normally done through
    /// [`OptSpec::group`] at registration time.
    pub fn insert_into_group(&mut self, name: &str, key: &ArgKey) -> bool {
        self.schema.insert_into_group(name, key)
    }

    /// Entry for the first option whose short or long name equals `name`.
    #[must_use]
    pub fn find_option(&self, name: &str) -> Option<&OptEntry> {
        self.schema.find(name).map(|(_, entry)| entry)
    }

    #[must_use]
    pub fn has_option(&self, name: &str) -> bool {
        self.schema.find(name).is_some()
    }

    #[must_use]
    pub fn option_is_set(&self, name: &str) -> bool {
        self.schema.find(name).map_or(false, |(_, entry)| entry.is_set)
    }

    /// File-name part of `argv[0]`, available after
    /// [`load_arguments`](Self::load_arguments).
    #[must_use]
    pub fn exec_name(&self) -> &str {
        &self.exec_name
    }

    #[must_use]
    pub fn positional_count(&self) -> usize {
        self.positional.len()
    }

    /// Display name of positional slot `idx`.
    #[must_use]
    pub fn positional_name(&self, idx: usize) -> Option<&str> {
        self.positional.get(idx).map(PosSlot::get_name)
    }

    /// Bind the argument vector against the registered schema, then
    /// validate it. `argv[0]` is the program path.
    ///
    /// Options must precede positional tokens. Any run of leading dashes is
    /// stripped before name lookup, so `-name` and `--name` are equivalent.
    /// A lone `-` is an ordinary token; `--` ends option parsing and sends
    /// every later token to the positional slots. Tokens that look like
    /// options but match nothing are ignored. Binding overwrites, so a
    /// repeated call with the same argv reproduces the same state.
    ///
    /// # Errors
    ///
    /// [`Error::PositionalBeforeOption`] from the binder;
    /// [`Error::MissingRequired`], [`Error::Conflict`], and
    /// [`Error::MissingPositional`] from validation. All validation is
    /// suppressed when the help option was set.
    pub fn load_arguments<I, S>(&mut self, argv: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = argv.into_iter();
        if let Some(first) = tokens.next() {
            self.exec_name = exec_file_name(first.as_ref()).to_string();
        }

        self.bound_positionals = 0;
        let mut pending: Option<ArgKey> = None;
        let mut options_done = false;

        for token in tokens {
            let token = token.as_ref();

            if !options_done && token == "--" {
                pending = None;
                options_done = true;
                continue;
            }

            let dashed = token.starts_with('-') && token != "-";
            if dashed && !options_done {
                if self.bound_positionals > 0 {
                    return Err(Error::PositionalBeforeOption { token: token.to_string() });
                }
                match self.schema.find_mut(strip_leading_dashes(token)) {
                    Some((key, entry)) => {
                        entry.is_set = true;
                        pending = if entry.ty == ArgType::Bool { None } else { Some(key.clone()) };
                    }
                    // unknown name: skip the token, drop any pending option
                    None => pending = None,
                }
                continue;
            }

            if let Some(key) = pending.take() {
                if let Some(entry) = self.schema.entry_mut(&key) {
                    entry.value = token.to_string();
                }
                continue;
            }

            if self.bound_positionals < self.positional.len() {
                self.positional[self.bound_positionals].value = token.to_string();
                self.bound_positionals += 1;
            }
        }

        self.validate()
    }

    /// Post-binding checks, in order: missing required options outside
    /// groups plus missing mandatory groups (one aggregate report), then
    /// within-group conflicts, then the positional count.
    fn validate(&self) -> Result<()> {
        if self.option_is_set("help") {
            return Ok(());
        }

        let missing_options: Vec<&ArgKey> = self
            .schema
            .required()
            .iter()
            .filter(|key| !self.schema.is_grouped(key))
            .filter(|key| !self.key_is_set(key))
            .collect();

        let missing_groups: Vec<&str> = self
            .schema
            .groups()
            .filter(|(_, group)| group.mandatory)
            .filter(|(_, group)| group.members.iter().all(|key| !self.key_is_set(key)))
            .map(|(name, _)| name.as_str())
            .collect();

        if !missing_options.is_empty() || !missing_groups.is_empty() {
            let mut report = String::new();
            if !missing_options.is_empty() {
                report.push_str("Missing required options:\n");
                for key in missing_options {
                    let _ = writeln!(report, "{key}");
                }
            }
            if !missing_groups.is_empty() {
                report.push_str("At least one option from these groups must be set:\n");
                for name in missing_groups {
                    let _ = writeln!(report, "{name}");
                    for member in self.schema.group_members(name) {
                        let _ = writeln!(report, "\t{member}");
                    }
                }
            }
            return Err(Error::MissingRequired(report));
        }

        let conflicts: Vec<&str> = self
            .schema
            .groups()
            .filter(|(_, group)| group.members.iter().filter(|key| self.key_is_set(key)).count() > 1)
            .map(|(name, _)| name.as_str())
            .collect();

        if !conflicts.is_empty() {
            let mut report = String::from("Conflicting options used in these groups:\n");
            for name in conflicts {
                let _ = writeln!(report, "{name}");
                for member in self.schema.group_members(name) {
                    if self.key_is_set(member) {
                        let _ = writeln!(report, "\t{member}");
                    }
                }
            }
            return Err(Error::Conflict(report));
        }

        if self.bound_positionals < self.positional.len() {
            return Err(Error::MissingPositional {
                expected: self.positional.len(),
                found: self.bound_positionals,
            });
        }

        Ok(())
    }

    fn key_is_set(&self, key: &ArgKey) -> bool {
        self.schema.entry(key).map_or(false, |entry| entry.is_set)
    }
}
