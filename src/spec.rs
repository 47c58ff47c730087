use std::collections::BTreeMap;

/// Scalar type declared for an option.
///
/// Drives the type token in synthesized usage and the conversion policy of
/// the typed accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgType {
    Bool,
    Int,
    Hex,
    Float,
    Str,
}

/// Requiredness declared at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Required,
    Optional,
    /// Take requiredness from the exclusive group the option joins.
    InheritGroup,
}

/// Composite option key: a short name, a long name, or both.
///
/// Ordered by `(short, long)` so the registry iterates deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArgKey {
    short: String,
    long: String,
}

impl ArgKey {
    #[must_use]
    pub fn new(short: impl Into<String>, long: impl Into<String>) -> Self {
        Self { short: short.into(), long: long.into() }
    }

    /// True when both halves are empty (not a valid registration key).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.short.is_empty() && self.long.is_empty()
    }

    #[must_use]
    pub fn get_short(&self) -> &str {
        &self.short
    }

    #[must_use]
    pub fn get_long(&self) -> &str {
        &self.long
    }

    /// True if `name` equals the short or the long half.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        (!self.short.is_empty() && self.short == name)
            || (!self.long.is_empty() && self.long == name)
    }
}

/// Diagnostic form: `-s/--l`, with a lone `-` standing in for an absent half.
impl core::fmt::Display for ArgKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.short.is_empty() {
            write!(f, "-")?;
        } else {
            write!(f, "-{}", self.short)?;
        }
        write!(f, "/")?;
        if self.long.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "--{}", self.long)
        }
    }
}

/// Registration request for one option. Fields beyond the key and type are
/// set via builder methods.
pub struct OptSpec {
    key: ArgKey,
    ty: ArgType,
    requirement: Requirement,
    desc: String,
    group: String,
    default: Option<String>,
}

impl OptSpec {
    #[must_use]
    pub fn new(short: impl Into<String>, long: impl Into<String>, ty: ArgType) -> Self {
        Self {
            key: ArgKey::new(short, long),
            ty,
            requirement: Requirement::Optional,
            desc: String::new(),
            group: String::new(),
            default: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.requirement = Requirement::Required;
        self
    }

    /// Defer requiredness to the named group; registration fails unless
    /// [`group`](Self::group) names an existing group.
    #[must_use]
    pub fn inherit_group(mut self) -> Self {
        self.requirement = Requirement::InheritGroup;
        self
    }

    /// Help description. Embedded line breaks become indented continuation
    /// lines in the rendered help.
    #[must_use]
    pub fn desc(mut self, d: impl Into<String>) -> Self {
        self.desc = d.into();
        self
    }

    /// Join the named mutually exclusive group.
    #[must_use]
    pub fn group(mut self, g: impl Into<String>) -> Self {
        self.group = g.into();
        self
    }

    /// Default value string; marks the option set from registration on.
    #[must_use]
    pub fn default_value(mut self, v: impl Into<String>) -> Self {
        self.default = Some(v.into());
        self
    }

    #[must_use]
    pub fn get_key(&self) -> &ArgKey {
        &self.key
    }
}

/// Stored option state; `value` and `is_set` are the only fields the binder
/// mutates after registration.
#[derive(Clone, Debug)]
pub struct OptEntry {
    pub(crate) value: String,
    pub(crate) ty: ArgType,
    pub(crate) is_set: bool,
    pub(crate) has_default: bool,
    pub(crate) desc: String,
}

impl OptEntry {
    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn get_type(&self) -> ArgType {
        self.ty
    }

    #[must_use]
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    #[must_use]
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    #[must_use]
    pub fn get_desc(&self) -> &str {
        &self.desc
    }
}

/// One positional slot, filled by the binder in declaration order.
#[derive(Clone, Debug)]
pub struct PosSlot {
    pub(crate) name: String,
    pub(crate) value: String,
}

impl PosSlot {
    #[must_use]
    pub fn get_name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get_value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Default)]
pub(crate) struct ExclGroup {
    pub(crate) members: Vec<ArgKey>,
    pub(crate) mandatory: bool,
}

/// Append-only registry of options, exclusive groups, and the required set.
#[derive(Debug, Default)]
pub(crate) struct Schema {
    options: BTreeMap<ArgKey, OptEntry>,
    groups: BTreeMap<String, ExclGroup>,
    required: Vec<ArgKey>,
}

impl Schema {
    /// Register one option. Returns false, leaving the registry untouched,
    /// when the key is empty, the requirement inherits from no group, the
    /// named group does not exist, or the key is already taken.
    pub(crate) fn register(&mut self, spec: OptSpec) -> bool {
        let OptSpec { key, ty, requirement, desc, group, default } = spec;

        if key.is_empty() {
            return false;
        }
        if requirement == Requirement::InheritGroup && group.is_empty() {
            return false;
        }
        if !group.is_empty() && !self.groups.contains_key(&group) {
            return false;
        }
        if self.options.contains_key(&key) {
            return false;
        }

        let entry = OptEntry {
            value: default.clone().unwrap_or_default(),
            ty,
            is_set: default.is_some(),
            has_default: default.is_some(),
            desc,
        };
        self.options.insert(key.clone(), entry);

        if requirement == Requirement::Required {
            self.make_required(&key);
        }

        if !group.is_empty() {
            // a required member turns the whole group mandatory
            if requirement == Requirement::Required {
                if let Some(g) = self.groups.get_mut(&group) {
                    g.mandatory = true;
                }
            }
            return self.insert_into_group(&group, &key);
        }

        true
    }

    /// Create an empty group; false if the name is already taken.
    pub(crate) fn add_group(&mut self, name: &str, mandatory: bool) -> bool {
        if self.groups.contains_key(name) {
            return false;
        }
        self.groups.insert(name.to_string(), ExclGroup { members: Vec::new(), mandatory });
        true
    }

    /// Add a registered key to the named group. Refuses unknown groups,
    /// unknown keys, and keys that already belong to some group. Joining a
    /// mandatory group puts the key into the required set.
    pub(crate) fn insert_into_group(&mut self, name: &str, key: &ArgKey) -> bool {
        if !self.options.contains_key(key) {
            return false;
        }
        if self.groups.values().any(|g| g.members.contains(key)) {
            return false;
        }
        let Some(group) = self.groups.get_mut(name) else {
            return false;
        };
        group.members.push(key.clone());
        let mandatory = group.mandatory;
        if mandatory {
            self.make_required(key);
        }
        true
    }

    /// First entry, in key order, whose short or long name equals `name`.
    pub(crate) fn find(&self, name: &str) -> Option<(&ArgKey, &OptEntry)> {
        self.options.iter().find(|(k, _)| k.matches(name))
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<(&ArgKey, &mut OptEntry)> {
        self.options.iter_mut().find(|(k, _)| k.matches(name))
    }

    pub(crate) fn entry(&self, key: &ArgKey) -> Option<&OptEntry> {
        self.options.get(key)
    }

    pub(crate) fn entry_mut(&mut self, key: &ArgKey) -> Option<&mut OptEntry> {
        self.options.get_mut(key)
    }

    pub(crate) fn options(&self) -> impl Iterator<Item = (&ArgKey, &OptEntry)> {
        self.options.iter()
    }

    pub(crate) fn groups(&self) -> impl Iterator<Item = (&String, &ExclGroup)> {
        self.groups.iter()
    }

    pub(crate) fn group_members(&self, name: &str) -> &[ArgKey] {
        self.groups.get(name).map(|g| g.members.as_slice()).unwrap_or(&[])
    }

    pub(crate) fn required(&self) -> &[ArgKey] {
        &self.required
    }

    pub(crate) fn is_required(&self, key: &ArgKey) -> bool {
        self.required.contains(key)
    }

    pub(crate) fn is_grouped(&self, key: &ArgKey) -> bool {
        self.groups.values().any(|g| g.members.contains(key))
    }

    pub(crate) fn make_required(&mut self, key: &ArgKey) {
        if !self.required.contains(key) {
            self.required.push(key.clone());
        }
    }
}
