/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// A positional token appeared on the command line before the options.
    PositionalBeforeOption { token: String },
    /// Required options and/or mandatory groups were left unset.
    /// Carries the aggregate report over both categories.
    MissingRequired(String),
    /// More than one option of a mutually exclusive group was set.
    Conflict(String),
    /// Fewer positional tokens were supplied than slots registered.
    MissingPositional { expected: usize, found: usize },
    /// An option value could not be converted to the requested type.
    BadValue { value: String },
    /// A positional value could not be converted to the requested type.
    BadPositional { index: usize, value: String },
    /// Positional index out of range.
    OutOfRange { index: usize, len: usize },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PositionalBeforeOption { token } => {
                write!(f, "positional arguments cannot precede options: '{token}'")
            }
            Self::MissingRequired(report) | Self::Conflict(report) => write!(f, "{report}"),
            Self::MissingPositional { expected, found } => {
                write!(f, "missing positional arguments: expected {expected}, got {found}")
            }
            Self::BadValue { value } => {
                write!(f, "cannot convert option value to requested type ('{value}')")
            }
            Self::BadPositional { index, value } => {
                write!(f, "cannot convert positional {index} to requested type ('{value}')")
            }
            Self::OutOfRange { index, len } => {
                write!(f, "positional index {index} out of range (have {len})")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;
