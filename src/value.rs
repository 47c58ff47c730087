use crate::util::trim_hex_prefix;
use crate::{ArgParser, ArgType, Error, Result};
use std::ops::Index;

/// Conversion from stored argument text to a host scalar.
///
/// [`ArgParser::parse_option`] picks the conversion from the option's
/// declared [`ArgType`](crate::ArgType): `Bool` options coerce their set
/// flag via [`from_flag`](Self::from_flag), `Hex` options go through
/// [`from_hex`](Self::from_hex), everything else through
/// [`from_text`](Self::from_text).
pub trait ArgValue: Sized + Default {
    /// Parse from the textual form: decimal integers, ordinary floats,
    /// plain strings.
    ///
    /// # Errors
    ///
    /// [`Error::BadValue`] with the offending string.
    fn from_text(raw: &str) -> Result<Self>;

    /// Parse from base-16, accepting an optional `0x`/`0X` prefix. Falls
    /// back to the textual form for non-integer types.
    ///
    /// # Errors
    ///
    /// [`Error::BadValue`] with the offending string.
    fn from_hex(raw: &str) -> Result<Self> {
        Self::from_text(raw)
    }

    /// Value standing in for a boolean flag: 1/0 for numeric types, the
    /// flag itself for `bool`, the default for `String`.
    #[must_use]
    fn from_flag(is_set: bool) -> Self;
}

impl ArgValue for bool {
    fn from_text(raw: &str) -> Result<Self> {
        match raw {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(Error::BadValue { value: raw.to_string() }),
        }
    }

    fn from_flag(is_set: bool) -> Self {
        is_set
    }
}

impl ArgValue for String {
    fn from_text(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }

    fn from_flag(_is_set: bool) -> Self {
        Self::new()
    }
}

macro_rules! impl_arg_value_int {
    ($($ty:ty),* $(,)?) => {$(
        impl ArgValue for $ty {
            fn from_text(raw: &str) -> Result<Self> {
                raw.parse().map_err(|_| Error::BadValue { value: raw.to_string() })
            }

            fn from_hex(raw: &str) -> Result<Self> {
                Self::from_str_radix(trim_hex_prefix(raw), 16)
                    .map_err(|_| Error::BadValue { value: raw.to_string() })
            }

            fn from_flag(is_set: bool) -> Self {
                if is_set { 1 } else { 0 }
            }
        }
    )*};
}

impl_arg_value_int!(i32, i64, isize, u32, u64, usize);

macro_rules! impl_arg_value_float {
    ($($ty:ty),* $(,)?) => {$(
        impl ArgValue for $ty {
            fn from_text(raw: &str) -> Result<Self> {
                raw.parse().map_err(|_| Error::BadValue { value: raw.to_string() })
            }

            fn from_flag(is_set: bool) -> Self {
                if is_set { 1.0 } else { 0.0 }
            }
        }
    )*};
}

impl_arg_value_float!(f32, f64);

impl ArgParser {
    /// Raw stored value for `name`; empty string when no option matches.
    #[must_use]
    pub fn raw(&self, name: &str) -> &str {
        self.schema.find(name).map_or("", |(_, entry)| entry.get_value())
    }

    /// Raw positional value at `idx`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `idx` is past the registered slots.
    pub fn positional_raw(&self, idx: usize) -> Result<&str> {
        self.positional
            .get(idx)
            .map(|slot| slot.get_value())
            .ok_or(Error::OutOfRange { index: idx, len: self.positional.len() })
    }

    /// Typed value of the option matching `name`.
    ///
    /// An unknown or unset option yields `T::default()`. Otherwise the
    /// stored string converts per the option's declared type; see
    /// [`ArgValue`].
    ///
    /// # Errors
    ///
    /// [`Error::BadValue`] when the stored string does not convert.
    pub fn parse_option<T: ArgValue>(&self, name: &str) -> Result<T> {
        let Some((_, entry)) = self.schema.find(name) else {
            return Ok(T::default());
        };
        if !entry.is_set {
            return Ok(T::default());
        }
        match entry.ty {
            ArgType::Bool => Ok(T::from_flag(true)),
            ArgType::Hex => T::from_hex(&entry.value),
            _ => T::from_text(&entry.value),
        }
    }

    /// Typed value of positional slot `idx`, via the textual conversion.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] on a bad index, [`Error::BadPositional`] when
    /// the stored string does not convert.
    pub fn parse_positional<T: ArgValue>(&self, idx: usize) -> Result<T> {
        let len = self.positional.len();
        let slot = self.positional.get(idx).ok_or(Error::OutOfRange { index: idx, len })?;
        T::from_text(slot.get_value())
            .map_err(|_| Error::BadPositional { index: idx, value: slot.get_value().to_string() })
    }
}

/// Raw option lookup; empty string when nothing matches.
impl Index<&str> for ArgParser {
    type Output = str;

    fn index(&self, name: &str) -> &str {
        self.raw(name)
    }
}

/// Raw positional lookup; panics when the index is out of range, like slice
/// indexing. Use [`ArgParser::positional_raw`] for a fallible lookup.
impl Index<usize> for ArgParser {
    type Output = str;

    fn index(&self, idx: usize) -> &str {
        match self.positional.get(idx) {
            Some(slot) => slot.get_value(),
            None => panic!("positional index {idx} out of range (have {})", self.positional.len()),
        }
    }
}
