//! Error types for address extraction.
//!
//! Only two kinds of failure reach callers at match time: asking for a locale
//! that was never registered, and input the driver refuses to scan. Everything
//! that can be wrong with a grammar is reported once, when the profile is
//! registered, as [`AddressError::InvalidProfile`].
//!
//! Finding nothing is not an error; the match sequence is simply empty.

use thiserror::Error;

/// Main error type for addrscan operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// No profile is registered under this locale id.
    #[error("unknown locale '{0}'")]
    UnknownLocale(String),

    /// The profile failed validation or compilation.
    #[error("invalid profile for locale '{locale}': {source}")]
    InvalidProfile {
        locale: String,
        #[source]
        source: ProfileError,
    },

    /// A profile with this id has already been registered.
    #[error("locale '{0}' is already registered")]
    LocaleAlreadyRegistered(String),

    /// The driver refused to scan the input.
    #[error("match aborted: {0}")]
    MatchAborted(String),
}

/// Structural problems found while validating or compiling a grammar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("locale id is empty")]
    EmptyLocaleId,

    #[error("label '{0}' is used more than once")]
    DuplicateLabel(String),

    #[error("rule '{0}' is defined more than once")]
    DuplicateRule(String),

    #[error("label '{0}' is not a valid field name")]
    InvalidLabel(String),

    #[error("empty literal")]
    EmptyLiteral,

    #[error("alternation has no branches")]
    EmptyAlternation,

    #[error("character class is empty")]
    EmptyCharSet,

    #[error("character range {lo:?}-{hi:?} is reversed")]
    InvalidRange { lo: char, hi: char },

    #[error("repetition bounds {{{min},{max}}} are invalid")]
    InvalidBounds { min: u32, max: u32 },

    #[error("repetition upper bound {max} exceeds the limit of {limit}")]
    UnboundedRepeat { max: u32, limit: u32 },

    #[error("pattern nesting exceeds depth {0}")]
    TooDeep(usize),

    #[error("required rule '{0}' is missing")]
    MissingRule(String),

    #[error("pattern rejected by the regex engine: {0}")]
    Compile(String),
}

impl ProfileError {
    /// Attach the locale id this error was found in.
    pub fn in_locale(self, locale: &str) -> AddressError {
        AddressError::InvalidProfile { locale: locale.to_string(), source: self }
    }
}

/// Result type alias for addrscan operations.
pub type Result<T> = std::result::Result<T, AddressError>;
