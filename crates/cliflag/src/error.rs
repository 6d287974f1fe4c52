//! Error taxonomy.
//!
//! Three disjoint families: [`ValueError`] for text that cannot become a
//! typed value, [`ParseError`] for everything a parse call can report, and
//! [`AccessError`] for caller mistakes against the typed accessors. Keeping
//! the last one separate means a contract violation in the calling program
//! can never be mistaken for bad user input.

use thiserror::Error;

use crate::value::Kind;

/// Failure converting flag-value text into its declared kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("not an integer")]
    NotAnInteger,
    #[error("out of range for i64")]
    IntOutOfRange,
    #[error("not a float")]
    NotAFloat,
    #[error("out of range for f64")]
    FloatOutOfRange,
    #[error("invalid boolean value, accepts true/false, 1/0, yes/no, on/off")]
    InvalidBool,
}

/// Outcome of a failed (or help-terminated) parse call.
///
/// Parsing stops at the first error; flags consumed earlier in the same call
/// keep their parsed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The user asked for help. Not a failure: callers conventionally print
    /// usage and exit with a success code.
    #[error("help requested")]
    HelpRequested,

    /// A token referenced a long name or short alias no flag declares.
    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String },

    /// A value-taking flag had no value token available.
    #[error("flag '{flag}' needs a value")]
    MissingValue { flag: String },

    /// The value text could not be converted to the flag's declared kind.
    #[error("invalid value for flag '{flag}': {source}")]
    InvalidValue { flag: String, source: ValueError },
}

impl ParseError {
    /// The offending flag name, where one applies.
    pub fn flag(&self) -> Option<&str> {
        match self {
            ParseError::HelpRequested => None,
            ParseError::UnknownFlag { flag }
            | ParseError::MissingValue { flag }
            | ParseError::InvalidValue { flag, .. } => Some(flag),
        }
    }
}

/// Misuse of the typed accessors: asking for a flag that was never declared,
/// or reading it as a kind it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("unknown flag: {name}")]
    UnknownFlag { name: String },

    #[error("flag '{name}' holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: Kind,
        actual: Kind,
    },
}
