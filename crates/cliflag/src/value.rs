//! Typed flag values.
//!
//! A [`Value`] is a closed sum over the four kinds a flag can hold. The kind
//! is fixed when the flag is declared; parsing always targets the existing
//! kind, so a flag declared as an int can never silently become a string.

use std::fmt;
use std::num::IntErrorKind;

use crate::error::ValueError;

/// The kind of value a flag holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Int,
    Float,
    Bool,
    Str,
}

impl Kind {
    /// Human-readable kind name, as shown in usage output.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Str => "string",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed flag value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::Str,
        }
    }

    /// Parse `text` into this value's kind, replacing the stored value.
    ///
    /// On failure the stored value is left unchanged.
    pub fn set_from_str(&mut self, text: &str) -> Result<(), ValueError> {
        match self {
            Value::Int(v) => *v = parse_int(text)?,
            Value::Float(v) => *v = parse_float(text)?,
            Value::Bool(v) => *v = parse_bool(text)?,
            Value::Str(v) => {
                v.clear();
                v.push_str(text);
            }
        }
        Ok(())
    }

    /// Canonical text form: booleans render as `true`/`false`, numerics in
    /// decimal, strings verbatim.
    pub fn render(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Str(v) => v.clone(),
        }
    }
}

fn parse_int(text: &str) -> Result<i64, ValueError> {
    text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ValueError::IntOutOfRange,
        _ => ValueError::NotAnInteger,
    })
}

fn parse_float(text: &str) -> Result<f64, ValueError> {
    let parsed: f64 = text.parse().map_err(|_| ValueError::NotAFloat)?;
    // f64 parsing saturates to an infinity instead of failing; only accept
    // one when the input actually spelled it.
    if parsed.is_infinite() && !spells_infinity(text) {
        return Err(ValueError::FloatOutOfRange);
    }
    Ok(parsed)
}

fn spells_infinity(text: &str) -> bool {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity")
}

fn parse_bool(text: &str) -> Result<bool, ValueError> {
    let lower = text.to_ascii_lowercase();
    match lower.as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ValueError::InvalidBool),
    }
}

/// Rust types that can back a flag value.
///
/// Connects `i64`/`f64`/`bool`/`String` to their [`Kind`] and extracts a
/// typed copy out of a [`Value`], returning `None` on a kind mismatch.
pub trait FlagType: Sized {
    const KIND: Kind;

    fn from_value(value: &Value) -> Option<Self>;
}

impl FlagType for i64 {
    const KIND: Kind = Kind::Int;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagType for f64 {
    const KIND: Kind = Kind::Float;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagType for bool {
    const KIND: Kind = Kind::Bool;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FlagType for String {
    const KIND: Kind = Kind::Str;

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(v) => Some(v.clone()),
            _ => None,
        }
    }
}
