//! Typed command-line flag parsing and usage rendering.
//!
//! Declare named flags (int, float, bool, string) with defaults and usage
//! text on a [`FlagSet`], then [`FlagSet::parse`] an argument vector into
//! typed values and positional arguments:
//!
//! ```
//! use cliflag::FlagSet;
//!
//! let mut flags = FlagSet::new("demo", "a short demo");
//! flags.int("port", 8080, "port to listen on", Some('p'));
//! flags.bool("debug", false, "enable debug logging", Some('d'));
//!
//! flags.parse(["demo", "--port=9090", "-d", "extra"]).unwrap();
//! assert_eq!(flags.get::<i64>("port").unwrap(), 9090);
//! assert!(flags.get::<bool>("debug").unwrap());
//! assert!(flags.is_set("port"));
//! assert_eq!(flags.positional(), ["extra"]);
//! ```
//!
//! Long flags take `--name=value`, `--name value`, or bare `--name` for
//! booleans; short flags take `-nvalue`, `-n value`, or bare `-n`. A lone
//! `--` ends flag scanning, and `--help`/`-h`/`-help` stop the parse with
//! [`ParseError::HelpRequested`]. Parsing resets every flag to its default
//! first, so one registry can parse repeatedly.

mod error;
mod flag;
mod parser;
pub mod usage;
mod value;

pub use error::{AccessError, ParseError, ValueError};
pub use flag::{Flag, FlagId, FlagSet};
pub use value::{FlagType, Kind, Value};
