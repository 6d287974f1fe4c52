//! Flag records and the registry that owns them.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::AccessError;
use crate::value::{FlagType, Kind, Value};

/// Stable handle to a declared flag, issued by [`FlagSet`] declaration
/// methods for O(1) access after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagId(pub(crate) usize);

/// One declared flag: identity, usage text, current value, and the default
/// the value resets to at the start of every parse.
///
/// `value` and `default` always hold the same [`Kind`].
#[derive(Debug, Clone)]
pub struct Flag {
    pub(crate) name: String,
    pub(crate) short: Option<char>,
    pub(crate) usage: String,
    pub(crate) value: Value,
    pub(crate) default: Value,
    pub(crate) set: bool,
}

impl Flag {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Whether the most recent parse saw this flag on the command line.
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Current value rendered as text.
    pub fn value_text(&self) -> String {
        self.value.render()
    }

    /// Declared default rendered as text.
    pub fn default_text(&self) -> String {
        self.default.render()
    }

    /// Typed copy of the current value, or `None` when `T` does not match
    /// the declared kind.
    pub fn get<T: FlagType>(&self) -> Option<T> {
        T::from_value(&self.value)
    }
}

/// An ordered registry of flags plus the positional arguments left over from
/// the most recent parse.
///
/// Construction auto-declares a boolean `help` flag with short alias `h`.
/// Declaration order is preserved and drives usage rendering.
#[derive(Debug, Clone)]
pub struct FlagSet {
    name: String,
    description: String,
    pub(crate) flags: IndexMap<String, Flag>,
    pub(crate) short_index: HashMap<char, String>,
    pub(crate) positional: Vec<String>,
}

impl FlagSet {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let mut set = Self {
            name: name.into(),
            description: description.into(),
            flags: IndexMap::new(),
            short_index: HashMap::new(),
            positional: Vec::new(),
        };
        set.bool("help", false, "show this help message", Some('h'));
        set
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Declare an integer flag.
    ///
    /// # Panics
    ///
    /// Panics if `name` or `short` collides with an earlier declaration, as
    /// do the other declaration methods. Redeclaring a flag is a programming
    /// error in the calling program, not a runtime condition.
    pub fn int(
        &mut self,
        name: &str,
        default: i64,
        usage: &str,
        short: Option<char>,
    ) -> FlagId {
        self.declare(name, Value::Int(default), usage, short)
    }

    /// Declare a floating-point flag.
    pub fn float(
        &mut self,
        name: &str,
        default: f64,
        usage: &str,
        short: Option<char>,
    ) -> FlagId {
        self.declare(name, Value::Float(default), usage, short)
    }

    /// Declare a boolean flag. Booleans act as switches: `--name` and `-n`
    /// set them to true without taking a value token.
    pub fn bool(
        &mut self,
        name: &str,
        default: bool,
        usage: &str,
        short: Option<char>,
    ) -> FlagId {
        self.declare(name, Value::Bool(default), usage, short)
    }

    /// Declare a string flag.
    pub fn string(
        &mut self,
        name: &str,
        default: &str,
        usage: &str,
        short: Option<char>,
    ) -> FlagId {
        self.declare(name, Value::Str(default.to_string()), usage, short)
    }

    fn declare(&mut self, name: &str, default: Value, usage: &str, short: Option<char>) -> FlagId {
        assert!(!name.is_empty(), "flag name must not be empty");
        if self.flags.contains_key(name) {
            panic!("flag redeclared: --{name}");
        }
        if let Some(c) = short {
            if let Some(taken) = self.short_index.get(&c) {
                panic!("short flag '-{c}' already taken by --{taken}");
            }
            self.short_index.insert(c, name.to_string());
        }
        tracing::trace!(flag = name, kind = default.kind().as_str(), "declared flag");

        let id = FlagId(self.flags.len());
        self.flags.insert(
            name.to_string(),
            Flag {
                name: name.to_string(),
                short,
                usage: usage.to_string(),
                value: default.clone(),
                default,
                set: false,
            },
        );
        id
    }

    /// Look up a flag by long name.
    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.flags.get(name)
    }

    /// The flag a declaration handle refers to.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by a different registry.
    pub fn flag(&self, id: FlagId) -> &Flag {
        let Some((_, flag)) = self.flags.get_index(id.0) else {
            panic!("flag id {} was not issued by this registry", id.0);
        };
        flag
    }

    /// Whether `name` was explicitly set by the most recent parse. Unknown
    /// names report false.
    pub fn is_set(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|flag| flag.set)
    }

    /// Positional arguments left over from the most recent parse, in their
    /// original relative order.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    /// Typed read of a flag's current value.
    pub fn get<T: FlagType>(&self, name: &str) -> Result<T, AccessError> {
        let flag = self.lookup(name).ok_or_else(|| AccessError::UnknownFlag {
            name: name.to_string(),
        })?;
        flag.get::<T>().ok_or_else(|| AccessError::TypeMismatch {
            name: name.to_string(),
            expected: T::KIND,
            actual: flag.kind(),
        })
    }

    /// Flags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Flag> {
        self.flags.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_set_auto_declares_help() {
        let set = FlagSet::new("demo", "");
        let help = set.lookup("help").expect("help flag missing");
        assert_eq!(help.short(), Some('h'));
        assert_eq!(help.kind(), Kind::Bool);
        assert!(!help.is_set());
    }

    #[test]
    fn declared_flags_start_at_their_defaults() {
        let mut set = FlagSet::new("demo", "");
        set.int("port", 8080, "port to listen on", None);
        set.string("mode", "fast", "running mode", None);

        assert_eq!(set.get::<i64>("port").unwrap(), 8080);
        assert_eq!(set.get::<String>("mode").unwrap(), "fast");
        assert!(!set.is_set("port"));
    }

    #[test]
    fn handles_give_direct_access() {
        let mut set = FlagSet::new("demo", "");
        let port = set.int("port", 8080, "port to listen on", Some('p'));
        let flag = set.flag(port);
        assert_eq!(flag.name(), "port");
        assert_eq!(flag.get::<i64>(), Some(8080));
        assert_eq!(flag.get::<bool>(), None);
    }

    #[test]
    fn get_reports_unknown_names() {
        let set = FlagSet::new("demo", "");
        assert_eq!(
            set.get::<i64>("port"),
            Err(AccessError::UnknownFlag {
                name: "port".to_string()
            })
        );
    }

    #[test]
    fn get_reports_kind_mismatches() {
        let mut set = FlagSet::new("demo", "");
        set.int("port", 8080, "port to listen on", None);
        let err = set.get::<String>("port").unwrap_err();
        assert_eq!(
            err,
            AccessError::TypeMismatch {
                name: "port".to_string(),
                expected: Kind::Str,
                actual: Kind::Int,
            }
        );
        assert_eq!(err.to_string(), "flag 'port' holds int, not string");
    }

    #[test]
    fn is_set_is_false_for_unknown_names() {
        let set = FlagSet::new("demo", "");
        assert!(!set.is_set("nope"));
    }

    #[test]
    fn iteration_preserves_declaration_order() {
        let mut set = FlagSet::new("demo", "");
        set.int("port", 8080, "", None);
        set.bool("debug", false, "", Some('d'));
        let names: Vec<&str> = set.iter().map(Flag::name).collect();
        assert_eq!(names, ["help", "port", "debug"]);
    }

    #[test]
    #[should_panic(expected = "flag redeclared: --port")]
    fn redeclaring_a_long_name_panics() {
        let mut set = FlagSet::new("demo", "");
        set.int("port", 8080, "", None);
        set.string("port", "x", "", None);
    }

    #[test]
    #[should_panic(expected = "short flag '-h' already taken by --help")]
    fn reusing_a_short_alias_panics() {
        let mut set = FlagSet::new("demo", "");
        set.bool("hidden", false, "", Some('h'));
    }
}
