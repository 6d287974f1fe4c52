//! The argument scanner.
//!
//! One left-to-right pass over the argument vector, classifying each token
//! as a help token, the `--` terminator, a positional argument, a long
//! option, or a short option. Values are converted through the flag's own
//! [`Value`](crate::Value), so a parse either fully applies a flag or
//! reports a structured error and stops.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::flag::{Flag, FlagSet};
use crate::value::Kind;

impl FlagSet {
    /// Parse an argument vector, program name first.
    ///
    /// Every flag is reset to its default before scanning, so `parse` can be
    /// called repeatedly on one registry with no residue from earlier calls.
    /// Scanning stops at the first error; flags consumed earlier in the same
    /// call keep their parsed values.
    ///
    /// `--help`, `-h`, and `-help` terminate the scan with
    /// [`ParseError::HelpRequested`] wherever they appear, the `--`
    /// terminator included.
    pub fn parse<I, S>(&mut self, argv: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        self.reset();
        debug!(tokens = argv.len().saturating_sub(1), "parsing arguments");

        let mut no_more_flags = false;
        let mut i = 1;
        while i < argv.len() {
            let arg = argv[i].as_str();

            if arg == "--help" || arg == "-h" || arg == "-help" {
                return Err(ParseError::HelpRequested);
            }

            if no_more_flags {
                self.positional.push(arg.to_string());
                i += 1;
                continue;
            }

            if arg == "--" {
                no_more_flags = true;
                i += 1;
                continue;
            }

            if !arg.starts_with('-') {
                self.positional.push(arg.to_string());
                i += 1;
                continue;
            }

            // long option: --name=value, --name value, or bare --name for
            // booleans
            if arg.len() > 2 && arg.starts_with("--") {
                let body = &arg[2..];
                let (name, joined) = match body.split_once('=') {
                    Some((name, value)) => (name, Some(value.to_string())),
                    None => (body, None),
                };
                let Some(flag) = self.flags.get_mut(name) else {
                    return Err(ParseError::UnknownFlag {
                        flag: name.to_string(),
                    });
                };
                let value = match joined {
                    Some(value) => value,
                    None if flag.kind() == Kind::Bool => "true".to_string(),
                    None => match argv.get(i + 1) {
                        // the space form refuses a value that looks like
                        // another flag
                        Some(next) if !next.starts_with('-') => {
                            i += 1;
                            next.clone()
                        }
                        _ => {
                            return Err(ParseError::MissingValue {
                                flag: name.to_string(),
                            });
                        }
                    },
                };
                apply(flag, &value)?;
                i += 1;
                continue;
            }

            // short option: only the second character names a flag; grouping
            // like -abc is not supported
            let mut chars = arg[1..].chars();
            let Some(c) = chars.next() else {
                // a lone "-" matches no rule and is dropped
                i += 1;
                continue;
            };
            let attached = chars.as_str();

            let Some(flag) = self
                .short_index
                .get(&c)
                .cloned()
                .and_then(|name| self.flags.get_mut(&name))
            else {
                return Err(ParseError::UnknownFlag {
                    flag: format!("-{c}"),
                });
            };
            let value = if !attached.is_empty() {
                attached.to_string()
            } else if flag.kind() == Kind::Bool {
                "true".to_string()
            } else {
                match argv.get(i + 1) {
                    // unlike the long form, the next token is consumed even
                    // when it starts with '-'
                    Some(next) => {
                        i += 1;
                        next.clone()
                    }
                    None => {
                        return Err(ParseError::MissingValue {
                            flag: flag.name.clone(),
                        });
                    }
                }
            };
            apply(flag, &value)?;
            i += 1;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.positional.clear();
        for flag in self.flags.values_mut() {
            flag.value = flag.default.clone();
            flag.set = false;
        }
    }
}

fn apply(flag: &mut Flag, text: &str) -> Result<(), ParseError> {
    if let Err(source) = flag.value.set_from_str(text) {
        return Err(ParseError::InvalidValue {
            flag: flag.name.clone(),
            source,
        });
    }
    flag.set = true;
    trace!(flag = %flag.name, value = %text, "flag set from command line");
    Ok(())
}
