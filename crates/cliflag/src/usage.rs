//! Usage and error rendering.
//!
//! Consumes only the registry's public surface; callers that want different
//! formatting can render their own from [`FlagSet::iter`].

use crate::error::ParseError;
use crate::flag::FlagSet;
use crate::value::Kind;

/// Render the usage block: program name, description, and one row per flag
/// in declaration order, with the default value of each.
pub fn render(set: &FlagSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("Usage: {} [flags]\n", set.name()));
    if !set.description().is_empty() {
        out.push_str(set.description());
        out.push('\n');
    }

    let rows: Vec<(String, String)> = set
        .iter()
        .map(|flag| {
            let mut left = match flag.short() {
                Some(c) => format!("-{c}, --{}", flag.name()),
                None => format!("    --{}", flag.name()),
            };
            // booleans are switches and take no value token
            if flag.kind() != Kind::Bool {
                left.push_str(&format!(" <{}>", flag.kind()));
            }
            let mut help = flag.usage().to_string();
            if !help.is_empty() {
                help.push(' ');
            }
            help.push_str(&format!("(default: {})", flag.default_text()));
            (left, help)
        })
        .collect();

    if !rows.is_empty() {
        out.push_str("\nFlags:\n");
        let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
        for (left, help) in rows {
            out.push_str(&format!("  {:width$}  {}\n", left, help, width = width));
        }
    }

    out
}

/// One-line error rendering, conventionally printed before the usage block.
pub fn render_error(err: &ParseError) -> String {
    format!("error: {err}")
}
