//! Parsing of the inline adapter specification format.
//!
//! Specifications arrive as one option value holding whitespace-separated
//! tokens, each a comma-joined triple:
//!
//! ```text
//! pkg.BoolAdapter,pkg.TTrueFalse,bool pkg.DateAdapter,pkg.TDate,chrono.Date
//! ```
//!
//! A token that does not split into exactly three non-empty parts fails the
//! whole parse. No partial result is ever returned: a run must not apply a
//! subset of its configured adapters.

use miette::{NamedSource, SourceSpan};

use crate::error::{Error, Result};

/// One adapter specification: which adapter class converts between a bound
/// type and the value type a rewritten field should expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterSpec {
    /// Fully qualified adapter class name.
    pub adapter: String,
    /// Fully qualified bound type name (the registry key).
    pub bound: String,
    /// Fully qualified value type name.
    pub value: String,
}

impl AdapterSpec {
    /// Create a specification from its three type names.
    pub fn new(
        adapter: impl Into<String>,
        bound: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            adapter: adapter.into(),
            bound: bound.into(),
            value: value.into(),
        }
    }
}

/// Parse whitespace-separated `adapter,bound,value` tokens.
///
/// Order is preserved; later registrations for the same bound type are kept
/// so the registry can apply its last-wins rule.
///
/// # Errors
///
/// Returns an error naming and spanning the first malformed token. On error
/// no specifications are returned at all.
pub fn parse_specs(src: &str) -> Result<Vec<AdapterSpec>> {
    parse_specs_with_source(src, "<adapters>")
}

/// Parse adapter specifications with a custom source name for error
/// reporting, e.g. the option the text arrived through (`--adapters`).
pub fn parse_specs_with_source(src: &str, source_name: &str) -> Result<Vec<AdapterSpec>> {
    let mut specs = Vec::new();

    for (offset, token) in tokens(src) {
        let parts: Vec<&str> = token.split(',').collect();
        if parts.len() != 3 {
            return Err(Box::new(Error::MalformedSpec {
                src: NamedSource::new(source_name, src.to_string()),
                span: SourceSpan::new(offset.into(), token.len()),
                token: token.to_string(),
                parts: parts.len(),
            }));
        }

        for (part, role) in parts.iter().zip(["adapter", "bound", "value"]) {
            if part.is_empty() {
                return Err(Box::new(Error::EmptyTypeName {
                    src: NamedSource::new(source_name, src.to_string()),
                    span: SourceSpan::new(offset.into(), token.len()),
                    token: token.to_string(),
                    role,
                }));
            }
        }

        specs.push(AdapterSpec::new(parts[0], parts[1], parts[2]));
    }

    Ok(specs)
}

/// Iterate whitespace-separated tokens together with their byte offset in
/// `src`, so errors can span the offending token.
fn tokens(src: &str) -> impl Iterator<Item = (usize, &str)> {
    src.split_ascii_whitespace()
        .map(|token| (token.as_ptr() as usize - src.as_ptr() as usize, token))
}
