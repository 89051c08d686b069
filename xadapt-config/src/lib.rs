//! Adapter specification parsing for the xadapt rewrite pass.
//!
//! Two configuration surfaces feed the same structured output:
//!
//! - the inline option format, whitespace-separated
//!   `adapterType,boundType,valueType` tokens ([`parse_specs`]);
//! - a TOML manifest with `[[adapters]]` tables ([`AdaptersManifest`]).
//!
//! Both fail closed: a single malformed entry aborts the whole parse so a
//! run can never apply a partial adapter set.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod spec;

pub use error::{Error, Result};
pub use manifest::{AdapterEntry, AdaptersManifest};
pub use spec::{AdapterSpec, parse_specs, parse_specs_with_source};
