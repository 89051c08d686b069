//! Core of the xadapt rewrite pass.
//!
//! This crate turns parsed adapter specifications into an
//! [`AdapterRegistry`] and applies a single [`RewritePass`] over a borrowed
//! class model:
//!
//! ```text
//! Vec<AdapterSpec> → AdapterRegistry → RewritePass::run(&mut ClassModel)
//! ```
//!
//! The pass is a pure function of (registry, model): single-threaded, one
//! shot, no state outliving the invocation. Faults inside the model surface
//! as [`Diagnostic`] records rather than aborting the run; a configuration
//! error fails before any mutation, in `xadapt-config`.

mod diagnostic;
mod registry;
mod rewrite;

pub use diagnostic::{Diagnostic, Severity};
pub use registry::{AdapterBinding, AdapterRegistry};
pub use rewrite::{ADAPTER_ANNOTATION, RewriteOutcome, RewritePass};
