//! Class model intermediate representation for the xadapt rewrite pass.
//!
//! This crate defines the in-memory shape of the classes an XML-binding
//! compiler generates from a schema: classes with typed fields, accessor
//! methods, and annotations. The rewrite pass in `xadapt-core` borrows
//! mutably into this model and edits fields in place; it never creates or
//! deletes classes.
//!
//! # Architecture
//!
//! ```text
//! adapter specs → xadapt-config (parsing) → xadapt-core (rewrite) → ClassModel
//! ```
//!
//! The IR types are designed to be:
//! - Host-agnostic (no assumptions about which compiler produced the model)
//! - Mutation-friendly (lookups hand back mutable references, absence is
//!   an `Option`, never a fault)
//! - Serializable (the driver moves models across the process boundary as
//!   JSON)

mod model;
mod types;

pub use model::{ClassDef, ClassModel, Field, Method, Param};
pub use types::{Annotation, TypeRef};
