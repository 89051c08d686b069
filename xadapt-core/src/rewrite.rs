//! The field-rewrite pass.
//!
//! Walks every field of every class in the model. A field whose declared
//! type is a registered bound type gets its type swapped to the configured
//! value type, a type-adapter annotation naming the adapter class, and its
//! accessor signatures updated to match. Everything else is left untouched.

use xadapt_ir::{Annotation, ClassDef, ClassModel};

use crate::{diagnostic::Diagnostic, registry::AdapterRegistry};

/// Annotation attached to every rewritten field. Its sole parameter names
/// the adapter class the marshaller consults at conversion time.
pub const ADAPTER_ANNOTATION: &str = "jakarta.xml.bind.annotation.adapters.XmlJavaTypeAdapter";

/// What a run of the pass did to the model.
#[derive(Debug, Default)]
pub struct RewriteOutcome {
    /// Number of classes visited.
    pub classes_visited: usize,
    /// Number of fields rewritten.
    pub fields_rewritten: usize,
    /// Diagnostics collected during the pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl RewriteOutcome {
    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// One-shot rewrite pass over a borrowed class model.
///
/// The pass holds nothing but the registry; no state outlives [`run`].
/// It is deterministic and idempotent under normal configuration, since the
/// value types it writes are not themselves registry keys.
///
/// [`run`]: RewritePass::run
#[derive(Debug)]
pub struct RewritePass {
    registry: AdapterRegistry,
}

impl RewritePass {
    /// Create a pass over the given registry.
    pub fn new(registry: AdapterRegistry) -> Self {
        Self { registry }
    }

    /// The registry this pass rewrites against.
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    /// Run the pass over every field of every class, mutating the model in
    /// place.
    ///
    /// A matched field missing its conventional getter is reported as an
    /// error diagnostic and skipped without any mutation; the rest of the
    /// model is still processed.
    pub fn run(&self, model: &mut ClassModel) -> RewriteOutcome {
        let mut outcome = RewriteOutcome::default();

        for class in &mut model.classes {
            outcome.classes_visited += 1;
            self.rewrite_class(class, &mut outcome);
        }

        outcome
    }

    fn rewrite_class(&self, class: &mut ClassDef, outcome: &mut RewriteOutcome) {
        // Index-based walk: field reads and accessor edits borrow disjoint
        // parts of the class at different times.
        for index in 0..class.fields.len() {
            let field = &class.fields[index];
            let Some(binding) = self.registry.get(field.ty.full_name()) else {
                continue;
            };
            let binding = binding.clone();
            let field_name = field.name.clone();
            let bound_name = field.ty.full_name().to_string();
            let location = format!("{}.{}", class.name, field_name);

            // Precondition before any mutation: a matched field must have a
            // conventional getter. Fail the field, not the run.
            if class.getter_mut(&field_name).is_none() {
                outcome.diagnostics.push(
                    Diagnostic::error(format!(
                        "field '{location}' has bound type '{bound_name}' but no conventional getter (get{cap} or is{cap})",
                        cap = capitalized(&field_name),
                    ))
                    .at(location),
                );
                continue;
            }

            let field = &mut class.fields[index];
            field.annotate(Annotation::with_value(
                ADAPTER_ANNOTATION,
                binding.adapter.clone(),
            ));
            field.ty = binding.value.clone();

            if let Some(getter) = class.getter_mut(&field_name) {
                getter.return_type = Some(binding.value.clone());
            }

            // No setter is fine: the field is read-only.
            if let Some(setter) = class.setter_mut(&field_name)
                && let Some(param) = setter.params.first_mut()
            {
                param.ty = binding.value.clone();
            }

            outcome.fields_rewritten += 1;
            outcome.diagnostics.push(
                Diagnostic::info(format!(
                    "rewrote '{}' from '{}' to '{}' via adapter '{}'",
                    field_name, bound_name, binding.value, binding.adapter
                ))
                .at(format!("{}.{}", class.name, field_name)),
            );
        }
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
