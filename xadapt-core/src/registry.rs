//! Adapter registry: bound type → (adapter type, value type).

use indexmap::IndexMap;
use xadapt_config::AdapterSpec;
use xadapt_ir::TypeRef;

use crate::diagnostic::Diagnostic;

/// What a registered bound type rewrites to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterBinding {
    /// The adapter class mediating marshal/unmarshal conversion.
    pub adapter: TypeRef,
    /// The value type a rewritten field exposes.
    pub value: TypeRef,
}

/// Lookup table from bound-type full name to its adapter binding.
///
/// Built once per run from the parsed specifications and read-only while the
/// rewrite pass walks the model. Name resolution never fails here: every
/// identifier becomes an opaque [`TypeRef`], and existence checking is left
/// to the host's emission stage.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    bindings: IndexMap<String, AdapterBinding>,
}

impl AdapterRegistry {
    /// Build a registry from parsed specifications.
    ///
    /// Insertion is unconditional: when two specifications name the same
    /// bound type, the later one wins and a warning naming both adapters is
    /// recorded into `diagnostics`.
    pub fn from_specs(specs: &[AdapterSpec], diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut bindings = IndexMap::with_capacity(specs.len());

        for spec in specs {
            let binding = AdapterBinding {
                adapter: TypeRef::new(&spec.adapter),
                value: TypeRef::new(&spec.value),
            };
            if let Some(previous) = bindings.insert(spec.bound.clone(), binding) {
                diagnostics.push(
                    Diagnostic::warning(format!(
                        "bound type '{}' registered twice; replacing adapter '{}' with '{}'",
                        spec.bound, previous.adapter, spec.adapter
                    ))
                    .at(spec.bound.clone()),
                );
            }
        }

        Self { bindings }
    }

    /// Look up the binding for a bound type by its full name.
    pub fn get(&self, bound_full_name: &str) -> Option<&AdapterBinding> {
        self.bindings.get(bound_full_name)
    }

    /// Number of registered bound types.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns true if no adapters are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate bindings in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AdapterBinding)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}
