//! Type references and annotation uses.

use serde::{Deserialize, Serialize};

/// A reference to a type by its fully qualified name.
///
/// References are opaque: a `TypeRef` may name a type that does not exist
/// yet. The emission stage of the host compiler is responsible for checking
/// existence; the rewrite pass treats every name as a valid forward
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(String);

impl TypeRef {
    /// Create a type reference from a fully qualified name.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self(full_name.into())
    }

    /// The fully qualified name this reference points at.
    pub fn full_name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// An annotation attached to a field, with its sole parameter.
///
/// The model only needs single-parameter annotations: the rewrite pass
/// attaches a type-adapter annotation whose one parameter names the adapter
/// class. A host-supplied annotation may carry no parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// The annotation class.
    pub class: TypeRef,
    /// The sole parameter, if any.
    pub value: Option<TypeRef>,
}

impl Annotation {
    /// Create an annotation with a single parameter.
    pub fn with_value(class: impl Into<TypeRef>, value: impl Into<TypeRef>) -> Self {
        Self {
            class: class.into(),
            value: Some(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_full_name() {
        let ty = TypeRef::new("pkg.TTrueFalse");
        assert_eq!(ty.full_name(), "pkg.TTrueFalse");
        assert_eq!(ty.to_string(), "pkg.TTrueFalse");
    }

    #[test]
    fn test_type_ref_serializes_as_plain_string() {
        let ty = TypeRef::new("bool");
        let json = serde_json::to_string(&ty).unwrap();
        assert_eq!(json, "\"bool\"");
    }

    #[test]
    fn test_annotation_with_value() {
        let ann = Annotation::with_value("pkg.Marker", "pkg.BoolAdapter");
        assert_eq!(ann.class.full_name(), "pkg.Marker");
        assert_eq!(ann.value.as_ref().unwrap().full_name(), "pkg.BoolAdapter");
    }

    #[test]
    fn test_annotation_without_value_deserializes() {
        let ann: Annotation = serde_json::from_str(r#"{"class": "pkg.Marker", "value": null}"#)
            .expect("annotation should deserialize");
        assert!(ann.value.is_none());
    }
}
