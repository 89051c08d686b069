//! Class model graph: classes, fields, and accessor methods.

use serde::{Deserialize, Serialize};

use crate::types::{Annotation, TypeRef};

/// The full set of classes generated from a schema.
///
/// The model is owned by the host compiler for the duration of a run. The
/// rewrite pass borrows it mutably, edits fields and accessors in place, and
/// hands it back for source emission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    /// Generated classes, in emission order.
    pub classes: Vec<ClassDef>,
}

impl ClassModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Look up a class by its fully qualified name.
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }
}

impl Default for ClassModel {
    fn default() -> Self {
        Self::new()
    }
}

/// A single generated class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDef {
    /// Fully qualified class name.
    pub name: String,
    /// Declared fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Declared methods, including accessors.
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl ClassDef {
    /// Create a class with no members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Find the conventional getter for a field.
    ///
    /// Looks for a zero-parameter `get<Name>` method first, falling back to
    /// `is<Name>` for boolean-style accessors. Returns `None` when the class
    /// declares neither.
    pub fn getter_mut(&mut self, field_name: &str) -> Option<&mut Method> {
        let get_name = accessor_name("get", field_name);
        let is_name = accessor_name("is", field_name);

        // Two passes to keep the borrow checker happy with a single `&mut`.
        let position = self
            .methods
            .iter()
            .position(|m| m.name == get_name && m.params.is_empty())
            .or_else(|| {
                self.methods
                    .iter()
                    .position(|m| m.name == is_name && m.params.is_empty())
            })?;
        self.methods.get_mut(position)
    }

    /// Find the conventional setter for a field.
    ///
    /// Looks for a single-parameter `set<Name>` method. A missing setter is
    /// an ordinary outcome: read-only fields have none.
    pub fn setter_mut(&mut self, field_name: &str) -> Option<&mut Method> {
        let set_name = accessor_name("set", field_name);
        self.methods
            .iter_mut()
            .find(|m| m.name == set_name && m.params.len() == 1)
    }
}

/// A field declaration inside a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
    /// Annotations attached to the declaration.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Field {
    /// Create a field with no annotations.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
        }
    }

    /// Attach an annotation to this field.
    pub fn annotate(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}

/// A method declaration inside a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    /// Method name.
    pub name: String,
    /// Return type; `None` for void methods such as setters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TypeRef>,
    /// Parameters, in declaration order.
    #[serde(default)]
    pub params: Vec<Param>,
}

impl Method {
    /// Create a zero-parameter method returning the given type.
    pub fn getter(name: impl Into<String>, return_type: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            return_type: Some(return_type.into()),
            params: Vec::new(),
        }
    }

    /// Create a void method with a single parameter.
    pub fn setter(name: impl Into<String>, param: Param) -> Self {
        Self {
            name: name.into(),
            return_type: None,
            params: vec![param],
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub ty: TypeRef,
}

impl Param {
    /// Create a parameter.
    pub fn new(name: impl Into<String>, ty: impl Into<TypeRef>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Build an accessor method name: prefix + field name with its first letter
/// upper-cased (`flag` → `getFlag`).
fn accessor_name(prefix: &str, field_name: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + field_name.len());
    name.push_str(prefix);
    let mut chars = field_name.chars();
    if let Some(first) = chars.next() {
        name.extend(first.to_uppercase());
        name.push_str(chars.as_str());
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with_accessors() -> ClassDef {
        let mut class = ClassDef::new("pkg.Document");
        class.fields.push(Field::new("flag", "pkg.TTrueFalse"));
        class
            .methods
            .push(Method::getter("isFlag", "pkg.TTrueFalse"));
        class.methods.push(Method::setter(
            "setFlag",
            Param::new("value", "pkg.TTrueFalse"),
        ));
        class
    }

    #[test]
    fn test_accessor_name_capitalizes_field() {
        assert_eq!(accessor_name("get", "flag"), "getFlag");
        assert_eq!(accessor_name("is", "flag"), "isFlag");
        assert_eq!(accessor_name("set", "flag"), "setFlag");
    }

    #[test]
    fn test_accessor_name_empty_field() {
        assert_eq!(accessor_name("get", ""), "get");
    }

    #[test]
    fn test_getter_prefers_get_over_is() {
        let mut class = class_with_accessors();
        class
            .methods
            .insert(0, Method::getter("getFlag", "pkg.TTrueFalse"));

        let getter = class.getter_mut("flag").expect("getter should exist");
        assert_eq!(getter.name, "getFlag");
    }

    #[test]
    fn test_getter_falls_back_to_is() {
        let mut class = class_with_accessors();
        let getter = class.getter_mut("flag").expect("getter should exist");
        assert_eq!(getter.name, "isFlag");
    }

    #[test]
    fn test_getter_ignores_methods_with_params() {
        let mut class = ClassDef::new("pkg.Document");
        class.fields.push(Field::new("flag", "pkg.TTrueFalse"));
        class.methods.push(Method {
            name: "getFlag".to_string(),
            return_type: Some(TypeRef::new("pkg.TTrueFalse")),
            params: vec![Param::new("index", "int")],
        });

        assert!(class.getter_mut("flag").is_none());
    }

    #[test]
    fn test_setter_lookup() {
        let mut class = class_with_accessors();
        let setter = class.setter_mut("flag").expect("setter should exist");
        assert_eq!(setter.name, "setFlag");
        assert_eq!(setter.params.len(), 1);
    }

    #[test]
    fn test_setter_absent_for_read_only_field() {
        let mut class = ClassDef::new("pkg.Document");
        class.fields.push(Field::new("id", "string"));
        class.methods.push(Method::getter("getId", "string"));

        assert!(class.setter_mut("id").is_none());
    }

    #[test]
    fn test_model_class_lookup() {
        let mut model = ClassModel::new();
        model.classes.push(ClassDef::new("pkg.Document"));

        assert!(model.class("pkg.Document").is_some());
        assert!(model.class("pkg.Missing").is_none());
    }
}
