//! Resolved structural information about named types, as served by a type index.

use super::type_ref::{TypeName, TypeRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field-name prefixes the compiler uses for synthetic references to enclosing state:
/// `this$N` holds the enclosing instance, `val$name` a captured local variable.
pub const SYNTHETIC_OUTER_PREFIXES: [&str; 2] = ["this$", "val$"];

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Enum,
    Annotation,
    Record,
}

impl TypeKind {
    /// Interfaces and annotations cannot be implementors themselves.
    pub fn is_interface_like(&self) -> bool {
        matches!(self, TypeKind::Interface | TypeKind::Annotation)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct TypeDescriptor {
    #[schemars(with = "String")]
    pub name: TypeName,
    #[serde(default)]
    pub kind: TypeKind,
    /// Absent for the root type and for interfaces
    #[serde(default)]
    #[schemars(with = "Option<String>")]
    pub super_name: Option<TypeName>,
    #[serde(default)]
    #[schemars(with = "Vec<String>")]
    pub interfaces: Vec<TypeName>,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<TypeName>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            super_name: None,
            interfaces: Vec::new(),
            modifiers: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_super(mut self, super_name: impl Into<TypeName>) -> Self {
        self.super_name = Some(super_name.into());
        self
    }

    pub fn with_interface(mut self, interface: impl Into<TypeName>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct FieldDescriptor {
    #[schemars(with = "String")]
    pub name: smol_str::SmolStr,
    pub type_ref: TypeRef,
    #[serde(default)]
    pub modifiers: Vec<String>,
    /// Set by indexes that can see the compiler's synthetic flag.
    #[serde(default)]
    pub synthetic: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<smol_str::SmolStr>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            modifiers: Vec::new(),
            synthetic: false,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }

    /// Whether this field is a compiler-generated link to an enclosing instance or
    /// captured variable.
    ///
    /// Falls back to the `this$` / `val$` naming convention when the index carries no
    /// explicit synthetic flag.
    pub fn is_synthetic_outer_reference(&self) -> bool {
        self.synthetic
            || SYNTHETIC_OUTER_PREFIXES
                .iter()
                .any(|prefix| self.name.starts_with(*prefix))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
pub struct MethodDescriptor {
    #[schemars(with = "String")]
    pub name: smol_str::SmolStr,
    #[serde(default)]
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
    #[serde(default)]
    pub modifiers: Vec<String>,
}

impl MethodDescriptor {
    pub fn new(name: impl Into<smol_str::SmolStr>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type,
            modifiers: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, parameter: TypeRef) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifiers.push(modifier.into());
        self
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_static(&self) -> bool {
        self.modifiers.iter().any(|m| m == "static")
    }

    /// No parameters, not static, returns a value: the shape of a property accessor.
    pub fn is_getter_shaped(&self) -> bool {
        self.parameter_count() == 0 && !self.is_static() && !self.return_type.is_void()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_getter_shape() {
        let get = MethodDescriptor::new("getX", TypeRef::class("a.X"));
        let set = MethodDescriptor::new("setX", TypeRef::Void).with_parameter(TypeRef::primitive("int"));
        let of = MethodDescriptor::new("of", TypeRef::class("a.X")).with_modifier("static");
        let validate = MethodDescriptor::new("validate", TypeRef::Void);

        assert!(get.is_getter_shaped());
        assert!(!set.is_getter_shaped());
        assert!(!of.is_getter_shaped());
        assert!(!validate.is_getter_shaped());
    }

    #[test]
    fn test_synthetic_outer_reference_by_name_or_flag() {
        assert!(FieldDescriptor::new("this$0", TypeRef::class("a.Outer")).is_synthetic_outer_reference());
        assert!(FieldDescriptor::new("val$callback", TypeRef::class("a.Cb")).is_synthetic_outer_reference());
        assert!(!FieldDescriptor::new("thisValue", TypeRef::class("a.V")).is_synthetic_outer_reference());

        let mut flagged = FieldDescriptor::new("outer", TypeRef::class("a.Outer"));
        flagged.synthetic = true;
        assert!(flagged.is_synthetic_outer_reference());
    }

    #[test]
    fn test_descriptor_defaults_from_minimal_json() {
        let desc: TypeDescriptor =
            serde_json::from_value(serde_json::json!({ "name": "a.B" })).unwrap();
        assert_eq!(desc.kind, TypeKind::Class);
        assert!(desc.super_name.is_none());
        assert!(desc.fields.is_empty() && desc.methods.is_empty());
    }
}
