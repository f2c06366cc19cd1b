use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt;

/// Fully qualified, dot-separated type name (e.g. `com.acme.Order`).
pub type TypeName = SmolStr;

/// A type as it occurs in a signature (field type, return type, type argument).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum TypeRef {
    /// `void` return type
    Void,

    /// Primitive type (e.g., "int", "boolean")
    Primitive(#[schemars(with = "String")] SmolStr),

    /// Type variable whose bound is unknown (e.g., "T")
    TypeVariable(#[schemars(with = "String")] SmolStr),

    /// Nominal reference to a named type
    Class(#[schemars(with = "String")] TypeName),

    /// Array of the element type (e.g., Item[])
    Array(Box<TypeRef>),

    /// Generic instantiation (e.g., List<Item>)
    Parameterized {
        #[schemars(with = "String")]
        name: TypeName,
        arguments: Vec<TypeRef>,
    },
}

impl TypeRef {
    pub fn primitive(name: impl Into<SmolStr>) -> Self {
        TypeRef::Primitive(name.into())
    }

    pub fn type_variable(name: impl Into<SmolStr>) -> Self {
        TypeRef::TypeVariable(name.into())
    }

    pub fn class(name: impl Into<TypeName>) -> Self {
        TypeRef::Class(name.into())
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array(Box::new(element))
    }

    pub fn parameterized(name: impl Into<TypeName>, arguments: Vec<TypeRef>) -> Self {
        TypeRef::Parameterized {
            name: name.into(),
            arguments,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Void => f.write_str("void"),
            TypeRef::Primitive(name) | TypeRef::TypeVariable(name) | TypeRef::Class(name) => {
                f.write_str(name)
            }
            TypeRef::Array(element) => write!(f, "{}[]", element),
            TypeRef::Parameterized { name, arguments } => {
                write!(f, "{}<", name)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_nested_signature() {
        let ty = TypeRef::array(TypeRef::parameterized(
            "java.util.Map",
            vec![
                TypeRef::class("java.lang.String"),
                TypeRef::array(TypeRef::primitive("int")),
            ],
        ));
        assert_eq!(ty.to_string(), "java.util.Map<java.lang.String, int[]>[]");
    }

    #[test]
    fn test_serde_shape_is_tagged() {
        let json = serde_json::to_value(TypeRef::class("a.B")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "class", "data": "a.B" }));

        let void: TypeRef = serde_json::from_value(serde_json::json!({ "kind": "void" })).unwrap();
        assert_eq!(void, TypeRef::Void);
    }
}
