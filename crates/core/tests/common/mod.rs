//! In-memory type index for closure tests.

use reflscope_api::{
    ApiError, ApiResult, FieldDescriptor, MethodDescriptor, TypeDescriptor, TypeIndex, TypeName,
    TypeRef,
};
use std::collections::HashMap;
use std::sync::Arc;

/// A mock index built with a fluent API. Subtype and implementor answers are
/// declared explicitly rather than derived.
#[derive(Default)]
pub struct MockIndex {
    types: HashMap<String, Arc<TypeDescriptor>>,
    subtypes: HashMap<String, Vec<TypeName>>,
    implementors: HashMap<String, Vec<TypeName>>,
    broken: Option<String>,
}

#[allow(dead_code)]
impl MockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, descriptor: TypeDescriptor) -> Self {
        self.types
            .insert(descriptor.name.to_string(), Arc::new(descriptor));
        self
    }

    /// Add a class with only a supertype.
    pub fn add_class(self, name: &str, super_name: Option<&str>) -> Self {
        let mut desc = TypeDescriptor::new(name);
        desc.super_name = super_name.map(TypeName::from);
        self.add(desc)
    }

    pub fn with_subtypes(mut self, name: &str, subtypes: &[&str]) -> Self {
        self.subtypes.insert(
            name.to_string(),
            subtypes.iter().map(|s| TypeName::from(*s)).collect(),
        );
        self
    }

    pub fn with_implementors(mut self, name: &str, implementors: &[&str]) -> Self {
        self.implementors.insert(
            name.to_string(),
            implementors.iter().map(|s| TypeName::from(*s)).collect(),
        );
        self
    }

    /// Every lookup of `name` fails with an index error.
    pub fn failing_on(mut self, name: &str) -> Self {
        self.broken = Some(name.to_string());
        self
    }

    fn check(&self, name: &str) -> ApiResult<()> {
        match &self.broken {
            Some(broken) if broken == name => {
                Err(ApiError::Index(format!("corrupt entry for {}", name)))
            }
            _ => Ok(()),
        }
    }
}

impl TypeIndex for MockIndex {
    fn resolve(&self, name: &str) -> ApiResult<Option<Arc<TypeDescriptor>>> {
        self.check(name)?;
        Ok(self.types.get(name).cloned())
    }

    fn subtypes_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        self.check(name)?;
        Ok(self.subtypes.get(name).cloned().unwrap_or_default())
    }

    fn implementors_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        self.check(name)?;
        Ok(self.implementors.get(name).cloned().unwrap_or_default())
    }
}

#[allow(dead_code)]
pub fn field(name: &str, type_ref: TypeRef) -> FieldDescriptor {
    FieldDescriptor::new(name, type_ref)
}

#[allow(dead_code)]
pub fn getter(name: &str, return_type: TypeRef) -> MethodDescriptor {
    MethodDescriptor::new(name, return_type)
}

#[allow(dead_code)]
pub fn names(records: &[reflscope_api::RegistrationRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}
