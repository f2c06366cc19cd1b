use super::type_ref::TypeName;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One type that must keep its structural metadata for reflective access.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct RegistrationRecord {
    #[schemars(with = "String")]
    pub name: TypeName,
    pub fields: bool,
    pub methods: bool,
    pub final_fields_writable: bool,
}

impl RegistrationRecord {
    pub fn builder(name: impl Into<TypeName>) -> RegistrationRecordBuilder {
        RegistrationRecordBuilder {
            name: name.into(),
            fields: false,
            methods: false,
            final_fields_writable: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationRecordBuilder {
    name: TypeName,
    fields: bool,
    methods: bool,
    final_fields_writable: bool,
}

impl RegistrationRecordBuilder {
    pub fn fields(mut self, fields: bool) -> Self {
        self.fields = fields;
        self
    }

    pub fn methods(mut self, methods: bool) -> Self {
        self.methods = methods;
        self
    }

    pub fn final_fields_writable(mut self, writable: bool) -> Self {
        self.final_fields_writable = writable;
        self
    }

    pub fn build(self) -> RegistrationRecord {
        RegistrationRecord {
            name: self.name,
            fields: self.fields,
            methods: self.methods,
            final_fields_writable: self.final_fields_writable,
        }
    }
}
