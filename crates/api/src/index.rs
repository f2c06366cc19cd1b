//! Read-only lookup service over the universe of known types.

use crate::error::ApiResult;
use crate::models::{TypeDescriptor, TypeName};
use std::sync::Arc;

/// Queryable catalog of known types and their subtype relationships.
///
/// A name missing from the index is reported as `Ok(None)`; `Err` is reserved for
/// the index itself failing.
pub trait TypeIndex: Send + Sync {
    /// Look up the descriptor of a named type.
    fn resolve(&self, name: &str) -> ApiResult<Option<Arc<TypeDescriptor>>>;

    /// All known direct and transitive subclasses of `name`.
    fn subtypes_of(&self, name: &str) -> ApiResult<Vec<TypeName>>;

    /// All known classes implementing `name`, directly or through sub-interfaces and
    /// superclasses.
    fn implementors_of(&self, name: &str) -> ApiResult<Vec<TypeName>>;
}

/// Pointer type for shared indexes.
pub type TypeIndexPtr = Arc<dyn TypeIndex>;

impl<T: TypeIndex + ?Sized> TypeIndex for Arc<T> {
    fn resolve(&self, name: &str) -> ApiResult<Option<Arc<TypeDescriptor>>> {
        (**self).resolve(name)
    }

    fn subtypes_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        (**self).subtypes_of(name)
    }

    fn implementors_of(&self, name: &str) -> ApiResult<Vec<TypeName>> {
        (**self).implementors_of(name)
    }
}

/// An index that knows no types. Every name resolves to "not found".
pub struct EmptyIndex;

impl TypeIndex for EmptyIndex {
    fn resolve(&self, _name: &str) -> ApiResult<Option<Arc<TypeDescriptor>>> {
        Ok(None)
    }

    fn subtypes_of(&self, _name: &str) -> ApiResult<Vec<TypeName>> {
        Ok(vec![])
    }

    fn implementors_of(&self, _name: &str) -> ApiResult<Vec<TypeName>> {
        Ok(vec![])
    }
}
