use crate::predicate::NamePredicate;
use reflscope_api::{TypeIndex, TypeIndexPtr, TypeRef};
use std::fmt;

/// One traversal root: a seed type plus the policy scoped to it.
#[derive(Clone)]
pub struct HierarchyRequest {
    seed: TypeRef,
    index: Option<TypeIndexPtr>,
    ignore: NamePredicate,
    source: Option<String>,
}

impl HierarchyRequest {
    /// A request that ignores nothing and resolves through the global index.
    pub fn new(seed: TypeRef) -> Self {
        Self {
            seed,
            index: None,
            ignore: NamePredicate::never(),
            source: None,
        }
    }

    /// Resolve types of this request through a dedicated index.
    pub fn with_index(mut self, index: TypeIndexPtr) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_ignore(mut self, ignore: NamePredicate) -> Self {
        self.ignore = ignore;
        self
    }

    /// Label of whoever asked for this seed, for tracing only.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn seed(&self) -> &TypeRef {
        &self.seed
    }

    pub fn index_override(&self) -> Option<&dyn TypeIndex> {
        self.index.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.test(name)
    }
}

impl fmt::Debug for HierarchyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchyRequest")
            .field("seed", &self.seed)
            .field("has_index_override", &self.index.is_some())
            .field("source", &self.source)
            .finish()
    }
}
