//! Composable policy predicates.
//!
//! Two families are in play during a run:
//!
//! - name predicates ([`NamePredicate`]) decide which type names a request skips and
//!   which unresolved-type warnings are dropped;
//! - descriptor predicates ([`DescriptorPredicate`]) decide whether a type's final
//!   fields must stay writable.
//!
//! Any number of predicates of one family are folded into one with [`any_of`].

use crate::error::Result;
use reflscope_api::{TypeDescriptor, TypeKind};
use regex::Regex;
use std::fmt;
use std::sync::Arc;

/// A shareable, thread-safe boolean test over `T`.
pub struct Predicate<T: ?Sized>(Arc<dyn Fn(&T) -> bool + Send + Sync>);

pub type NamePredicate = Predicate<str>;
pub type DescriptorPredicate = Predicate<TypeDescriptor>;

impl<T: ?Sized> Predicate<T> {
    pub fn new(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(test))
    }

    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn always() -> Self {
        Self::new(|_| true)
    }

    pub fn test(&self, value: &T) -> bool {
        (self.0)(value)
    }
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// Combines predicates with logical OR. An empty sequence yields a predicate that
/// never matches.
pub fn any_of<T: ?Sized + 'static>(
    predicates: impl IntoIterator<Item = Predicate<T>>,
) -> Predicate<T> {
    let mut predicates: Vec<Predicate<T>> = predicates.into_iter().collect();
    match predicates.len() {
        0 => Predicate::never(),
        1 => predicates.remove(0),
        _ => Predicate::new(move |value| predicates.iter().any(|p| p.test(value))),
    }
}

impl NamePredicate {
    /// Matches names starting with any of the given prefixes (e.g. `"java."`).
    pub fn prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        Self::new(move |name: &str| prefixes.iter().any(|p| name.starts_with(p.as_str())))
    }

    pub fn exact(name: impl Into<String>) -> Self {
        let expected = name.into();
        Self::new(move |name: &str| name == expected)
    }

    /// Matches names for which the regex finds a match anywhere in the name.
    /// Anchor the pattern to match whole names.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Self::new(move |name: &str| regex.is_match(name)))
    }
}

impl DescriptorPredicate {
    /// Lifts a name predicate onto descriptors.
    pub fn by_name(names: NamePredicate) -> Self {
        Self::new(move |desc: &TypeDescriptor| names.test(&desc.name))
    }

    pub fn by_kind(kind: TypeKind) -> Self {
        Self::new(move |desc: &TypeDescriptor| desc.kind == kind)
    }

    /// Matches types declared with `modifier` (e.g. `abstract`).
    pub fn by_modifier(modifier: impl Into<String>) -> Self {
        let modifier = modifier.into();
        Self::new(move |desc: &TypeDescriptor| desc.has_modifier(&modifier))
    }
}

/// Externally registered policy for a run.
#[derive(Clone, Default, Debug)]
pub struct PredicateRegistry {
    ignore_warnings: Vec<NamePredicate>,
    writable: Vec<DescriptorPredicate>,
}

impl PredicateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_ignore_warning(&mut self, predicate: NamePredicate) {
        self.ignore_warnings.push(predicate);
    }

    pub fn register_writable(&mut self, predicate: DescriptorPredicate) {
        self.writable.push(predicate);
    }

    /// True if any registered rule drops the warning for this name.
    pub fn ignore_warning_predicate(&self) -> NamePredicate {
        any_of(self.ignore_warnings.iter().cloned())
    }

    /// True if any registered rule wants final fields writable.
    pub fn writable_predicate(&self) -> DescriptorPredicate {
        any_of(self.writable.iter().cloned())
    }
}
