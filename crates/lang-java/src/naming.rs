use reflscope_core::NamePredicate;

/// Separator between packages and between package/class.
pub const TYPE_SEPARATOR: char = '.';

/// Separator between an outer class and its nested classes in binary names.
pub const NESTED_SEPARATOR: char = '$';

pub const PRIMITIVES: [&str; 8] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double",
];

/// Packages whose types are assumed to need no reflective registration, either
/// because the platform handles them or because they never carry user state.
pub const DEFAULT_IGNORED_PACKAGES: [&str; 4] =
    ["java.", "io.reactivex.", "org.reactivestreams.", "org.slf4j."];

pub fn is_primitive(name: &str) -> bool {
    PRIMITIVES.contains(&name)
}

/// Whether `name` is a syntactically valid dotted binary name (`a.b.C$D`).
pub fn is_valid_binary_name(name: &str) -> bool {
    !name.is_empty()
        && name.split(TYPE_SEPARATOR).all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
                _ => false,
            }
        })
}

pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == NESTED_SEPARATOR
}

pub fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == NESTED_SEPARATOR
}

/// Traversal ignore predicate used when a request doesn't provide one.
pub fn default_ignore_predicate() -> NamePredicate {
    NamePredicate::prefixes(DEFAULT_IGNORED_PACKAGES)
}
