use crate::predicate::NamePredicate;
use reflscope_api::TypeName;

/// Packages of the platform's standard library. These types resolve at runtime even
/// when the index does not carry them, so their absence is never worth a warning.
pub const PLATFORM_PACKAGE_PREFIXES: [&str; 4] = ["java.", "javax.", "jdk.", "sun."];

pub fn platform_type_rule() -> NamePredicate {
    NamePredicate::prefixes(PLATFORM_PACKAGE_PREFIXES)
}

/// Drops every unresolved name matched by `ignore`; the result is sorted and
/// deduplicated.
pub fn filter_warnings<'a>(
    unresolved: impl IntoIterator<Item = &'a TypeName>,
    ignore: &NamePredicate,
) -> Vec<TypeName> {
    let mut remaining: Vec<TypeName> = unresolved
        .into_iter()
        .filter(|name| !ignore.test(name.as_str()))
        .cloned()
        .collect();
    remaining.sort();
    remaining.dedup();
    remaining
}

/// Renders the single end-of-run diagnostic, or `None` when nothing is left to report.
pub fn render_unindexed_warning(names: &[TypeName]) -> Option<String> {
    if names.is_empty() {
        return None;
    }

    let listing = names
        .iter()
        .map(|name| format!("\t- {}", name))
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "Unable to properly register the hierarchy of the following classes for reflection \
         as they are not in the type index:\n{}\n\
         Consider adding them to the index, for example by indexing the dependency that \
         provides them.",
        listing
    ))
}
