//! JSON run configuration.
//!
//! ```json
//! {
//!   "seeds": [{ "type": "com.acme.Order", "source": "rest" }],
//!   "ignore_warnings": [{ "prefix": "com.vendor." }],
//!   "writable": [{ "pattern": "^com\\.acme\\..*Config$" }],
//!   "writable_kinds": ["record"],
//!   "writable_modifiers": ["abstract"]
//! }
//! ```

use crate::error::{ReflscopeError, Result};
use crate::predicate::{DescriptorPredicate, NamePredicate};
use reflscope_api::TypeKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ClosureConfig {
    /// Types to compute the reflective closure of
    #[serde(default)]
    pub seeds: Vec<SeedConfig>,
    /// Package prefixes skipped during traversal by seeds that don't set their own.
    /// When absent, the language default applies.
    #[serde(default)]
    pub ignore_prefixes: Option<Vec<String>>,
    /// Unresolved types matching any rule are not reported
    #[serde(default)]
    pub ignore_warnings: Vec<NameRule>,
    /// Types whose name matches any rule keep their final fields writable
    #[serde(default)]
    pub writable: Vec<NameRule>,
    /// Types of these kinds keep their final fields writable
    #[serde(default)]
    pub writable_kinds: Vec<TypeKind>,
    /// Types declared with any of these modifiers keep their final fields writable
    #[serde(default)]
    pub writable_modifiers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SeedConfig {
    /// Type signature, e.g. `java.util.List<com.acme.Item>` or `com.acme.Item[]`
    #[serde(rename = "type")]
    pub signature: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub ignore_prefixes: Option<Vec<String>>,
    /// Dedicated index resolving this seed's types ahead of the global one.
    /// Relative paths are taken from the configuration file's directory.
    #[serde(default)]
    pub index: Option<PathBuf>,
}

/// A rule over fully qualified type names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NameRule {
    Prefix(String),
    Exact(String),
    /// Regular expression, unanchored
    Pattern(String),
}

impl NameRule {
    pub fn compile(&self) -> Result<NamePredicate> {
        match self {
            NameRule::Prefix(prefix) => Ok(NamePredicate::prefixes([prefix.clone()])),
            NameRule::Exact(name) => Ok(NamePredicate::exact(name.clone())),
            NameRule::Pattern(pattern) => NamePredicate::pattern(pattern),
        }
    }
}

impl ClosureConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(seed) = self.seeds.iter().find(|s| s.signature.trim().is_empty()) {
            return Err(ReflscopeError::Config(format!(
                "seed with empty type signature (source: {})",
                seed.source.as_deref().unwrap_or("<unspecified>")
            )));
        }
        Ok(())
    }

    pub fn ignore_warning_predicates(&self) -> Result<Vec<NamePredicate>> {
        self.ignore_warnings.iter().map(NameRule::compile).collect()
    }

    pub fn writable_predicates(&self) -> Result<Vec<DescriptorPredicate>> {
        let mut predicates = self
            .writable
            .iter()
            .map(|rule| rule.compile().map(DescriptorPredicate::by_name))
            .collect::<Result<Vec<_>>>()?;
        predicates.extend(self.writable_kinds.iter().copied().map(DescriptorPredicate::by_kind));
        predicates.extend(
            self.writable_modifiers
                .iter()
                .map(|modifier| DescriptorPredicate::by_modifier(modifier.clone())),
        );
        Ok(predicates)
    }
}
