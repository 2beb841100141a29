//! Filter key registry and predicate rules.
//!
//! # Responsibility
//! - Register the closed filter set once, at page startup.
//! - Resolve a key to its predicate; unknown keys degrade to `all`.
//!
//! # Invariants
//! - Keys are lowercase ascii identifiers, unique within one registry.
//! - Predicates are pure: same record, same answer, no side effects.
//! - Registration order is display order for the filter bar.

use crate::model::entry::CatalogEntry;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reserved key whose rule matches every record.
pub const FILTER_KEY_ALL: &str = "all";

/// Pure predicate over one catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRule {
    /// Always true.
    All,
    /// `featured` flag set.
    Featured,
    /// Tag sequence contains the literal tag, case-sensitive.
    HasTag(String),
}

impl FilterRule {
    pub fn matches<E: CatalogEntry>(&self, entry: &E) -> bool {
        match self {
            Self::All => true,
            Self::Featured => entry.featured(),
            Self::HasTag(tag) => entry.tags().iter().any(|candidate| candidate == tag),
        }
    }
}

/// One registered filter: key, button label, predicate rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub key: String,
    pub label: String,
    pub rule: FilterRule,
}

impl FilterSpec {
    pub fn new(key: &str, label: &str, rule: FilterRule) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            rule,
        }
    }
}

/// Filter registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRegistryError {
    InvalidKey(String),
    DuplicateKey(String),
}

impl Display for FilterRegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "filter key is invalid: {key}"),
            Self::DuplicateKey(key) => write!(f, "filter key already registered: {key}"),
        }
    }
}

impl Error for FilterRegistryError {}

/// Closed, startup-registered filter set.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    specs: Vec<FilterSpec>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one filter.
    pub fn register(&mut self, spec: FilterSpec) -> Result<(), FilterRegistryError> {
        let key = spec.key.trim().to_string();
        if !is_valid_filter_key(&key) {
            return Err(FilterRegistryError::InvalidKey(spec.key));
        }
        if self.specs.iter().any(|existing| existing.key == key) {
            return Err(FilterRegistryError::DuplicateKey(key));
        }
        self.specs.push(FilterSpec { key, ..spec });
        Ok(())
    }

    /// Returns registered filters in registration order.
    pub fn specs(&self) -> &[FilterSpec] {
        &self.specs
    }

    /// Resolves a key to its rule.
    ///
    /// Unknown keys fall back to [`FilterRule::All`] so the page always stays
    /// renderable.
    pub fn rule_for(&self, key: &str) -> &FilterRule {
        self.specs
            .iter()
            .find(|spec| spec.key == key.trim())
            .map(|spec| &spec.rule)
            .unwrap_or(&FilterRule::All)
    }

    /// Returns whether `key` names a registered filter.
    pub fn contains(&self, key: &str) -> bool {
        self.specs.iter().any(|spec| spec.key == key.trim())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// The project gallery's default filter set.
    pub fn project_defaults() -> Self {
        let mut registry = Self::new();
        for spec in [
            FilterSpec::new(FILTER_KEY_ALL, "All Projects", FilterRule::All),
            FilterSpec::new("featured", "Featured", FilterRule::Featured),
            FilterSpec::new("react", "React", FilterRule::HasTag("React".to_string())),
            FilterSpec::new("vue", "Vue.js", FilterRule::HasTag("Vue.js".to_string())),
            FilterSpec::new(
                "mobile",
                "Mobile",
                FilterRule::HasTag("React Native".to_string()),
            ),
        ] {
            registry
                .register(spec)
                .expect("default filter set registers cleanly");
        }
        registry
    }
}

fn is_valid_filter_key(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
