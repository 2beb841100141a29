//! Read-only catalog store.
//!
//! # Responsibility
//! - Provide ordered iteration and id lookup over authored records.
//! - Enforce id uniqueness and per-record validity once, at construction.
//!
//! # Invariants
//! - `all()` preserves authored order; that order defines display order.
//! - `by_id` resolves to at most one record.
//! - No mutation API exists; consumers share the store read-only.

use crate::model::entry::{CatalogEntry, EntryId, EntryValidationError};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two authored records share one id.
    DuplicateId(EntryId),
    /// A record failed its own validation.
    Invalid(EntryValidationError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate catalog id: {id}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicateId(_) => None,
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for CatalogError {
    fn from(value: EntryValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Page-lifetime, read-only collection of one record kind.
#[derive(Debug, Clone)]
pub struct CatalogStore<E: CatalogEntry> {
    entries: Vec<E>,
}

impl<E: CatalogEntry> CatalogStore<E> {
    /// Builds a store from authored records.
    ///
    /// An empty input is a valid empty catalog, not an error.
    pub fn new(entries: Vec<E>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.id()) {
                return Err(CatalogError::DuplicateId(entry.id()));
            }
        }
        Ok(Self { entries })
    }

    /// Returns all records in authored order.
    pub fn all(&self) -> &[E] {
        &self.entries
    }

    /// Returns the record with `id`, if present.
    pub fn by_id(&self, id: EntryId) -> Option<&E> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Returns featured records, preserving authored order.
    pub fn featured(&self) -> impl Iterator<Item = &E> {
        self.entries.iter().filter(|entry| entry.featured())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
