//! Single-writer/single-reader handoff channel.
//!
//! # Responsibility
//! - Stage one record as JSON under a fixed, collaborator-namespaced key.
//! - Resolve the staged record on the destination page, verified against
//!   the id query parameter, with a fallback-catalog read path.
//!
//! # Invariants
//! - A staged record whose id differs from the requested id is never
//!   surfaced; resolution degrades to the fallback catalog, then to
//!   not-found.
//! - Malformed storage is caught locally and never propagates.

use crate::catalog::store::CatalogStore;
use crate::model::entry::{CatalogEntry, EntryId};
use crate::storage::KeyValueStore;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Ephemeral storage key for a staged project.
pub const PROJECT_HANDOFF_KEY: &str = "currentProject";
/// Ephemeral storage key for a staged blog post.
pub const BLOG_HANDOFF_KEY: &str = "currentBlog";

/// Destination page for project details.
pub const PROJECT_DETAIL_PAGE: &str = "project-details.html";
/// Destination page for blog details.
pub const BLOG_DETAIL_PAGE: &str = "blog-details.html";

/// Full-page navigation seam.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// Navigator that records requested locations, for tests and the CLI demo.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    pub fn last(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, url: &str) {
        self.visited.push(url.to_string());
    }
}

/// Staging (write-side) failure.
#[derive(Debug)]
pub enum StageError {
    Encode(serde_json::Error),
}

impl Display for StageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode staged entry: {err}"),
        }
    }
}

impl Error for StageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for StageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Resolution (read-side) failure. Every variant renders the error view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// No record for the requested id in storage or fallback catalog, or
    /// the query parameter was absent/unparseable (`requested: None`).
    NotFound { requested: Option<EntryId> },
}

impl Display for DetailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { requested: Some(id) } => {
                write!(f, "no entry found for id {id}")
            }
            Self::NotFound { requested: None } => {
                write!(f, "missing or malformed id parameter")
            }
        }
    }
}

impl Error for DetailError {}

/// Which read path produced the resolved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// Verified staged record from ephemeral storage.
    Handoff,
    /// Secondary in-memory catalog lookup.
    Fallback,
}

/// Successful destination-side resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<E> {
    pub entry: E,
    pub source: ResolvedFrom,
}

/// Serializes `entry` into ephemeral storage under `key`.
pub fn stage<E: CatalogEntry>(
    store: &mut dyn KeyValueStore,
    key: &str,
    entry: &E,
) -> Result<(), StageError> {
    let encoded = serde_json::to_string(entry)?;
    store.set(key, &encoded);
    debug!("event=handoff_stage key={key} id={}", entry.id());
    Ok(())
}

/// Builds the destination URL carrying the id query parameter.
pub fn detail_url(page: &str, id: EntryId) -> String {
    format!("{page}?id={id}")
}

/// Extracts the `id` query parameter from a query string or full URL.
///
/// The value must be a bare base-10 integer; anything else (absent key,
/// surrounding garbage, sign, overflow) reads as "no id".
pub fn parse_id_param(query: &str) -> Option<EntryId> {
    let query = query.rsplit('?').next().unwrap_or(query);
    let value = query
        .split('&')
        .filter_map(|pair| pair.strip_prefix("id="))
        .next()?;
    // `parse` alone would admit a leading `+`; the contract is digits only.
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse::<EntryId>().ok()
}

/// Resolves the destination record for `requested`.
///
/// Read order: verified staged record, then fallback catalog, then
/// not-found. A staged record with the wrong id and malformed storage both
/// degrade silently to the next path; neither is ever rendered.
pub fn resolve<E: CatalogEntry>(
    store: &dyn KeyValueStore,
    key: &str,
    requested: Option<EntryId>,
    fallback: Option<&CatalogStore<E>>,
) -> Result<Resolved<E>, DetailError> {
    let Some(id) = requested else {
        warn!("event=handoff_resolve key={key} status=missing_id");
        return Err(DetailError::NotFound { requested: None });
    };

    if let Some(raw) = store.get(key) {
        match serde_json::from_str::<E>(&raw) {
            Ok(entry) if entry.id() == id => {
                debug!("event=handoff_resolve key={key} id={id} source=handoff");
                return Ok(Resolved {
                    entry,
                    source: ResolvedFrom::Handoff,
                });
            }
            Ok(entry) => {
                warn!(
                    "event=handoff_resolve key={key} id={id} status=mismatch staged={}",
                    entry.id()
                );
            }
            Err(err) => {
                warn!("event=handoff_resolve key={key} id={id} status=malformed error={err}");
            }
        }
    }

    if let Some(catalog) = fallback {
        if let Some(entry) = catalog.by_id(id) {
            debug!("event=handoff_resolve key={key} id={id} source=fallback");
            return Ok(Resolved {
                entry: entry.clone(),
                source: ResolvedFrom::Fallback,
            });
        }
    }

    warn!("event=handoff_resolve key={key} id={id} status=not_found");
    Err(DetailError::NotFound {
        requested: Some(id),
    })
}
