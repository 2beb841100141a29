//! Page controllers.
//!
//! # Responsibility
//! - Orchestrate catalog, filters, renderer and handoff per page.
//! - Keep every controller constructible from explicit dependencies, with
//!   no ambient state.

use crate::handoff::channel::StageError;
use crate::model::entry::EntryId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod blog_roll;
pub mod detail;
pub mod gallery;

/// Card-activation failure on a list page.
#[derive(Debug)]
pub enum ActivationError {
    /// The activated id is not in the catalog. Activation ids come from
    /// freshly rendered cards, so this indicates a stale caller.
    UnknownEntry(EntryId),
    /// Staging into ephemeral storage failed.
    Stage(StageError),
}

impl Display for ActivationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownEntry(id) => write!(f, "no catalog entry with id {id}"),
            Self::Stage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ActivationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownEntry(_) => None,
            Self::Stage(err) => Some(err),
        }
    }
}

impl From<StageError> for ActivationError {
    fn from(value: StageError) -> Self {
        Self::Stage(value)
    }
}
