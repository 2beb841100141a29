//! Rendering engine for a static portfolio site.
//! This crate is the single source of truth for catalog, filter, render and
//! handoff invariants; hosts only adapt the seams.

pub mod catalog;
pub mod contact;
pub mod filter;
pub mod handoff;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod resume;
pub mod storage;
pub mod theme;

pub use catalog::store::{CatalogError, CatalogStore};
pub use contact::form::{
    ContactForm, ContactService, ContactTransport, FieldIssue, Notice, NoticeKind,
    SimulatedTransport, SubmitOutcome,
};
pub use filter::registry::{FilterRegistry, FilterRegistryError, FilterRule, FilterSpec};
pub use handoff::channel::{
    parse_id_param, resolve, stage, DetailError, Navigator, RecordingNavigator, Resolved,
    ResolvedFrom, BLOG_HANDOFF_KEY, PROJECT_HANDOFF_KEY,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entry::{BlogPost, CatalogEntry, EntryId, EntryValidationError, Project};
pub use page::blog_roll::BlogRoll;
pub use page::detail::{DetailOutcome, DetailPage};
pub use page::gallery::GalleryPage;
pub use page::ActivationError;
pub use render::view::{
    AnimationObserver, BufferMount, FadeInTracker, MountPoint, NullObserver, RenderSource,
    ViewRenderer,
};
pub use storage::{KeyValueStore, MemoryStore};
pub use theme::Theme;

/// Returns the engine crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
