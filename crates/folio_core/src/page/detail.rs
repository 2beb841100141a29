//! Detail page controllers.
//!
//! # Responsibility
//! - Resolve the handed-off record on the destination page and render its
//!   full detail view.
//! - Render the recoverable error view for every failure path.
//!
//! # Invariants
//! - A resolution failure still installs a view with working navigation
//!   actions; the mount is never left blank.
//! - Project details have no fallback catalog; blog details consult the
//!   injected fallback store.

use crate::catalog::store::CatalogStore;
use crate::handoff::channel::{
    parse_id_param, resolve, DetailError, ResolvedFrom, BLOG_HANDOFF_KEY, PROJECT_HANDOFF_KEY,
};
use crate::model::entry::{BlogPost, CatalogEntry, EntryId, Project};
use crate::render::markup::{self, error_view, ErrorLinks};
use crate::render::view::{MountPoint, ViewRenderer};
use crate::storage::KeyValueStore;
use log::info;
use std::sync::Arc;

const PROJECT_TITLE_SUFFIX: &str = "John Carter Portfolio";
const BLOG_TITLE_SUFFIX: &str = "John Carter's Blog";

/// Result of a detail page load. Both variants leave a rendered mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Rendered {
        id: EntryId,
        /// Host page `<title>` replacement.
        page_title: String,
        source: ResolvedFrom,
    },
    Failed(DetailError),
}

impl DetailOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Destination controller for one record kind.
pub struct DetailPage<E: CatalogEntry> {
    stage_key: &'static str,
    fallback: Option<Arc<CatalogStore<E>>>,
    detail_markup: fn(&E) -> String,
    links: ErrorLinks,
    not_found_message: &'static str,
    title_suffix: &'static str,
    renderer: ViewRenderer,
}

impl DetailPage<Project> {
    /// Project detail page. No fallback catalog exists for projects: the
    /// staged record is the only source.
    pub fn projects() -> Self {
        Self {
            stage_key: PROJECT_HANDOFF_KEY,
            fallback: None,
            detail_markup: markup::project_detail,
            links: ErrorLinks::projects(),
            not_found_message: "Project not found. Please select a project from the portfolio page.",
            title_suffix: PROJECT_TITLE_SUFFIX,
            renderer: ViewRenderer::new(),
        }
    }
}

impl DetailPage<BlogPost> {
    /// Blog detail page with the process-wide fallback catalog.
    pub fn blogs(fallback: Arc<CatalogStore<BlogPost>>) -> Self {
        Self {
            stage_key: BLOG_HANDOFF_KEY,
            fallback: Some(fallback),
            detail_markup: markup::blog_detail,
            links: ErrorLinks::blogs(),
            not_found_message: "Blog post not found. Please select a blog from the main page.",
            title_suffix: BLOG_TITLE_SUFFIX,
            renderer: ViewRenderer::new(),
        }
    }
}

impl<E: CatalogEntry> DetailPage<E> {
    /// Loads the page for `query` (the destination URL or query string) and
    /// renders either the detail view or the error view into the mount.
    pub fn load(
        &self,
        query: &str,
        store: &dyn KeyValueStore,
        mount: &mut dyn MountPoint,
    ) -> DetailOutcome {
        let requested = parse_id_param(query);
        match resolve(store, self.stage_key, requested, self.fallback.as_deref()) {
            Ok(resolved) => {
                let view = (self.detail_markup)(&resolved.entry);
                self.renderer.render_detail(&view, mount);
                info!(
                    "event=detail_render key={} id={} source={:?}",
                    self.stage_key,
                    resolved.entry.id(),
                    resolved.source
                );
                DetailOutcome::Rendered {
                    id: resolved.entry.id(),
                    page_title: format!("{} - {}", resolved.entry.title(), self.title_suffix),
                    source: resolved.source,
                }
            }
            Err(err) => {
                let view = error_view(&self.links, self.not_found_message);
                self.renderer.render_error(&view, mount);
                DetailOutcome::Failed(err)
            }
        }
    }
}
