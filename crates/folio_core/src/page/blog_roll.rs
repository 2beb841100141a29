//! Home-page blog teaser rail.
//!
//! # Responsibility
//! - Render the first featured posts as compact cards on the home page.
//! - Hand an activated post to the blog detail page.
//!
//! # Invariants
//! - Teaser selection is the first [`TEASER_LIMIT`] featured posts in
//!   catalog order.
//! - An empty selection renders the "no posts yet" view, never a blank
//!   region.

use crate::catalog::store::CatalogStore;
use crate::handoff::channel::{
    detail_url, stage, Navigator, BLOG_DETAIL_PAGE, BLOG_HANDOFF_KEY,
};
use crate::model::entry::{BlogPost, EntryId};
use crate::page::ActivationError;
use crate::render::markup::{blog_card, no_entries_view};
use crate::render::view::{AnimationObserver, MountPoint, RenderSource, ViewRenderer};
use crate::storage::KeyValueStore;
use log::{info, warn};
use std::sync::Arc;

/// Featured posts shown on the home page.
pub const TEASER_LIMIT: usize = 3;

const TEASER_RENDER_KEY: &str = "featured-teaser";

/// Home-page teaser rail controller.
pub struct BlogRoll {
    catalog: Arc<CatalogStore<BlogPost>>,
    renderer: ViewRenderer,
}

impl BlogRoll {
    pub fn new(catalog: Arc<CatalogStore<BlogPost>>) -> Self {
        Self {
            catalog,
            renderer: ViewRenderer::new(),
        }
    }

    /// Posts the rail would display, in catalog order.
    pub fn teasers(&self) -> Vec<&BlogPost> {
        self.catalog.featured().take(TEASER_LIMIT).collect()
    }

    /// Renders the teaser rail into the mount.
    pub fn show(
        &mut self,
        mount: &mut dyn MountPoint,
        observer: &mut dyn AnimationObserver,
    ) -> RenderSource {
        let teasers: Vec<&BlogPost> = self.catalog.featured().take(TEASER_LIMIT).collect();
        if teasers.is_empty() {
            let view = no_entries_view(
                "No Blog Posts Yet",
                "Check back soon for new articles and tutorials!",
            );
            return self
                .renderer
                .render_empty_state(TEASER_RENDER_KEY, &view, mount, observer);
        }

        self.renderer
            .render_list(TEASER_RENDER_KEY, &teasers, blog_card, mount, observer)
    }

    /// Stages the activated post and navigates to its detail page.
    pub fn activate(
        &self,
        id: EntryId,
        store: &mut dyn KeyValueStore,
        navigator: &mut dyn Navigator,
    ) -> Result<(), ActivationError> {
        let Some(post) = self.catalog.by_id(id) else {
            warn!("event=card_activate page=blog_roll id={id} status=unknown");
            return Err(ActivationError::UnknownEntry(id));
        };
        stage(store, BLOG_HANDOFF_KEY, post)?;
        navigator.navigate(&detail_url(BLOG_DETAIL_PAGE, id));
        info!("event=card_activate page=blog_roll id={id}");
        Ok(())
    }
}
