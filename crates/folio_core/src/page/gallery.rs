//! Project gallery controller.
//!
//! # Responsibility
//! - Render the filtered project list and the filter button bar.
//! - Hand an activated project to the detail page via the handoff channel.
//!
//! # Invariants
//! - Selecting the same filter key twice yields byte-identical content.
//! - Unknown filter keys degrade to `all`; the gallery always renders.

use crate::catalog::store::CatalogStore;
use crate::filter::registry::{FilterRegistry, FILTER_KEY_ALL};
use crate::handoff::channel::{
    detail_url, stage, Navigator, PROJECT_DETAIL_PAGE, PROJECT_HANDOFF_KEY,
};
use crate::model::entry::{EntryId, Project};
use crate::page::ActivationError;
use crate::render::markup::{self, no_entries_view};
use crate::render::view::{AnimationObserver, MountPoint, RenderSource, ViewRenderer};
use crate::storage::KeyValueStore;
use log::{info, warn};
use std::sync::Arc;

/// Project list page controller.
pub struct GalleryPage {
    catalog: Arc<CatalogStore<Project>>,
    filters: FilterRegistry,
    renderer: ViewRenderer,
    current_filter: String,
}

impl GalleryPage {
    /// Wires the gallery from its explicit dependencies. Starts on `all`.
    pub fn new(catalog: Arc<CatalogStore<Project>>, filters: FilterRegistry) -> Self {
        Self {
            catalog,
            filters,
            renderer: ViewRenderer::new(),
            current_filter: FILTER_KEY_ALL.to_string(),
        }
    }

    /// Gallery over the default filter set.
    pub fn with_default_filters(catalog: Arc<CatalogStore<Project>>) -> Self {
        Self::new(catalog, FilterRegistry::project_defaults())
    }

    pub fn current_filter(&self) -> &str {
        &self.current_filter
    }

    /// Renders the filter button bar with the active key marked.
    pub fn filter_bar(&self) -> String {
        markup::filter_bar(self.filters.specs(), &self.current_filter)
    }

    /// Renders the current filter's card list into the mount.
    pub fn show(
        &mut self,
        mount: &mut dyn MountPoint,
        observer: &mut dyn AnimationObserver,
    ) -> RenderSource {
        let rule = self.filters.rule_for(&self.current_filter).clone();
        let filtered: Vec<&Project> = self
            .catalog
            .all()
            .iter()
            .filter(|project| rule.matches(*project))
            .collect();

        if filtered.is_empty() {
            let view = no_entries_view("No Projects Yet", "Check back soon for new work!");
            return self
                .renderer
                .render_empty_state(&self.current_filter, &view, mount, observer);
        }

        self.renderer.render_list(
            &self.current_filter,
            &filtered,
            markup::project_card,
            mount,
            observer,
        )
    }

    /// Switches the active filter and re-renders.
    ///
    /// Unknown keys are kept as-is but resolve to the `all` rule, so the
    /// page stays renderable for any key the host hands us.
    pub fn select_filter(
        &mut self,
        key: &str,
        mount: &mut dyn MountPoint,
        observer: &mut dyn AnimationObserver,
    ) -> RenderSource {
        self.current_filter = key.trim().to_string();
        info!("event=filter_select page=gallery key={}", self.current_filter);
        self.show(mount, observer)
    }

    /// Stages the activated project and navigates to its detail page.
    pub fn activate(
        &self,
        id: EntryId,
        store: &mut dyn KeyValueStore,
        navigator: &mut dyn Navigator,
    ) -> Result<(), ActivationError> {
        let Some(project) = self.catalog.by_id(id) else {
            warn!("event=card_activate page=gallery id={id} status=unknown");
            return Err(ActivationError::UnknownEntry(id));
        };
        stage(store, PROJECT_HANDOFF_KEY, project)?;
        navigator.navigate(&detail_url(PROJECT_DETAIL_PAGE, id));
        info!("event=card_activate page=gallery id={id}");
        Ok(())
    }
}
