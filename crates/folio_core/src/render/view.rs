//! View renderer and host seams.
//!
//! # Responsibility
//! - Install list, detail and error markup into a mount point.
//! - Serve repeat list renders from the filter-keyed cache.
//! - Notify the animation collaborator after every install.
//!
//! # Invariants
//! - Display units are installed in input order.
//! - A cached render is byte-identical to the computed one it memoized.
//! - The observer is notified on every render call, cached or not, and must
//!   tolerate empty content.

use crate::model::entry::CatalogEntry;
use crate::render::cache::RenderCache;
use log::debug;

/// Content region of the host page.
///
/// The engine never touches a real document; embedders adapt their DOM
/// container to this surface.
pub trait MountPoint {
    /// Replaces the region's entire content.
    fn replace_content(&mut self, markup: &str);
    /// Returns the region's current content.
    fn content(&self) -> &str;
}

/// In-memory mount used by tests and the CLI demo.
#[derive(Debug, Clone, Default)]
pub struct BufferMount {
    content: String,
}

impl BufferMount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MountPoint for BufferMount {
    fn replace_content(&mut self, markup: &str) {
        self.content.clear();
        self.content.push_str(markup);
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// Entrance-animation collaborator.
///
/// Called after every content install with the full mount content; an empty
/// or unit-free content is normal and must not error.
pub trait AnimationObserver {
    fn observe_new_elements(&mut self, content: &str);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl AnimationObserver for NullObserver {
    fn observe_new_elements(&mut self, _content: &str) {}
}

/// Counts fade-in display units awaiting their entrance animation.
///
/// Starts unarmed: the host arms it once its own observation machinery is
/// ready (the page defers that setup past first paint), and unarmed calls
/// are no-ops.
#[derive(Debug, Clone, Default)]
pub struct FadeInTracker {
    armed: bool,
    observed: usize,
}

impl FadeInTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables observation; called once host-side setup has run.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Total fade-in units registered since arming.
    pub fn observed(&self) -> usize {
        self.observed
    }
}

impl AnimationObserver for FadeInTracker {
    fn observe_new_elements(&mut self, content: &str) {
        if !self.armed {
            return;
        }
        self.observed += content.matches("fade-in").count();
    }
}

/// Where a list render came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderSource {
    /// Markup was built this call and memoized.
    Computed,
    /// Markup was served from the filter-keyed cache.
    Cached,
}

impl RenderSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Computed => "fresh",
            Self::Cached => "cache",
        }
    }
}

/// Installs markup into mounts, memoizing list renders per filter key.
#[derive(Debug, Default)]
pub struct ViewRenderer {
    cache: RenderCache,
}

impl ViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders one display unit per entry, in input order.
    ///
    /// Repeat calls for the same key are served from the cache and produce
    /// byte-identical content. The observer is notified either way.
    pub fn render_list<E, F>(
        &mut self,
        key: &str,
        entries: &[&E],
        card: F,
        mount: &mut dyn MountPoint,
        observer: &mut dyn AnimationObserver,
    ) -> RenderSource
    where
        E: CatalogEntry,
        F: Fn(&E) -> String,
    {
        let source = self.install_cached(
            key,
            || {
                let mut markup = String::new();
                for entry in entries.iter().copied() {
                    markup.push_str(&card(entry));
                }
                markup
            },
            mount,
            observer,
        );
        debug!(
            "event=list_render key={key} source={} units={}",
            source.as_str(),
            entries.len()
        );
        source
    }

    /// Installs a fixed view (e.g. an empty-state message) under a filter
    /// key, with the same memoization and observer contract as a list
    /// render.
    pub fn render_empty_state(
        &mut self,
        key: &str,
        view: &str,
        mount: &mut dyn MountPoint,
        observer: &mut dyn AnimationObserver,
    ) -> RenderSource {
        self.install_cached(key, || view.to_string(), mount, observer)
    }

    fn install_cached(
        &mut self,
        key: &str,
        build: impl FnOnce() -> String,
        mount: &mut dyn MountPoint,
        observer: &mut dyn AnimationObserver,
    ) -> RenderSource {
        let source = match self.cache.get(key) {
            Some(cached) => {
                let markup = cached.to_string();
                mount.replace_content(&markup);
                RenderSource::Cached
            }
            None => {
                let markup = build();
                mount.replace_content(&markup);
                self.cache.put(key, &markup);
                RenderSource::Computed
            }
        };
        observer.observe_new_elements(mount.content());
        source
    }

    /// Installs a single-entity detail view.
    pub fn render_detail(&self, markup: &str, mount: &mut dyn MountPoint) {
        mount.replace_content(markup);
    }

    /// Installs a recoverable error view.
    pub fn render_error(&self, markup: &str, mount: &mut dyn MountPoint) {
        mount.replace_content(markup);
    }

    /// Read-only view of the memo, for diagnostics.
    pub fn cache(&self) -> &RenderCache {
        &self.cache
    }
}
