//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `folio_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks.

use folio_core::catalog::seed::{sample_blogs, sample_projects};
use folio_core::{
    BlogRoll, BufferMount, CatalogStore, DetailPage, GalleryPage, MemoryStore, MountPoint,
    NullObserver, RecordingNavigator,
};
use std::sync::Arc;

fn main() {
    println!("folio_core version={}", folio_core::core_version());

    let projects = Arc::new(
        CatalogStore::new(sample_projects()).expect("seed projects are valid"),
    );
    let blogs = Arc::new(CatalogStore::new(sample_blogs()).expect("seed blogs are valid"));

    let mut gallery = GalleryPage::with_default_filters(Arc::clone(&projects));
    let mut mount = BufferMount::new();
    let mut observer = NullObserver;

    gallery.show(&mut mount, &mut observer);
    println!(
        "gallery filter=all cards={}",
        mount.content().matches("project-card").count()
    );
    gallery.select_filter("featured", &mut mount, &mut observer);
    println!(
        "gallery filter=featured cards={}",
        mount.content().matches("project-card").count()
    );

    let mut roll = BlogRoll::new(Arc::clone(&blogs));
    roll.show(&mut mount, &mut observer);
    println!(
        "blog teasers cards={}",
        mount.content().matches("blog-card").count()
    );

    // Walk one full handoff: activate a card, then load the detail page the
    // way the destination process would.
    let mut session = MemoryStore::new();
    let mut navigator = RecordingNavigator::new();
    gallery
        .activate(2, &mut session, &mut navigator)
        .expect("seed project 2 exists");
    let url = navigator.last().expect("activation navigated").to_string();

    let detail = DetailPage::projects();
    let outcome = detail.load(&url, &session, &mut mount);
    println!("detail url={url} rendered={}", outcome.is_rendered());
}
