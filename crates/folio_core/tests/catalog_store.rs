use folio_core::catalog::seed::{sample_blogs, sample_projects};
use folio_core::{CatalogEntry, CatalogError, CatalogStore, EntryValidationError, Project};

#[test]
fn by_id_resolves_every_seeded_entry_and_nothing_else() {
    let store = CatalogStore::new(sample_projects()).expect("seed projects are valid");

    for entry in store.all() {
        let found = store.by_id(entry.id()).expect("id should resolve");
        assert_eq!(found, entry);
    }
    assert!(store.by_id(999).is_none());
    assert!(store.by_id(0).is_none());
}

#[test]
fn all_preserves_authored_order() {
    let store = CatalogStore::new(sample_projects()).expect("seed projects are valid");
    let ids: Vec<u32> = store.all().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn featured_returns_exact_subset_in_original_order() {
    let store = CatalogStore::new(sample_projects()).expect("seed projects are valid");
    let featured: Vec<u32> = store.featured().map(|p| p.id()).collect();
    assert_eq!(featured, vec![1, 2, 5]);

    let blogs = CatalogStore::new(sample_blogs()).expect("seed blogs are valid");
    let featured_blogs: Vec<u32> = blogs.featured().map(|b| b.id()).collect();
    assert_eq!(featured_blogs, vec![1, 2]);
}

#[test]
fn duplicate_ids_are_rejected_at_construction() {
    let mut projects = sample_projects();
    projects[3].id = 1;
    let err = CatalogStore::new(projects).expect_err("duplicate id must fail");
    assert_eq!(err, CatalogError::DuplicateId(1));
}

#[test]
fn invalid_records_are_rejected_at_construction() {
    let mut projects = sample_projects();
    projects[0].title = "  ".to_string();
    let err = CatalogStore::new(projects).expect_err("blank title must fail");
    assert!(matches!(
        err,
        CatalogError::Invalid(EntryValidationError::EmptyTitle(1))
    ));
}

#[test]
fn empty_catalog_is_a_valid_state() {
    let store: CatalogStore<Project> =
        CatalogStore::new(Vec::new()).expect("empty catalog is not an error");
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.by_id(1).is_none());
    assert_eq!(store.featured().count(), 0);
}
