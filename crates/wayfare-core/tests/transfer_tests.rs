//! Export/import integration tests.

mod common;

use common::fixtures::{marker_input, visit_with_notes};
use wayfare_core::{export_journal, export_to_string, parse_import, MarkerStore};

#[test]
fn export_metadata_counts_markers_and_visits() {
    let mut store = MarkerStore::in_memory();
    let a = store
        .create(marker_input("A", 0.0, 0.0, &["food"], "2024-01-01"))
        .unwrap();
    store
        .add_visit(&a.id, visit_with_notes("2024-02-01", "again"))
        .unwrap();
    store
        .create(marker_input("B", 1.0, 1.0, &[], "2024-03-01"))
        .unwrap();

    let export = export_journal(store.list(), Some("🧭"));
    assert_eq!(export.version, "1.0.0");
    assert_eq!(export.metadata.total_markers, 2);
    assert_eq!(export.metadata.total_visits, 3);
    assert_eq!(export.user_avatar, Some("🧭"));
}

#[test]
fn export_import_round_trip_is_field_exact() {
    let mut store = MarkerStore::in_memory();
    let a = store
        .create(marker_input(
            "Tokyo Tower",
            35.6586,
            139.7454,
            &["sightseeing", "photography"],
            "2024-05-01",
        ))
        .unwrap();
    store
        .add_visit(&a.id, visit_with_notes("2024-06-01", "night view"))
        .unwrap();
    store
        .create(marker_input("Harbor", 1.5, 2.5, &[], "2023-12-24"))
        .unwrap();

    let json = export_to_string(&export_journal(store.list(), Some("🧭"))).unwrap();
    let import = parse_import(&json).unwrap();

    assert_eq!(import.markers, store.list());
    assert_eq!(import.user_avatar.as_deref(), Some("🧭"));

    // Applying to an empty store reproduces the collection exactly.
    let mut restored = MarkerStore::in_memory();
    restored.replace_all(import.markers).unwrap();
    assert_eq!(restored.list(), store.list());
}

#[test]
fn import_overwrites_existing_collection() {
    let mut store = MarkerStore::in_memory();
    let old = store
        .create(marker_input("Old", 0.0, 0.0, &[], "2020-01-01"))
        .unwrap();

    let incoming = r#"{
        "version": "1.0.0",
        "markers": [
            {"id": "m1", "name": "New A", "latitude": 1.0, "longitude": 1.0,
             "visits": [{"id": "v1", "visitDate": "2024-01-01", "createdAt": "2024-01-01T00:00:00Z"}],
             "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"},
            {"id": "m2", "name": "New B", "latitude": 2.0, "longitude": 2.0,
             "visits": [], "createdAt": "2024-01-02T00:00:00Z", "updatedAt": "2024-01-02T00:00:00Z"}
        ]
    }"#;

    let import = parse_import(incoming).unwrap();
    let count = store.replace_all(import.markers).unwrap();

    assert_eq!(count, 2);
    assert!(store.get(&old.id).is_none());
    assert_eq!(store.get("m1").unwrap().name, "New A");
}

#[test]
fn import_accepts_legacy_records() {
    let incoming = r#"{
        "markers": [
            {"id": 1700000000000, "name": "Pre-redesign", "latitude": 0.0, "longitude": 0.0,
             "visitDate": "2022-08-15", "notes": "old entry",
             "createdAt": "2022-08-15T00:00:00Z"}
        ]
    }"#;

    let import = parse_import(incoming).unwrap();
    assert_eq!(import.markers.len(), 1);
    let marker = &import.markers[0];
    assert_eq!(marker.id, "1700000000000");
    assert_eq!(marker.visits.len(), 1);
    assert_eq!(marker.visits[0].notes, "old entry");
}
