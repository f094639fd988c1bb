//! Validates preference persistence, the spin gate and outfit collections

use elanvir::catalog::catalog;
use elanvir::curation::RandomSelector;
use elanvir::curation::outfits::{Outfit, load_outfits, reorder, save_outfit};
use elanvir::curation::profile::StyleProfile;
use elanvir::curation::spin::{REWARDS, SpinTracker};
use elanvir::io::store::{JsonFileStore, MemoryStore, PreferenceStore};

#[test]
fn test_memory_store_round_trip() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("missing"), None);

    store.set("greeting", "hello".to_string()).expect("set");
    assert_eq!(store.get("greeting").as_deref(), Some("hello"));
    assert_eq!(store.len(), 1);

    store.remove("greeting").expect("remove");
    assert_eq!(store.get("greeting"), None);
}

#[test]
fn test_json_helpers_round_trip_typed_values() {
    let mut store = MemoryStore::new();
    store
        .set_json("counts", &vec![1u32, 2, 3])
        .expect("serialize");

    let loaded: Option<Vec<u32>> = store.get_json("counts").expect("parse");
    assert_eq!(loaded, Some(vec![1, 2, 3]));

    let absent: Option<Vec<u32>> = store.get_json("missing").expect("no blob");
    assert_eq!(absent, None);
}

#[test]
fn test_json_helper_surfaces_parse_failure() {
    let mut store = MemoryStore::new();
    store.set("broken", "not json".to_string()).expect("set");

    let result: elanvir::Result<Option<Vec<u32>>> = store.get_json("broken");
    assert!(result.is_err());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs.json");

    {
        let mut store = JsonFileStore::open(&path).expect("open empty");
        store
            .set("elanvir_daily_spin", "Wed Aug 05 2026".to_string())
            .expect("set");
    }

    let reopened = JsonFileStore::open(&path).expect("reopen");
    assert_eq!(
        reopened.get("elanvir_daily_spin").as_deref(),
        Some("Wed Aug 05 2026")
    );
}

#[test]
fn test_file_store_missing_file_opens_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = JsonFileStore::open(dir.path().join("absent.json")).expect("open");
    assert_eq!(store.get("anything"), None);
}

#[test]
fn test_file_store_corrupt_file_errors() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("prefs.json");
    std::fs::write(&path, "{ definitely broken").expect("write");

    assert!(JsonFileStore::open(&path).is_err());
}

#[test]
fn test_profile_persists_documented_json_shape() {
    let mut store = MemoryStore::new();
    let profile = StyleProfile::from_answers(&[(0, "luxurious")], "2026-08-06T09:30:00Z");
    profile.save(&mut store).expect("save");

    let raw = store.get("elanvir_style_profile").expect("stored blob");
    assert!(raw.contains("\"preferences\""));
    assert!(raw.contains("\"completedAt\":\"2026-08-06T09:30:00Z\""));
    assert!(raw.contains("\"luxury\""));

    let loaded = StyleProfile::load(&store).expect("parse").expect("present");
    assert_eq!(loaded, profile);
}

#[test]
fn test_spin_is_gated_to_one_per_day() {
    let mut store = MemoryStore::new();
    let mut selector = RandomSelector::new(42);
    let mut tracker = SpinTracker::new(&mut store);

    let first = tracker.spin(&mut selector, "Thu Aug 06 2026").expect("spin");
    assert!(first.is_some());
    assert!(REWARDS.contains(&first.expect("reward")));
    assert_eq!(
        tracker.last_spin_date().as_deref(),
        Some("Thu Aug 06 2026")
    );

    let second = tracker.spin(&mut selector, "Thu Aug 06 2026").expect("spin");
    assert!(second.is_none());
    assert_eq!(
        tracker.last_spin_date().as_deref(),
        Some("Thu Aug 06 2026")
    );

    // A new day unlocks the wheel again
    let next_day = tracker.spin(&mut selector, "Fri Aug 07 2026").expect("spin");
    assert!(next_day.is_some());
}

#[test]
fn test_outfit_placement_and_duplicate_rejection() {
    let products = catalog();
    let first = products.first().expect("catalog entry");
    let second = products.get(1).expect("catalog entry");

    let mut outfit = Outfit::new("outfit-1", "My Curated Look", "2026-08-06T00:00:00Z");
    assert!(outfit.add_product(first));
    assert!(outfit.add_product(second));
    assert!(!outfit.add_product(first), "duplicate ids must be rejected");

    let positions: Vec<(f64, f64)> = outfit
        .items
        .iter()
        .map(|item| (item.position.x, item.position.y))
        .collect();
    assert_eq!(positions, vec![(50.0, 50.0), (50.0, 70.0)]);

    let expected_total = first.price + second.price;
    assert!((outfit.total_price() - expected_total).abs() < f64::EPSILON);
}

#[test]
fn test_reorder_matches_splice_semantics() {
    let mut items = vec![1, 2, 3, 4];
    reorder(&mut items, 0, 2);
    assert_eq!(items, vec![2, 3, 1, 4]);

    reorder(&mut items, 3, 0);
    assert_eq!(items, vec![4, 2, 3, 1]);
}

#[test]
fn test_reorder_ignores_out_of_range_indices() {
    let mut items = vec![1, 2, 3];
    reorder(&mut items, 5, 0);
    assert_eq!(items, vec![1, 2, 3]);

    reorder(&mut items, 0, 3);
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn test_saved_outfits_append_and_reload() {
    let mut store = MemoryStore::new();
    assert!(load_outfits(&store).expect("load").is_empty());

    let mut outfit = Outfit::new("outfit-1", "Evening Look", "2026-08-06T00:00:00Z");
    let product = catalog().first().expect("catalog entry");
    outfit.add_product(product);
    save_outfit(&mut store, outfit.clone()).expect("save");

    let another = Outfit::new("outfit-2", "Weekend Look", "2026-08-06T01:00:00Z");
    save_outfit(&mut store, another.clone()).expect("save");

    let loaded = load_outfits(&store).expect("load");
    assert_eq!(loaded, vec![outfit, another]);
}
