use crate::core::{Point, PointStore, PostPoint};
use crate::post::{PostId, TagFrequencyTable};
use crate::scoring::score_post;
use crate::tests::{post_with_text, store_of, tag_table};

use approx::assert_relative_eq;

#[test]
fn insert_replaces_and_returns_previous() {
    let mut store = PointStore::new();
    let first = PostPoint::new(Point::new(1.0, 2.0), false);
    let second = PostPoint::new(Point::new(3.0, 4.0), true);

    assert_eq!(store.insert(PostId(1), first), None);
    assert_eq!(store.insert(PostId(1), second), Some(first));
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(PostId(1)), Some(&second));
}

#[test]
fn ids_iterate_in_ascending_order() {
    let store = store_of(&[(9, 0.0, 0.0), (2, 1.0, 1.0), (5, 2.0, 2.0)]);
    let ids: Vec<PostId> = store.ids().collect();
    assert_eq!(ids, vec![PostId(2), PostId(5), PostId(9)]);
}

#[test]
fn centroid_means_coordinates() {
    let store = store_of(&[(1, 0.0, 0.0), (2, 4.0, 6.0)]);
    let centroid = store.centroid().unwrap();
    assert_relative_eq!(centroid.x, 2.0);
    assert_relative_eq!(centroid.y, 3.0);

    assert_eq!(PointStore::new().centroid(), None);
}

#[test]
fn rescore_replaces_the_single_entry() {
    let tags = tag_table();
    let mut post = post_with_text(1, &"a".repeat(200));
    post.upvotes = 4;

    let mut store = PointStore::new();
    let other = PostPoint::new(Point::new(-1.0, -1.0), false);
    store.insert(PostId(2), other);

    let scored = store.rescore(&post, &tags).unwrap();
    assert_eq!(store.get(PostId(1)), Some(&scored));

    // More upvotes shift the engagement axis by half the difference.
    post.upvotes = 10;
    let rescored = store.rescore(&post, &tags).unwrap();
    assert_relative_eq!(rescored.point.x, scored.point.x + 3.0);
    assert_relative_eq!(rescored.point.y, scored.point.y);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(PostId(2)), Some(&other), "unrelated entries stay put");
}

#[test]
fn failed_rescore_leaves_previous_entry() {
    let tags = tag_table();
    let mut post = post_with_text(1, &"a".repeat(200));

    let mut store = PointStore::new();
    let before = store.rescore(&post, &tags).unwrap();

    post.tags = vec!["unrecorded".to_string()];
    assert!(store.rescore(&post, &tags).is_err());
    assert_eq!(
        store.get(PostId(1)),
        Some(&before),
        "a failed rescore must not touch the stored point"
    );
}

#[test]
fn stats_cover_every_stored_point() {
    let store = store_of(&[(1, -2.0, 5.0), (2, 7.0, -1.0), (3, 3.0, 3.0)]);
    let stats = store.stats();

    assert_eq!(stats.count, 3);
    assert_eq!(stats.long_form, 0);
    assert_relative_eq!(stats.x_min, -2.0);
    assert_relative_eq!(stats.x_max, 7.0);
    assert_relative_eq!(stats.y_min, -1.0);
    assert_relative_eq!(stats.y_max, 5.0);
    assert_relative_eq!(stats.x_mean, 8.0 / 3.0);
    assert_relative_eq!(stats.y_mean, 7.0 / 3.0);

    for (_, entry) in store.iter() {
        assert!(entry.point.x >= stats.x_min && entry.point.x <= stats.x_max);
        assert!(entry.point.y >= stats.y_min && entry.point.y <= stats.y_max);
    }

    let rendered = stats.to_string();
    assert!(rendered.contains("Posts: 3"), "unexpected stats rendering: {rendered}");
}

#[test]
fn stats_count_long_form_entries() {
    let mut store = PointStore::new();
    store.insert(PostId(1), PostPoint::new(Point::new(0.0, 0.0), true));
    store.insert(PostId(2), PostPoint::new(Point::new(1.0, 1.0), false));
    store.insert(PostId(3), PostPoint::new(Point::new(2.0, 2.0), true));

    assert_eq!(store.stats().long_form, 2);
    assert_eq!(PointStore::new().stats().count, 0);
}

#[test]
fn serde_round_trip_stringifies_ids() {
    let store = store_of(&[(7, 1.5, -2.5), (11, 0.0, 3.0)]);

    let json = serde_json::to_string(&store).unwrap();
    assert!(json.contains("\"7\""), "map keys must stringify: {json}");
    assert!(json.contains("\"11\""));

    let decoded: PointStore = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, store);
}

#[test]
fn remove_drops_the_entry() {
    let mut store = store_of(&[(1, 0.0, 0.0), (2, 1.0, 1.0)]);
    assert!(store.remove(PostId(1)).is_some());
    assert!(!store.contains(PostId(1)));
    assert_eq!(store.remove(PostId(1)), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn post_id_round_trips_through_strings() {
    let id = PostId(42);
    assert_eq!(id.to_string(), "42");
    assert_eq!("42".parse::<PostId>().unwrap(), id);
    assert!("not-a-number".parse::<PostId>().is_err());
}

#[test]
fn tag_table_mutators_round_trip() {
    let mut table = TagFrequencyTable::new();
    table.record("rust");
    table.record("rust");
    table.record_many("news", 3);
    assert_eq!(table.count("rust"), Some(2));
    assert_eq!(table.total_uses(), 5);

    table.remove("rust", 1);
    assert_eq!(table.count("rust"), Some(1));

    // Removing the remaining uses drops the tag entirely.
    table.remove("rust", 5);
    assert_eq!(table.count("rust"), None);
    assert_eq!(table.total_uses(), 3);
    assert_eq!(table.len(), 1);

    let rebuilt: TagFrequencyTable = table.iter().map(|(t, c)| (t.to_string(), c)).collect();
    assert_eq!(rebuilt, table);

    // Scoring treats an exhausted tag the same as an unrecorded one.
    let mut post = post_with_text(1, "text");
    post.tags = vec!["rust".to_string()];
    assert!(score_post(&post, &table).is_err());
}
