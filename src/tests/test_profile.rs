use crate::core::PointStore;
use crate::error::ProfileError;
use crate::post::PostId;
use crate::profile::user_point;
use crate::tests::store_of;

use approx::assert_relative_eq;

#[test]
fn history_centroid_restricted_to_listed_ids() {
    let store = store_of(&[(1, 0.0, 0.0), (2, 10.0, 4.0), (3, 100.0, 100.0)]);

    let point = user_point(&[PostId(1), PostId(2)], &store).unwrap();
    assert_relative_eq!(point.x, 5.0);
    assert_relative_eq!(point.y, 2.0);
}

#[test]
fn duplicate_history_ids_weigh_per_occurrence() {
    let store = store_of(&[(1, 0.0, 0.0), (2, 9.0, 3.0)]);

    let point = user_point(&[PostId(2), PostId(2), PostId(1)], &store).unwrap();
    assert_relative_eq!(point.x, 6.0);
    assert_relative_eq!(point.y, 2.0);
}

#[test]
fn empty_history_falls_back_to_population_centroid() {
    let store = store_of(&[(1, 2.0, 2.0), (2, 4.0, 8.0)]);

    let point = user_point(&[], &store).unwrap();
    assert_relative_eq!(point.x, 3.0);
    assert_relative_eq!(point.y, 5.0);
}

#[test]
fn empty_history_and_store_fall_back_to_origin() {
    let point = user_point(&[], &PointStore::new()).unwrap();
    assert_relative_eq!(point.x, 0.0);
    assert_relative_eq!(point.y, 0.0);
}

#[test]
fn missing_history_id_fails_aggregation() {
    let store = store_of(&[(1, 0.0, 0.0)]);

    let err = user_point(&[PostId(1), PostId(99)], &store).unwrap_err();
    assert_eq!(err, ProfileError::MissingPoint(PostId(99)));
}
