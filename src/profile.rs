//! User point aggregation: reduces a user's recent interaction history to a
//! position in the same space the posts occupy.

use log::{debug, trace, warn};

use crate::core::{Point, PointStore};
use crate::error::ProfileError;
use crate::post::PostId;

/// Aggregates a user's recently-upvoted post ids into a point.
///
/// Three-tier fallback:
/// 1. Non-empty history: centroid over the history entries' points. Every
///    id must be present in the store, duplicated ids weigh in once per
///    occurrence.
/// 2. Empty history, non-empty store: centroid over the whole store, so a
///    new user starts from the population average.
/// 3. Empty history and empty store: the origin.
///
/// # Examples
///
/// ```
/// use postspace::core::PointStore;
/// use postspace::profile::user_point;
///
/// let empty = PointStore::new();
/// let p = user_point(&[], &empty).unwrap();
/// assert_eq!((p.x, p.y), (0.0, 0.0));
/// ```
pub fn user_point(history: &[PostId], store: &PointStore) -> Result<Point, ProfileError> {
    trace!(
        "Aggregating user point from {} history entries over {} stored points",
        history.len(),
        store.len()
    );

    if !history.is_empty() {
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for &id in history {
            let entry = store.get(id).ok_or(ProfileError::MissingPoint(id))?;
            sum_x += entry.point.x;
            sum_y += entry.point.y;
        }
        let n = history.len() as f64;
        let point = Point::new(sum_x / n, sum_y / n);
        debug!(
            "History centroid over {} entries: ({:.4}, {:.4})",
            history.len(),
            point.x,
            point.y
        );
        return Ok(point);
    }

    match store.centroid() {
        Some(point) => {
            warn!(
                "Empty interaction history, falling back to population centroid ({:.4}, {:.4}) over {} posts",
                point.x,
                point.y,
                store.len()
            );
            Ok(point)
        }
        None => {
            warn!("Empty interaction history and empty store, using the origin");
            Ok(Point::ORIGIN)
        }
    }
}
