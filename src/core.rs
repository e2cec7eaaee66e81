//! Point and PointStore: the 2-D content/engagement space shared by both
//! engines.
//!
//! This module provides the core abstractions the scoring and retrieval
//! paths exchange:
//!
//! - Point: an (x, y) pair with Euclidean distance, representing either a
//!   scored post or a synthetic user position.
//! - PostPoint: a post's point together with its long-form classification.
//! - PointStore: the id-to-point map populated by the batch builder and
//!   updated one entry at a time as interactions change posts. It is the
//!   sole shared state both engines read.
//!
//! Design goals:
//! - Plain owned data with no interior locking; callers serialize writes
//!   and hand retrieval a stable snapshot.
//! - Deterministic iteration (ascending id) so repeated scans admit
//!   candidates in a reproducible order.
//! - Replace-on-recompute writes: a failed rescore leaves the previous
//!   entry untouched.
//!
//! # Examples
//!
//! Insert two points and take their centroid:
//!
//! ```
//! use postspace::core::{Point, PointStore, PostPoint};
//! use postspace::post::PostId;
//!
//! let mut store = PointStore::new();
//! store.insert(PostId(1), PostPoint::new(Point::new(0.0, 0.0), false));
//! store.insert(PostId(2), PostPoint::new(Point::new(4.0, 6.0), true));
//!
//! let c = store.centroid().unwrap();
//! assert_eq!((c.x, c.y), (2.0, 3.0));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// Add logging
use log::debug;

use crate::error::ScoreError;
use crate::post::{Post, PostId, TagFrequencyTable};
use crate::scoring::score_post;

/// A position in content/engagement space.
///
/// The x axis aggregates engagement signals, the y axis aggregates content
/// signals. Coordinates are deterministic functions of a post's attributes
/// plus the tag table snapshot, so recomputing from identical inputs yields
/// an identical point.
///
/// # Examples
///
/// ```
/// use postspace::core::Point;
///
/// let a = Point::new(1.0, 1.0);
/// let b = Point::new(4.0, 5.0);
/// assert!((a.distance(&b) - 5.0).abs() < 1e-12);
/// assert_eq!(Point::ORIGIN.x, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The fallback position for an empty store and empty history.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A scored post: its point plus the derived long-form flag.
///
/// The flag marks posts whose length sits in (or nearest to) the long ideal
/// band. It is stored as an extension point for downstream consumers and is
/// not read by aggregation or retrieval.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostPoint {
    pub point: Point,
    pub long_form: bool,
}

impl PostPoint {
    #[inline]
    pub fn new(point: Point, long_form: bool) -> Self {
        Self { point, long_form }
    }
}

/// The id-to-point map both engines read.
///
/// Backed by an ordered map so scans are deterministic: iteration always
/// visits entries in ascending id order, which pins down the discovery
/// order of retrieval candidates. Writes replace whole entries; there is no
/// in-place coordinate mutation.
///
/// Serialized as a bare id-to-entry map. JSON stringifies the numeric keys,
/// matching the stringified-key shape plotting consumers expect.
///
/// # Examples
///
/// ```
/// use postspace::core::{Point, PointStore, PostPoint};
/// use postspace::post::PostId;
///
/// let mut store = PointStore::new();
/// store.insert(PostId(3), PostPoint::new(Point::new(1.0, 2.0), false));
/// assert!(store.contains(PostId(3)));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointStore {
    points: BTreeMap<PostId, PostPoint>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the entry for `id`, returning the previous entry
    /// when one existed.
    #[inline]
    pub fn insert(&mut self, id: PostId, entry: PostPoint) -> Option<PostPoint> {
        self.points.insert(id, entry)
    }

    /// Removes the entry for `id`, for the post-deletion path.
    #[inline]
    pub fn remove(&mut self, id: PostId) -> Option<PostPoint> {
        self.points.remove(&id)
    }

    #[inline]
    pub fn get(&self, id: PostId) -> Option<&PostPoint> {
        self.points.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: PostId) -> bool {
        self.points.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates entries in ascending id order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (PostId, &PostPoint)> {
        self.points.iter().map(|(&id, entry)| (id, entry))
    }

    /// Iterates ids in ascending order.
    #[inline]
    pub fn ids(&self) -> impl Iterator<Item = PostId> + '_ {
        self.points.keys().copied()
    }

    /// Arithmetic mean of all stored points, or `None` for an empty store.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for entry in self.points.values() {
            sum_x += entry.point.x;
            sum_y += entry.point.y;
        }
        let n = self.points.len() as f64;
        Some(Point::new(sum_x / n, sum_y / n))
    }

    /// Rescores one post and replaces its entry, the single permitted
    /// scoring side effect. On error the store is left untouched, so a post
    /// keeps its previous point until a clean rescore lands.
    pub fn rescore(
        &mut self,
        post: &Post,
        tags: &TagFrequencyTable,
    ) -> Result<PostPoint, ScoreError> {
        let entry = score_post(post, tags)?;
        let replaced = self.points.insert(post.id, entry);
        debug!(
            "Rescored post {}: ({:.4}, {:.4}), replaced={}",
            post.id,
            entry.point.x,
            entry.point.y,
            replaced.is_some()
        );
        Ok(entry)
    }

    /// Summary statistics over the stored points.
    ///
    /// Returned as a value so plotting consumers read a snapshot instead of
    /// process-wide accumulators. Zeroed for an empty store.
    pub fn stats(&self) -> StoreStats {
        let count = self.points.len();
        if count == 0 {
            return StoreStats::default();
        }

        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        let mut long_form = 0usize;

        for entry in self.points.values() {
            let Point { x, y } = entry.point;
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            sum_x += x;
            sum_y += y;
            if entry.long_form {
                long_form += 1;
            }
        }

        let n = count as f64;
        StoreStats {
            count,
            long_form,
            x_min,
            x_max,
            x_mean: sum_x / n,
            y_min,
            y_max,
            y_mean: sum_y / n,
        }
    }
}

impl FromIterator<(PostId, PostPoint)> for PointStore {
    fn from_iter<I: IntoIterator<Item = (PostId, PostPoint)>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

// Iterate entries by reference (ascending id)
impl<'a> IntoIterator for &'a PointStore {
    type Item = (&'a PostId, &'a PostPoint);
    type IntoIter = std::collections::btree_map::Iter<'a, PostId, PostPoint>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Coordinate ranges and counts over a store snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreStats {
    pub count: usize,
    pub long_form: usize,
    pub x_min: f64,
    pub x_max: f64,
    pub x_mean: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_mean: f64,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Point Store Statistics:")?;
        writeln!(f, "  Posts: {} ({} long-form)", self.count, self.long_form)?;
        writeln!(
            f,
            "  x range: [{:.4}, {:.4}], mean: {:.4}",
            self.x_min, self.x_max, self.x_mean
        )?;
        writeln!(
            f,
            "  y range: [{:.4}, {:.4}], mean: {:.4}",
            self.y_min, self.y_max, self.y_mean
        )?;
        Ok(())
    }
}
