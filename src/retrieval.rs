//! Similarity retrieval: expanding-radius nearest-neighbor scan over the
//! point store.
//!
//! - threshold per round is the diagonal reach of a range-by-range square
//!   at the user point, with the range growing one step per round
//! - each round rescans the full store, so posts rejected at a smaller
//!   radius are reconsidered at the larger one
//! - the pool is capped at a fraction of the store with an absolute upper
//!   bound, and widening stops once every eligible post has been admitted
//!
//! The rescan trades repeated passes for skipping a global distance sort,
//! which only pays off on small stores: the loop is O(store size x widening
//! rounds). A sorted-distance or spatial-index (k-d tree) selection is the
//! replacement path once stores grow beyond a few thousand posts.

use std::collections::BTreeSet;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Point, PointStore};
use crate::error::ProfileError;
use crate::post::PostId;
use crate::profile::user_point;

/// Tuning knobs for the retrieval scan.
///
/// Defaults reproduce the platform reference behavior: a pool of 20% of the
/// store capped at 60 posts, widening in 20-unit steps.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetrievalParams {
    /// Absolute upper bound on the candidate pool.
    pub pool_cap: usize,
    /// Fraction of the store targeted for the pool (0..1).
    pub pool_fraction: f64,
    /// Range increase per widening round, in coordinate units.
    pub scan_step: f64,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        debug!("Creating default RetrievalParams");
        Self { pool_cap: 60, pool_fraction: 0.20, scan_step: 20.0 }
    }
}

// Custom PartialEq using approximate equality for the float fields
impl PartialEq for RetrievalParams {
    fn eq(&self, other: &Self) -> bool {
        self.pool_cap == other.pool_cap
            && approx::relative_eq!(self.pool_fraction, other.pool_fraction)
            && approx::relative_eq!(self.scan_step, other.scan_step)
    }
}

// Proper equivalence relation assuming no NaN parameters in practice
impl Eq for RetrievalParams {}

impl RetrievalParams {
    /// Target pool size for a store of `store_len` posts: the configured
    /// fraction of the store, capped, truncated to a whole count. A
    /// fractional target below 1 truncates to 0, so tiny stores yield no
    /// recommendations at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use postspace::retrieval::RetrievalParams;
    ///
    /// let params = RetrievalParams::default();
    /// assert_eq!(params.pool_target(3), 0);
    /// assert_eq!(params.pool_target(50), 10);
    /// assert_eq!(params.pool_target(1000), 60);
    /// ```
    #[inline]
    pub fn pool_target(&self, store_len: usize) -> usize {
        (store_len as f64 * self.pool_fraction).min(self.pool_cap as f64) as usize
    }
}

/// Retrieves up to `max_count` post ids near `user_point`, excluding the
/// user's history.
///
/// Candidates accumulate in discovery order: rounds in widening order,
/// ascending id within a round. Admission is strict, a post exactly at the
/// round's threshold distance waits for the next round. Pool accumulation
/// targets `params.pool_target(store.len())`; `max_count` only truncates
/// the final list.
///
/// When fewer eligible posts exist than the target, the scan stops once the
/// threshold passes the farthest eligible distance and returns the
/// exhausted candidate set.
///
/// # Panics
///
/// Panics if `params.scan_step` is not a positive number.
pub fn retrieve(
    user_point: &Point,
    store: &PointStore,
    history: &[PostId],
    max_count: usize,
    params: &RetrievalParams,
) -> Vec<PostId> {
    assert!(
        params.scan_step > 0.0,
        "scan step must be positive, got {}",
        params.scan_step
    );

    let target = params.pool_target(store.len());
    debug!(
        "Retrieving near ({:.4}, {:.4}): store={}, history={}, target={}, max_count={}",
        user_point.x,
        user_point.y,
        store.len(),
        history.len(),
        target,
        max_count
    );
    if target == 0 {
        return Vec::new();
    }

    let seen: BTreeSet<PostId> = history.iter().copied().collect();

    // Farthest eligible distance bounds the widening: once the threshold
    // passes it, a full scan has admitted every remaining candidate.
    let horizon = store
        .iter()
        .filter(|(id, _)| !seen.contains(id))
        .map(|(_, entry)| user_point.distance(&entry.point))
        .fold(f64::NEG_INFINITY, f64::max);

    let mut selected: Vec<PostId> = Vec::with_capacity(target);
    let mut selected_set: BTreeSet<PostId> = BTreeSet::new();
    let mut range = params.scan_step;
    let mut rounds = 0usize;

    while selected.len() < target {
        let reach = Point::new(user_point.x + range, user_point.y + range);
        let threshold = user_point.distance(&reach);
        rounds += 1;

        for (id, entry) in store.iter() {
            if seen.contains(&id) || selected_set.contains(&id) {
                continue;
            }
            if user_point.distance(&entry.point) < threshold {
                selected.push(id);
                selected_set.insert(id);
                if selected.len() >= target {
                    break;
                }
            }
        }

        trace!(
            "Round {}: range={:.2}, threshold={:.4}, selected={}/{}",
            rounds,
            range,
            threshold,
            selected.len(),
            target
        );

        if threshold > horizon {
            if selected.len() < target {
                warn!(
                    "Eligible posts exhausted after {} rounds: {} of {} targeted",
                    rounds,
                    selected.len(),
                    target
                );
            }
            break;
        }
        range += params.scan_step;
    }

    debug!(
        "Retrieval finished in {} rounds with {} candidates",
        rounds,
        selected.len()
    );
    selected.truncate(max_count);
    selected
}

/// The request-scoped recommendation flow: aggregate the history into a
/// user point, then retrieve nearby unseen posts.
///
/// # Examples
///
/// ```
/// use postspace::core::{Point, PointStore, PostPoint};
/// use postspace::post::PostId;
/// use postspace::retrieval::{recommend, RetrievalParams};
///
/// let store: PointStore = (1..=10)
///     .map(|n| {
///         let point = Point::new(n as f64, n as f64);
///         (PostId(n), PostPoint::new(point, false))
///     })
///     .collect();
///
/// let feed = recommend(&[PostId(4)], &store, 20, &RetrievalParams::default()).unwrap();
/// assert!(!feed.contains(&PostId(4)));
/// ```
pub fn recommend(
    history: &[PostId],
    store: &PointStore,
    max_count: usize,
    params: &RetrievalParams,
) -> Result<Vec<PostId>, ProfileError> {
    let origin = user_point(history, store)?;
    Ok(retrieve(&origin, store, history, max_count, params))
}
