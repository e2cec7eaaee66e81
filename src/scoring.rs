//! Feature scoring: maps one post's raw attributes to a point in
//! content/engagement space.
//!
//! - x axis (engagement): comment interaction, reshares, upvotes
//! - y axis (content): punctuation ratios, length fit against two ideal
//!   character bands, tag affinity
//! - unbounded counts pass through `saturate` so no single raw count
//!   dominates the composite score
//!
//! Scoring is a pure function of the post plus a tag table snapshot;
//! recomputing from identical inputs yields an identical point. Store
//! writes happen in `PointStore::rescore` and in the batch builder, never
//! here.

use log::{debug, trace};

use crate::core::{Point, PostPoint};
use crate::error::ScoreError;
use crate::post::{Comment, Post, TagFrequencyTable};

/// Ideal lower length in characters for short posts.
pub const SHORT_POST_LOWER_LIMIT: f64 = 150.0;
/// Ideal upper length in characters for short posts.
pub const SHORT_POST_UPPER_LIMIT: f64 = 300.0;
/// Ideal lower length in characters for long posts.
pub const LONG_POST_LOWER_LIMIT: f64 = 1300.0;
/// Ideal upper length in characters for long posts.
pub const LONG_POST_UPPER_LIMIT: f64 = 2000.0;

/// Saturating transform: compresses a non-negative magnitude into [0, 1).
///
/// Returns `1 - 1/(x + 1)`, which is 0 at 0, strictly increasing, and
/// approaches 1 as x grows. Negative inputs clamp to 0, guarding against
/// malformed ratios.
///
/// # Examples
///
/// ```
/// use postspace::scoring::saturate;
///
/// assert_eq!(saturate(0.0), 0.0);
/// assert_eq!(saturate(1.0), 0.5);
/// assert_eq!(saturate(-3.0), 0.0);
/// assert!(saturate(1e9) < 1.0);
/// ```
#[inline]
pub fn saturate(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    1.0 - 1.0 / (x + 1.0)
}

/// Mean character length over a post's comments, 0 when there are none.
fn average_comment_length(comments: &[Comment]) -> f64 {
    if comments.is_empty() {
        return 0.0;
    }
    let total: usize = comments.iter().map(|c| c.text.chars().count()).sum();
    total as f64 / comments.len() as f64
}

/// Engagement axis: saturated comment interaction, raw reshares, and half
/// the raw upvotes.
fn engagement_score(post: &Post) -> f64 {
    let comment_count = post.comments.len() as f64;
    let average_length = average_comment_length(&post.comments);
    let comment_interaction = (saturate(comment_count) + saturate(average_length)) * 10.0;

    comment_interaction + f64::from(post.reshares) + f64::from(post.upvotes) / 2.0
}

/// Length-fit score plus the long-form classification.
///
/// Full marks inside either open ideal band. Outside both, each band
/// boundary contributes a partial score `10 - |limit - length|/limit * 10`
/// and the best one wins; a post counts as long-form when the long band's
/// lower boundary outscores the short band's upper boundary.
fn length_fit(length: f64) -> (f64, bool) {
    if length > LONG_POST_LOWER_LIMIT && length < LONG_POST_UPPER_LIMIT {
        return (10.0, true);
    }
    if length > SHORT_POST_LOWER_LIMIT && length < SHORT_POST_UPPER_LIMIT {
        return (10.0, false);
    }

    let partial = |limit: f64| 10.0 - (limit - length).abs() / limit * 10.0;
    let short_lower = partial(SHORT_POST_LOWER_LIMIT);
    let short_upper = partial(SHORT_POST_UPPER_LIMIT);
    let long_lower = partial(LONG_POST_LOWER_LIMIT);
    let long_upper = partial(LONG_POST_UPPER_LIMIT);

    let score = short_lower.max(short_upper).max(long_lower).max(long_upper);
    (score, long_lower > short_upper)
}

/// Tag affinity: each tag contributes its share of all recorded tag uses,
/// scaled to 10. A post with no tags scores 0 regardless of table state.
fn tag_affinity(post: &Post, tags: &TagFrequencyTable) -> Result<f64, ScoreError> {
    if post.tags.is_empty() {
        return Ok(0.0);
    }

    let total_uses = tags.total_uses();
    if total_uses == 0 {
        return Err(ScoreError::EmptyTagUsage);
    }

    let mut affinity = 0.0;
    for tag in &post.tags {
        let count = tags.count(tag).ok_or_else(|| ScoreError::UnknownTag {
            post: post.id,
            tag: tag.clone(),
        })?;
        affinity += count as f64 / total_uses as f64 * 10.0;
    }
    Ok(affinity)
}

/// Scores one post into content/engagement space.
///
/// Lengths are Unicode scalar counts; the punctuation ratios divide by the
/// text length with spaces removed and short-circuit to 0 when either
/// length is 0. Fails without side effects when a tag is missing from the
/// table or the table has no recorded uses.
///
/// # Examples
///
/// ```
/// use postspace::post::{Post, PostId, TagFrequencyTable};
/// use postspace::scoring::score_post;
///
/// let mut post = Post::new(PostId(1), "Does anyone read the docs? I do.");
/// post.upvotes = 6;
///
/// let scored = score_post(&post, &TagFrequencyTable::new()).unwrap();
/// assert_eq!(scored.point.x, 3.0);
/// assert!(scored.point.y > 0.0);
/// assert!(!scored.long_form);
/// ```
pub fn score_post(post: &Post, tags: &TagFrequencyTable) -> Result<PostPoint, ScoreError> {
    let x = engagement_score(post);

    let length = post.text.chars().count();
    let stripped_length = post.text.chars().filter(|&c| c != ' ').count();

    let question_marks = post.text.chars().filter(|&c| c == '?').count();
    let periods = post.text.chars().filter(|&c| c == '.').count();

    // Ratios are undefined for empty or all-space text, score them 0.
    let (inquisitive, informative, creative) = if length > 0 && stripped_length > 0 {
        let stripped = stripped_length as f64;
        let questions = question_marks as f64;
        let statements = periods as f64;
        (
            saturate(questions / stripped) * 100.0,
            saturate(statements / stripped) * 100.0,
            saturate((questions + statements) / 2.0 / stripped) * 100.0,
        )
    } else {
        (0.0, 0.0, 0.0)
    };

    let (fit, long_form) = length_fit(length as f64);
    let affinity = tag_affinity(post, tags)?;

    let y = inquisitive + informative + creative + fit + affinity;

    trace!(
        "Post {} terms: inquisitive={:.4}, informative={:.4}, creative={:.4}, fit={:.4}, affinity={:.4}",
        post.id, inquisitive, informative, creative, fit, affinity
    );
    debug!(
        "Scored post {}: ({:.4}, {:.4}), length={}, long_form={}",
        post.id, x, y, length, long_form
    );

    Ok(PostPoint::new(Point::new(x, y), long_form))
}
