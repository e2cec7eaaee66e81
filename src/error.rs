//! Failure taxonomy. Data-integrity failures surface as `Result`; index and
//! parameter misuse panics at the call site instead.

use thiserror::Error;

use crate::post::PostId;

/// Errors raised while scoring a single post. No store write happens on a
/// failed call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// A tag on the post is absent from the tag frequency table. The
    /// content-ingestion path must repair the table before rescoring.
    #[error("tag `{tag}` on post {post} is missing from the tag frequency table")]
    UnknownTag { post: PostId, tag: String },

    /// The tag frequency table sums to zero while the post carries tags,
    /// leaving tag affinity undefined.
    #[error("tag frequency table has no recorded uses, tag affinity is undefined")]
    EmptyTagUsage,
}

/// Errors raised while aggregating a user's interaction history into a point.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// A history entry has no point in the store, violating the precondition
    /// that every history id was scored before aggregation.
    #[error("history references post {0} which has no point in the store")]
    MissingPoint(PostId),
}
