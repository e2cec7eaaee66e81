//! Input data model for the scoring and retrieval engines.
//!
//! - `PostId`: one identifier type at every API boundary
//! - `Post` / `Comment`: raw content and engagement attributes handed over
//!   by the content-storage collaborator
//! - `TagFrequencyTable`: tag usage counts maintained by the tag-bookkeeping
//!   collaborator, consumed by tag-affinity scoring

use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable post identifier.
///
/// Serving layers historically mixed stringified keys with integer id lists;
/// the engine accepts and produces only this newtype. `Display`/`FromStr`
/// cover the stringified form, serde covers JSON maps (which stringify
/// numeric keys).
///
/// # Examples
///
/// ```
/// use postspace::post::PostId;
///
/// let id = PostId(17);
/// assert_eq!(id.to_string(), "17");
/// assert_eq!("17".parse::<PostId>().unwrap(), id);
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(PostId)
    }
}

impl From<u64> for PostId {
    #[inline]
    fn from(raw: u64) -> Self {
        PostId(raw)
    }
}

impl From<PostId> for u64 {
    #[inline]
    fn from(id: PostId) -> Self {
        id.0
    }
}

/// A single comment on a post. Only the text matters to scoring, which
/// averages comment lengths into the engagement axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    #[inline]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A post as handed over by the content system. Immutable per scoring call;
/// engagement counters are replaced wholesale when interactions change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub text: String,
    pub comments: Vec<Comment>,
    pub reshares: u32,
    pub upvotes: u32,
    pub tags: Vec<String>,
}

impl Post {
    /// Creates a post with no comments, no interactions and no tags.
    /// Remaining fields are public; set them directly.
    ///
    /// # Examples
    ///
    /// ```
    /// use postspace::post::{Post, PostId};
    ///
    /// let mut post = Post::new(PostId(1), "Short update.");
    /// post.upvotes = 4;
    /// post.tags = vec!["news".to_string()];
    /// assert_eq!(post.comments.len(), 0);
    /// ```
    pub fn new(id: PostId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            comments: Vec::new(),
            reshares: 0,
            upvotes: 0,
            tags: Vec::new(),
        }
    }
}

/// Tag usage counts across all posts on the platform.
///
/// The table is maintained incrementally by the content-ingestion path:
/// `record` on post creation, `remove` on post deletion. Scoring only reads
/// it, and requires the total to be positive whenever a scored post carries
/// tags (see `ScoreError::EmptyTagUsage`).
///
/// Serialized as a bare tag-to-count map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagFrequencyTable {
    counts: BTreeMap<String, u64>,
}

impl TagFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one use of `tag`, inserting it if unseen.
    pub fn record(&mut self, tag: impl Into<String>) {
        *self.counts.entry(tag.into()).or_insert(0) += 1;
    }

    /// Records `n` uses of `tag` at once.
    pub fn record_many(&mut self, tag: impl Into<String>, n: u64) {
        if n == 0 {
            return;
        }
        *self.counts.entry(tag.into()).or_insert(0) += n;
    }

    /// Removes `n` uses of `tag`. The count saturates at zero and the entry
    /// is dropped entirely once no uses remain, so an absent tag and an
    /// exhausted tag are indistinguishable to lookups.
    pub fn remove(&mut self, tag: &str, n: u64) {
        if let Some(count) = self.counts.get_mut(tag) {
            *count = count.saturating_sub(n);
            if *count == 0 {
                self.counts.remove(tag);
            }
        }
    }

    /// Usage count for `tag`, or `None` when the tag has never been recorded.
    #[inline]
    pub fn count(&self, tag: &str) -> Option<u64> {
        self.counts.get(tag).copied()
    }

    /// Sum of all usage counts.
    #[inline]
    pub fn total_uses(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct tags.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates tags and counts in ascending tag order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(tag, &count)| (tag.as_str(), count))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for TagFrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = TagFrequencyTable::new();
        for (tag, count) in iter {
            table.record_many(tag, count);
        }
        table
    }
}
