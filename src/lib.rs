//! postspace: content-based recommendations for social-media-style posts.
//!
//! Each post is reduced to a point in a two-dimensional content/engagement
//! space. A user's recent interaction history is reduced to a point in the
//! same space, and recommendations are the stored posts whose points lie
//! nearest that position, excluding posts the user has already engaged
//! with.
//!
//! The crate is organized around two engines plus the state they share:
//!
//! - Feature scoring ([`scoring`]): converts one post's raw attributes
//!   (text, comments, reshares, upvotes, tags) into a point. Pure per post,
//!   deterministic for a fixed tag table snapshot.
//! - Point store ([`core`]): the id-to-point map populated by the batch
//!   [`builder`] and kept current through single-post rescoring.
//! - User profile ([`profile`]): reduces an interaction history to a point,
//!   with population-centroid and origin fallbacks for new users.
//! - Similarity retrieval ([`retrieval`]): an expanding-radius scan that
//!   accumulates a bounded pool of nearby, not-yet-seen post ids.
//!
//! Evaluation is synchronous and request-scoped. The store is plain data:
//! callers serialize writes and hand retrieval a stable snapshot.
//!
//! # Examples
//!
//! Score a corpus, then ask for a feed:
//!
//! ```
//! use postspace::builder::PostSpaceBuilder;
//! use postspace::post::{Post, PostId, TagFrequencyTable};
//! use postspace::retrieval::recommend;
//!
//! let tags: TagFrequencyTable = [("rust", 4), ("news", 6)].into_iter().collect();
//!
//! let posts: Vec<Post> = (1u64..=10)
//!     .map(|n| {
//!         let text = "What does the borrow checker actually do? It tracks ownership."
//!             .repeat(3);
//!         let mut post = Post::new(PostId(n), text);
//!         post.upvotes = (n as u32) * 2;
//!         post.tags = vec!["rust".to_string()];
//!         post
//!     })
//!     .collect();
//!
//! let (store, params) = PostSpaceBuilder::new().build(&posts, &tags)?;
//!
//! let history = [PostId(1)];
//! let feed = recommend(&history, &store, 5, &params)?;
//! assert!(!feed.is_empty());
//! assert!(!feed.contains(&PostId(1)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Scaling
//!
//! The retrieval scan re-examines the whole store each widening round,
//! which is the right trade only while stores stay small. See the
//! [`retrieval`] module docs for the replacement path.

pub mod builder;
pub mod core;
pub mod error;
pub mod post;
pub mod profile;
pub mod retrieval;
pub mod scoring;

#[cfg(test)]
mod tests;
