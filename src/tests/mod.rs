mod test_profile;
mod test_store;

use crate::core::{Point, PointStore, PostPoint};
use crate::post::{Comment, Post, PostId, TagFrequencyTable};
use crate::retrieval::RetrievalParams;

pub const RETRIEVAL_PARAMS: RetrievalParams = RetrievalParams {
    pool_cap: 60,
    pool_fraction: 0.20,
    scan_step: 20.0,
};

/// Reference tag table: three tags, ten recorded uses in total.
pub fn tag_table() -> TagFrequencyTable {
    [("rust", 2), ("news", 3), ("memes", 5)].into_iter().collect()
}

pub fn post_with_text(id: u64, text: &str) -> Post {
    Post::new(PostId(id), text)
}

pub fn commented(post: &mut Post, texts: &[&str]) {
    post.comments = texts.iter().map(|t| Comment::new(*t)).collect();
}

/// Builds a store straight from raw coordinates, bypassing scoring.
pub fn store_of(points: &[(u64, f64, f64)]) -> PointStore {
    points
        .iter()
        .map(|&(id, x, y)| (PostId(id), PostPoint::new(Point::new(x, y), false)))
        .collect()
}

/// A small varied corpus: short and long posts, questions, comments and
/// interactions, all tagged from the reference table.
pub fn corpus() -> Vec<Post> {
    let mut short_update = post_with_text(1, &"The cargo release shipped. ".repeat(8));
    short_update.upvotes = 4;
    short_update.tags = vec!["rust".to_string()];

    let mut long_read =
        post_with_text(2, &"Ownership rules are checked at compile time. ".repeat(32));
    long_read.reshares = 3;
    long_read.tags = vec!["rust".to_string(), "news".to_string()];
    commented(&mut long_read, &["great write-up", "bookmarked"]);

    let mut questions = post_with_text(3, &"Why does this borrow fail? ".repeat(6));
    questions.upvotes = 10;
    questions.tags = vec!["memes".to_string()];
    commented(&mut questions, &["same question here"]);

    let mut plain = post_with_text(4, "ok");
    plain.tags = vec!["memes".to_string()];

    let mut untagged = post_with_text(5, &"No tags on this one at all. ".repeat(7));
    untagged.upvotes = 2;

    let mut busy = post_with_text(6, &"Threads. Channels. Locks. What else? ".repeat(5));
    busy.reshares = 1;
    busy.upvotes = 7;
    busy.tags = vec!["news".to_string(), "memes".to_string()];
    commented(&mut busy, &["good list", "missing atomics", "and executors"]);

    vec![short_update, long_read, questions, plain, untagged, busy]
}
