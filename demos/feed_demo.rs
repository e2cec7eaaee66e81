/// End-to-end walkthrough: parse a small corpus, score it into the point
/// store, then request a feed for a user with a short interaction history.
use postspace::builder::PostSpaceBuilder;
use postspace::post::PostId;
use postspace::profile::user_point;
use postspace::retrieval::recommend;

#[path = "./common/lib.rs"]
mod common;

fn main() {
    env_logger::init();

    let (mut posts, tags) = common::parse_posts_block();
    common::attach_comments(&mut posts);

    println!("Corpus: {} posts, {} distinct tags", posts.len(), tags.len());

    // Pool fraction raised so a corpus this small still yields a feed; the
    // default 20% of eight posts truncates to a single candidate.
    let (store, params) = PostSpaceBuilder::new()
        .with_pool_fraction(0.5)
        .build(&posts, &tags)
        .expect("demo corpus only uses recorded tags");

    println!("\n{}", store.stats());

    println!("Scored points:");
    for (id, entry) in store.iter() {
        println!(
            "  post {:>2}: ({:8.3}, {:8.3}){}",
            id,
            entry.point.x,
            entry.point.y,
            if entry.long_form { "  [long-form]" } else { "" }
        );
    }

    // A user who recently upvoted the two rust troubleshooting posts.
    let history = [PostId(2), PostId(8)];
    let position = user_point(&history, &store).unwrap();
    println!(
        "\nUser upvoted {:?}, aggregated position ({:.3}, {:.3})",
        history.map(|id| id.0),
        position.x,
        position.y
    );

    let feed = recommend(&history, &store, 5, &params).unwrap();
    println!("Recommended feed, nearest first by discovery round:");
    for id in &feed {
        let entry = store.get(*id).unwrap();
        println!(
            "  post {:>2} at distance {:.3}",
            id,
            position.distance(&entry.point)
        );
    }

    assert!(!feed.is_empty());
    assert!(feed.iter().all(|id| !history.contains(id)));
}
