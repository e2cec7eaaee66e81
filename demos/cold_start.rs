/// Cold-start walkthrough: a brand-new user has no interaction history, so
/// aggregation falls back to the population centroid and the feed starts
/// from the middle of the point cloud.
use postspace::builder::PostSpaceBuilder;
use postspace::core::PointStore;
use postspace::profile::user_point;
use postspace::retrieval::recommend;

#[path = "./common/lib.rs"]
mod common;

fn main() {
    env_logger::init();

    let (mut posts, tags) = common::parse_posts_block();
    common::attach_comments(&mut posts);

    let (store, params) = PostSpaceBuilder::new()
        .with_pool_fraction(0.5)
        .build(&posts, &tags)
        .expect("demo corpus only uses recorded tags");

    // Tier 2: empty history over a populated store lands on the centroid.
    let position = user_point(&[], &store).unwrap();
    let centroid = store.centroid().unwrap();
    assert_eq!(position, centroid);
    println!(
        "New user starts from the population centroid ({:.3}, {:.3}) over {} posts",
        position.x,
        position.y,
        store.len()
    );

    let feed = recommend(&[], &store, 5, &params).unwrap();
    println!("Cold-start feed:");
    for id in &feed {
        let entry = store.get(*id).unwrap();
        println!(
            "  post {:>2} at distance {:.3} from the centroid",
            id,
            position.distance(&entry.point)
        );
    }
    assert!(!feed.is_empty());

    // Tier 3: with nothing scored at all the user sits at the origin and
    // there is nothing to recommend.
    let empty = PointStore::new();
    let origin = user_point(&[], &empty).unwrap();
    let nothing = recommend(&[], &empty, 5, &params).unwrap();
    println!(
        "\nEmpty platform: user at ({:.1}, {:.1}), {} recommendations",
        origin.x,
        origin.y,
        nothing.len()
    );
    assert!(nothing.is_empty());
}
