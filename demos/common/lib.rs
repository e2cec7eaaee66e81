use postspace::post::{Comment, Post, PostId, TagFrequencyTable};

/// `id; reshares; upvotes; tags; text` — one post per line, comments elided.
const POSTS_DATA: &str = r#"
1; 0; 4; rust; The cargo release shipped today. Pin your lockfiles before upgrading. The MSRV moved up one minor version and the release notes list every breaking lint. Read them before you touch CI.
2; 3; 12; rust,news; Why does the borrow checker reject this loop? The vector is only read inside the closure, yet the compiler insists there is a mutable borrow alive. Turns out the iterator holds it. Collect first, then mutate.
3; 1; 25; memes; When the test suite passes locally but the pipeline is red. Every. Single. Friday.
4; 0; 2; news; Conference schedule is out.
5; 7; 40; rust,science; We profiled the scheduler under load and the results surprised us. Batching the wakeups halved the tail latency? Yes, and the flame graphs show why. The longer write-up walks through each experiment, the harness we built for it, the counters we watched, and the two regressions we shipped and reverted along the way. Reproduction scripts are linked at the end so you can rerun the whole sweep on your own hardware. If you only read one section, read the one on wakeup coalescing. The appendix covers the perf counter plumbing in detail, including the bits that only work on newer kernels, and closes with the checklist we now run before every release candidate goes out the door.
6; 2; 9; music,memes; What should I listen to while debugging? Something without lyrics. Suggestions welcome.
7; 0; 0; science; Preprint club meets Thursday. We are reading the retrieval-augmentation survey. Bring questions.
8; 4; 18; rust,memes; Lifetime errors are just the compiler asking if you really meant it. You did not.
"#;

/// Parse the block into posts plus a tag table covering every tag used.
#[allow(dead_code)]
pub fn parse_posts_block() -> (Vec<Post>, TagFrequencyTable) {
    let mut posts = Vec::new();
    let mut tags = TagFrequencyTable::new();

    for line in POSTS_DATA.lines() {
        let l = line.trim();
        if l.is_empty() {
            continue;
        }
        let mut parts = l.splitn(5, ';');
        let id: PostId = parts.next().unwrap().trim().parse().unwrap();
        let reshares: u32 = parts.next().unwrap().trim().parse().unwrap();
        let upvotes: u32 = parts.next().unwrap().trim().parse().unwrap();
        let tag_list = parts.next().unwrap().trim();
        let text = parts.next().unwrap_or("").trim();

        let mut post = Post::new(id, text);
        post.reshares = reshares;
        post.upvotes = upvotes;
        for tag in tag_list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            post.tags.push(tag.to_string());
            tags.record(tag);
        }
        posts.push(post);
    }

    (posts, tags)
}

/// Attach a few comments so the engagement axis has something to chew on.
#[allow(dead_code)]
pub fn attach_comments(posts: &mut [Post]) {
    let threads: &[(u64, &[&str])] = &[
        (2, &["collect-then-mutate saved me last week", "or use indices"]),
        (3, &["too real", "fridays are cursed", "rerun it, works now"]),
        (5, &["the coalescing section is gold", "reproduced on arm, same shape"]),
    ];
    for &(id, texts) in threads {
        if let Some(post) = posts.iter_mut().find(|p| p.id == PostId(id)) {
            post.comments = texts.iter().map(|t| Comment::new(*t)).collect();
        }
    }
}
