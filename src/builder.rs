use crate::core::PointStore;
use crate::error::ScoreError;
use crate::post::{Post, TagFrequencyTable};
use crate::retrieval::RetrievalParams;
use crate::scoring::score_post;

use rayon::prelude::*;

// Add logging
use log::{debug, info, trace};

/// Batch entry point: scores a whole corpus into a fresh `PointStore` and
/// carries the retrieval configuration alongside it.
///
/// Serving layers run this once over all posts at startup, then keep the
/// store current through `PointStore::rescore` as interactions land.
pub struct PostSpaceBuilder {
    params: RetrievalParams,
}

impl Default for PostSpaceBuilder {
    fn default() -> Self {
        debug!("Creating PostSpaceBuilder with default parameters");
        Self { params: RetrievalParams::default() }
    }
}

impl PostSpaceBuilder {
    pub fn new() -> Self {
        info!("Initializing new PostSpaceBuilder");
        Self::default()
    }

    // -------------------- Retrieval configuration --------------------

    /// Replace the whole retrieval configuration at once.
    pub fn with_retrieval_params(mut self, params: RetrievalParams) -> Self {
        info!(
            "Configuring retrieval: pool_cap={}, pool_fraction={}, scan_step={}",
            params.pool_cap, params.pool_fraction, params.scan_step
        );
        self.params = params;
        self
    }

    /// Absolute upper bound on the candidate pool.
    pub fn with_pool_cap(mut self, pool_cap: usize) -> Self {
        info!("Setting pool cap: {}", pool_cap);
        self.params.pool_cap = pool_cap;
        self
    }

    /// Fraction of the store targeted for the pool.
    ///
    /// # Panics
    ///
    /// Panics if `pool_fraction` is negative or not finite.
    pub fn with_pool_fraction(mut self, pool_fraction: f64) -> Self {
        assert!(
            pool_fraction.is_finite() && pool_fraction >= 0.0,
            "pool fraction must be a non-negative number, got {}",
            pool_fraction
        );
        info!("Setting pool fraction: {}", pool_fraction);
        self.params.pool_fraction = pool_fraction;
        self
    }

    /// Range increase per widening round.
    ///
    /// # Panics
    ///
    /// Panics if `scan_step` is not a positive number.
    pub fn with_scan_step(mut self, scan_step: f64) -> Self {
        assert!(
            scan_step > 0.0,
            "scan step must be positive, got {}",
            scan_step
        );
        info!("Setting scan step: {}", scan_step);
        self.params.scan_step = scan_step;
        self
    }

    // -------------------- Build --------------------

    /// Score every post against the tag table snapshot and return the
    /// populated store together with the retrieval configuration.
    ///
    /// Scoring runs in parallel; each post is pure, so the result is
    /// identical to scoring sequentially. Inserts happen afterwards on the
    /// calling thread in input order, so a duplicated id keeps its last
    /// occurrence. The first scoring failure aborts the build and no store
    /// is returned.
    pub fn build(
        self,
        posts: &[Post],
        tags: &TagFrequencyTable,
    ) -> Result<(PointStore, RetrievalParams), ScoreError> {
        info!(
            "Building point store from {} posts against {} known tags",
            posts.len(),
            tags.len()
        );
        debug!(
            "Build configuration: pool_cap={}, pool_fraction={}, scan_step={}",
            self.params.pool_cap, self.params.pool_fraction, self.params.scan_step
        );

        trace!("Scoring posts in parallel");
        let scored = posts
            .par_iter()
            .map(|post| score_post(post, tags).map(|entry| (post.id, entry)))
            .collect::<Result<Vec<_>, ScoreError>>()?;

        let mut store = PointStore::new();
        for (id, entry) in scored {
            store.insert(id, entry);
        }

        let stats = store.stats();
        debug!(
            "Store populated: {} points ({} long-form), x range [{:.4}, {:.4}], y range [{:.4}, {:.4}]",
            stats.count, stats.long_form, stats.x_min, stats.x_max, stats.y_min, stats.y_max
        );

        info!("Point store build completed successfully");
        Ok((store, self.params))
    }
}
