//! Stateful curation engine with seeded stochastic selection

use crate::analysis::ColorAnalysis;
use crate::catalog::{Product, TagSet};
use crate::curation::profile::StyleProfile;
use crate::curation::rules::{apply_tone_rules, featured_fallback, retain_tagged};
use crate::io::configuration::MAX_RECOMMENDATIONS;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Seeded random selector for reproducible stochastic choices
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniformly permute a slice in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Draw a uniform index below `len`
    ///
    /// Returns 0 for an empty range.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Maps analysis results to curated product selections
///
/// Holds the catalog reference, the result size limit and the injected
/// random source. Each call borrows products from the catalog; nothing is
/// cached between calls, so repeated recommendations reflect the advancing
/// random stream.
pub struct StyleCurator<'a> {
    catalog: &'a [Product],
    selector: RandomSelector,
    limit: usize,
}

impl<'a> StyleCurator<'a> {
    /// Create a curator over a catalog with a seeded random source
    pub fn new(catalog: &'a [Product], seed: u64) -> Self {
        Self {
            catalog,
            selector: RandomSelector::new(seed),
            limit: MAX_RECOMMENDATIONS,
        }
    }

    /// Lower the result size limit
    ///
    /// The limit is capped at [`MAX_RECOMMENDATIONS`]; a larger requested
    /// value is clamped down.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_RECOMMENDATIONS);
        self
    }

    /// Recommend products for an image analysis
    ///
    /// Applies the tone rules, widens to the featured set when the filters
    /// empty the result, then shuffles and truncates to the limit. The
    /// result is empty only when the catalog itself is empty.
    pub fn recommend(&mut self, analysis: &ColorAnalysis) -> Vec<&'a Product> {
        let filtered = apply_tone_rules(self.catalog, analysis);
        self.finish(filtered)
    }

    /// Recommend products biased by a stored style profile
    ///
    /// Retains products matching the profile's two leading tags, with the
    /// same featured fallback and shuffle/truncate tail as [`Self::recommend`].
    pub fn recommend_for_profile(&mut self, profile: &StyleProfile) -> Vec<&'a Product> {
        let leading = profile.leading_tags(2);
        let filtered = if leading.is_empty() {
            Vec::new()
        } else {
            retain_tagged(self.catalog.iter().collect(), &TagSet::from_tags(&leading))
        };
        self.finish(filtered)
    }

    fn finish(&mut self, mut filtered: Vec<&'a Product>) -> Vec<&'a Product> {
        if filtered.is_empty() {
            filtered = featured_fallback(self.catalog);
        }
        self.selector.shuffle(&mut filtered);
        filtered.truncate(self.limit);
        filtered
    }
}
