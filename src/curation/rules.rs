//! Tag-matching filter rules mapping analysis statistics to catalog subsets
//!
//! Rules are cumulative: the brightness branch narrows the working set, the
//! saturation rule narrows it further, and an empty result falls back to
//! the featured products.

use crate::analysis::ColorAnalysis;
use crate::catalog::{Product, Tag, TagSet};
use crate::io::configuration::{BRIGHT_THRESHOLD, DARK_THRESHOLD, SATURATION_THRESHOLD};

/// Retain only products whose tags intersect the wanted set
pub fn retain_tagged<'a>(products: Vec<&'a Product>, wanted: &TagSet) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|product| product.tags.intersects(wanted))
        .collect()
}

/// Apply the brightness and saturation rules to the full catalog
///
/// Rule order:
/// 1. brightness above [`BRIGHT_THRESHOLD`] retains timeless/luxury;
/// 2. otherwise brightness below [`DARK_THRESHOLD`] retains
///    luxury/handcrafted;
/// 3. saturation above [`SATURATION_THRESHOLD`] further retains
///    handcrafted/limited-edition on top of the brightness result.
pub fn apply_tone_rules<'a>(catalog: &'a [Product], analysis: &ColorAnalysis) -> Vec<&'a Product> {
    let mut filtered: Vec<&Product> = catalog.iter().collect();

    if analysis.brightness > BRIGHT_THRESHOLD {
        // Bright inspiration images map to lighter, elegant pieces
        filtered = retain_tagged(filtered, &TagSet::from_tags(&[Tag::Timeless, Tag::Luxury]));
    } else if analysis.brightness < DARK_THRESHOLD {
        // Dark images map to rich, dramatic pieces
        filtered = retain_tagged(filtered, &TagSet::from_tags(&[Tag::Luxury, Tag::Handcrafted]));
    }

    if analysis.saturation > SATURATION_THRESHOLD {
        // Vivid images map to unique, artisanal pieces
        filtered = retain_tagged(
            filtered,
            &TagSet::from_tags(&[Tag::Handcrafted, Tag::LimitedEdition]),
        );
    }

    filtered
}

/// The featured subset used when filtering empties the working set
pub fn featured_fallback(catalog: &[Product]) -> Vec<&Product> {
    catalog.iter().filter(|product| product.featured).collect()
}
