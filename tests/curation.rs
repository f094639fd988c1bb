//! Validates recommendation rules, fallbacks and seeded determinism

use elanvir::analysis::ColorAnalysis;
use elanvir::catalog::{Category, Product, Tag, TagSet, catalog};
use elanvir::curation::StyleCurator;
use elanvir::curation::profile::StyleProfile;
use elanvir::curation::rules::{apply_tone_rules, featured_fallback};

fn analysis(brightness: f64, saturation: f64) -> ColorAnalysis {
    ColorAnalysis {
        dominant_colors: Vec::new(),
        brightness,
        saturation,
    }
}

fn test_product(id: u32, tags: &[Tag], featured: bool) -> Product {
    Product {
        id,
        name: "Test Piece",
        price: 100.0,
        description: "Synthetic catalog entry",
        category: Category::Home,
        stock: 1,
        tags: TagSet::from_tags(tags),
        featured,
    }
}

#[test]
fn test_bright_analysis_retains_timeless_or_luxury() {
    let wanted = TagSet::from_tags(&[Tag::Timeless, Tag::Luxury]);
    let mut curator = StyleCurator::new(catalog(), 42);
    let picks = curator.recommend(&analysis(0.9, 0.2));

    assert!(!picks.is_empty());
    for product in picks {
        assert!(
            product.tags.intersects(&wanted),
            "{} lacks timeless/luxury tags",
            product.name
        );
    }
}

#[test]
fn test_dark_analysis_retains_luxury_or_handcrafted() {
    let wanted = TagSet::from_tags(&[Tag::Luxury, Tag::Handcrafted]);
    let mut curator = StyleCurator::new(catalog(), 42);
    let picks = curator.recommend(&analysis(0.1, 0.2));

    assert!(!picks.is_empty());
    for product in picks {
        assert!(product.tags.intersects(&wanted));
    }
}

#[test]
fn test_saturation_rule_stacks_on_brightness_rule() {
    let bright = TagSet::from_tags(&[Tag::Timeless, Tag::Luxury]);
    let vivid = TagSet::from_tags(&[Tag::Handcrafted, Tag::LimitedEdition]);
    let mut curator = StyleCurator::new(catalog(), 42);
    let picks = curator.recommend(&analysis(0.9, 0.8));

    for product in picks {
        assert!(product.tags.intersects(&bright));
        assert!(product.tags.intersects(&vivid));
    }
}

#[test]
fn test_mid_tone_analysis_applies_no_tag_filter() {
    let filtered = apply_tone_rules(catalog(), &analysis(0.5, 0.2));
    assert_eq!(filtered.len(), catalog().len());
}

#[test]
fn test_empty_filter_falls_back_to_featured() {
    // No product carries timeless or luxury, so the bright rule empties
    // the working set and only featured products may be returned
    let custom = vec![
        test_product(1, &[Tag::Sustainable], true),
        test_product(2, &[Tag::Handcrafted], false),
        test_product(3, &[Tag::Sustainable, Tag::Handcrafted], true),
    ];

    let mut curator = StyleCurator::new(&custom, 42);
    let picks = curator.recommend(&analysis(0.9, 0.2));

    assert!(!picks.is_empty());
    for product in &picks {
        assert!(product.featured, "{} is not featured", product.id);
    }
}

#[test]
fn test_recommendations_bounded_and_from_catalog() {
    let mut curator = StyleCurator::new(catalog(), 7);
    for (brightness, saturation) in [(0.9, 0.8), (0.5, 0.2), (0.1, 0.9), (0.75, 0.55)] {
        let picks = curator.recommend(&analysis(brightness, saturation));

        assert!(picks.len() <= 6);
        assert!(picks.len() <= catalog().len());
        for product in picks {
            assert!(catalog().iter().any(|entry| entry.id == product.id));
        }
    }
}

#[test]
fn test_same_seed_reproduces_order() {
    let input = analysis(0.5, 0.2);

    let mut first = StyleCurator::new(catalog(), 99);
    let mut second = StyleCurator::new(catalog(), 99);

    let first_ids: Vec<u32> = first.recommend(&input).iter().map(|p| p.id).collect();
    let second_ids: Vec<u32> = second.recommend(&input).iter().map(|p| p.id).collect();

    assert_eq!(first_ids, second_ids);
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let mut curator = StyleCurator::new(&[], 42);
    let picks = curator.recommend(&analysis(0.9, 0.8));
    assert!(picks.is_empty());
}

#[test]
fn test_limit_is_clamped_to_maximum() {
    let mut generous = StyleCurator::new(catalog(), 42).with_limit(50);
    assert!(generous.recommend(&analysis(0.5, 0.2)).len() <= 6);

    let mut narrow = StyleCurator::new(catalog(), 42).with_limit(2);
    assert!(narrow.recommend(&analysis(0.5, 0.2)).len() <= 2);
}

#[test]
fn test_featured_fallback_matches_flag() {
    let featured = featured_fallback(catalog());
    assert!(!featured.is_empty());
    for product in featured {
        assert!(product.featured);
    }
}

#[test]
fn test_profile_bias_retains_leading_tags() {
    // Two luxury/handcrafted-leaning answers dominate the tally
    let profile = StyleProfile::from_answers(
        &[(0, "luxurious"), (2, "textured")],
        "2026-08-06T00:00:00Z",
    );
    let leading = TagSet::from_tags(&profile.leading_tags(2));

    let mut curator = StyleCurator::new(catalog(), 42);
    let picks = curator.recommend_for_profile(&profile);

    assert!(!picks.is_empty());
    for product in picks {
        assert!(product.tags.intersects(&leading));
    }
}

#[test]
fn test_profile_without_preferences_falls_back_to_featured() {
    let profile = StyleProfile::from_answers(&[], "2026-08-06T00:00:00Z");

    let mut curator = StyleCurator::new(catalog(), 42);
    let picks = curator.recommend_for_profile(&profile);

    assert!(!picks.is_empty());
    for product in picks {
        assert!(product.featured);
    }
}
