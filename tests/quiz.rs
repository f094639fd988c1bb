//! Validates quiz scoring, persona selection and profile construction

use elanvir::catalog::Tag;
use elanvir::curation::StylePersona;
use elanvir::curation::profile::StyleProfile;
use elanvir::curation::quiz::{QUESTIONS, find_option, persona_for, score_answers};
use indexmap::IndexMap;

#[test]
fn test_quiz_shape_matches_storefront() {
    assert_eq!(QUESTIONS.len(), 5);
    for question in &QUESTIONS {
        assert_eq!(question.options.len(), 3);
    }
}

#[test]
fn test_score_answers_tallies_option_tags() {
    let answers = [
        (0usize, "minimalist"),
        (1, "serene"),
        (2, "natural"),
        (3, "everyday"),
        (4, "neutral"),
    ];
    let tally = score_answers(&answers);

    assert_eq!(tally.get(&Tag::Sustainable).copied(), Some(5));
    assert_eq!(tally.get(&Tag::Timeless).copied(), Some(4));
    assert_eq!(tally.get(&Tag::Handcrafted).copied(), Some(1));
    assert_eq!(tally.get(&Tag::Luxury), None);
}

#[test]
fn test_persona_follows_dominant_tag() {
    let answers = [
        (0usize, "minimalist"),
        (1, "serene"),
        (2, "natural"),
        (3, "everyday"),
        (4, "neutral"),
    ];
    let tally = score_answers(&answers);

    assert_eq!(persona_for(&tally), StylePersona::ConsciousCollector);
}

#[test]
fn test_persona_tie_resolves_by_table_order() {
    // A single "luxurious" answer tallies luxury and handcrafted once each;
    // luxury precedes handcrafted in the persona table
    let tally = score_answers(&[(0usize, "luxurious")]);
    assert_eq!(
        tally.get(&Tag::Luxury).copied(),
        tally.get(&Tag::Handcrafted).copied()
    );

    assert_eq!(persona_for(&tally), StylePersona::LuxuryConnoisseur);
}

#[test]
fn test_empty_tally_defaults_to_classic_curator() {
    let tally: IndexMap<Tag, usize> = IndexMap::new();
    assert_eq!(persona_for(&tally), StylePersona::ClassicCurator);
}

#[test]
fn test_unknown_answers_are_skipped() {
    let tally = score_answers(&[(0usize, "nonexistent"), (42, "minimalist")]);
    assert!(tally.is_empty());
    assert_eq!(persona_for(&tally), StylePersona::ClassicCurator);
}

#[test]
fn test_find_option_by_id() {
    let first = QUESTIONS.first().expect("quiz has questions");
    let option = find_option(first, "artisanal").expect("option exists");
    assert_eq!(option.tags, [Tag::Handcrafted, Tag::LimitedEdition]);

    assert!(find_option(first, "serene").is_none());
}

#[test]
fn test_profile_from_answers_records_shape() {
    let answers = [(0usize, "luxurious"), (1, "sophisticated")];
    let profile = StyleProfile::from_answers(&answers, "2026-08-06T12:00:00Z");

    assert_eq!(profile.completed_at, "2026-08-06T12:00:00Z");
    assert_eq!(profile.answers.get("0").map(String::as_str), Some("luxurious"));
    assert_eq!(
        profile.answers.get("1").map(String::as_str),
        Some("sophisticated")
    );
    assert_eq!(profile.preferences.get(&Tag::Luxury).copied(), Some(2));
    assert_eq!(profile.persona(), StylePersona::LuxuryConnoisseur);
}

#[test]
fn test_leading_tags_ranked_by_count() {
    let answers = [
        (0usize, "luxurious"),
        (1, "sophisticated"),
        (2, "smooth"),
        (3, "special"),
    ];
    let profile = StyleProfile::from_answers(&answers, "2026-08-06T12:00:00Z");

    // luxury is tallied by all four answers; timeless by two
    let leading = profile.leading_tags(2);
    assert_eq!(leading.first().copied(), Some(Tag::Luxury));
    assert_eq!(leading.len(), 2);
}
