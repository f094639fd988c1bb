//! Curation modules: recommendation rules, quiz scoring, profiles and rewards

/// Stateful curation engine and seeded random selection
pub mod engine;
/// Saved outfit collections and the canvas reorder operation
pub mod outfits;
/// Persisted style profile derived from quiz answers
pub mod profile;
/// Style quiz data, scoring and persona selection
pub mod quiz;
/// Tag-matching filter rules
pub mod rules;
/// Daily reward wheel with a once-per-day gate
pub mod spin;

pub use engine::{RandomSelector, StyleCurator};
pub use profile::StyleProfile;
pub use quiz::StylePersona;
