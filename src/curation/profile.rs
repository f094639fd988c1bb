//! Persisted style profile derived from quiz answers

use crate::catalog::Tag;
use crate::curation::quiz::{self, StylePersona};
use crate::io::configuration::STYLE_PROFILE_KEY;
use crate::io::store::PreferenceStore;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Tag-frequency summary persisted after quiz completion
///
/// Serializes to the storefront's JSON shape:
/// `{"preferences": {..}, "completedAt": "..", "answers": {..}}` under the
/// fixed store key [`STYLE_PROFILE_KEY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    /// Tag tally over the answered questions
    pub preferences: IndexMap<Tag, usize>,
    /// ISO-8601 completion timestamp
    #[serde(rename = "completedAt")]
    pub completed_at: String,
    /// Selected option id per question index
    pub answers: IndexMap<String, String>,
}

impl StyleProfile {
    /// Build a profile from quiz answers
    ///
    /// `answers` pairs 0-based question indices with selected option ids;
    /// the caller supplies the completion timestamp so tests control the
    /// clock.
    pub fn from_answers(answers: &[(usize, &str)], completed_at: impl Into<String>) -> Self {
        let preferences = quiz::score_answers(answers);
        let answer_map = answers
            .iter()
            .map(|&(index, id)| (index.to_string(), id.to_string()))
            .collect();

        Self {
            preferences,
            completed_at: completed_at.into(),
            answers: answer_map,
        }
    }

    /// The persona this profile maps to
    pub fn persona(&self) -> StylePersona {
        quiz::persona_for(&self.preferences)
    }

    /// The top-`limit` preferred tags, highest count first
    ///
    /// Equal counts keep first-tallied order.
    pub fn leading_tags(&self, limit: usize) -> Vec<Tag> {
        let mut ranked: Vec<(Tag, usize)> = self
            .preferences
            .iter()
            .map(|(&tag, &count)| (tag, count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked.into_iter().take(limit).map(|(tag, _)| tag).collect()
    }

    /// Persist this profile under the fixed store key
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the store write fails
    pub fn save<S: PreferenceStore>(&self, store: &mut S) -> crate::io::error::Result<()> {
        store.set_json(STYLE_PROFILE_KEY, self)
    }

    /// Load the persisted profile, if one exists
    ///
    /// # Errors
    ///
    /// Returns an error if a stored blob exists but cannot be parsed
    pub fn load<S: PreferenceStore>(store: &S) -> crate::io::error::Result<Option<Self>> {
        store.get_json(STYLE_PROFILE_KEY)
    }
}
