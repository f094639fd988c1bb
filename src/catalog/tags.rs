//! Catalog tag universe and fixed-size tag sets

use bitvec::prelude::{BitVec, bitvec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of descriptive tags used across the ElanVir catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    /// Ethically or sustainably produced
    #[serde(rename = "sustainable")]
    Sustainable,
    /// Made by hand in small batches
    #[serde(rename = "handcrafted")]
    Handcrafted,
    /// Enduring design that outlasts trends
    #[serde(rename = "timeless")]
    Timeless,
    /// Premium materials and finish
    #[serde(rename = "luxury")]
    Luxury,
    /// Produced in a limited run
    #[serde(rename = "limited edition")]
    LimitedEdition,
}

impl Tag {
    /// Number of tags in the universe
    pub const COUNT: usize = 5;

    /// All tags in declaration order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Sustainable,
        Self::Handcrafted,
        Self::Timeless,
        Self::Luxury,
        Self::LimitedEdition,
    ];

    /// Zero-based position of this tag within the universe
    pub const fn index(self) -> usize {
        match self {
            Self::Sustainable => 0,
            Self::Handcrafted => 1,
            Self::Timeless => 2,
            Self::Luxury => 3,
            Self::LimitedEdition => 4,
        }
    }

    /// Tag at the given universe position
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Sustainable),
            1 => Some(Self::Handcrafted),
            2 => Some(Self::Timeless),
            3 => Some(Self::Luxury),
            4 => Some(Self::LimitedEdition),
            _ => None,
        }
    }

    /// Display label matching the storefront's tag strings
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sustainable => "sustainable",
            Self::Handcrafted => "handcrafted",
            Self::Timeless => "timeless",
            Self::Luxury => "luxury",
            Self::LimitedEdition => "limited edition",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-size bitset over the catalog tag universe
///
/// Provides O(1) membership testing and cheap intersection checks for the
/// curation rules, which only ever ask "does this product carry one of
/// these tags".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagSet {
    bits: BitVec,
}

impl TagSet {
    /// Create a set with no tags present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; Tag::COUNT],
        }
    }

    /// Create a set from a slice of tags
    pub fn from_tags(tags: &[Tag]) -> Self {
        let mut set = Self::new();
        for &tag in tags {
            set.insert(tag);
        }
        set
    }

    /// Insert a tag
    pub fn insert(&mut self, tag: Tag) {
        self.bits.set(tag.index(), true);
    }

    /// Test tag membership
    pub fn contains(&self, tag: Tag) -> bool {
        self.bits.get(tag.index()).as_deref() == Some(&true)
    }

    /// Test whether any tag is shared with another set
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits.iter_ones().any(|index| {
            other.bits.get(index).as_deref() == Some(&true)
        })
    }

    /// Test if no tags are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tags in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all tags in universe order
    pub fn to_vec(&self) -> Vec<Tag> {
        self.bits.iter_ones().filter_map(Tag::from_index).collect()
    }
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.to_vec().iter().map(|tag| tag.as_str()).collect();
        write!(f, "[{}]", labels.join(", "))
    }
}
