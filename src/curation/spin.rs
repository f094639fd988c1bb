//! Daily reward wheel with a once-per-day gate

use crate::curation::engine::RandomSelector;
use crate::io::configuration::DAILY_SPIN_KEY;
use crate::io::store::PreferenceStore;
use std::fmt;

/// Kind of reward a wheel segment grants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardKind {
    /// Percentage discount on an order scope
    Discount,
    /// Loyalty points
    Points,
    /// Shipping perk
    Shipping,
}

impl RewardKind {
    /// Display label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Discount => "discount",
            Self::Points => "points",
            Self::Shipping => "shipping",
        }
    }
}

/// A single wheel segment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpinReward {
    /// Reward kind
    pub kind: RewardKind,
    /// Short display value
    pub value: &'static str,
    /// Full reward description
    pub description: &'static str,
}

impl fmt::Display for SpinReward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description, self.kind.as_str())
    }
}

/// The eight-segment reward wheel
pub const REWARDS: [SpinReward; 8] = [
    SpinReward {
        kind: RewardKind::Discount,
        value: "10%",
        description: "10% off your next order",
    },
    SpinReward {
        kind: RewardKind::Points,
        value: "50",
        description: "50 ElanVir Points",
    },
    SpinReward {
        kind: RewardKind::Discount,
        value: "15%",
        description: "15% off luxury items",
    },
    SpinReward {
        kind: RewardKind::Points,
        value: "100",
        description: "100 ElanVir Points",
    },
    SpinReward {
        kind: RewardKind::Shipping,
        value: "Free",
        description: "Free express shipping",
    },
    SpinReward {
        kind: RewardKind::Discount,
        value: "20%",
        description: "20% off featured items",
    },
    SpinReward {
        kind: RewardKind::Points,
        value: "25",
        description: "25 ElanVir Points",
    },
    SpinReward {
        kind: RewardKind::Discount,
        value: "5%",
        description: "5% off everything",
    },
];

/// Gates reward draws to one per calendar day
///
/// The date is injected as a plain string so callers (and tests) control
/// day boundaries; the tracker only compares for equality with the
/// persisted value under [`DAILY_SPIN_KEY`].
pub struct SpinTracker<'s, S: PreferenceStore> {
    store: &'s mut S,
}

impl<'s, S: PreferenceStore> SpinTracker<'s, S> {
    /// Create a tracker over a preference store
    pub const fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// The persisted last-spin date, if any
    pub fn last_spin_date(&self) -> Option<String> {
        self.store.get(DAILY_SPIN_KEY)
    }

    /// Draw a reward unless one was already drawn `today`
    ///
    /// Returns `None` without touching the store when the persisted date
    /// equals `today`; otherwise records `today` and returns the drawn
    /// segment.
    ///
    /// # Errors
    ///
    /// Returns an error if recording the spin date fails
    pub fn spin(
        &mut self,
        selector: &mut RandomSelector,
        today: &str,
    ) -> crate::io::error::Result<Option<SpinReward>> {
        if self.last_spin_date().as_deref() == Some(today) {
            return Ok(None);
        }

        let index = selector.pick_index(REWARDS.len());
        let Some(reward) = REWARDS.get(index).copied() else {
            return Ok(None);
        };

        self.store.set(DAILY_SPIN_KEY, today.to_string())?;
        Ok(Some(reward))
    }
}
