//! Saved outfit collections and the canvas reorder operation

use crate::catalog::{Category, Product};
use crate::io::configuration::OUTFITS_KEY;
use crate::io::store::PreferenceStore;
use serde::{Deserialize, Serialize};

/// Horizontal canvas offset for newly placed items
const PLACEMENT_X: f64 = 50.0;
/// Vertical base offset for newly placed items
const PLACEMENT_Y_BASE: f64 = 50.0;
/// Vertical step between successively placed items
const PLACEMENT_Y_STEP: f64 = 20.0;

/// Position of an item on the outfit canvas
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasPosition {
    /// Horizontal offset
    pub x: f64,
    /// Vertical offset
    pub y: f64,
}

/// Snapshot of a catalog product placed on the canvas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutfitItem {
    /// Source product id
    pub id: u32,
    /// Product name at placement time
    pub name: String,
    /// Product price at placement time
    pub price: f64,
    /// Product category at placement time
    pub category: Category,
    /// Canvas position
    pub position: CanvasPosition,
}

/// A named, persistable outfit
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    /// Unique outfit identifier
    pub id: String,
    /// User-chosen name
    pub name: String,
    /// Placed items in canvas order
    pub items: Vec<OutfitItem>,
    /// ISO-8601 creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Whether the outfit is shared publicly
    #[serde(rename = "isPublic")]
    pub is_public: bool,
}

impl Outfit {
    /// Create an empty private outfit
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            created_at: created_at.into(),
            is_public: false,
        }
    }

    /// Place a catalog product on the canvas
    ///
    /// New items land at a fixed horizontal offset with a vertical step per
    /// existing item. A product already on the canvas (same id) is rejected
    /// and `false` is returned.
    pub fn add_product(&mut self, product: &Product) -> bool {
        if self.items.iter().any(|item| item.id == product.id) {
            return false;
        }

        let step = self.items.len() as f64;
        self.items.push(OutfitItem {
            id: product.id,
            name: product.name.to_string(),
            price: product.price,
            category: product.category,
            position: CanvasPosition {
                x: PLACEMENT_X,
                y: PLACEMENT_Y_STEP.mul_add(step, PLACEMENT_Y_BASE),
            },
        });
        true
    }

    /// Sum of item prices
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }
}

/// Move an item from one canvas index to another
///
/// Splice semantics: the item is removed at `from` and reinserted at `to`
/// within the shortened list. Indices outside the original list leave the
/// list unchanged.
pub fn reorder<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    let insert_at = to.min(items.len());
    items.insert(insert_at, item);
}

/// Load all saved outfits
///
/// # Errors
///
/// Returns an error if a stored blob exists but cannot be parsed
pub fn load_outfits<S: PreferenceStore>(store: &S) -> crate::io::error::Result<Vec<Outfit>> {
    Ok(store.get_json(OUTFITS_KEY)?.unwrap_or_default())
}

/// Append an outfit to the saved collection
///
/// # Errors
///
/// Returns an error if loading, serialization or the store write fails
pub fn save_outfit<S: PreferenceStore>(
    store: &mut S,
    outfit: Outfit,
) -> crate::io::error::Result<()> {
    let mut outfits = load_outfits(store)?;
    outfits.push(outfit);
    store.set_json(OUTFITS_KEY, &outfits)
}
