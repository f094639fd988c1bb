//! Product catalog reference data and tag set operations

/// Static ElanVir product catalog
pub mod data;
/// Product and category types
pub mod product;
/// Catalog tag universe and fixed-size tag sets
pub mod tags;

pub use data::catalog;
pub use product::{Category, Product};
pub use tags::{Tag, TagSet};
