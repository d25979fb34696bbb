use serde::{Deserialize, Serialize};

use super::category::Category;

/// Product - an inventory item belonging to exactly one category
///
/// `category_id` is checked against the category collection at every write;
/// reads that find it unresolvable treat that as an invariant violation,
/// not a normal miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,

    /// Id of the category this product belongs to
    pub category_id: u64,

    /// Human-readable name
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Unit price in integer cents
    pub price_cents: i64,

    /// Units currently in stock
    pub quantity: u32,
}

/// The non-id fields of a product
///
/// Used both for creation and for full-replacement update. The
/// `category_id` must resolve to an existing category at the time of the
/// write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Id of the category this product belongs to
    pub category_id: u64,

    /// Human-readable name (must not be blank)
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Unit price in integer cents
    pub price_cents: i64,

    /// Units currently in stock
    pub quantity: u32,
}

/// A product joined with its resolved category
///
/// Produced at read time, never stored. Serializes as the product's fields
/// with an embedded `category` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductWithCategory {
    /// The product record
    #[serde(flatten)]
    pub product: Product,

    /// The category the product's `category_id` resolved to
    pub category: Category,
}
