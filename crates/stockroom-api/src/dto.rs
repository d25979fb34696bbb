//! Wire types for the REST boundary

use serde::{Deserialize, Serialize};
use stockroom_core::{CategoryDraft, ProductDraft, ProductWithCategory};

/// Products per page; the product list is always paged at this size
pub const PAGE_SIZE: usize = 10;

/// Request body for category create/update
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryBody {
    pub name: String,
}

impl From<CategoryBody> for CategoryDraft {
    fn from(body: CategoryBody) -> Self {
        CategoryDraft { name: body.name }
    }
}

/// Request body for product create/update
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBody {
    pub category_id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price_cents: i64,
    pub quantity: u32,
}

impl From<ProductBody> for ProductDraft {
    fn from(body: ProductBody) -> Self {
        ProductDraft {
            category_id: body.category_id,
            name: body.name,
            description: body.description,
            price_cents: body.price_cents,
            quantity: body.quantity,
        }
    }
}

/// Query parameters for the product list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListQuery {
    /// Raw 1-based page number; parsed leniently, see `resolved_page`
    #[serde(default)]
    pub page: Option<String>,
}

impl ProductListQuery {
    /// Resolve the effective page number
    ///
    /// Missing, non-numeric, and sub-1 values all mean page 1.
    pub fn resolved_page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&page| page >= 1)
            .unwrap_or(1)
    }
}

/// Response body for the product list endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductWithCategory>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

/// JSON error payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
