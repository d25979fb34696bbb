//! Product CRUD and paged read operations
//!
//! Product writes check the category reference at write time; product reads
//! join the category and treat a failed join as an invariant violation
//! rather than a normal miss.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::store::Store;
use super::validate_name;
use crate::errors::{Result, StockroomError};
use crate::model::{Product, ProductDraft, ProductWithCategory};

/// One page of products joined with their categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products on this page, in insertion order
    pub products: Vec<ProductWithCategory>,

    /// Full unfiltered product count, regardless of page
    pub total: usize,
}

/// Resolve a product's category, treating a miss as an invariant violation
///
/// Writes guarantee the reference exists at write time, so a miss here
/// means a category was deleted out from under a stored product.
fn join_category(store: &Store, product: &Product) -> Result<ProductWithCategory> {
    let category = match store.get_category(product.category_id) {
        Some(category) => category,
        None => {
            error!(
                product_id = product.id,
                category_id = product.category_id,
                "stored product references a missing category"
            );
            return Err(StockroomError::DanglingCategoryReference {
                product_id: product.id,
                category_id: product.category_id,
            });
        }
    };

    Ok(ProductWithCategory {
        product: product.clone(),
        category: category.clone(),
    })
}

/// List one page of products with their categories resolved
///
/// `page` is 1-based. The page slices the full collection (insertion
/// order) over the half-open range `[(page-1)*page_size, page*page_size)`;
/// an out-of-range page yields an empty page, not an error. `total` is
/// always the full product count, regardless of page.
///
/// Only products on the selected page are joined, so a dangling reference
/// elsewhere in the collection does not fail this read.
///
/// # Errors
/// * `DanglingCategoryReference` - If a selected product's category no
///   longer exists
pub fn list_products(store: &Store, page: usize, page_size: usize) -> Result<ProductPage> {
    let total = store.product_count();

    let start = page.saturating_sub(1).saturating_mul(page_size);
    let products = store
        .products
        .values()
        .skip(start)
        .take(page_size)
        .map(|product| join_category(store, product))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProductPage { products, total })
}

/// Look up a product by id, with its category resolved
///
/// An absent id is `Ok(None)`; a present product whose category no longer
/// resolves is an error.
///
/// # Errors
/// * `DanglingCategoryReference` - If the product's category no longer
///   exists
pub fn get_product(store: &Store, id: u64) -> Result<Option<ProductWithCategory>> {
    match store.get_product(id) {
        Some(product) => Ok(Some(join_category(store, product)?)),
        None => Ok(None),
    }
}

/// Create a new product
///
/// The draft's category reference is checked first; on success the next
/// unused product id is assigned. The returned record does not embed the
/// category.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `draft` - The non-id fields of the new product
///
/// # Errors
/// * `UnknownCategoryReference` - If the draft's category id does not
///   resolve
/// * `InvalidField` - If the name is empty or whitespace-only
pub fn create_product(store: &mut Store, draft: ProductDraft) -> Result<Product> {
    if !store.contains_category(draft.category_id) {
        return Err(StockroomError::UnknownCategoryReference {
            category_id: draft.category_id,
        });
    }
    validate_name(&draft.name)?;

    let id = store.alloc_product_id();
    let product = Product {
        id,
        category_id: draft.category_id,
        name: draft.name,
        description: draft.description,
        price_cents: draft.price_cents,
        quantity: draft.quantity,
    };
    store.insert_product(product.clone());

    debug!(product_id = id, "product created");
    Ok(product)
}

/// Replace a product's non-id fields
///
/// The category reference is checked before product existence, matching
/// the create path.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `id` - The product id to update
/// * `draft` - Replacement values for every non-id field
///
/// # Errors
/// * `UnknownCategoryReference` - If the draft's category id does not
///   resolve
/// * `ProductNotFound` - If the product id does not resolve
/// * `InvalidField` - If the name is empty or whitespace-only
pub fn update_product(store: &mut Store, id: u64, draft: ProductDraft) -> Result<Product> {
    if !store.contains_category(draft.category_id) {
        return Err(StockroomError::UnknownCategoryReference {
            category_id: draft.category_id,
        });
    }
    if !store.contains_product(id) {
        return Err(StockroomError::ProductNotFound { product_id: id });
    }
    validate_name(&draft.name)?;

    let product = Product {
        id,
        category_id: draft.category_id,
        name: draft.name,
        description: draft.description,
        price_cents: draft.price_cents,
        quantity: draft.quantity,
    };
    store.insert_product(product.clone());

    debug!(product_id = id, "product updated");
    Ok(product)
}

/// Delete a product by id
///
/// Unconditional: products are never referenced by anything else.
///
/// # Errors
/// * `ProductNotFound` - If the id does not resolve
pub fn delete_product(store: &mut Store, id: u64) -> Result<()> {
    if store.remove_product(id).is_none() {
        return Err(StockroomError::ProductNotFound { product_id: id });
    }

    debug!(product_id = id, "product deleted");
    Ok(())
}
