//! Category CRUD operations

use tracing::debug;

use super::store::Store;
use super::validate_name;
use crate::errors::{Result, StockroomError};
use crate::model::{Category, CategoryDraft};

/// List all categories in insertion order
pub fn list_categories(store: &Store) -> Vec<Category> {
    store.categories.values().cloned().collect()
}

/// Look up a category by id
///
/// An absent id is `None`, never an error.
pub fn get_category(store: &Store, id: u64) -> Option<Category> {
    store.get_category(id).cloned()
}

/// Create a new category
///
/// Assigns the next unused category id. Ids increase monotonically and are
/// never reused, even after interleaved deletes.
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `draft` - The non-id fields of the new category
///
/// # Returns
/// The full stored record, including its assigned id
///
/// # Errors
/// * `InvalidField` - If the name is empty or whitespace-only
pub fn create_category(store: &mut Store, draft: CategoryDraft) -> Result<Category> {
    validate_name(&draft.name)?;

    let id = store.alloc_category_id();
    let category = Category {
        id,
        name: draft.name,
    };
    store.insert_category(category.clone());

    debug!(category_id = id, "category created");
    Ok(category)
}

/// Replace a category's non-id fields
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `id` - The category id to update
/// * `draft` - Replacement values for every non-id field
///
/// # Returns
/// The updated record
///
/// # Errors
/// * `CategoryNotFound` - If the id does not resolve
/// * `InvalidField` - If the name is empty or whitespace-only
pub fn update_category(store: &mut Store, id: u64, draft: CategoryDraft) -> Result<Category> {
    if !store.contains_category(id) {
        return Err(StockroomError::CategoryNotFound { category_id: id });
    }
    validate_name(&draft.name)?;

    let category = Category {
        id,
        name: draft.name,
    };
    store.insert_category(category.clone());

    debug!(category_id = id, "category updated");
    Ok(category)
}

/// Delete a category by id
///
/// Referencing products are deliberately not checked or cascaded: a product
/// may be left pointing at the removed id, and a later product read
/// surfaces that as `DanglingCategoryReference`.
///
/// # Errors
/// * `CategoryNotFound` - If the id does not resolve
pub fn delete_category(store: &mut Store, id: u64) -> Result<()> {
    if store.remove_category(id).is_none() {
        return Err(StockroomError::CategoryNotFound { category_id: id });
    }

    debug!(category_id = id, "category deleted");
    Ok(())
}
