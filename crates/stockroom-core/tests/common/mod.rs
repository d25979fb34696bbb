use stockroom_core::ops::{category_ops, product_ops};
use stockroom_core::{Category, CategoryDraft, Product, ProductDraft, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a category through the real operation, returning the stored record
#[allow(dead_code)]
pub fn create_test_category(store: &mut Store, name: &str) -> Category {
    category_ops::create_category(store, CategoryDraft::new(name)).unwrap()
}

/// Draft for a product in the given category, with placeholder inventory fields
#[allow(dead_code)]
pub fn product_draft(category_id: u64, name: &str) -> ProductDraft {
    ProductDraft {
        category_id,
        name: name.to_string(),
        description: None,
        price_cents: 1_000,
        quantity: 5,
    }
}

/// Create a product through the real operation, returning the stored record
#[allow(dead_code)]
pub fn create_test_product(store: &mut Store, category_id: u64, name: &str) -> Product {
    product_ops::create_product(store, product_draft(category_id, name)).unwrap()
}
