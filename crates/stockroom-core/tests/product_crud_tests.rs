mod common;

use common::{create_test_category, create_test_product, new_store, product_draft};
use stockroom_core::ops::product_ops;
use stockroom_core::{ProductDraft, StockroomError};

// ===== CREATE PRODUCT TESTS =====

#[test]
fn test_create_product_requires_existing_category() {
    let mut store = new_store();

    let result = product_ops::create_product(&mut store, product_draft(1, "Hammer"));

    match result {
        Err(StockroomError::UnknownCategoryReference { category_id }) => {
            assert_eq!(category_id, 1);
        }
        _ => panic!("Expected UnknownCategoryReference error"),
    }
    assert_eq!(store.product_count(), 0);
}

#[test]
fn test_create_product_stores_draft_fields() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");

    let draft = ProductDraft {
        category_id: category.id,
        name: "Hammer".to_string(),
        description: Some("Claw hammer, 16oz".to_string()),
        price_cents: 1_299,
        quantity: 40,
    };
    let product = product_ops::create_product(&mut store, draft).unwrap();

    assert_eq!(product.id, 1);
    assert_eq!(product.category_id, category.id);
    assert_eq!(product.name, "Hammer");
    assert_eq!(product.description.as_deref(), Some("Claw hammer, 16oz"));
    assert_eq!(product.price_cents, 1_299);
    assert_eq!(product.quantity, 40);
}

#[test]
fn test_create_product_fails_on_blank_name() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");

    let result = product_ops::create_product(&mut store, product_draft(category.id, "  "));

    assert!(matches!(result, Err(StockroomError::InvalidField { .. })));
    assert_eq!(store.product_count(), 0);
}

// ===== READ PRODUCT TESTS =====

#[test]
fn test_get_product_absent_returns_none() {
    let store = new_store();
    assert!(product_ops::get_product(&store, 42).unwrap().is_none());
}

#[test]
fn test_get_product_joins_category() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");
    let product = create_test_product(&mut store, category.id, "Hammer");

    let joined = product_ops::get_product(&store, product.id)
        .unwrap()
        .unwrap();

    assert_eq!(joined.product.id, product.id);
    assert_eq!(joined.product.name, "Hammer");
    assert_eq!(joined.category.id, category.id);
    assert_eq!(joined.category.name, "Tools");
}

// ===== UPDATE PRODUCT TESTS =====

#[test]
fn test_update_product_unknown_category_reference() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");
    let product = create_test_product(&mut store, category.id, "Hammer");

    let result = product_ops::update_product(&mut store, product.id, product_draft(99, "Hammer"));

    match result {
        Err(StockroomError::UnknownCategoryReference { category_id }) => {
            assert_eq!(category_id, 99);
        }
        _ => panic!("Expected UnknownCategoryReference error"),
    }
    // Stored record unchanged
    assert_eq!(
        store.get_product(product.id).unwrap().category_id,
        category.id
    );
}

#[test]
fn test_update_product_not_found() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");

    let result = product_ops::update_product(&mut store, 7, product_draft(category.id, "Hammer"));

    match result {
        Err(StockroomError::ProductNotFound { product_id }) => assert_eq!(product_id, 7),
        _ => panic!("Expected ProductNotFound error"),
    }
    assert_eq!(store.product_count(), 0);
}

#[test]
fn test_update_product_reference_checked_before_existence() {
    let mut store = new_store();
    create_test_category(&mut store, "Tools");

    // Both the product and the referenced category are absent; the
    // reference failure wins, matching the create path
    let result = product_ops::update_product(&mut store, 7, product_draft(99, "Hammer"));

    assert!(matches!(
        result,
        Err(StockroomError::UnknownCategoryReference { .. })
    ));
}

#[test]
fn test_update_product_replaces_all_non_id_fields() {
    let mut store = new_store();
    let tools = create_test_category(&mut store, "Tools");
    let fasteners = create_test_category(&mut store, "Fasteners");
    let product = create_test_product(&mut store, tools.id, "Hammer");

    let draft = ProductDraft {
        category_id: fasteners.id,
        name: "Wood screws".to_string(),
        description: Some("Box of 100".to_string()),
        price_cents: 599,
        quantity: 12,
    };
    let updated = product_ops::update_product(&mut store, product.id, draft).unwrap();

    assert_eq!(updated.id, product.id);
    assert_eq!(updated.category_id, fasteners.id);
    assert_eq!(updated.name, "Wood screws");
    assert_eq!(updated.description.as_deref(), Some("Box of 100"));
    assert_eq!(updated.price_cents, 599);
    assert_eq!(updated.quantity, 12);
}

// ===== DELETE PRODUCT TESTS =====

#[test]
fn test_delete_product_then_get_returns_none() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");
    let product = create_test_product(&mut store, category.id, "Hammer");

    product_ops::delete_product(&mut store, product.id).unwrap();

    assert!(product_ops::get_product(&store, product.id)
        .unwrap()
        .is_none());
    assert_eq!(store.product_count(), 0);
}

#[test]
fn test_delete_product_not_found() {
    let mut store = new_store();

    let result = product_ops::delete_product(&mut store, 3);

    match result {
        Err(StockroomError::ProductNotFound { product_id }) => assert_eq!(product_id, 3),
        _ => panic!("Expected ProductNotFound error"),
    }
}

#[test]
fn test_product_ids_monotonic_after_interleaved_deletes() {
    let mut store = new_store();
    let category = create_test_category(&mut store, "Tools");

    let first = create_test_product(&mut store, category.id, "Hammer");
    let second = create_test_product(&mut store, category.id, "Saw");
    product_ops::delete_product(&mut store, first.id).unwrap();
    product_ops::delete_product(&mut store, second.id).unwrap();

    let third = create_test_product(&mut store, category.id, "Drill");
    assert_eq!(third.id, 3);
}
