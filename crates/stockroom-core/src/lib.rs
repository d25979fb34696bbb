//! Stockroom Core - in-memory inventory repository
//!
//! This crate provides the domain models and repository operations for
//! stockroom, including:
//! - Category and Product models with full CRUD semantics
//! - Referential-integrity checks at product write time
//! - Page-sliced product listing with read-time category joins
//! - A stable error taxonomy for boundary-layer status mapping
//!
//! The store is a plain single-threaded value with no interior locking and
//! no I/O; the HTTP boundary owns whatever synchronization it needs.

pub mod errors;
pub mod logging;
pub mod model;
pub mod ops;

// Re-export commonly used types
pub use errors::{ErrorKind, Result, StockroomError};
pub use model::{Category, CategoryDraft, Product, ProductDraft, ProductWithCategory};
pub use ops::product_ops::ProductPage;
pub use ops::Store;
