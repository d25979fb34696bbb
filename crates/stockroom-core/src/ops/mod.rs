pub mod category_ops;
pub mod product_ops;
pub mod store;

pub use store::Store;

use crate::errors::{Result, StockroomError};

/// Validate a draft name
///
/// Shared by category and product writes: a name must contain at least one
/// non-whitespace character.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(StockroomError::InvalidField {
            field: "name",
            reason: "cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
