use thiserror::Error;

/// Result type alias using StockroomError
pub type Result<T> = std::result::Result<T, StockroomError>;

/// Coarse classification of repository errors
///
/// Each kind carries a stable error code so the boundary layer can map
/// failures to status codes (and log them) without matching on individual
/// variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A draft field failed validation before any state change
    InvalidInput,

    /// An entity id did not resolve on update/delete
    NotFound,

    /// A product write named a category that does not exist
    Reference,

    /// A read discovered state that correctly guarded writes can never
    /// produce (dangling category reference)
    Invariant,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::Reference => "ERR_REFERENCE",
            ErrorKind::Invariant => "ERR_INVARIANT",
        }
    }
}

/// Error taxonomy for repository operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StockroomError {
    // ===== Lookup Failures =====
    /// Category not found in store
    #[error("Category not found: {category_id}")]
    CategoryNotFound { category_id: u64 },

    /// Product not found in store
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: u64 },

    // ===== Referential Integrity =====
    /// A product create/update named a category that does not exist
    #[error("Unknown category reference: {category_id}")]
    UnknownCategoryReference { category_id: u64 },

    /// A stored product's category no longer resolves
    ///
    /// Writes check the reference, so this can only appear after a category
    /// was deleted out from under a product. Surfacing it is a defect
    /// report, not a user-facing miss.
    #[error("Product {product_id} references missing category {category_id}")]
    DanglingCategoryReference { product_id: u64, category_id: u64 },

    // ===== Validation =====
    /// A draft field failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl StockroomError {
    /// Classify this error for boundary-layer mapping
    pub fn kind(&self) -> ErrorKind {
        match self {
            StockroomError::CategoryNotFound { .. } | StockroomError::ProductNotFound { .. } => {
                ErrorKind::NotFound
            }
            StockroomError::UnknownCategoryReference { .. } => ErrorKind::Reference,
            StockroomError::DanglingCategoryReference { .. } => ErrorKind::Invariant,
            StockroomError::InvalidField { .. } => ErrorKind::InvalidInput,
        }
    }
}
