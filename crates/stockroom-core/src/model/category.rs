use serde::{Deserialize, Serialize};

/// Category - a named grouping that products reference
///
/// Categories are flat: there is no nesting and no ordering beyond the
/// order they were created in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, assigned by the store and never reused
    pub id: u64,

    /// Human-readable name
    pub name: String,
}

/// The non-id fields of a category
///
/// Used both for creation and for full-replacement update: an update
/// replaces every field of the stored record except its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    /// Human-readable name (must not be blank)
    pub name: String,
}

impl CategoryDraft {
    /// Create a draft with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
