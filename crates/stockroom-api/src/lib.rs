//! Stockroom API - HTTP boundary for the inventory repository
//!
//! Translates REST requests into repository calls and maps the
//! repository's error taxonomy onto status codes: validation and reference
//! failures become 400, missing entities become 404, and invariant
//! violations become 500 (logged as defects, never swallowed).
//!
//! The repository itself is synchronous; the async surface here is
//! boundary plumbing only.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
