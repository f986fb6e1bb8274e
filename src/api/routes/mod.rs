//! API route handlers
//!
//! Handlers are organized by domain:
//! - [`files`] — File record metadata
//! - [`system`] — Health check and OpenAPI spec

mod files;
mod system;

// Re-export all handlers so `routes::function_name` continues to work
pub use files::*;
pub use system::*;
