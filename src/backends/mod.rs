//! Backends module - Page retrieval
//!
//! Provides:
//! - fetch: HTTP retrieval and saved-page loading

pub mod fetch;
