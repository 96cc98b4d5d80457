//! Dictionary module - Render Eijiro search results
//!
//! Provides:
//! - document: Selectors, noise stripping and entry lookup on a results page
//! - format: Colored rendering of entries, definition lists and suggestions
//! - api: The lookup command

pub mod api;
pub mod document;
pub mod format;
