//! Core module - Shared types and helpers
//!
//! This module provides:
//! - Lookup model (query, display range)
//! - Terminal styling and lookup configuration
//! - Text clean-up utilities

pub mod model;
pub mod render;
pub mod util;
