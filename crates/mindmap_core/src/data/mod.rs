//! Data source entry points.
//!
//! # Responsibility
//! - Load the single mind-map JSON document.
//! - Report load progress and failures in a UI-ready shape.

pub mod loader;
