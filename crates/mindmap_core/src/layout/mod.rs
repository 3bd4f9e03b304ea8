//! Presentation adapters for the map view.
//!
//! # Responsibility
//! - Derive render-ready values (positions, zoom level, animation labels)
//!   from view-state without touching markup or styling.
//!
//! # Invariants
//! - Every adapter is total: no input makes it panic or divide by zero.

pub mod animation;
pub mod circle;
pub mod zoom;
