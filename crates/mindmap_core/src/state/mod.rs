//! Session view-state.
//!
//! # Responsibility
//! - Own navigation state mutated by selection events.
//! - Expose derived views consumed by sidebar, breadcrumb and map renderers.

pub mod view_state;
