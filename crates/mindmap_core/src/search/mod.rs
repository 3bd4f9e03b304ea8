//! Search entry points.
//!
//! # Responsibility
//! - Score and rank tree nodes against free-text queries in memory.
//! - Keep search box state (query, focus, Escape) next to the engine it drives.

pub mod engine;
pub mod session;
