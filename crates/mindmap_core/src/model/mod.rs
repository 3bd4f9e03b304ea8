//! Mind-map domain model.
//!
//! # Responsibility
//! - Define the node tree consumed by state, search and layout.
//! - Keep hierarchy validation next to the data shape it protects.
//!
//! # Invariants
//! - Every node is identified by an `id` unique within its tree.
//! - The model is read-only after load; views never mutate nodes.

pub mod node;
