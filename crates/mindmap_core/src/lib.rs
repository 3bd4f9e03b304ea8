//! Core logic for the mind-map viewer.
//! This crate owns every navigation, search and layout rule; front ends only render.

pub mod app;
pub mod avatar;
pub mod data;
pub mod layout;
pub mod logging;
pub mod model;
pub mod search;
pub mod state;
pub mod timer;

pub use app::MindMapApp;
pub use avatar::GuideAvatar;
pub use data::loader::{
    load_failure_message, load_mind_map, parse_mind_map, DataSource, LoadError, LoadResult,
    LoadStatus,
};
pub use layout::animation::NodeAnimationState;
pub use layout::circle::{domain_positions, DomainPosition};
pub use layout::zoom::{PinchTracker, TouchPoint, ZoomState};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LogSettings};
pub use model::node::{
    validate_tree, MindMapNode, NodeContent, NodeId, NodeKind, TreeValidationError,
};
pub use search::engine::{search, MatchField, SearchHit, MAX_SEARCH_RESULTS};
pub use search::session::{match_badge_text, SearchSession};
pub use state::view_state::ViewState;
pub use timer::{TimerId, TimerQueue};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
