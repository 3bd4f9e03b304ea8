//! Search input session.
//!
//! # Responsibility
//! - Hold query text and the active/focused flags of the search box.
//! - Turn Escape, result picks and deferred focus/blur into state changes.
//!
//! # Invariants
//! - Results are never stored; they are recomputed from the query and the
//!   current root on every read.
//! - Deferred timers are fire-and-forget; their handlers re-check state and
//!   no-op when it has moved on.

use crate::search::engine::{search, MatchField, SearchHit};
use crate::state::view_state::ViewState;
use crate::timer::{TimerId, TimerQueue};
use log::debug;
use std::time::Duration;

/// Delay before focus is moved into the search input after activation.
pub const FOCUS_DELAY: Duration = Duration::from_millis(100);
/// Delay before blur takes effect, so a click on a result can land first.
pub const BLUR_DELAY: Duration = Duration::from_millis(200);

/// State of the search box for one UI session.
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    active: bool,
    focused: bool,
    focus_requested: bool,
    focus_timer: Option<TimerId>,
    blur_timer: Option<TimerId>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw query text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replaces the query text. Results follow immediately, with no debounce.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Ranked hits for the current query against the view's root.
    pub fn results<'a>(&self, view: &'a ViewState) -> Vec<SearchHit<'a>> {
        search(&self.query, view.root())
    }

    /// Input gained focus: activates search and defers the focus request.
    pub fn focus(&mut self, timers: &mut TimerQueue) {
        self.focused = true;
        self.active = true;
        self.blur_timer = None;
        self.focus_timer = Some(timers.schedule_once(FOCUS_DELAY));
    }

    /// Input lost focus: clears the focused flag after [`BLUR_DELAY`].
    pub fn blur(&mut self, timers: &mut TimerQueue) {
        self.blur_timer = Some(timers.schedule_once(BLUR_DELAY));
    }

    /// Empties the query and closes the result panel.
    pub fn clear(&mut self) {
        self.query.clear();
        self.active = false;
    }

    /// Escape key handler.
    pub fn escape(&mut self) {
        debug!("event=search_escape module=search");
        self.clear();
        self.focus_requested = false;
    }

    /// Selects the hit with `node_id` in `view` and closes the search.
    ///
    /// Returns `false` when the node is not in the current tree; the search is
    /// left open in that case.
    pub fn select_result(&mut self, node_id: &str, view: &mut ViewState) -> bool {
        if !view.select_by_id(node_id) {
            return false;
        }
        self.clear();
        true
    }

    /// Handles a fired timer. Ids this session does not own are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.focus_timer == Some(id) {
            self.focus_timer = None;
            if self.active {
                self.focus_requested = true;
            }
        } else if self.blur_timer == Some(id) {
            self.blur_timer = None;
            self.focused = false;
        }
    }

    /// Consumes a pending request to move keyboard focus into the input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

/// Short badge describing where a hit matched.
pub fn match_badge_text(fields: &[MatchField]) -> &'static str {
    if fields.contains(&MatchField::TitleExact) || fields.contains(&MatchField::Title) {
        "Title"
    } else if fields.contains(&MatchField::Description) {
        "Description"
    } else if fields.contains(&MatchField::Content) {
        "Content"
    } else {
        "Match"
    }
}
