//! App session wiring for one UI lifetime.
//!
//! # Responsibility
//! - Own load status, view-state, search, zoom, pinch, avatar and timers.
//! - Route load completion and timer ticks to their owners.
//!
//! # Invariants
//! - A failed load leaves the view-state empty and stops loading.
//! - Timer ids are dispatched to every owner; owners ignore ids they did not schedule.

use crate::avatar::GuideAvatar;
use crate::data::loader::{load_failure_message, LoadError, LoadStatus};
use crate::layout::zoom::{PinchTracker, ZoomState};
use crate::model::node::MindMapNode;
use crate::search::session::SearchSession;
use crate::state::view_state::ViewState;
use crate::timer::TimerQueue;
use log::{error, info};
use std::time::Duration;

/// Headless state behind the mind-map screen.
#[derive(Debug)]
pub struct MindMapApp {
    pub status: LoadStatus,
    pub view: ViewState,
    pub search: SearchSession,
    pub zoom: ZoomState,
    pub pinch: PinchTracker,
    pub avatar: GuideAvatar,
    pub timers: TimerQueue,
}

impl Default for MindMapApp {
    fn default() -> Self {
        Self::new()
    }
}

impl MindMapApp {
    /// Starts a session in the loading state with the avatar mounted.
    pub fn new() -> Self {
        let mut timers = TimerQueue::new();
        let avatar = GuideAvatar::mount(&mut timers);
        Self {
            status: LoadStatus::Loading,
            view: ViewState::new(),
            search: SearchSession::new(),
            zoom: ZoomState::new(),
            pinch: PinchTracker::new(),
            avatar,
            timers,
        }
    }

    /// Applies the outcome of the one-shot data load.
    pub fn finish_load(&mut self, result: Result<MindMapNode, LoadError>) {
        match result {
            Ok(root) => {
                self.view.set_root(root);
                self.status = LoadStatus::Ready;
                info!("event=app_ready module=app status=ok");
            }
            Err(err) => {
                let message = load_failure_message(&err);
                error!("event=app_ready module=app status=error error={err}");
                self.status = LoadStatus::Failed { message };
            }
        }
    }

    /// Advances timers by `elapsed` and dispatches every fired id.
    pub fn tick(&mut self, elapsed: Duration) {
        for id in self.timers.advance(elapsed) {
            self.avatar.on_timer(id);
            self.search.on_timer(id);
        }
    }

    /// Tears the session down; repeating timers stop firing.
    pub fn shutdown(&mut self) {
        self.avatar.unmount(&mut self.timers);
    }
}
