//! Guide avatar with rotating greetings and an auto-hiding tooltip.
//!
//! # Invariants
//! - Greeting and sub-message always rotate together.
//! - After `unmount` no timer callback changes state.

use crate::timer::{TimerId, TimerQueue};
use log::debug;
use std::time::Duration;

/// Interval between greeting rotations.
pub const GREETING_ROTATION_PERIOD: Duration = Duration::from_millis(6_000);
/// Delay before the tooltip hides itself after mount.
pub const TOOLTIP_AUTO_HIDE_DELAY: Duration = Duration::from_millis(8_000);

const GREETINGS: [&str; 4] = [
    "Hello! I'm your AI Experience Agent.",
    "Welcome to the future of AI-powered solutions!",
    "Let me guide you through intelligent experiences.",
    "Ready to explore AI capabilities?",
];

const SUB_MESSAGES: [&str; 4] = [
    "Click any node to explore intelligent solutions",
    "Discover transformative AI technologies",
    "Navigate through domains and subtopics",
    "Experience the power of AI integration",
];

/// Avatar view-model owned by the app session.
#[derive(Debug, Default)]
pub struct GuideAvatar {
    index: usize,
    tooltip_visible: bool,
    mounted: bool,
    rotation_timer: Option<TimerId>,
    tooltip_timer: Option<TimerId>,
}

impl GuideAvatar {
    /// Shows the tooltip and starts the rotation and auto-hide timers.
    pub fn mount(timers: &mut TimerQueue) -> Self {
        Self {
            index: 0,
            tooltip_visible: true,
            mounted: true,
            rotation_timer: Some(timers.schedule_repeating(GREETING_ROTATION_PERIOD)),
            tooltip_timer: Some(timers.schedule_once(TOOLTIP_AUTO_HIDE_DELAY)),
        }
    }

    /// Cancels the rotation timer. The tooltip one-shot is left to fire and no-op.
    pub fn unmount(&mut self, timers: &mut TimerQueue) {
        if let Some(id) = self.rotation_timer.take() {
            timers.cancel(id);
        }
        self.mounted = false;
        debug!("event=avatar_unmount module=avatar");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn greeting(&self) -> &'static str {
        GREETINGS[self.index]
    }

    pub fn sub_message(&self) -> &'static str {
        SUB_MESSAGES[self.index]
    }

    pub fn tooltip_visible(&self) -> bool {
        self.tooltip_visible
    }

    /// Avatar click toggles the tooltip.
    pub fn click(&mut self) {
        self.tooltip_visible = !self.tooltip_visible;
    }

    /// Handles a fired timer. Ids this avatar does not own are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if !self.mounted {
            return;
        }
        if self.rotation_timer == Some(id) {
            self.index = (self.index + 1) % GREETINGS.len();
        } else if self.tooltip_timer == Some(id) {
            self.tooltip_timer = None;
            self.tooltip_visible = false;
        }
    }
}
