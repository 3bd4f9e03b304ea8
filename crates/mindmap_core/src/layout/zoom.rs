//! Zoom level state and two-finger pinch tracking.
//!
//! # Invariants
//! - The zoom level is always within `[MIN_ZOOM, MAX_ZOOM]`.
//! - Pinch scaling is incremental: each move scales by the ratio to the last
//!   sampled distance, never to the gesture's starting distance.

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 2.0;
/// Initial and reset zoom level.
pub const DEFAULT_ZOOM: f64 = 1.0;
/// Increment for one zoom-in/zoom-out step.
pub const ZOOM_STEP: f64 = 0.25;

/// Current zoom of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    level: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            level: DEFAULT_ZOOM,
        }
    }
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn zoom_in(&mut self) {
        self.set_level(self.level + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_level(self.level - ZOOM_STEP);
    }

    pub fn reset(&mut self) {
        self.level = DEFAULT_ZOOM;
    }

    /// Sets the level clamped to bounds. Non-finite values are ignored.
    pub fn set_level(&mut self, level: f64) {
        if level.is_finite() {
            self.level = level.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn can_zoom_in(&self) -> bool {
        self.level < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.level > MIN_ZOOM
    }
}

/// One active touch point in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &TouchPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Tracks the inter-finger distance of a two-finger pinch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchTracker {
    last_distance: Option<f64>,
}

impl PinchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the starting distance when exactly two touches are down.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.last_distance = pinch_distance(touches);
    }

    /// Scales `zoom` by the distance ratio since the last sample.
    ///
    /// Moves with a touch count other than two are ignored. A zero previous
    /// distance only re-samples, so the ratio never divides by zero.
    pub fn touch_move(&mut self, touches: &[TouchPoint], zoom: &mut ZoomState) {
        let Some(current) = pinch_distance(touches) else {
            return;
        };

        if let Some(last) = self.last_distance.filter(|last| *last > 0.0) {
            zoom.set_level(zoom.level() * (current / last));
        }
        self.last_distance = Some(current);
    }

    pub fn touch_end(&mut self) {
        self.last_distance = None;
    }

    pub fn is_pinching(&self) -> bool {
        self.last_distance.is_some()
    }
}

fn pinch_distance(touches: &[TouchPoint]) -> Option<f64> {
    match touches {
        [first, second] => Some(first.distance_to(second)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{PinchTracker, TouchPoint, ZoomState, MAX_ZOOM};

    #[test]
    fn set_level_ignores_nan() {
        let mut zoom = ZoomState::new();
        zoom.set_level(f64::NAN);
        assert_eq!(zoom.level(), 1.0);
        zoom.set_level(f64::INFINITY);
        assert_eq!(zoom.level(), 1.0);
    }

    #[test]
    fn single_touch_does_not_start_pinch() {
        let mut pinch = PinchTracker::new();
        pinch.touch_start(&[TouchPoint::new(0.0, 0.0)]);
        assert!(!pinch.is_pinching());
    }

    #[test]
    fn zero_start_distance_resamples_without_scaling() {
        let mut pinch = PinchTracker::new();
        let mut zoom = ZoomState::new();
        pinch.touch_start(&[TouchPoint::new(1.0, 1.0), TouchPoint::new(1.0, 1.0)]);
        pinch.touch_move(
            &[TouchPoint::new(0.0, 0.0), TouchPoint::new(10.0, 0.0)],
            &mut zoom,
        );
        assert_eq!(zoom.level(), 1.0);

        pinch.touch_move(
            &[TouchPoint::new(0.0, 0.0), TouchPoint::new(100.0, 0.0)],
            &mut zoom,
        );
        assert_eq!(zoom.level(), MAX_ZOOM);
    }
}
