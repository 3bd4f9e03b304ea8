//! Deterministic timer queue driven by the host event loop.
//!
//! # Responsibility
//! - Keep one-shot and repeating timers on a virtual clock.
//! - Report fired timers so owners can dispatch them on the UI thread.
//!
//! # Invariants
//! - Time only moves through [`TimerQueue::advance`].
//! - Fired ids are reported in due order; ties keep scheduling order.
//! - A cancelled timer never fires again.
//! - Timer ids are never reused within one queue.
//! - `advance` always returns: a repeating timer fires at most
//!   [`MAX_CATCH_UP_FIRINGS`] times per call, and is retired once its next
//!   due time no longer fits in a `Duration`.

use log::trace;
use std::collections::BTreeMap;
use std::time::Duration;

/// Smallest accepted repeating period.
pub const MIN_TIMER_PERIOD: Duration = Duration::from_millis(1);
/// Firings reported per repeating timer in one `advance`; later periods are skipped.
pub const MAX_CATCH_UP_FIRINGS: u32 = 32;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Handle to one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct TimerEntry {
    id: TimerId,
    due: Duration,
    period: Option<Duration>,
}

/// Single-threaded timer queue with a virtual clock.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed virtual time since the queue was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that can still fire.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Schedules a timer that fires once after `delay`.
    pub fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.push(delay, None)
    }

    /// Schedules a timer that fires every `period` until cancelled.
    ///
    /// Periods below [`MIN_TIMER_PERIOD`] are raised to it.
    pub fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(MIN_TIMER_PERIOD);
        self.push(period, Some(period))
    }

    /// Cancels `id`. Returns `false` when it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            trace!("event=timer_cancel module=timer id={}", id.0);
        }
        removed
    }

    /// Advances the clock by `elapsed` and returns every timer that fired.
    ///
    /// Repeating timers re-arm and can appear several times in one call, up
    /// to [`MAX_CATCH_UP_FIRINGS`]; after that they jump to their first due
    /// time past the new clock.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        let target = self.now.saturating_add(elapsed);
        let mut fired = Vec::new();
        let mut repeats = BTreeMap::<TimerId, u32>::new();

        while let Some(index) = self.next_due_index(target) {
            let TimerEntry { id, due, period } = self.entries[index].clone();
            self.now = due;
            fired.push(id);

            let Some(period) = period else {
                self.entries.remove(index);
                continue;
            };
            let count = repeats.entry(id).or_insert(0);
            *count += 1;
            let next_due = if *count < MAX_CATCH_UP_FIRINGS {
                due.checked_add(period)
            } else {
                first_due_after(due, period, target)
            };
            match next_due {
                Some(next_due) => self.entries[index].due = next_due,
                None => {
                    trace!("event=timer_exhausted module=timer id={}", id.0);
                    self.entries.remove(index);
                }
            }
        }

        self.now = target;
        if !fired.is_empty() {
            trace!(
                "event=timer_advance module=timer fired={} pending={}",
                fired.len(),
                self.entries.len()
            );
        }
        fired
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            id,
            due: self.now.saturating_add(delay),
            period,
        });
        id
    }

    /// Earliest entry due at or before `target`; ties resolve to the lowest id.
    fn next_due_index(&self, target: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= target)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(index, _)| index)
    }
}

/// First `due + k * period` (k >= 1) strictly after `target`, or `None` past `Duration::MAX`.
fn first_due_after(due: Duration, period: Duration, target: Duration) -> Option<Duration> {
    let period_nanos = period.as_nanos();
    let steps = target.saturating_sub(due).as_nanos() / period_nanos + 1;
    let nanos = due
        .as_nanos()
        .checked_add(period_nanos.checked_mul(steps)?)?;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).ok()?;
    let subsec = u32::try_from(nanos % NANOS_PER_SEC).ok()?;
    Some(Duration::new(secs, subsec))
}
