//! Frame scheduling.
//!
//! A component that animates calls [`FrameScheduler::request_tick`] at the end
//! of each tick. The host fires the tick once before the next repaint and
//! pauses on its own while the page is hidden.

/// Host facility that runs a tick once before the next repaint.
pub trait FrameScheduler {
    /// Requests one future tick.
    ///
    /// Returns `false` without scheduling anything if a tick is already
    /// pending, so at most one tick is ever outstanding.
    fn request_tick(&mut self) -> bool;
}

/// Scheduler driven by hand, for tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualScheduler {
    pending: bool,
    requested: u64,
    fired: u64,
}

impl ManualScheduler {
    /// Creates a scheduler with nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: false,
            requested: 0,
            fired: 0,
        }
    }

    /// Returns true if a tick is waiting to fire.
    #[must_use]
    pub const fn has_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the pending tick. Returns false if none was pending.
    pub fn fire(&mut self) -> bool {
        if !self.pending {
            return false;
        }
        self.pending = false;
        self.fired += 1;
        true
    }

    /// Number of accepted requests.
    #[must_use]
    pub const fn requested(&self) -> u64 {
        self.requested
    }

    /// Number of ticks fired.
    #[must_use]
    pub const fn fired(&self) -> u64 {
        self.fired
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_tick(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        self.requested += 1;
        true
    }
}

/// Latest value waiting for the next tick.
///
/// Repeated submits before the tick fires overwrite each other, so each tick
/// applies only the newest value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coalesced<T> {
    latest: Option<T>,
}

impl<T> Default for Coalesced<T> {
    fn default() -> Self {
        Self { latest: None }
    }
}

impl<T> Coalesced<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// Stores `value` and asks for a tick. Returns whether a new tick was
    /// scheduled (false when one is already pending).
    pub fn submit(&mut self, value: T, scheduler: &mut impl FrameScheduler) -> bool {
        self.latest = Some(value);
        scheduler.request_tick()
    }

    /// Drops the waiting value; the pending tick then applies nothing.
    pub fn cancel(&mut self) {
        self.latest = None;
    }

    /// Takes the value for the tick that is firing.
    pub fn take(&mut self) -> Option<T> {
        self.latest.take()
    }

    /// Returns true if a value is waiting.
    #[must_use]
    pub const fn is_waiting(&self) -> bool {
        self.latest.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coalesces_requests() {
        let mut scheduler = ManualScheduler::new();
        assert!(scheduler.request_tick());
        assert!(!scheduler.request_tick());
        assert_eq!(scheduler.requested(), 1);

        assert!(scheduler.fire());
        assert!(!scheduler.fire());
        assert_eq!(scheduler.fired(), 1);
    }

    #[test]
    fn test_coalesced_keeps_only_the_newest_value() {
        let mut scheduler = ManualScheduler::new();
        let mut slot = Coalesced::new();
        assert!(slot.submit(1, &mut scheduler));
        assert!(!slot.submit(2, &mut scheduler));
        assert!(!slot.submit(3, &mut scheduler));
        assert_eq!(scheduler.requested(), 1);

        assert!(scheduler.fire());
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_coalesced_cancel_leaves_tick_empty() {
        let mut scheduler = ManualScheduler::new();
        let mut slot = Coalesced::new();
        slot.submit("rotate", &mut scheduler);
        slot.cancel();
        assert!(!slot.is_waiting());
        assert!(scheduler.fire());
        assert_eq!(slot.take(), None);

        // A later move schedules afresh.
        assert!(slot.submit("again", &mut scheduler));
        assert_eq!(scheduler.requested(), 2);
    }
}
