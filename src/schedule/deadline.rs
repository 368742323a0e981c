//! Single-slot deadline scheduler

use std::time::{Duration, Instant};

use crate::control::TickScheduler;

/// Identifies one scheduled tick. Handles are never reused, so a handle
/// from a canceled or superseded schedule compares unequal forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle(u64);

/// Deadline-based implementation of [`TickScheduler`].
///
/// Holds at most one pending deadline. The event loop derives its poll
/// timeout from [`DeadlineScheduler::time_until_due`] and fires the tick
/// via [`DeadlineScheduler::take_due`] once the deadline passes, so ticks
/// fire cooperatively on the loop thread and cancellation is a plain slot
/// clear with no race to lose.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    slot: Option<(TickHandle, Instant)>,
    next_id: u64,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time remaining until the pending tick is due, if any. Zero when
    /// already overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.slot
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Pop the pending tick if its deadline has passed. Each scheduled
    /// tick is returned at most once.
    pub fn take_due(&mut self, now: Instant) -> Option<TickHandle> {
        match self.slot {
            Some((handle, deadline)) if deadline <= now => {
                self.slot = None;
                Some(handle)
            }
            _ => None,
        }
    }
}

impl TickScheduler for DeadlineScheduler {
    type Handle = TickHandle;

    fn schedule_after(&mut self, delay: Duration) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.slot = Some((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        if let Some((pending, _)) = self.slot {
            if pending == handle {
                self.slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_fires_once_after_deadline() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        let handle = scheduler.schedule_after(Duration::from_millis(10));

        assert_eq!(scheduler.take_due(start), None);
        let later = start + Duration::from_secs(1);
        assert_eq!(scheduler.take_due(later), Some(handle));
        assert_eq!(scheduler.take_due(later), None);
    }

    #[test]
    fn test_cancel_clears_pending_tick() {
        let mut scheduler = DeadlineScheduler::new();
        let handle = scheduler.schedule_after(Duration::from_millis(0));
        scheduler.cancel(handle);

        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(scheduler.take_due(later), None);
        assert_eq!(scheduler.time_until_due(later), None);
    }

    #[test]
    fn test_cancel_of_stale_handle_leaves_new_schedule_alone() {
        let mut scheduler = DeadlineScheduler::new();
        let old = scheduler.schedule_after(Duration::from_millis(0));
        let new = scheduler.schedule_after(Duration::from_millis(0));
        assert_ne!(old, new);

        scheduler.cancel(old);
        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(scheduler.take_due(later), Some(new));
    }

    #[test]
    fn test_rescheduling_supersedes_previous_tick() {
        let mut scheduler = DeadlineScheduler::new();
        let old = scheduler.schedule_after(Duration::from_millis(0));
        let new = scheduler.schedule_after(Duration::from_millis(0));

        // Only the newest handle can ever fire.
        let later = Instant::now() + Duration::from_secs(1);
        assert_eq!(scheduler.take_due(later), Some(new));
        assert_ne!(Some(old), Some(new));
        assert_eq!(scheduler.take_due(later), None);
    }

    #[test]
    fn test_time_until_due_counts_down_to_zero() {
        let mut scheduler = DeadlineScheduler::new();
        let start = Instant::now();
        scheduler.schedule_after(Duration::from_secs(1));

        let remaining = scheduler.time_until_due(start).expect("tick pending");
        assert!(remaining <= Duration::from_secs(1));
        let overdue = start + Duration::from_secs(5);
        assert_eq!(scheduler.time_until_due(overdue), Some(Duration::ZERO));
    }
}
