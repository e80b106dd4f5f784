use crate::{TimerId, TimerQueue};
use core_types::Millis;

/// Owned, optional timer handle.
///
/// Every `arm_*` call clears the previously held timer first, so at most one
/// timer per slot is ever pending.
#[derive(Debug, Default)]
pub struct TimerSlot {
    handle: Option<TimerId>,
}

impl TimerSlot {
    pub const fn new() -> Self {
        Self { handle: None }
    }

    pub fn arm_timeout(&mut self, queue: &mut TimerQueue, delay: Millis) -> TimerId {
        self.cancel(queue);
        let id = queue.set_timeout(delay);
        self.handle = Some(id);
        id
    }

    pub fn arm_interval(&mut self, queue: &mut TimerQueue, period: Millis) -> TimerId {
        self.cancel(queue);
        let id = queue.set_interval(period);
        self.handle = Some(id);
        id
    }

    /// Clear the held timer, if any. Returns `true` if one was pending.
    pub fn cancel(&mut self, queue: &mut TimerQueue) -> bool {
        match self.handle.take() {
            Some(id) => queue.clear(id),
            None => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<TimerId> {
        self.handle
    }

    pub fn holds(&self, id: TimerId) -> bool {
        self.handle == Some(id)
    }

    /// Forget a one-shot timer that just fired. Returns `false` (and keeps the
    /// handle) if `id` is not the held timer.
    pub fn take_fired(&mut self, id: TimerId) -> bool {
        if self.holds(id) {
            self.handle = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearming_replaces_the_pending_timer() {
        let mut q = TimerQueue::new();
        let mut slot = TimerSlot::new();

        let first = slot.arm_interval(&mut q, 1000);
        let second = slot.arm_interval(&mut q, 1000);

        assert_ne!(first, second);
        assert!(!q.is_pending(first));
        assert!(slot.holds(second));
        assert_eq!(q.pending_count(), 1);
    }

    #[test]
    fn cancel_empties_the_slot() {
        let mut q = TimerQueue::new();
        let mut slot = TimerSlot::new();
        slot.arm_timeout(&mut q, 2500);

        assert!(slot.cancel(&mut q));
        assert!(!slot.is_armed());
        assert_eq!(q.pending_count(), 0);
        assert!(!slot.cancel(&mut q));
    }

    #[test]
    fn take_fired_only_matches_the_held_timer() {
        let mut q = TimerQueue::new();
        let mut slot = TimerSlot::new();
        let stale = slot.arm_timeout(&mut q, 10);
        let live = slot.arm_timeout(&mut q, 10);

        assert!(!slot.take_fired(stale));
        assert!(slot.is_armed());
        assert!(slot.take_fired(live));
        assert_eq!(slot.handle(), None);
    }
}
