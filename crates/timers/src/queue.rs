use core_types::Millis;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    id: TimerId,
    due: Millis,
    /// `Some` for intervals; the timer is re-armed `period` after each firing.
    period: Option<Millis>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Millis,
    next_id: u64,
    pending: Vec<Pending>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now
    }

    /// One-shot timer firing `delay` ms from now.
    pub fn set_timeout(&mut self, delay: Millis) -> TimerId {
        self.schedule(delay, None)
    }

    /// Repeating timer firing every `period` ms. A zero period is treated as 1 ms
    /// so the clock always makes progress.
    pub fn set_interval(&mut self, period: Millis) -> TimerId {
        let period = period.max(1);
        self.schedule(period, Some(period))
    }

    fn schedule(&mut self, delay: Millis, period: Option<Millis>) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let due = self.now.saturating_add(delay);
        self.pending.push(Pending { id, due, period });
        log::trace!(target: "timers", "schedule {id:?} due={due} period={period:?}");
        id
    }

    /// Returns `true` if the timer was pending.
    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        let cleared = before != self.pending.len();
        if cleared {
            log::trace!(target: "timers", "clear {id:?}");
        }
        cleared
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn next_due(&self) -> Option<Millis> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Pop the earliest timer due at or before `until` and move the clock to
    /// its due time. Ties fire in scheduling order. Intervals are re-armed
    /// before being returned, so the callback may clear them.
    pub fn pop_due(&mut self, until: Millis) -> Option<TimerId> {
        let (idx, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.id))?;

        let fired = self.pending[idx];
        self.now = self.now.max(fired.due);
        match fired.period {
            Some(period) => self.pending[idx].due = fired.due.saturating_add(period),
            None => {
                self.pending.swap_remove(idx);
            }
        }
        log::trace!(target: "timers", "fire {:?} at {}", fired.id, self.now);
        Some(fired.id)
    }

    /// Move the clock forward to `to` without firing anything. Call after
    /// draining [`pop_due`](Self::pop_due) for the same bound.
    pub fn settle(&mut self, to: Millis) {
        self.now = self.now.max(to);
    }
}
