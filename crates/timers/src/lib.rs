//! # timers
//!
//! `setTimeout`/`setInterval` semantics on a virtual clock.
//!
//! - [`TimerQueue`] owns the clock and every pending timer. The host advances
//!   it and receives due timers one at a time, so callbacks may arm or clear
//!   timers between firings.
//! - [`TimerSlot`] is an owned, optional handle. Arming a slot always clears
//!   whatever it held before, so a slot never has more than one live timer.
//!
//! Clearing a timer is immediate: a cleared timer never fires.

mod queue;
mod slot;

pub use queue::{TimerId, TimerQueue};
pub use slot::TimerSlot;
