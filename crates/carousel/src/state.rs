use dom::{Id, ListenerId};
use timers::TimerSlot;

/// Mutable state of one carousel. Playing is derived from `playback`: the
/// carousel plays exactly while the interval slot is armed.
#[derive(Debug)]
pub(crate) struct CarouselState {
    pub cur_index: usize,
    pub first_play: bool,
    pub fullscreen: bool,
    pub captions: bool,
    pub help: bool,
    pub playback: TimerSlot,
    pub controls_hide: TimerSlot,
    /// The single pointer-down listener for zoned taps, and the image holding it.
    pub mobile_tap: Option<MobileTap>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MobileTap {
    pub image: Id,
    pub listener: ListenerId,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            cur_index: 0,
            first_play: true,
            fullscreen: false,
            captions: false,
            help: false,
            playback: TimerSlot::new(),
            controls_hide: TimerSlot::new(),
            mobile_tap: None,
        }
    }
}

impl CarouselState {
    pub fn is_playing(&self) -> bool {
        self.playback.is_armed()
    }
}
