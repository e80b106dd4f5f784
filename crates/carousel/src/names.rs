//! Class names and button labels shared by the controller and [`GalleryMarkup`](crate::GalleryMarkup).

pub mod class {
    pub const CAROUSEL_REGION: &str = "js-image-carousel";
    pub const CONTROLS: &str = "js-gallery-controls";
    pub const NEXT_BUTTON: &str = "js-next-button";
    pub const PREV_BUTTON: &str = "js-prev-button";
    pub const START_BUTTON: &str = "js-start-button";
    pub const FULLSCREEN_BUTTON: &str = "js-fullscreen";
    pub const CAPTIONS_BUTTON: &str = "js-display-captions";
    pub const HELP_BUTTON: &str = "js-display-help";

    pub const CURRENT: &str = "current";
    pub const FULLSCREEN: &str = "fullscreen";
    pub const SHOW_CAPTIONS: &str = "show-captions";
    pub const SHOW_HELP: &str = "show-help";
    pub const SHOW_CONTROLS: &str = "show-controls";
    pub const IMAGE_COUNTER: &str = "image-counter";
}

/// Icon ligatures written into button labels.
pub mod label {
    pub const PLAY: &str = "play_arrow";
    pub const STOP: &str = "stop";
    pub const FULLSCREEN: &str = "fullscreen";
    pub const FULLSCREEN_EXIT: &str = "fullscreen_exit";
}
