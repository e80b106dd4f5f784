/// Viewports at or below this width use zoned taps on the current image.
pub const MOBILE_BREAKPOINT: f32 = 810.0;

pub fn is_mobile_layout(viewport_width: f32) -> bool {
    viewport_width <= MOBILE_BREAKPOINT
}

/// Horizontal zone of a tap on the current image, by viewport quarter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapZone {
    /// Leftmost quarter.
    Prev,
    /// Middle half.
    Center,
    /// Rightmost quarter.
    Next,
}

impl TapZone {
    pub fn classify(x: f32, viewport_width: f32) -> Self {
        let quarter = viewport_width / 4.0;
        if x < quarter {
            TapZone::Prev
        } else if x > quarter * 3.0 {
            TapZone::Next
        } else {
            TapZone::Center
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_layout(320.0));
        assert!(is_mobile_layout(810.0));
        assert!(!is_mobile_layout(810.5));
        assert!(!is_mobile_layout(1920.0));
    }

    #[test]
    fn quarters_map_to_zones() {
        let w = 400.0;
        assert_eq!(TapZone::classify(0.0, w), TapZone::Prev);
        assert_eq!(TapZone::classify(99.9, w), TapZone::Prev);
        assert_eq!(TapZone::classify(100.0, w), TapZone::Center);
        assert_eq!(TapZone::classify(200.0, w), TapZone::Center);
        assert_eq!(TapZone::classify(300.0, w), TapZone::Center);
        assert_eq!(TapZone::classify(300.1, w), TapZone::Next);
        assert_eq!(TapZone::classify(399.0, w), TapZone::Next);
    }
}
