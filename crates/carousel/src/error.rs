/// Why a gallery could not be mounted. Nothing is wired when this is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    MissingGallery { class: String },
    MissingCarouselRegion,
    NoSlides,
}

impl std::fmt::Display for MountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MountError::MissingGallery { class } => {
                write!(f, "no gallery container with class {class:?}")
            }
            MountError::MissingCarouselRegion => {
                write!(f, "gallery has no .js-image-carousel region")
            }
            MountError::NoSlides => write!(f, "carousel region has no slides"),
        }
    }
}

impl std::error::Error for MountError {}
