use crate::content::ImageRef;

/// Lightbox state: either closed or showing exactly one image.
///
/// The two variants make "nothing selected" explicit rather than hiding it
/// inside an optional value. Selecting while open replaces the image
/// atomically; there is no queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Showing(ImageRef),
}

impl Lightbox {
    pub fn select(&mut self, image: ImageRef) {
        *self = Lightbox::Showing(image);
    }

    pub fn dismiss(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn image(&self) -> Option<ImageRef> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Showing(image) => Some(*image),
        }
    }
}
