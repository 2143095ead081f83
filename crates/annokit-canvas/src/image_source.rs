//! Where the images being annotated come from.

/// Natural size of an image and whether it has finished loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageInfo {
    pub width: f64,
    pub height: f64,
    pub ready: bool,
}

impl ImageInfo {
    pub fn ready(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ready: true,
        }
    }

    /// Still loading; no dimensions yet.
    pub fn pending() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            ready: false,
        }
    }

    /// Dimensions usable for scaling, if the image is ready.
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        (self.ready && self.width > 0.0 && self.height > 0.0).then_some((self.width, self.height))
    }
}

/// An ordered, fixed list of images.
pub trait ImageSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loading state of image `index`. Out-of-range indices report pending.
    fn image_info(&self, index: usize) -> ImageInfo;
}

/// In-memory image list. Loading completes when [`StaticImages::set_info`] says so.
#[derive(Debug, Clone, Default)]
pub struct StaticImages {
    images: Vec<ImageInfo>,
}

impl StaticImages {
    pub fn new(images: Vec<ImageInfo>) -> Self {
        Self { images }
    }

    /// `count` ready images of the same size.
    pub fn uniform(count: usize, width: f64, height: f64) -> Self {
        Self::new(vec![ImageInfo::ready(width, height); count])
    }

    pub fn set_info(&mut self, index: usize, info: ImageInfo) -> bool {
        match self.images.get_mut(index) {
            Some(slot) => {
                *slot = info;
                true
            }
            None => false,
        }
    }
}

impl ImageSource for StaticImages {
    fn len(&self) -> usize {
        self.images.len()
    }

    fn image_info(&self, index: usize) -> ImageInfo {
        self.images
            .get(index)
            .copied()
            .unwrap_or_else(ImageInfo::pending)
    }
}
