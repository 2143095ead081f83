//! Image source backed by files on disk.

use std::path::{Path, PathBuf};

use annokit_canvas::{ImageInfo, ImageSource};

/// Images read from disk. Only the header is decoded to learn the size.
///
/// A file that cannot be read reports as still loading, so the session
/// shows its loading indicator until [`PathImageSource::reload`] succeeds.
#[derive(Debug, Clone)]
pub struct PathImageSource {
    paths: Vec<PathBuf>,
    infos: Vec<ImageInfo>,
}

impl PathImageSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        let infos = paths.iter().map(|path| probe(path)).collect();
        Self { paths, infos }
    }

    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    /// Re-reads the dimensions of image `index`. Returns whether it is ready now.
    pub fn reload(&mut self, index: usize) -> bool {
        let Some(path) = self.paths.get(index) else {
            return false;
        };
        let info = probe(path);
        self.infos[index] = info;
        info.ready
    }
}

fn probe(path: &Path) -> ImageInfo {
    match image::image_dimensions(path) {
        Ok((width, height)) => ImageInfo::ready(f64::from(width), f64::from(height)),
        Err(e) => {
            tracing::warn!("Cannot read {}: {}", path.display(), e);
            ImageInfo::pending()
        }
    }
}

impl ImageSource for PathImageSource {
    fn len(&self) -> usize {
        self.paths.len()
    }

    fn image_info(&self, index: usize) -> ImageInfo {
        self.infos
            .get(index)
            .copied()
            .unwrap_or_else(ImageInfo::pending)
    }
}
