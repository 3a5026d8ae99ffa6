//! Success screen image with a one-shot fallback
//!
//! The primary resource is a local file. If it cannot be opened the
//! displayed source switches to the fallback URL and stays there.

use log::info;
use std::fs::File;
use std::path::Path;

/// Where the displayed source came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// Not loaded yet; the primary source is shown
    Pending,
    /// Primary resource opened successfully
    Loaded,
    /// Primary resource failed; fallback substituted
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessImage {
    primary: String,
    fallback: String,
    displayed: String,
    status: ImageStatus,
}

impl SuccessImage {
    pub fn new<P: Into<String>, F: Into<String>>(primary: P, fallback: F) -> Self {
        let primary = primary.into();
        Self {
            displayed: primary.clone(),
            primary,
            fallback: fallback.into(),
            status: ImageStatus::Pending,
        }
    }

    /// Try the primary resource once, substituting the fallback on error
    pub fn load(&mut self) {
        if self.status != ImageStatus::Pending {
            return;
        }
        match File::open(Path::new(&self.primary)) {
            Ok(_) => self.status = ImageStatus::Loaded,
            Err(err) => {
                info!("image {} unavailable ({}), using fallback", self.primary, err);
                self.on_error();
            }
        }
    }

    /// Replace the displayed source with the fallback. No retry.
    pub fn on_error(&mut self) {
        if self.status == ImageStatus::Fallback {
            return;
        }
        self.displayed = self.fallback.clone();
        self.status = ImageStatus::Fallback;
    }

    pub fn displayed_source(&self) -> &str {
        &self.displayed
    }

    pub fn status(&self) -> ImageStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "https://example.com/fallback.jpg";

    #[test]
    fn test_missing_primary_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let mut image = SuccessImage::new(missing.to_string_lossy(), FALLBACK);
        assert_eq!(image.status(), ImageStatus::Pending);

        image.load();
        assert_eq!(image.status(), ImageStatus::Fallback);
        assert_eq!(image.displayed_source(), FALLBACK);
    }

    #[test]
    fn test_existing_primary_is_kept() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let primary = file.path().to_string_lossy().into_owned();
        let mut image = SuccessImage::new(primary.clone(), FALLBACK);

        image.load();
        assert_eq!(image.status(), ImageStatus::Loaded);
        assert_eq!(image.displayed_source(), primary);
    }

    #[test]
    fn test_load_is_one_shot() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let primary = file.path().to_string_lossy().into_owned();
        let mut image = SuccessImage::new(primary, FALLBACK);
        image.on_error();
        // A later load does not retry the primary
        image.load();
        assert_eq!(image.status(), ImageStatus::Fallback);
        assert_eq!(image.displayed_source(), FALLBACK);
    }
}
