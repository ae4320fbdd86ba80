//! Preview URLs for picked images.

use crate::api::images::ImageFile;

/// Issues and revokes URLs that display a local file.
pub trait ObjectUrlRegistry {
    fn create(&self, file: &ImageFile) -> String;
    fn revoke(&self, url: &str);
}

/// Holds at most one live preview URL and revokes it when replaced,
/// cleared or dropped.
#[derive(Debug)]
pub struct ImagePreview<R: ObjectUrlRegistry> {
    registry: R,
    url: Option<String>,
}

impl<R: ObjectUrlRegistry> ImagePreview<R> {
    pub fn new(registry: R) -> Self {
        Self {
            registry,
            url: None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Show `file`, revoking the previous preview.
    pub fn select(&mut self, file: &ImageFile) -> &str {
        self.clear();
        self.url.insert(self.registry.create(file))
    }

    pub fn clear(&mut self) {
        if let Some(url) = self.url.take() {
            self.registry.revoke(&url);
        }
    }
}

impl<R: ObjectUrlRegistry> Drop for ImagePreview<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
