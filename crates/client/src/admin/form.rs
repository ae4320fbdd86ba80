//! Field bookkeeping shared by the book forms.

use std::collections::{BTreeMap, BTreeSet};

use toon_core::image::is_supported_image;
use toon_core::validation::rules::MSG_IMAGE_UNSUPPORTED;

use crate::api::images::ImageFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Name,
    NameRuby,
    Description,
    Author,
    Image,
}

impl BookField {
    pub const ALL: [BookField; 5] = [
        BookField::Name,
        BookField::NameRuby,
        BookField::Description,
        BookField::Author,
        BookField::Image,
    ];
}

/// Touched flags and current rule failures, per field.
#[derive(Debug, Default)]
pub struct FieldState {
    touched: BTreeSet<BookField>,
    errors: BTreeMap<BookField, &'static str>,
}

impl FieldState {
    pub fn touch(&mut self, field: BookField) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(BookField::ALL);
    }

    pub fn is_touched(&self, field: BookField) -> bool {
        self.touched.contains(&field)
    }

    pub fn set(&mut self, field: BookField, error: Option<&'static str>) {
        match error {
            Some(message) => self.errors.insert(field, message),
            None => self.errors.remove(&field),
        };
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error shown for `field`: only touched fields show one.
    pub fn visible(&self, field: BookField) -> Option<&'static str> {
        self.is_touched(field)
            .then(|| self.errors.get(&field).copied())
            .flatten()
    }

    pub fn visible_errors(&self) -> Vec<(BookField, &'static str)> {
        self.errors
            .iter()
            .filter(|(field, _)| self.touched.contains(field))
            .map(|(field, message)| (*field, *message))
            .collect()
    }
}

/// Where the format check of the picked image stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageCheck {
    /// No image picked.
    Empty,
    /// A probe for the given selection is running.
    Pending { generation: u64 },
    Supported,
    Unsupported,
}

impl ImageCheck {
    pub fn error(self) -> Option<&'static str> {
        match self {
            ImageCheck::Unsupported => Some(MSG_IMAGE_UNSUPPORTED),
            ImageCheck::Empty | ImageCheck::Pending { .. } | ImageCheck::Supported => None,
        }
    }
}

/// Format check of one image selection, run off the form.
///
/// Produced when an image is picked; hand its [`ProbeResult`] back to the
/// form that issued it. Results of superseded selections are ignored.
#[derive(Debug)]
pub struct ImageProbe {
    generation: u64,
    bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResult {
    pub(crate) generation: u64,
    pub(crate) supported: bool,
}

impl ImageProbe {
    pub(crate) fn new(generation: u64, file: &ImageFile) -> Self {
        Self {
            generation,
            bytes: file.bytes.clone(),
        }
    }

    pub async fn run(self) -> ProbeResult {
        let Self { generation, bytes } = self;
        let supported = tokio::task::spawn_blocking(move || is_supported_image(&bytes))
            .await
            .unwrap_or(false);
        ProbeResult {
            generation,
            supported,
        }
    }
}

/// Tracks the picked image and its probe.
#[derive(Debug)]
pub struct ImageSlot {
    file: Option<ImageFile>,
    check: ImageCheck,
    generation: u64,
}

impl Default for ImageSlot {
    fn default() -> Self {
        Self {
            file: None,
            check: ImageCheck::Empty,
            generation: 0,
        }
    }
}

impl ImageSlot {
    pub fn file(&self) -> Option<&ImageFile> {
        self.file.as_ref()
    }

    pub fn check(&self) -> ImageCheck {
        self.check
    }

    pub fn is_probing(&self) -> bool {
        matches!(self.check, ImageCheck::Pending { .. })
    }

    pub fn select(&mut self, file: ImageFile) -> ImageProbe {
        self.generation += 1;
        let probe = ImageProbe::new(self.generation, &file);
        self.file = Some(file);
        self.check = ImageCheck::Pending {
            generation: self.generation,
        };
        probe
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.file = None;
        self.check = ImageCheck::Empty;
    }

    /// Record a probe outcome. Returns `false` for a stale result.
    pub fn apply(&mut self, result: ProbeResult) -> bool {
        match self.check {
            ImageCheck::Pending { generation } if generation == result.generation => {
                self.check = if result.supported {
                    ImageCheck::Supported
                } else {
                    ImageCheck::Unsupported
                };
                true
            }
            _ => false,
        }
    }

    pub fn take_file(&mut self) -> Option<ImageFile> {
        self.file.take()
    }
}
