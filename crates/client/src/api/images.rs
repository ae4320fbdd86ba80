use reqwest::multipart::{Form, Part};
use toon_core::schema::ImageRef;
use toon_core::types::DbId;

use super::ApiClient;
use crate::error::ClientResult;

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

impl ApiClient {
    /// `POST /images` as multipart `content` + `alt`.
    pub async fn upload_image(&self, file: &ImageFile, alt: &str) -> ClientResult<ImageRef> {
        let form = Form::new()
            .part(
                "content",
                Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
            )
            .text("alt", alt.to_string());
        self.post_multipart("/images", form).await
    }

    /// Where the bytes of an uploaded image are served.
    pub fn image_url(&self, id: DbId) -> String {
        self.url(&format!("/images/{id}"))
    }
}
