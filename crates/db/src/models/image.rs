//! Image rows.

use sqlx::FromRow;
use toon_core::schema::ImageRef;
use toon_core::types::{DbId, Timestamp};

/// Metadata of a row in the `images` table (the content is fetched separately).
#[derive(Debug, Clone, FromRow)]
pub struct Image {
    pub id: DbId,
    pub alt: String,
    pub mime_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Image {
    pub fn to_ref(&self) -> ImageRef {
        ImageRef {
            alt: self.alt.clone(),
            id: self.id,
        }
    }
}

/// Stored bytes of an image and the MIME type to serve them with.
#[derive(Debug, Clone, FromRow)]
pub struct ImageContent {
    pub mime_type: String,
    pub content: Vec<u8>,
}

/// DTO for inserting an image.
#[derive(Debug, Clone)]
pub struct CreateImage {
    pub alt: String,
    pub mime_type: String,
    pub content: Vec<u8>,
}
