//! Repository for the `images` table.

use sqlx::PgPool;
use toon_core::types::DbId;

use crate::models::image::{CreateImage, Image, ImageContent};

/// Metadata columns; `content` is only read by [`ImageRepo::find_content`].
const COLUMNS: &str = "id, alt, mime_type, created_at, updated_at";

/// Provides data access for uploaded images.
pub struct ImageRepo;

impl ImageRepo {
    /// Store a new image and return its metadata.
    pub async fn create(pool: &PgPool, dto: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (id, alt, mime_type, content) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(DbId::new_v4())
            .bind(&dto.alt)
            .bind(&dto.mime_type)
            .bind(&dto.content)
            .fetch_one(pool)
            .await
    }

    /// Fetch the stored bytes of an image.
    pub async fn find_content(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ImageContent>, sqlx::Error> {
        sqlx::query_as::<_, ImageContent>("SELECT mime_type, content FROM images WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
