//! Repository for the `episodes` table.

use sqlx::PgPool;
use toon_core::schema::{CreateEpisodeRequest, UpdateEpisodeRequest};
use toon_core::types::DbId;

use crate::models::episode::EpisodeRow;
use crate::{clamp_limit, clamp_offset};

const SELECT_EPISODE: &str = "\
    SELECT e.id, e.name, e.name_ruby, e.description, e.chapter, e.book_id, \
           ei.id AS image_id, ei.alt AS image_alt \
    FROM episodes e \
    JOIN images ei ON ei.id = e.image_id";

/// Provides data access for episodes.
pub struct EpisodeRepo;

impl EpisodeRepo {
    /// List episodes, optionally for one book, ordered by chapter.
    pub async fn list(
        pool: &PgPool,
        book_id: Option<DbId>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<EpisodeRow>, sqlx::Error> {
        let query = format!(
            "{SELECT_EPISODE} \
             WHERE ($1::uuid IS NULL OR e.book_id = $1) \
             ORDER BY e.book_id, e.chapter \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, EpisodeRow>(&query)
            .bind(book_id)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Find an episode by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EpisodeRow>, sqlx::Error> {
        let query = format!("{SELECT_EPISODE} WHERE e.id = $1");
        sqlx::query_as::<_, EpisodeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert an episode, returning the new ID.
    pub async fn create(pool: &PgPool, dto: &CreateEpisodeRequest) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO episodes (id, name, name_ruby, description, chapter, book_id, image_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING id",
        )
        .bind(DbId::new_v4())
        .bind(&dto.name)
        .bind(&dto.name_ruby)
        .bind(&dto.description)
        .bind(dto.chapter)
        .bind(dto.book_id)
        .bind(dto.image_id)
        .fetch_one(pool)
        .await
    }

    /// Partially update an episode. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateEpisodeRequest,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "UPDATE episodes SET \
                 name = COALESCE($2, name), \
                 name_ruby = COALESCE($3, name_ruby), \
                 description = COALESCE($4, description), \
                 chapter = COALESCE($5, chapter), \
                 image_id = COALESCE($6, image_id) \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.name_ruby)
        .bind(&dto.description)
        .bind(dto.chapter)
        .bind(dto.image_id)
        .fetch_optional(pool)
        .await
    }

    /// Delete an episode and, by cascade, its pages.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episodes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
