//! Repository for the `episode_pages` table.

use sqlx::PgPool;
use toon_core::schema::CreateEpisodePageRequest;
use toon_core::types::DbId;

use crate::models::episode::EpisodePageRow;

const SELECT_PAGE: &str = "\
    SELECT p.id, p.page, p.episode_id, pim.id AS image_id, pim.alt AS image_alt \
    FROM episode_pages p \
    JOIN images pim ON pim.id = p.image_id";

/// Provides data access for episode pages.
pub struct EpisodePageRepo;

impl EpisodePageRepo {
    /// Pages of an episode ordered by page number.
    pub async fn list_by_episode(
        pool: &PgPool,
        episode_id: DbId,
    ) -> Result<Vec<EpisodePageRow>, sqlx::Error> {
        let query = format!("{SELECT_PAGE} WHERE p.episode_id = $1 ORDER BY p.page");
        sqlx::query_as::<_, EpisodePageRow>(&query)
            .bind(episode_id)
            .fetch_all(pool)
            .await
    }

    /// Find a page by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EpisodePageRow>, sqlx::Error> {
        let query = format!("{SELECT_PAGE} WHERE p.id = $1");
        sqlx::query_as::<_, EpisodePageRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a page, returning the new ID.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateEpisodePageRequest,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO episode_pages (id, page, episode_id, image_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(DbId::new_v4())
        .bind(dto.page)
        .bind(dto.episode_id)
        .bind(dto.image_id)
        .fetch_one(pool)
        .await
    }

    /// Delete a page.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM episode_pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
