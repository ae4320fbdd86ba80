//! Repository for the `authors` table.

use sqlx::PgPool;
use toon_core::schema::{CreateAuthorRequest, UpdateAuthorRequest};
use toon_core::types::DbId;

use crate::models::author::{AuthorBookRow, AuthorRow};
use crate::{clamp_limit, clamp_offset, contains_pattern};

/// Author columns joined with the author's image (alias `ai`).
const SELECT_AUTHOR: &str = "\
    SELECT a.id, a.name, a.description, ai.id AS image_id, ai.alt AS image_alt \
    FROM authors a \
    JOIN images ai ON ai.id = a.image_id";

/// Provides data access for authors.
pub struct AuthorRepo;

impl AuthorRepo {
    /// List authors, optionally narrowed to one id or a name substring.
    pub async fn list(
        pool: &PgPool,
        author_id: Option<DbId>,
        name: Option<&str>,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<AuthorRow>, sqlx::Error> {
        let query = format!(
            "{SELECT_AUTHOR} \
             WHERE ($1::uuid IS NULL OR a.id = $1) \
               AND ($2::text IS NULL OR a.name ILIKE $2) \
             ORDER BY a.created_at, a.id \
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, AuthorRow>(&query)
            .bind(author_id)
            .bind(name.map(contains_pattern))
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }

    /// Find an author by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AuthorRow>, sqlx::Error> {
        let query = format!("{SELECT_AUTHOR} WHERE a.id = $1");
        sqlx::query_as::<_, AuthorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Books written by an author, oldest first.
    pub async fn list_books(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Vec<AuthorBookRow>, sqlx::Error> {
        sqlx::query_as::<_, AuthorBookRow>(
            "SELECT b.id, b.name, b.description, bi.id AS image_id, bi.alt AS image_alt \
             FROM books b \
             JOIN images bi ON bi.id = b.image_id \
             WHERE b.author_id = $1 \
             ORDER BY b.created_at, b.id",
        )
        .bind(author_id)
        .fetch_all(pool)
        .await
    }

    /// Insert an author, returning the new ID.
    pub async fn create(pool: &PgPool, dto: &CreateAuthorRequest) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO authors (id, name, description, image_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(DbId::new_v4())
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.image_id)
        .fetch_one(pool)
        .await
    }

    /// Partially update an author. Returns `None` if it does not exist.
    ///
    /// Uses `COALESCE` so only provided fields are changed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateAuthorRequest,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "UPDATE authors SET \
                 name = COALESCE($2, name), \
                 description = COALESCE($3, description), \
                 image_id = COALESCE($4, image_id) \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.image_id)
        .fetch_optional(pool)
        .await
    }

    /// Delete an author and, by cascade, their books. Returns `true` if a
    /// row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
