//! Repository for the `books` table.

use sqlx::PgPool;
use toon_core::schema::{CreateBookRequest, UpdateBookRequest};
use toon_core::types::DbId;

use crate::models::book::{BookEpisodeRow, BookListFilter, BookRow};
use crate::{clamp_limit, clamp_offset, contains_pattern};

/// Book columns joined with the book image (`bi`), the author (`a`) and the
/// author image (`ai`). Shared with the ranking query.
pub(crate) const SELECT_BOOK_COLUMNS: &str = "\
    b.id, b.name, b.name_ruby, b.description, \
    bi.id AS image_id, bi.alt AS image_alt, \
    a.id AS author_id, a.name AS author_name, a.description AS author_description, \
    ai.id AS author_image_id, ai.alt AS author_image_alt";

pub(crate) const BOOK_JOINS: &str = "\
    JOIN images bi ON bi.id = b.image_id \
    JOIN authors a ON a.id = b.author_id \
    JOIN images ai ON ai.id = a.image_id";

/// Provides data access for books.
pub struct BookRepo;

impl BookRepo {
    /// List books matching `filter`, oldest first.
    ///
    /// `name` matches either the title or its reading.
    pub async fn list(pool: &PgPool, filter: &BookListFilter) -> Result<Vec<BookRow>, sqlx::Error> {
        let query = format!(
            "SELECT {SELECT_BOOK_COLUMNS} FROM books b {BOOK_JOINS} \
             WHERE ($1::uuid IS NULL OR b.author_id = $1) \
               AND ($2::text IS NULL OR a.name ILIKE $2) \
               AND ($3::text IS NULL OR b.name ILIKE $3 OR b.name_ruby ILIKE $3) \
             ORDER BY b.created_at, b.id \
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, BookRow>(&query)
            .bind(filter.author_id)
            .bind(filter.author_name.as_deref().map(contains_pattern))
            .bind(filter.name.as_deref().map(contains_pattern))
            .bind(clamp_limit(filter.limit))
            .bind(clamp_offset(filter.offset))
            .fetch_all(pool)
            .await
    }

    /// Find a book by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BookRow>, sqlx::Error> {
        let query = format!("SELECT {SELECT_BOOK_COLUMNS} FROM books b {BOOK_JOINS} WHERE b.id = $1");
        sqlx::query_as::<_, BookRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Episodes of a book ordered by chapter.
    pub async fn list_episodes(
        pool: &PgPool,
        book_id: DbId,
    ) -> Result<Vec<BookEpisodeRow>, sqlx::Error> {
        sqlx::query_as::<_, BookEpisodeRow>(
            "SELECT id, name, description, chapter FROM episodes \
             WHERE book_id = $1 \
             ORDER BY chapter",
        )
        .bind(book_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a book, returning the new ID.
    pub async fn create(pool: &PgPool, dto: &CreateBookRequest) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO books (id, name, name_ruby, description, author_id, image_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING id",
        )
        .bind(DbId::new_v4())
        .bind(&dto.name)
        .bind(&dto.name_ruby)
        .bind(&dto.description)
        .bind(dto.author_id)
        .bind(dto.image_id)
        .fetch_one(pool)
        .await
    }

    /// Partially update a book. Returns `None` if it does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateBookRequest,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "UPDATE books SET \
                 name = COALESCE($2, name), \
                 name_ruby = COALESCE($3, name_ruby), \
                 description = COALESCE($4, description), \
                 author_id = COALESCE($5, author_id), \
                 image_id = COALESCE($6, image_id) \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&dto.name)
        .bind(&dto.name_ruby)
        .bind(&dto.description)
        .bind(dto.author_id)
        .bind(dto.image_id)
        .fetch_optional(pool)
        .await
    }

    /// Delete a book and, by cascade, its episodes and ranking entries.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
