//! Repository for the `rankings` table. Rankings are read-only here.

use sqlx::PgPool;

use super::book_repo::{BOOK_JOINS, SELECT_BOOK_COLUMNS};
use crate::models::ranking::RankingRow;
use crate::{clamp_limit, clamp_offset};

/// Provides read access to the ranking projection.
pub struct RankingRepo;

impl RankingRepo {
    /// Ranking entries ordered by rank, each with its book and author.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<RankingRow>, sqlx::Error> {
        let query = format!(
            "SELECT r.id AS ranking_id, r.rank, {SELECT_BOOK_COLUMNS} \
             FROM rankings r \
             JOIN books b ON b.id = r.book_id \
             {BOOK_JOINS} \
             ORDER BY r.rank \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, RankingRow>(&query)
            .bind(clamp_limit(limit))
            .bind(clamp_offset(offset))
            .fetch_all(pool)
            .await
    }
}
