//! Ranking rows.

use sqlx::FromRow;
use toon_core::schema::RankingListItem;
use toon_core::types::DbId;

use crate::models::book::BookRow;

/// A `rankings` row joined with the full book projection.
#[derive(Debug, Clone, FromRow)]
pub struct RankingRow {
    pub ranking_id: DbId,
    pub rank: i32,
    #[sqlx(flatten)]
    pub book: BookRow,
}

impl RankingRow {
    pub fn into_list_item(self) -> RankingListItem {
        RankingListItem {
            id: self.ranking_id,
            rank: self.rank,
            book: self.book.into_ranking_book(),
        }
    }
}
