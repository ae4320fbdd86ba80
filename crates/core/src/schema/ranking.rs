use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::book::BookAuthor;
use super::image::ImageRef;
use crate::types::DbId;

/// A book as nested inside [`RankingListItem`], denormalized with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankingBook {
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub image: ImageRef,
    pub author: BookAuthor,
}

/// Element of `GET /api/v1/rankings`, ordered by `rank`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankingListItem {
    pub id: DbId,
    pub rank: i32,
    pub book: RankingBook,
}
