//! Shared query parameter types for API handlers.
//!
//! Query keys are camelCase on the wire (`?authorId=...`). Limits and
//! offsets are clamped in the repository layer via `clamp_limit` /
//! `clamp_offset`; without `?limit=` a list returns every row.

use serde::Deserialize;
use toon_core::types::DbId;

/// Generic pagination parameters (`?limit=&offset=`).
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /authors`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorListParams {
    pub author_id: Option<DbId>,
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /books`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListParams {
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /episodes`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeListParams {
    pub book_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for `GET /episodePages`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodePageListParams {
    pub episode_id: DbId,
}
