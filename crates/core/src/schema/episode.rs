use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use super::image::ImageRef;
use crate::types::DbId;
use crate::validation::rules::HIRAGANA_RE;

/// Element of `GET /api/v1/episodes`, and the result of `POST` and `PATCH`
/// on a single episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EpisodeSummary {
    pub chapter: i32,
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub name_ruby: String,
    pub image: ImageRef,
}

/// A page as nested inside [`EpisodeDetail`], and the element of
/// `GET /api/v1/episodePages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EpisodePageItem {
    pub id: DbId,
    pub page: i32,
    pub image: ImageRef,
}

/// Result of `GET /api/v1/episodes/{id}`: the episode with its pages
/// ordered by page number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EpisodeDetail {
    pub chapter: i32,
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub name_ruby: String,
    pub image: ImageRef,
    pub pages: Vec<EpisodePageItem>,
}

/// Body of `POST /api/v1/episodes`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpisodeRequest {
    #[validate(length(min = 1, message = "エピソード名を入力してください"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "エピソード名のふりがなを入力してください"),
        regex(path = *HIRAGANA_RE, message = "エピソード名のふりがなはひらがなで入力してください")
    )]
    pub name_ruby: String,
    #[validate(length(min = 1, message = "あらすじを入力してください"))]
    pub description: String,
    #[validate(range(min = 1, message = "話数は1以上で入力してください"))]
    pub chapter: i32,
    pub book_id: DbId,
    pub image_id: DbId,
}

/// Body of `PATCH /api/v1/episodes/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEpisodeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "エピソード名を入力してください"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "エピソード名のふりがなを入力してください"),
        regex(path = *HIRAGANA_RE, message = "エピソード名のふりがなはひらがなで入力してください")
    )]
    pub name_ruby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "あらすじを入力してください"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "話数は1以上で入力してください"))]
    pub chapter: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<DbId>,
}

/// Body of `POST /api/v1/episodePages`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpisodePageRequest {
    pub episode_id: DbId,
    #[validate(range(min = 1, message = "ページ番号は1以上で入力してください"))]
    pub page: i32,
    pub image_id: DbId,
}
