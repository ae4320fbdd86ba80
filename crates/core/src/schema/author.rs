use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use super::image::ImageRef;
use crate::types::DbId;

/// Element of `GET /api/v1/authors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorListItem {
    pub description: String,
    pub id: DbId,
    pub name: String,
}

/// A book as nested inside [`AuthorDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorBook {
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub image: ImageRef,
}

/// Result of `GET`, `POST` and `PATCH` on a single author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AuthorDetail {
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub image: ImageRef,
    pub books: Vec<AuthorBook>,
}

/// Body of `POST /api/v1/authors`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthorRequest {
    #[validate(length(min = 1, message = "作者名を入力してください"))]
    pub name: String,
    #[validate(length(min = 1, message = "プロフィールを入力してください"))]
    pub description: String,
    pub image_id: DbId,
}

/// Body of `PATCH /api/v1/authors/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuthorRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "作者名を入力してください"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "プロフィールを入力してください"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<DbId>,
}
