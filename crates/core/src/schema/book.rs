use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

use super::image::ImageRef;
use crate::types::DbId;
use crate::validation::rules::HIRAGANA_RE;

/// The author as nested inside a book response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookAuthor {
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub image: ImageRef,
}

/// Element of `GET /api/v1/books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookListItem {
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub name_ruby: String,
    pub image: ImageRef,
    pub author: BookAuthor,
}

/// An episode as listed inside [`BookDetail`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BookEpisode {
    pub chapter: i32,
    pub description: String,
    pub id: DbId,
    pub name: String,
}

/// Result of `GET`, `POST` and `PATCH` on a single book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BookDetail {
    pub description: String,
    pub id: DbId,
    pub name: String,
    pub name_ruby: String,
    pub image: ImageRef,
    pub author: BookAuthor,
    pub episodes: Vec<BookEpisode>,
}

/// Body of `POST /api/v1/books`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "作品名を入力してください"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "作品名のふりがなを入力してください"),
        regex(path = *HIRAGANA_RE, message = "作品名のふりがなはひらがなで入力してください")
    )]
    pub name_ruby: String,
    #[validate(length(min = 1, message = "概要を入力してください"))]
    pub description: String,
    pub author_id: DbId,
    pub image_id: DbId,
}

/// Body of `PATCH /api/v1/books/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "作品名を入力してください"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(
        length(min = 1, message = "作品名のふりがなを入力してください"),
        regex(path = *HIRAGANA_RE, message = "作品名のふりがなはひらがなで入力してください")
    )]
    pub name_ruby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "概要を入力してください"))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<DbId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::{
        MSG_BOOK_DESCRIPTION_REQUIRED, MSG_BOOK_NAME_REQUIRED, MSG_BOOK_RUBY_HIRAGANA,
        MSG_BOOK_RUBY_REQUIRED,
    };

    fn valid_create() -> CreateBookRequest {
        CreateBookRequest {
            name: "吾輩は猫である".to_string(),
            name_ruby: "わがはいはねこである".to_string(),
            description: "猫の目から見た人間社会".to_string(),
            author_id: DbId::new_v4(),
            image_id: DbId::new_v4(),
        }
    }

    #[test]
    fn create_request_accepts_hiragana_ruby() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn create_request_messages_match_form_rules() {
        let req = CreateBookRequest {
            name: String::new(),
            description: String::new(),
            ..valid_create()
        };
        let err = req.validate().unwrap_err();
        let fields = err.field_errors();
        assert_eq!(fields["name"][0].message.as_deref(), Some(MSG_BOOK_NAME_REQUIRED));
        assert_eq!(
            fields["description"][0].message.as_deref(),
            Some(MSG_BOOK_DESCRIPTION_REQUIRED)
        );
    }

    #[test]
    fn empty_ruby_reports_required_message() {
        let req = CreateBookRequest {
            name_ruby: String::new(),
            ..valid_create()
        };
        let err = req.validate().unwrap_err();
        let messages: Vec<_> = err.field_errors()["name_ruby"]
            .iter()
            .filter_map(|e| e.message.as_deref().map(str::to_string))
            .collect();
        assert!(messages.iter().any(|m| m == MSG_BOOK_RUBY_REQUIRED));
    }

    #[test]
    fn update_request_rejects_latin_ruby() {
        let req = UpdateBookRequest {
            name_ruby: Some("abc".to_string()),
            ..Default::default()
        };
        let err = req.validate().unwrap_err();
        assert_eq!(
            err.field_errors()["name_ruby"][0].message.as_deref(),
            Some(MSG_BOOK_RUBY_HIRAGANA)
        );
    }

    #[test]
    fn update_request_skips_absent_fields() {
        assert!(UpdateBookRequest::default().validate().is_ok());
        let json = serde_json::to_value(UpdateBookRequest {
            name: Some("新しい名前".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "name": "新しい名前" }));
    }

    #[test]
    fn list_item_uses_camel_case_ruby() {
        let image = ImageRef {
            alt: String::new(),
            id: DbId::nil(),
        };
        let item = BookListItem {
            description: "d".to_string(),
            id: DbId::nil(),
            name: "n".to_string(),
            name_ruby: "えぬ".to_string(),
            image: image.clone(),
            author: BookAuthor {
                description: "a".to_string(),
                id: DbId::nil(),
                name: "a".to_string(),
                image,
            },
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["nameRuby"], "えぬ");
        assert!(json.get("name_ruby").is_none());
    }
}
