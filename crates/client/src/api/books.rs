use toon_core::schema::{BookDetail, BookListItem, CreateBookRequest, UpdateBookRequest};
use toon_core::types::DbId;

use super::ApiClient;
use crate::cache::{CacheKey, Entity};
use crate::error::ClientResult;

/// Server-side filters for `GET /books`. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListQuery {
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub name: Option<String>,
}

impl BookListQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.author_id {
            pairs.push(("authorId", id.to_string()));
        }
        if let Some(name) = &self.author_name {
            pairs.push(("authorName", name.clone()));
        }
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs
    }
}

pub fn book_key(id: DbId) -> CacheKey {
    CacheKey::new(Entity::Book, format!("/books/{id}"))
}

pub fn book_list_key(query: &BookListQuery) -> CacheKey {
    query
        .to_pairs()
        .into_iter()
        .fold(CacheKey::new(Entity::Book, "/books"), |key, (k, v)| {
            key.param(k, v)
        })
}

impl ApiClient {
    pub async fn list_books(&self, query: &BookListQuery) -> ClientResult<Vec<BookListItem>> {
        self.get_json("/books", &query.to_pairs()).await
    }

    pub async fn get_book(&self, id: DbId) -> ClientResult<BookDetail> {
        self.get_json(&format!("/books/{id}"), &[]).await
    }

    pub async fn create_book(&self, input: &CreateBookRequest) -> ClientResult<BookDetail> {
        self.post_json("/books", input).await
    }

    /// `PATCH /books/{id}`; fields left `None` are not sent.
    pub async fn update_book(
        &self,
        id: DbId,
        input: &UpdateBookRequest,
    ) -> ClientResult<BookDetail> {
        self.patch_json(&format!("/books/{id}"), input).await
    }

    pub async fn delete_book(&self, id: DbId) -> ClientResult<()> {
        self.delete(&format!("/books/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_keys_differ_by_filter() {
        let all = book_list_key(&BookListQuery::default());
        let by_name = book_list_key(&BookListQuery {
            name: Some("ねこ".to_string()),
            ..Default::default()
        });
        assert_ne!(all, by_name);
        assert_eq!(all.entity, Entity::Book);
        assert_eq!(by_name.params["name"], "ねこ");
    }
}
