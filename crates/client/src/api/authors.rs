use toon_core::schema::{AuthorDetail, AuthorListItem, CreateAuthorRequest, UpdateAuthorRequest};
use toon_core::types::DbId;

use super::ApiClient;
use crate::cache::{CacheKey, Entity};
use crate::error::ClientResult;

pub fn author_key(id: DbId) -> CacheKey {
    CacheKey::new(Entity::Author, format!("/authors/{id}"))
}

pub fn author_list_key() -> CacheKey {
    CacheKey::new(Entity::Author, "/authors")
}

impl ApiClient {
    pub async fn list_authors(&self) -> ClientResult<Vec<AuthorListItem>> {
        self.get_json("/authors", &[]).await
    }

    pub async fn get_author(&self, id: DbId) -> ClientResult<AuthorDetail> {
        self.get_json(&format!("/authors/{id}"), &[]).await
    }

    pub async fn create_author(&self, input: &CreateAuthorRequest) -> ClientResult<AuthorDetail> {
        self.post_json("/authors", input).await
    }

    pub async fn update_author(
        &self,
        id: DbId,
        input: &UpdateAuthorRequest,
    ) -> ClientResult<AuthorDetail> {
        self.patch_json(&format!("/authors/{id}"), input).await
    }

    pub async fn delete_author(&self, id: DbId) -> ClientResult<()> {
        self.delete(&format!("/authors/{id}")).await
    }
}
