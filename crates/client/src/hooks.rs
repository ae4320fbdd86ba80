//! Cached data access for views.
//!
//! [`DataClient`] pairs an [`ApiClient`] with a [`RequestCache`]: reads
//! resolve to the cached value or wait for the one in-flight request, and
//! mutations invalidate the entities whose responses embed what changed.

use std::sync::Arc;

use toon_core::consts::ConstKind;
use toon_core::schema::{
    AuthorListItem, BookDetail, BookListItem, CreateBookRequest, EpisodeDetail, EpisodeSummary,
    RankingListItem, UpdateBookRequest,
};
use toon_core::types::DbId;

use crate::api::authors::author_list_key;
use crate::api::books::{book_key, book_list_key, BookListQuery};
use crate::api::consts::const_key;
use crate::api::episodes::{episode_key, episode_list_key};
use crate::api::images::ImageFile;
use crate::api::rankings::ranking_list_key;
use crate::api::ApiClient;
use crate::cache::{Entity, RequestCache};
use crate::error::ClientResult;

/// Fields of a book to create, with the cover image still to upload.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub name: String,
    pub name_ruby: String,
    pub description: String,
    pub author_id: DbId,
    pub image: ImageFile,
}

#[derive(Clone)]
pub struct DataClient {
    api: Arc<ApiClient>,
    cache: Arc<RequestCache>,
}

impl DataClient {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            cache: Arc::new(RequestCache::new()),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &RequestCache {
        &self.cache
    }

    // ---- reads ----

    pub async fn book(&self, id: DbId) -> ClientResult<Arc<BookDetail>> {
        self.cache
            .fetch(&book_key(id), || self.api.get_book(id))
            .await
    }

    pub async fn book_list(&self, query: &BookListQuery) -> ClientResult<Arc<Vec<BookListItem>>> {
        self.cache
            .fetch(&book_list_key(query), || self.api.list_books(query))
            .await
    }

    pub async fn author_list(&self) -> ClientResult<Arc<Vec<AuthorListItem>>> {
        self.cache
            .fetch(&author_list_key(), || self.api.list_authors())
            .await
    }

    pub async fn episode(&self, id: DbId) -> ClientResult<Arc<EpisodeDetail>> {
        self.cache
            .fetch(&episode_key(id), || self.api.get_episode(id))
            .await
    }

    pub async fn episode_list(
        &self,
        book_id: Option<DbId>,
    ) -> ClientResult<Arc<Vec<EpisodeSummary>>> {
        self.cache
            .fetch(&episode_list_key(book_id), || self.api.list_episodes(book_id))
            .await
    }

    pub async fn ranking_list(&self) -> ClientResult<Arc<Vec<RankingListItem>>> {
        self.cache
            .fetch(&ranking_list_key(), || self.api.list_rankings())
            .await
    }

    pub async fn const_text(&self, kind: ConstKind) -> ClientResult<Arc<String>> {
        self.cache
            .fetch(&const_key(kind), || self.api.const_text(kind))
            .await
    }

    // ---- mutations ----

    /// Upload `image` if one was picked, then patch the book with it.
    pub async fn update_book(
        &self,
        id: DbId,
        mut input: UpdateBookRequest,
        image: Option<ImageFile>,
    ) -> ClientResult<BookDetail> {
        if let Some(file) = image {
            let alt = input.name.clone().unwrap_or_default();
            let uploaded = self.api.upload_image(&file, &alt).await?;
            input.image_id = Some(uploaded.id);
        }

        let book = self.api.update_book(id, &input).await?;
        tracing::info!(book_id = %id, image_changed = input.image_id.is_some(), "Book updated");

        self.invalidate_books().await;
        Ok(book)
    }

    /// Upload the cover, then create the book.
    pub async fn create_book(&self, book: NewBook) -> ClientResult<BookDetail> {
        let image = self.api.upload_image(&book.image, &book.name).await?;
        let input = CreateBookRequest {
            name: book.name,
            name_ruby: book.name_ruby,
            description: book.description,
            author_id: book.author_id,
            image_id: image.id,
        };

        let created = self.api.create_book(&input).await?;
        tracing::info!(book_id = %created.id, author_id = %input.author_id, "Book created");

        self.invalidate_books().await;
        Ok(created)
    }

    pub async fn delete_book(&self, id: DbId) -> ClientResult<()> {
        self.api.delete_book(id).await?;
        tracing::info!(book_id = %id, "Book deleted");

        self.invalidate_books().await;
        self.cache.invalidate_entity(Entity::Episode).await;
        Ok(())
    }

    /// Books are embedded in author details and rankings.
    async fn invalidate_books(&self) {
        self.cache.invalidate_entity(Entity::Book).await;
        self.cache.invalidate_entity(Entity::Author).await;
        self.cache.invalidate_entity(Entity::Ranking).await;
    }
}
