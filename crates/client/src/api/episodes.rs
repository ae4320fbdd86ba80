use toon_core::schema::{
    CreateEpisodePageRequest, CreateEpisodeRequest, EpisodeDetail, EpisodePageItem,
    EpisodeSummary, UpdateEpisodeRequest,
};
use toon_core::types::DbId;

use super::ApiClient;
use crate::cache::{CacheKey, Entity};
use crate::error::ClientResult;

pub fn episode_key(id: DbId) -> CacheKey {
    CacheKey::new(Entity::Episode, format!("/episodes/{id}"))
}

/// Episodes of one book, or of every book when `book_id` is `None`.
pub fn episode_list_key(book_id: Option<DbId>) -> CacheKey {
    let key = CacheKey::new(Entity::Episode, "/episodes");
    match book_id {
        Some(id) => key.param("bookId", id),
        None => key,
    }
}

pub fn episode_page_list_key(episode_id: DbId) -> CacheKey {
    CacheKey::new(Entity::EpisodePage, "/episodePages").param("episodeId", episode_id)
}

impl ApiClient {
    /// Episodes ordered by chapter.
    pub async fn list_episodes(&self, book_id: Option<DbId>) -> ClientResult<Vec<EpisodeSummary>> {
        let query: Vec<_> = book_id.map(|id| ("bookId", id.to_string())).into_iter().collect();
        self.get_json("/episodes", &query).await
    }

    pub async fn get_episode(&self, id: DbId) -> ClientResult<EpisodeDetail> {
        self.get_json(&format!("/episodes/{id}"), &[]).await
    }

    pub async fn create_episode(&self, input: &CreateEpisodeRequest) -> ClientResult<EpisodeSummary> {
        self.post_json("/episodes", input).await
    }

    pub async fn update_episode(
        &self,
        id: DbId,
        input: &UpdateEpisodeRequest,
    ) -> ClientResult<EpisodeSummary> {
        self.patch_json(&format!("/episodes/{id}"), input).await
    }

    pub async fn delete_episode(&self, id: DbId) -> ClientResult<()> {
        self.delete(&format!("/episodes/{id}")).await
    }

    /// Pages of an episode ordered by page number.
    pub async fn list_episode_pages(&self, episode_id: DbId) -> ClientResult<Vec<EpisodePageItem>> {
        self.get_json("/episodePages", &[("episodeId", episode_id.to_string())])
            .await
    }

    pub async fn create_episode_page(
        &self,
        input: &CreateEpisodePageRequest,
    ) -> ClientResult<EpisodePageItem> {
        self.post_json("/episodePages", input).await
    }

    pub async fn delete_episode_page(&self, id: DbId) -> ClientResult<()> {
        self.delete(&format!("/episodePages/{id}")).await
    }
}
