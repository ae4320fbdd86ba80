use toon_core::schema::RankingListItem;

use super::ApiClient;
use crate::cache::{CacheKey, Entity};
use crate::error::ClientResult;

pub fn ranking_list_key() -> CacheKey {
    CacheKey::new(Entity::Ranking, "/rankings")
}

impl ApiClient {
    /// Rankings ordered by rank, each with its book and author.
    pub async fn list_rankings(&self) -> ClientResult<Vec<RankingListItem>> {
        self.get_json("/rankings", &[]).await
    }
}
