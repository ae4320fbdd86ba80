//! Keyed request cache.
//!
//! Every fetch goes through [`RequestCache::fetch`] under a [`CacheKey`]
//! built from the entity, the request path and its query parameters.
//! Concurrent fetches of one key share a single in-flight request; once it
//! resolves, later fetches return the stored value until the key or its
//! entity is invalidated. Failed fetches are not stored.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{broadcast, Mutex, OnceCell};

use crate::error::{ClientError, ClientResult};

/// Capacity of the invalidation channel. Slow subscribers observe
/// `RecvError::Lagged` rather than blocking mutations.
const INVALIDATION_CAPACITY: usize = 64;

/// Entity a cached response belongs to. Mutations invalidate by entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    Author,
    Book,
    Const,
    Episode,
    EpisodePage,
    Ranking,
}

/// Identity of a cached request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub entity: Entity,
    pub request_url: String,
    pub params: BTreeMap<String, String>,
}

impl CacheKey {
    pub fn new(entity: Entity, request_url: impl Into<String>) -> Self {
        Self {
            entity,
            request_url: request_url.into(),
            params: BTreeMap::new(),
        }
    }

    /// Add a query parameter to the key.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(name.into(), value.to_string());
        self
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.request_url)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{name}={value}")?;
        }
        Ok(())
    }
}

/// Published on every invalidation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    Key(CacheKey),
    Entity(Entity),
}

type Slot = Arc<OnceCell<Arc<dyn Any + Send + Sync>>>;

pub struct RequestCache {
    slots: Mutex<HashMap<CacheKey, Slot>>,
    events: broadcast::Sender<Invalidation>,
}

impl Default for RequestCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestCache {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(INVALIDATION_CAPACITY);
        Self {
            slots: Mutex::new(HashMap::new()),
            events,
        }
    }

    /// Return the cached value for `key`, or run `fetcher` to produce it.
    ///
    /// Callers racing on an empty key wait for the first caller's fetch. If
    /// that fetch fails, its caller gets the error and the next waiter
    /// retries.
    pub async fn fetch<T, F, Fut>(&self, key: &CacheKey, fetcher: F) -> ClientResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let slot = {
            let mut slots = self.slots.lock().await;
            slots.entry(key.clone()).or_default().clone()
        };

        let value = slot
            .get_or_try_init(|| async {
                tracing::debug!(key = %key, "Cache miss");
                let value = fetcher().await?;
                Ok::<_, ClientError>(Arc::new(value) as Arc<dyn Any + Send + Sync>)
            })
            .await?;

        Self::downcast(key, value.clone())
    }

    /// The cached value for `key` without fetching.
    pub async fn peek<T: Send + Sync + 'static>(&self, key: &CacheKey) -> Option<Arc<T>> {
        let slots = self.slots.lock().await;
        let value = slots.get(key)?.get()?.clone();
        Self::downcast(key, value).ok()
    }

    /// Drop the entry for `key`. The next fetch goes to the network.
    pub async fn invalidate(&self, key: &CacheKey) {
        self.slots.lock().await.remove(key);
        tracing::debug!(key = %key, "Cache key invalidated");
        let _ = self.events.send(Invalidation::Key(key.clone()));
    }

    /// Drop every entry belonging to `entity`.
    pub async fn invalidate_entity(&self, entity: Entity) {
        self.slots.lock().await.retain(|key, _| key.entity != entity);
        tracing::debug!(?entity, "Cache entity invalidated");
        let _ = self.events.send(Invalidation::Entity(entity));
    }

    /// Receive every subsequent invalidation.
    pub fn subscribe(&self) -> broadcast::Receiver<Invalidation> {
        self.events.subscribe()
    }

    fn downcast<T: Send + Sync + 'static>(
        key: &CacheKey,
        value: Arc<dyn Any + Send + Sync>,
    ) -> ClientResult<Arc<T>> {
        value
            .downcast::<T>()
            .map_err(|_| ClientError::CacheTypeMismatch(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn books_key() -> CacheKey {
        CacheKey::new(Entity::Book, "/books")
    }

    async fn counted(calls: &AtomicUsize, value: u32) -> ClientResult<u32> {
        calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(value)
    }

    #[test]
    fn key_display_sorts_params() {
        let key = CacheKey::new(Entity::Book, "/books")
            .param("name", "ねこ")
            .param("authorName", "漱石");
        assert_eq!(key.to_string(), "/books?authorName=漱石&name=ねこ");
    }

    #[tokio::test]
    async fn concurrent_fetches_share_one_request() {
        let cache = RequestCache::new();
        let calls = AtomicUsize::new(0);
        let key = books_key();

        let (a, b, c) = tokio::join!(
            cache.fetch(&key, || counted(&calls, 7)),
            cache.fetch(&key, || counted(&calls, 8)),
            cache.fetch(&key, || counted(&calls, 9)),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*a.unwrap(), 7);
        assert_eq!(*b.unwrap(), 7);
        assert_eq!(*c.unwrap(), 7);
    }

    #[tokio::test]
    async fn distinct_keys_fetch_independently() {
        let cache = RequestCache::new();
        let calls = AtomicUsize::new(0);
        let other = books_key().param("name", "いぬ");

        cache.fetch(&books_key(), || counted(&calls, 1)).await.unwrap();
        cache.fetch(&other, || counted(&calls, 2)).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(*cache.peek::<u32>(&other).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn invalidation_forces_refetch_and_notifies() {
        let cache = RequestCache::new();
        let mut events = cache.subscribe();
        let calls = AtomicUsize::new(0);
        let key = books_key();

        cache.fetch(&key, || counted(&calls, 1)).await.unwrap();
        cache.invalidate_entity(Entity::Book).await;
        assert!(cache.peek::<u32>(&key).await.is_none());

        let value = cache.fetch(&key, || counted(&calls, 2)).await.unwrap();
        assert_eq!(*value, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(events.recv().await.unwrap(), Invalidation::Entity(Entity::Book));

        cache.invalidate(&key).await;
        assert_eq!(events.recv().await.unwrap(), Invalidation::Key(key));
    }

    #[tokio::test]
    async fn other_entities_survive_invalidation() {
        let cache = RequestCache::new();
        let calls = AtomicUsize::new(0);
        let term = CacheKey::new(Entity::Const, "/consts/term");

        cache.fetch(&term, || counted(&calls, 1)).await.unwrap();
        cache.invalidate_entity(Entity::Book).await;

        assert!(cache.peek::<u32>(&term).await.is_some());
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache = RequestCache::new();
        let key = books_key();

        let err = cache
            .fetch::<u32, _, _>(&key, || async {
                Err(ClientError::Api {
                    status: 500,
                    body: String::new(),
                })
            })
            .await
            .unwrap_err();
        assert_matches!(err, ClientError::Api { status: 500, .. });

        let value = cache.fetch(&key, || async { Ok(3u32) }).await.unwrap();
        assert_eq!(*value, 3);
    }

    #[tokio::test]
    async fn reading_a_key_as_another_type_is_an_error() {
        let cache = RequestCache::new();
        let key = books_key();
        cache.fetch(&key, || async { Ok(1u32) }).await.unwrap();

        let err = cache
            .fetch::<String, _, _>(&key, || async { Ok(String::new()) })
            .await
            .unwrap_err();
        assert_matches!(err, ClientError::CacheTypeMismatch(_));
    }
}
