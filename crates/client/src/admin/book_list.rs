//! Admin book list: search form, filtered rows and the book modal.

use std::sync::Arc;

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;
use toon_core::schema::BookListItem;
use toon_core::search::{filter_books, BookSearchKind};
use toon_core::types::DbId;

use super::modal::BookModalState;
use crate::api::books::BookListQuery;
use crate::cache::{Entity, Invalidation};
use crate::error::ClientResult;
use crate::hooks::DataClient;

/// Where the rows come from, and the feed that says when they went stale.
struct BookSource {
    data: DataClient,
    events: Receiver<Invalidation>,
}

pub struct BookListPage {
    pub search_kind: BookSearchKind,
    pub query: String,
    pub modal: BookModalState,
    books: Arc<Vec<BookListItem>>,
    source: Option<BookSource>,
}

impl BookListPage {
    /// Load every book; filtering happens in memory. The page follows the
    /// cache of `data`, see [`refresh_if_stale`](Self::refresh_if_stale).
    pub async fn load(data: &DataClient) -> ClientResult<Self> {
        let events = data.cache().subscribe();
        let mut page = Self::with_books(Vec::new());
        page.source = Some(BookSource {
            data: data.clone(),
            events,
        });
        page.refresh().await?;
        Ok(page)
    }

    /// A page over a fixed set of books that never refreshes.
    pub fn with_books(books: Vec<BookListItem>) -> Self {
        Self {
            search_kind: BookSearchKind::default(),
            query: String::new(),
            modal: BookModalState::default(),
            books: Arc::new(books),
            source: None,
        }
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let Some(source) = &self.source else {
            return Ok(());
        };
        self.books = source.data.book_list(&BookListQuery::default()).await?;
        Ok(())
    }

    /// Drain pending invalidations and refetch when any of them touched
    /// books. Returns whether the rows were reloaded.
    pub async fn refresh_if_stale(&mut self) -> ClientResult<bool> {
        let Some(source) = self.source.as_mut() else {
            return Ok(false);
        };

        let mut stale = false;
        loop {
            match source.events.try_recv() {
                Ok(Invalidation::Entity(Entity::Book)) => stale = true,
                Ok(Invalidation::Key(key)) if key.entity == Entity::Book => stale = true,
                Ok(_) => {}
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Book list missed invalidations");
                    stale = true;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        if stale {
            self.refresh().await?;
        }
        Ok(stale)
    }

    pub fn set_search(&mut self, kind: BookSearchKind, query: impl Into<String>) {
        self.search_kind = kind;
        self.query = query.into();
    }

    /// Rows matching the current search.
    pub fn rows(&self) -> Vec<&BookListItem> {
        filter_books(&self.books, self.search_kind, &self.query)
    }

    pub fn select(&mut self, book_id: DbId) {
        self.modal.open_detail(book_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::books::book_list_key;
    use crate::api::ApiClient;
    use crate::error::ClientError;
    use toon_core::schema::{BookAuthor, ImageRef};

    /// A client whose book list is already cached; the server is unreachable.
    async fn primed_client(books: Vec<BookListItem>) -> DataClient {
        let data = DataClient::new(ApiClient::new("http://127.0.0.1:1"));
        prime(&data, books).await;
        data
    }

    async fn prime(data: &DataClient, books: Vec<BookListItem>) {
        data.cache()
            .fetch(&book_list_key(&BookListQuery::default()), || async move {
                Ok::<_, ClientError>(books)
            })
            .await
            .unwrap();
    }

    fn names(page: &BookListPage) -> Vec<String> {
        page.rows().iter().map(|b| b.name.clone()).collect()
    }

    fn item(name: &str, ruby: &str) -> BookListItem {
        let image = ImageRef {
            alt: String::new(),
            id: DbId::new_v4(),
        };
        BookListItem {
            description: String::new(),
            id: DbId::new_v4(),
            name: name.to_string(),
            name_ruby: ruby.to_string(),
            image: image.clone(),
            author: BookAuthor {
                description: String::new(),
                id: DbId::new_v4(),
                name: "作者".to_string(),
                image,
            },
        }
    }

    #[test]
    fn search_narrows_rows_and_clearing_restores_order() {
        let mut page = BookListPage::with_books(vec![
            item("ヒラガナ", "ひらがな"),
            item("こころ", "こころ"),
        ]);

        page.set_search(BookSearchKind::BookName, "ひらがな");
        let rows: Vec<_> = page.rows().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(rows, ["ヒラガナ"]);

        page.set_search(BookSearchKind::BookName, "");
        let rows: Vec<_> = page.rows().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(rows, ["ヒラガナ", "こころ"]);
    }

    #[test]
    fn selecting_opens_detail() {
        let mut page = BookListPage::with_books(vec![item("こころ", "こころ")]);
        let id = page.rows()[0].id;
        page.select(id);
        assert_eq!(page.modal.book_id(), Some(id));
    }

    #[tokio::test]
    async fn book_invalidation_reloads_rows() {
        let data = primed_client(vec![item("こころ", "こころ")]).await;
        let mut page = BookListPage::load(&data).await.unwrap();
        assert_eq!(names(&page), ["こころ"]);

        data.cache().invalidate_entity(Entity::Book).await;
        prime(&data, vec![item("それから", "それから")]).await;

        assert!(page.refresh_if_stale().await.unwrap());
        assert_eq!(names(&page), ["それから"]);
        assert!(!page.refresh_if_stale().await.unwrap());
    }

    #[tokio::test]
    async fn other_entities_leave_rows_alone() {
        let data = primed_client(vec![item("こころ", "こころ")]).await;
        let mut page = BookListPage::load(&data).await.unwrap();

        data.cache().invalidate_entity(Entity::Const).await;
        data.cache().invalidate_entity(Entity::Episode).await;

        assert!(!page.refresh_if_stale().await.unwrap());
        assert_eq!(names(&page), ["こころ"]);
    }

    #[tokio::test]
    async fn fixed_page_never_refreshes() {
        let mut page = BookListPage::with_books(vec![item("こころ", "こころ")]);
        assert!(!page.refresh_if_stale().await.unwrap());
        assert_eq!(names(&page), ["こころ"]);
    }
}
