//! Book rows.

use sqlx::FromRow;
use toon_core::schema::{
    BookAuthor, BookDetail, BookEpisode, BookListItem, ImageRef, RankingBook,
};
use toon_core::types::DbId;

/// A `books` row joined with its image, its author and the author's image.
#[derive(Debug, Clone, FromRow)]
pub struct BookRow {
    pub id: DbId,
    pub name: String,
    pub name_ruby: String,
    pub description: String,
    pub image_id: DbId,
    pub image_alt: String,
    pub author_id: DbId,
    pub author_name: String,
    pub author_description: String,
    pub author_image_id: DbId,
    pub author_image_alt: String,
}

impl BookRow {
    fn image(&self) -> ImageRef {
        ImageRef {
            alt: self.image_alt.clone(),
            id: self.image_id,
        }
    }

    fn author(&self) -> BookAuthor {
        BookAuthor {
            description: self.author_description.clone(),
            id: self.author_id,
            name: self.author_name.clone(),
            image: ImageRef {
                alt: self.author_image_alt.clone(),
                id: self.author_image_id,
            },
        }
    }

    pub fn into_list_item(self) -> BookListItem {
        BookListItem {
            image: self.image(),
            author: self.author(),
            description: self.description,
            id: self.id,
            name: self.name,
            name_ruby: self.name_ruby,
        }
    }

    pub fn into_detail(self, episodes: Vec<BookEpisodeRow>) -> BookDetail {
        BookDetail {
            image: self.image(),
            author: self.author(),
            description: self.description,
            id: self.id,
            name: self.name,
            name_ruby: self.name_ruby,
            episodes: episodes.into_iter().map(BookEpisodeRow::into_item).collect(),
        }
    }

    pub fn into_ranking_book(self) -> RankingBook {
        RankingBook {
            image: self.image(),
            author: self.author(),
            description: self.description,
            id: self.id,
            name: self.name,
        }
    }
}

/// An episode as listed on a book.
#[derive(Debug, Clone, FromRow)]
pub struct BookEpisodeRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub chapter: i32,
}

impl BookEpisodeRow {
    fn into_item(self) -> BookEpisode {
        BookEpisode {
            chapter: self.chapter,
            description: self.description,
            id: self.id,
            name: self.name,
        }
    }
}

/// Filters accepted by the book list query. `None` means "no filter".
#[derive(Debug, Clone, Default)]
pub struct BookListFilter {
    pub author_id: Option<DbId>,
    pub author_name: Option<String>,
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
