//! Author rows.

use sqlx::FromRow;
use toon_core::schema::{AuthorBook, AuthorDetail, AuthorListItem, ImageRef};
use toon_core::types::DbId;

/// An `authors` row joined with its image.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_id: DbId,
    pub image_alt: String,
}

impl AuthorRow {
    pub fn into_list_item(self) -> AuthorListItem {
        AuthorListItem {
            description: self.description,
            id: self.id,
            name: self.name,
        }
    }

    pub fn into_detail(self, books: Vec<AuthorBookRow>) -> AuthorDetail {
        AuthorDetail {
            description: self.description,
            id: self.id,
            name: self.name,
            image: ImageRef {
                alt: self.image_alt,
                id: self.image_id,
            },
            books: books.into_iter().map(AuthorBookRow::into_item).collect(),
        }
    }
}

/// A book of an author, joined with the book's image.
#[derive(Debug, Clone, FromRow)]
pub struct AuthorBookRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_id: DbId,
    pub image_alt: String,
}

impl AuthorBookRow {
    fn into_item(self) -> AuthorBook {
        AuthorBook {
            description: self.description,
            id: self.id,
            name: self.name,
            image: ImageRef {
                alt: self.image_alt,
                id: self.image_id,
            },
        }
    }
}
