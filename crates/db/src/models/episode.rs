//! Episode and episode page rows.

use sqlx::FromRow;
use toon_core::schema::{EpisodeDetail, EpisodePageItem, EpisodeSummary, ImageRef};
use toon_core::types::DbId;

/// An `episodes` row joined with its image.
#[derive(Debug, Clone, FromRow)]
pub struct EpisodeRow {
    pub id: DbId,
    pub name: String,
    pub name_ruby: String,
    pub description: String,
    pub chapter: i32,
    pub book_id: DbId,
    pub image_id: DbId,
    pub image_alt: String,
}

impl EpisodeRow {
    fn image(&self) -> ImageRef {
        ImageRef {
            alt: self.image_alt.clone(),
            id: self.image_id,
        }
    }

    pub fn into_summary(self) -> EpisodeSummary {
        EpisodeSummary {
            image: self.image(),
            chapter: self.chapter,
            description: self.description,
            id: self.id,
            name: self.name,
            name_ruby: self.name_ruby,
        }
    }

    pub fn into_detail(self, pages: Vec<EpisodePageRow>) -> EpisodeDetail {
        EpisodeDetail {
            image: self.image(),
            chapter: self.chapter,
            description: self.description,
            id: self.id,
            name: self.name,
            name_ruby: self.name_ruby,
            pages: pages.into_iter().map(EpisodePageRow::into_item).collect(),
        }
    }
}

/// An `episode_pages` row joined with its image.
#[derive(Debug, Clone, FromRow)]
pub struct EpisodePageRow {
    pub id: DbId,
    pub page: i32,
    pub episode_id: DbId,
    pub image_id: DbId,
    pub image_alt: String,
}

impl EpisodePageRow {
    pub fn into_item(self) -> EpisodePageItem {
        EpisodePageItem {
            id: self.id,
            page: self.page,
            image: ImageRef {
                alt: self.image_alt,
                id: self.image_id,
            },
        }
    }
}
