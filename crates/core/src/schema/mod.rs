//! API response and request shapes.
//!
//! These structs are the wire contract between the server and its clients.
//! They are written by hand and kept apart from the database row structs so
//! a schema change in storage never silently changes a response. Each
//! response type is also exported as a TypeScript binding via `ts-rs`.
//!
//! Field names are camelCase on the wire.

pub mod author;
pub mod book;
pub mod episode;
pub mod image;
pub mod ranking;

pub use author::{AuthorBook, AuthorDetail, AuthorListItem, CreateAuthorRequest, UpdateAuthorRequest};
pub use book::{BookAuthor, BookDetail, BookEpisode, BookListItem, CreateBookRequest, UpdateBookRequest};
pub use episode::{
    CreateEpisodePageRequest, CreateEpisodeRequest, EpisodeDetail, EpisodePageItem, EpisodeSummary,
    UpdateEpisodeRequest,
};
pub use image::ImageRef;
pub use ranking::{RankingBook, RankingListItem};
