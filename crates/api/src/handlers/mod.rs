pub mod author;
pub mod book;
pub mod consts;
pub mod episode;
pub mod episode_page;
pub mod image;
pub mod ranking;
