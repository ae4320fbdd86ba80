//! Row structs and their projections into the response schema.
//!
//! Rows come from joined queries, so related images and authors arrive
//! flattened with prefixed column names. Each row type knows how to build
//! the nested `toon_core::schema` shapes it backs.

pub mod author;
pub mod book;
pub mod episode;
pub mod image;
pub mod ranking;
