//! Domain types shared by the Cyber TOON server and client crates.
//!
//! Everything here is pure logic with no database or network access:
//! identifiers, the response schema, const ids, search filtering, form
//! validation rules and image format sniffing.

pub mod consts;
pub mod error;
pub mod image;
pub mod schema;
pub mod search;
pub mod types;
pub mod validation;
