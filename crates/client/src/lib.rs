//! Client side of Cyber TOON: a typed HTTP client per entity, a keyed
//! request cache, and the admin screen logic that sits on top of them.

pub mod admin;
pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod hooks;
