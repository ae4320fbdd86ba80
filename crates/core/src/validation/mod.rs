//! Field validation rules for the admin edit forms and the server's write
//! DTOs.
//!
//! The form layer evaluates these per field on change/blur; the server
//! mirrors the same rules with `validator` derives on its request bodies.

pub mod rules;
