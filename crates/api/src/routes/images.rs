//! Route definitions for images, mounted at `/images`.
//!
//! ```text
//! POST   /        -> upload (multipart: content, alt)
//! GET    /{id}    -> raw bytes with the stored content type
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(image::upload))
        .route("/{id}", get(image::get_content))
}
