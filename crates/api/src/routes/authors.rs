//! Route definitions for authors, mounted at `/authors`.
//!
//! ```text
//! GET    /        -> list
//! POST   /        -> create
//! GET    /{id}    -> get_by_id
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::author;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(author::list).post(author::create))
        .route(
            "/{id}",
            get(author::get_by_id)
                .patch(author::update)
                .delete(author::delete),
        )
}
