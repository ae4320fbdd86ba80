//! Route definitions for books, mounted at `/books`.
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

use crate::handlers::book;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(book::list).post(book::create))
        .route(
            "/{id}",
            get(book::get_by_id).patch(book::update).delete(book::delete),
        )
}
