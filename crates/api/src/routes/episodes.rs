//! Route definitions for episodes, mounted at `/episodes`.
//!
//! ```text
//! GET    /        -> list (?bookId)
//! POST   /        -> create
//! GET    /{id}    -> get_by_id (with pages)
//! PATCH  /{id}    -> update
//! DELETE /{id}    -> delete
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::episode;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode::list).post(episode::create))
        .route(
            "/{id}",
            get(episode::get_by_id)
                .patch(episode::update)
                .delete(episode::delete),
        )
}
