//! Route definitions for episode pages, mounted at `/episodePages`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::episode_page;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(episode_page::list).post(episode_page::create))
        .route("/{id}", delete(episode_page::delete))
}
