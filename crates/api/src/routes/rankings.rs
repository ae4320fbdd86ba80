use axum::routing::get;
use axum::Router;

use crate::handlers::ranking;
use crate::state::AppState;

/// Ranking routes mounted at `/rankings` (read-only).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(ranking::list))
}
