//! Route definitions for the static consts, mounted at `/consts`.

use axum::routing::get;
use axum::Router;
use toon_core::consts::ConstKind;

use crate::handlers::consts;
use crate::state::AppState;

/// One `GET /{id}` route per [`ConstKind`].
///
/// Each id gets its own route so an unknown id falls through to the
/// router's 404 rather than a path-parameter rejection.
pub fn router() -> Router<AppState> {
    ConstKind::ALL
        .into_iter()
        .fold(Router::new(), |router, kind| {
            router.route(
                &format!("/{}", kind.as_str()),
                get(move || consts::get_const(kind)),
            )
        })
}
