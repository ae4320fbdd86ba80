pub mod authors;
pub mod books;
pub mod consts;
pub mod episode_pages;
pub mod episodes;
pub mod health;
pub mod images;
pub mod rankings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /consts/{company,contact,overview,question,term}  static text
///
/// /authors                                          list, create
/// /authors/{id}                                     get, update, delete
///
/// /books                                            list, create
/// /books/{id}                                       get, update, delete
///
/// /episodes                                         list (?bookId), create
/// /episodes/{id}                                    get (with pages), update, delete
///
/// /episodePages                                     list (?episodeId), create
/// /episodePages/{id}                                delete
///
/// /rankings                                         list
///
/// /images                                           upload (multipart)
/// /images/{id}                                      raw bytes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/consts", consts::router())
        .nest("/authors", authors::router())
        .nest("/books", books::router())
        .nest("/episodes", episodes::router())
        .nest("/episodePages", episode_pages::router())
        .nest("/rankings", rankings::router())
        .nest("/images", images::router())
}
