//! Handlers for the `/books` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use toon_core::error::CoreError;
use toon_core::schema::{BookDetail, BookListItem, CreateBookRequest, UpdateBookRequest};
use toon_core::types::DbId;
use toon_db::models::book::{BookListFilter, BookRow};
use toon_db::repositories::BookRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::BookListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Book", id })
}

/// Load a book with its author and episodes, or 404.
async fn load_detail(state: &AppState, id: DbId) -> AppResult<BookDetail> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let episodes = BookRepo::list_episodes(&state.pool, id).await?;
    Ok(book.into_detail(episodes))
}

/// GET /api/v1/books
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BookListParams>,
) -> AppResult<Json<Vec<BookListItem>>> {
    let filter = BookListFilter {
        author_id: params.author_id,
        author_name: params.author_name,
        name: params.name,
        limit: params.limit,
        offset: params.offset,
    };
    let books = BookRepo::list(&state.pool, &filter).await?;
    Ok(Json(books.into_iter().map(BookRow::into_list_item).collect()))
}

/// GET /api/v1/books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<BookDetail>> {
    Ok(Json(load_detail(&state, id).await?))
}

/// POST /api/v1/books
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookDetail>)> {
    input.validate()?;

    let id = BookRepo::create(&state.pool, &input).await?;
    tracing::info!(book_id = %id, author_id = %input.author_id, "Book created");

    Ok((StatusCode::CREATED, Json(load_detail(&state, id).await?)))
}

/// PATCH /api/v1/books/{id}
///
/// Only the fields present in the body change.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBookRequest>,
) -> AppResult<Json<BookDetail>> {
    input.validate()?;

    BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(book_id = %id, image_changed = input.image_id.is_some(), "Book updated");

    Ok(Json(load_detail(&state, id).await?))
}

/// DELETE /api/v1/books/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BookRepo::delete(&state.pool, id).await? {
        tracing::info!(book_id = %id, "Book deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
