//! Handlers for the `/authors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use toon_core::error::CoreError;
use toon_core::schema::{AuthorDetail, AuthorListItem, CreateAuthorRequest, UpdateAuthorRequest};
use toon_core::types::DbId;
use toon_db::models::author::AuthorRow;
use toon_db::repositories::AuthorRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::AuthorListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Author",
        id,
    })
}

/// Load an author with their books, or 404.
async fn load_detail(state: &AppState, id: DbId) -> AppResult<AuthorDetail> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let books = AuthorRepo::list_books(&state.pool, id).await?;
    Ok(author.into_detail(books))
}

/// GET /api/v1/authors
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AuthorListParams>,
) -> AppResult<Json<Vec<AuthorListItem>>> {
    let authors = AuthorRepo::list(
        &state.pool,
        params.author_id,
        params.name.as_deref(),
        params.limit,
        params.offset,
    )
    .await?;
    Ok(Json(
        authors.into_iter().map(AuthorRow::into_list_item).collect(),
    ))
}

/// GET /api/v1/authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<AuthorDetail>> {
    Ok(Json(load_detail(&state, id).await?))
}

/// POST /api/v1/authors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthorRequest>,
) -> AppResult<(StatusCode, Json<AuthorDetail>)> {
    input.validate()?;

    let id = AuthorRepo::create(&state.pool, &input).await?;
    tracing::info!(author_id = %id, "Author created");

    Ok((StatusCode::CREATED, Json(load_detail(&state, id).await?)))
}

/// PATCH /api/v1/authors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAuthorRequest>,
) -> AppResult<Json<AuthorDetail>> {
    input.validate()?;

    AuthorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(author_id = %id, "Author updated");

    Ok(Json(load_detail(&state, id).await?))
}

/// DELETE /api/v1/authors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if AuthorRepo::delete(&state.pool, id).await? {
        tracing::info!(author_id = %id, "Author deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
