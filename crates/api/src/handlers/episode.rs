//! Handlers for the `/episodes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use toon_core::error::CoreError;
use toon_core::schema::{
    CreateEpisodeRequest, EpisodeDetail, EpisodeSummary, UpdateEpisodeRequest,
};
use toon_core::types::DbId;
use toon_db::models::episode::EpisodeRow;
use toon_db::repositories::{EpisodePageRepo, EpisodeRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::EpisodeListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Episode",
        id,
    })
}

async fn load_summary(state: &AppState, id: DbId) -> AppResult<EpisodeSummary> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(episode.into_summary())
}

/// GET /api/v1/episodes
///
/// Ordered by chapter; `?bookId=` narrows to one book.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EpisodeListParams>,
) -> AppResult<Json<Vec<EpisodeSummary>>> {
    let episodes =
        EpisodeRepo::list(&state.pool, params.book_id, params.limit, params.offset).await?;
    Ok(Json(
        episodes.into_iter().map(EpisodeRow::into_summary).collect(),
    ))
}

/// GET /api/v1/episodes/{id}
///
/// Includes the episode's pages ordered by page number.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<EpisodeDetail>> {
    let episode = EpisodeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let pages = EpisodePageRepo::list_by_episode(&state.pool, id).await?;
    Ok(Json(episode.into_detail(pages)))
}

/// POST /api/v1/episodes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEpisodeRequest>,
) -> AppResult<(StatusCode, Json<EpisodeSummary>)> {
    input.validate()?;

    let id = EpisodeRepo::create(&state.pool, &input).await?;
    tracing::info!(episode_id = %id, book_id = %input.book_id, chapter = input.chapter, "Episode created");

    Ok((StatusCode::CREATED, Json(load_summary(&state, id).await?)))
}

/// PATCH /api/v1/episodes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEpisodeRequest>,
) -> AppResult<Json<EpisodeSummary>> {
    input.validate()?;

    EpisodeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(episode_id = %id, "Episode updated");

    Ok(Json(load_summary(&state, id).await?))
}

/// DELETE /api/v1/episodes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if EpisodeRepo::delete(&state.pool, id).await? {
        tracing::info!(episode_id = %id, "Episode deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
