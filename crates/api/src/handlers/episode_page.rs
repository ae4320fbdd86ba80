//! Handlers for the `/episodePages` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use toon_core::error::CoreError;
use toon_core::schema::{CreateEpisodePageRequest, EpisodePageItem};
use toon_core::types::DbId;
use toon_db::models::episode::EpisodePageRow;
use toon_db::repositories::EpisodePageRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::EpisodePageListParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "EpisodePage",
        id,
    })
}

/// GET /api/v1/episodePages?episodeId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<EpisodePageListParams>,
) -> AppResult<Json<Vec<EpisodePageItem>>> {
    let pages = EpisodePageRepo::list_by_episode(&state.pool, params.episode_id).await?;
    Ok(Json(
        pages.into_iter().map(EpisodePageRow::into_item).collect(),
    ))
}

/// POST /api/v1/episodePages
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEpisodePageRequest>,
) -> AppResult<(StatusCode, Json<EpisodePageItem>)> {
    input.validate()?;

    let id = EpisodePageRepo::create(&state.pool, &input).await?;
    let page = EpisodePageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(page_id = %id, episode_id = %input.episode_id, page = input.page, "Episode page created");

    Ok((StatusCode::CREATED, Json(page.into_item())))
}

/// DELETE /api/v1/episodePages/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if EpisodePageRepo::delete(&state.pool, id).await? {
        tracing::info!(page_id = %id, "Episode page deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
