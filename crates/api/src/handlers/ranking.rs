use axum::extract::{Query, State};
use axum::Json;
use toon_core::schema::RankingListItem;
use toon_db::models::ranking::RankingRow;
use toon_db::repositories::RankingRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::state::AppState;

/// GET /api/v1/rankings
///
/// Ordered by rank ascending.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<RankingListItem>>> {
    let rankings = RankingRepo::list(&state.pool, params.limit, params.offset).await?;
    Ok(Json(
        rankings.into_iter().map(RankingRow::into_list_item).collect(),
    ))
}
