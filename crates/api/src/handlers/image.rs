//! Handlers for the `/images` resource.

use axum::extract::{Multipart, Path, State};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use toon_core::error::CoreError;
use toon_core::schema::ImageRef;
use toon_core::types::DbId;
use toon_core::validation::rules::{MSG_IMAGE_REQUIRED, MSG_IMAGE_UNSUPPORTED};
use toon_db::models::image::CreateImage;
use toon_db::repositories::ImageRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Stored images never change, so clients may cache them indefinitely.
const IMMUTABLE_CACHE: &str = "public, max-age=31536000, immutable";

/// POST /api/v1/images
///
/// Multipart form with a `content` file part and an optional `alt` text
/// part. The content must be a supported image format.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<ImageRef>)> {
    let mut content = None;
    let mut alt = String::new();

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("content") => content = Some(field.bytes().await?),
            Some("alt") => alt = field.text().await?,
            _ => {}
        }
    }

    let content =
        content.ok_or_else(|| AppError::Core(CoreError::Validation(MSG_IMAGE_REQUIRED.into())))?;
    let mime_type = toon_core::image::mime_type(&content)
        .ok_or_else(|| AppError::Core(CoreError::Validation(MSG_IMAGE_UNSUPPORTED.into())))?;

    let image = ImageRepo::create(
        &state.pool,
        &CreateImage {
            alt,
            mime_type: mime_type.to_string(),
            content: content.to_vec(),
        },
    )
    .await?;
    tracing::info!(image_id = %image.id, mime_type, bytes = content.len(), "Image uploaded");

    Ok((StatusCode::CREATED, Json(image.to_ref())))
}

/// GET /api/v1/images/{id}
pub async fn get_content(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let image = ImageRepo::find_content(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Image",
            id,
        }))?;

    Ok((
        [
            (CONTENT_TYPE, image.mime_type),
            (CACHE_CONTROL, IMMUTABLE_CACHE.to_string()),
        ],
        image.content,
    ))
}
