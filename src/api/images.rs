use axum::Json;
use axum::extract::State;
use axum::routing::{get, post};
use axum::Router;
use tracing::info;

use super::extract::ValidBody;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{Image, ImageUpload, UploadResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", get(list_images))
        .route("/uploadimage", post(upload_image))
}

async fn list_images(State(state): State<AppState>) -> Result<Json<Vec<Image>>, AppError> {
    let images = repository::fetch_images(&state.db).await?;
    Ok(Json(images))
}

async fn upload_image(
    State(state): State<AppState>,
    ValidBody(req): ValidBody<ImageUpload>,
) -> Result<Json<UploadResponse>, AppError> {
    let id = repository::insert_image(&state.db, &req.image).await?;
    info!("stored image {} ({} bytes)", id, req.image.len());
    Ok(Json(UploadResponse {
        message: "Image uploaded successfully".to_string(),
        id,
    }))
}
