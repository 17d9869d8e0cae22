pub mod courses;
pub mod extract;
pub mod images;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Everything mounted under `/api`. The fallback lives here so unknown
/// `/api` paths sit behind the same layers as the real routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/courses", courses::router())
        .merge(images::router())
        .fallback(route_not_found)
}

pub async fn route_not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}
