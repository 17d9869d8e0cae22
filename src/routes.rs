use std::any::Any;

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

use crate::api;
use crate::auth::require_api_key;
use crate::config::{AppConfig, ConfigError};
use crate::db;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the full request pipeline: gate, routers, fallback and the
/// transport layers around them.
pub fn app(state: AppState, config: &AppConfig) -> Result<Router, ConfigError> {
    let cors = config.cors_layer()?;

    let api_routes = api::router().layer(middleware::from_fn_with_state(
        config.api_key.clone(),
        require_api_key,
    ));

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api", api_routes)
        .fallback(api::route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(config.body_limit)),
        );

    Ok(router)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    db::ping(&state.db).await?;
    Ok(StatusCode::OK)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!("unhandled failure: {}", detail);
    AppError::InternalServerError.into_response()
}
