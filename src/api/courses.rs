use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::{debug, info};

use super::extract::ValidBody;
use crate::db::repository;
use crate::error::AppError;
use crate::models::{Course, CourseInput, MessageResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_courses).post(create_course))
        .route(
            "/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
}

// Ids arrive as raw path text; anything that is not a key cannot match a row.
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| AppError::course_not_found())
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = repository::fetch_courses(&state.db).await?;
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let id = parse_id(&id)?;
    let course = repository::find_course_by_id(&state.db, id)
        .await?
        .ok_or_else(AppError::course_not_found)?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    ValidBody(req): ValidBody<CourseInput>,
) -> Result<(StatusCode, Json<Course>), AppError> {
    let course = repository::insert_course(&state.db, req).await?;
    info!("created course {}", course.id);
    Ok((StatusCode::CREATED, Json(course)))
}

async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidBody(req): ValidBody<CourseInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let outcome = repository::update_course(&state.db, id, &req).await?;
    if outcome.affected_rows == 0 {
        return Err(AppError::course_not_found());
    }
    debug!("updated course {}", id);
    Ok(Json(MessageResponse::new("Course updated successfully")))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    let outcome = repository::delete_course(&state.db, id).await?;
    if outcome.affected_rows == 0 {
        return Err(AppError::course_not_found());
    }
    info!("deleted course {}", id);
    Ok(Json(MessageResponse::new("Course deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(parse_id("12").ok(), Some(12));
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        assert!(matches!(parse_id("abc"), Err(AppError::NotFound(_))));
        assert!(matches!(parse_id("1.5"), Err(AppError::NotFound(_))));
    }
}
