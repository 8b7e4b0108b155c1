use axum::Json;
use axum::extract::Path;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.db.ping().await?;
    Ok(StatusCode::OK)
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let mut conn = state.db.acquire().await?;
    let courses = repository::fetch_courses(&mut conn).await?;
    debug!("listed {} courses", courses.len());
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let mut conn = state.db.acquire().await?;
    let course = repository::fetch_course(&mut conn, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(course))
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<CoursePayload>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let mut conn = state.db.acquire().await?;
    let id = repository::insert_course(&mut conn, req).await?;
    info!("created course {}", id);
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("course created successfully")),
    ))
}

// Zero matched rows still answers 200, same as delete.
async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<CoursePayload>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = state.db.acquire().await?;
    let rows = repository::update_course(&mut conn, id, req).await?;
    info!("updated course {} ({} rows affected)", id, rows);
    Ok(Json(MessageResponse::new("course updated successfully")))
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut conn = state.db.acquire().await?;
    let rows = repository::delete_course(&mut conn, id).await?;
    info!("deleted course {} ({} rows affected)", id, rows);
    Ok(Json(MessageResponse::new("course deleted successfully")))
}
