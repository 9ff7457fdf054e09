use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        lesson::{CreateLessonDto, LessonDto, LessonListItemDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::lesson::LessonService,
        state::AppState,
    },
};

pub static LESSON_TAG: &str = "lesson";

#[utoipa::path(
    post,
    path = "/api/lessons",
    tag = LESSON_TAG,
    request_body = CreateLessonDto,
    responses(
        (status = 201, description = "Lesson created with its open seats", body = LessonDto),
        (status = 400, description = "Invalid lesson data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let lesson = LessonService::new(&state.db)
        .create(instructor.id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(lesson)))
}

#[utoipa::path(
    get,
    path = "/api/lessons",
    tag = LESSON_TAG,
    responses(
        (status = 200, description = "The instructor's lessons", body = [LessonListItemDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lessons(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let lessons = LessonService::new(&state.db).list(instructor.id).await?;

    Ok((StatusCode::OK, Json(lessons)))
}

#[utoipa::path(
    get,
    path = "/api/lessons/{lesson_id}",
    tag = LESSON_TAG,
    params(
        ("lesson_id" = i32, Path, description = "Lesson ID")
    ),
    responses(
        (status = 200, description = "The lesson with its seats", body = LessonDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Lesson not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let lesson = LessonService::new(&state.db)
        .get_by_id(lesson_id, instructor.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Lesson not found".to_string()))?;

    Ok((StatusCode::OK, Json(lesson)))
}
