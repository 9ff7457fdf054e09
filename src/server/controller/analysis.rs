use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        analysis::{AnalysisDto, RecordAnalysisDto},
        api::{DomainErrorDto, ErrorDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::analysis::AnalysisService,
        state::AppState,
    },
};

pub static ANALYSIS_TAG: &str = "analysis";

#[utoipa::path(
    post,
    path = "/api/seats/{seat_id}/analysis",
    tag = ANALYSIS_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    request_body = RecordAnalysisDto,
    responses(
        (status = 201, description = "Analysis recorded", body = AnalysisDto),
        (status = 400, description = "Invalid rating", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Seat belongs to another instructor's lesson", body = ErrorDto),
        (status = 404, description = "Seat not found", body = DomainErrorDto),
        (status = 409, description = "Seat is not confirmed", body = DomainErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_analysis(
    State(state): State<AppState>,
    session: Session,
    Path(seat_id): Path<i32>,
    Json(dto): Json<RecordAnalysisDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let analysis = AnalysisService::new(&state.db)
        .record(instructor.id, seat_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(analysis)))
}

#[utoipa::path(
    get,
    path = "/api/seats/{seat_id}/analysis",
    tag = ANALYSIS_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "The analysis visible to the caller", body = AnalysisDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Analysis exists but is not shared", body = ErrorDto),
        (status = 404, description = "Seat or analysis not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_analysis(
    State(state): State<AppState>,
    session: Session,
    Path(seat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let analysis = AnalysisService::new(&state.db)
        .get_for_seat(instructor.id, seat_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No analysis recorded for this seat".to_string()))?;

    Ok((StatusCode::OK, Json(analysis)))
}

#[utoipa::path(
    get,
    path = "/api/students/{student_id}/analyses",
    tag = ANALYSIS_TAG,
    params(
        ("student_id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Own and shared analyses for the student", body = [AnalysisDto]),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_analyses(
    State(state): State<AppState>,
    session: Session,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let analyses = AnalysisService::new(&state.db)
        .list_for_student(instructor.id, student_id)
        .await?;

    Ok((StatusCode::OK, Json(analyses)))
}
