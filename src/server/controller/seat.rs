use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{DomainErrorDto, ErrorDto, ValidationErrorDto},
        seat::{IdentityFormDto, UpdateIdentityFormDto},
    },
    server::{
        data::seat::SeatRepository,
        error::{auth::AuthError, claim::ClaimError, AppError},
        middleware::auth::AuthGuard,
        model::claim::UpdateIdentityFormParams,
        service::{claim::ClaimService, identity_form::IdentityFormService},
        state::AppState,
    },
};

pub static SEAT_TAG: &str = "seat";

#[utoipa::path(
    get,
    path = "/api/seats/{seat_id}/identity-form",
    tag = SEAT_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "The identity form, or null when the seat has none yet", body = IdentityFormDto),
        (status = 404, description = "Seat not found", body = DomainErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_identity_form(
    State(state): State<AppState>,
    Path(seat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let form = IdentityFormService::new(&state.db).get(seat_id).await?;

    Ok((StatusCode::OK, Json(form)))
}

#[utoipa::path(
    patch,
    path = "/api/seats/{seat_id}/identity-form",
    tag = SEAT_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    request_body = UpdateIdentityFormDto,
    responses(
        (status = 200, description = "The updated identity form", body = IdentityFormDto),
        (status = 400, description = "Merged payload failed validation", body = ValidationErrorDto),
        (status = 404, description = "Seat not found", body = DomainErrorDto),
        (status = 409, description = "Seat has no identity form", body = DomainErrorDto),
        (status = 423, description = "Form is confirmed and locked", body = DomainErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_identity_form(
    State(state): State<AppState>,
    Path(seat_id): Path<i32>,
    Json(dto): Json<UpdateIdentityFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let form = IdentityFormService::new(&state.db)
        .update(seat_id, UpdateIdentityFormParams::from(dto))
        .await?;

    Ok((StatusCode::OK, Json(form)))
}

#[utoipa::path(
    post,
    path = "/api/seats/{seat_id}/confirm",
    tag = SEAT_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    responses(
        (status = 200, description = "The confirmed identity form", body = IdentityFormDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Seat belongs to another instructor's lesson", body = ErrorDto),
        (status = 404, description = "Seat not found", body = DomainErrorDto),
        (status = 409, description = "Seat has no claim to confirm", body = DomainErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn confirm_seat(
    State(state): State<AppState>,
    session: Session,
    Path(seat_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let (_seat, lesson) = SeatRepository::new(&state.db)
        .get_with_lesson(seat_id)
        .await?
        .ok_or(ClaimError::SeatNotFound(seat_id))?;

    if lesson.instructor_id != instructor.id {
        return Err(AuthError::AccessDenied(
            instructor.id,
            "Instructor attempted to confirm a seat of another instructor's lesson".to_string(),
        )
        .into());
    }

    let form = ClaimService::new(&state.db)
        .confirm(seat_id, &format!("instructor:{}", instructor.id))
        .await?;

    Ok((StatusCode::OK, Json(form)))
}
