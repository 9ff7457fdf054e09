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
        invitation::{ClaimDto, ClaimResultDto, CreateInvitationDto, InvitationDto},
    },
    server::{
        data::seat::SeatRepository,
        error::{auth::AuthError, claim::ClaimError, AppError},
        middleware::auth::AuthGuard,
        model::claim::IdentityFormParams,
        service::{claim::ClaimService, invitation::InvitationService},
        state::AppState,
    },
};

pub static INVITATION_TAG: &str = "invitation";

#[utoipa::path(
    post,
    path = "/api/seats/{seat_id}/invitations",
    tag = INVITATION_TAG,
    params(
        ("seat_id" = i32, Path, description = "Seat ID")
    ),
    request_body = CreateInvitationDto,
    responses(
        (status = 201, description = "Invitation issued", body = InvitationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Seat belongs to another instructor's lesson", body = ErrorDto),
        (status = 404, description = "Seat not found", body = DomainErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(seat_id): Path<i32>,
    Json(dto): Json<CreateInvitationDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    let (_seat, lesson) = SeatRepository::new(&state.db)
        .get_with_lesson(seat_id)
        .await?
        .ok_or(ClaimError::SeatNotFound(seat_id))?;

    if lesson.instructor_id != instructor.id {
        return Err(AuthError::AccessDenied(
            instructor.id,
            "Instructor attempted to issue an invitation for another instructor's lesson"
                .to_string(),
        )
        .into());
    }

    let expires_in_days = dto.expires_in_days.unwrap_or(state.invitation_expires_days);
    let invitation = InvitationService::new(&state.db, state.revoke_prior_invitations)
        .create(
            seat_id,
            expires_in_days,
            &format!("instructor:{}", instructor.id),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(invitation)))
}

#[utoipa::path(
    get,
    path = "/api/invitations/{code}",
    tag = INVITATION_TAG,
    params(
        ("code" = String, Path, description = "Invitation code")
    ),
    responses(
        (status = 200, description = "The invitation with derived expiry/claim state", body = InvitationDto),
        (status = 404, description = "Unknown code", body = DomainErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invitation(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let invitation = InvitationService::new(&state.db, state.revoke_prior_invitations)
        .get(&code)
        .await?
        .ok_or(ClaimError::InvitationNotFound)?;

    Ok((StatusCode::OK, Json(invitation)))
}

#[utoipa::path(
    post,
    path = "/api/invitations/claim",
    tag = INVITATION_TAG,
    request_body = ClaimDto,
    responses(
        (status = 200, description = "Seat claimed and identity form submitted", body = ClaimResultDto),
        (status = 400, description = "Identity payload failed validation", body = ValidationErrorDto),
        (status = 404, description = "Unknown code", body = DomainErrorDto),
        (status = 409, description = "Code already claimed", body = DomainErrorDto),
        (status = 410, description = "Code expired", body = DomainErrorDto),
        (status = 429, description = "Rate limit exceeded"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn claim_invitation(
    State(state): State<AppState>,
    Json(dto): Json<ClaimDto>,
) -> Result<impl IntoResponse, AppError> {
    let code = dto.code.clone();
    let params = IdentityFormParams::from(dto);

    let result = ClaimService::new(&state.db).claim(&code, params).await?;

    Ok((StatusCode::OK, Json(result)))
}
