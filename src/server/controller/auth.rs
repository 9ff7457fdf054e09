use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{InstructorDto, LoginDto, RegisterDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::AuthService, state::AppState,
    },
};

/// Session key under which the authenticated instructor's id is stored.
pub static SESSION_AUTH_INSTRUCTOR_ID: &str = "auth_instructor_id";

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = InstructorDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthService::new(&state.db).register(dto).await?;

    session
        .insert(SESSION_AUTH_INSTRUCTOR_ID, instructor.id)
        .await?;

    Ok((StatusCode::CREATED, Json(InstructorDto::from(instructor))))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = InstructorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthService::new(&state.db)
        .verify_credentials(&dto.email, &dto.password)
        .await?;

    session.cycle_id().await?;
    session
        .insert(SESSION_AUTH_INSTRUCTOR_ID, instructor.id)
        .await?;

    Ok((StatusCode::OK, Json(InstructorDto::from(instructor))))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated instructor", body = InstructorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let instructor = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(InstructorDto::from(instructor))))
}
