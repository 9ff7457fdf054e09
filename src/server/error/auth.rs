use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated instructor id is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated instructor in session")]
    NotLoggedIn,

    /// The session references an instructor that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the stale session cannot be
    /// trusted.
    #[error("Instructor {0} from session no longer exists")]
    InstructorNotInDatabase(i32),

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// Deliberately indistinguishable between the two cases. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration failed because the email is already registered.
    ///
    /// Results in a 409 Conflict response.
    #[error("An account with this email already exists")]
    EmailTaken,

    /// An authenticated instructor attempted an action on a resource they
    /// do not own.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Instructor {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Password hashing or verification failed unexpectedly.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed")]
    PasswordHash,
}

/// Converts authentication errors into HTTP responses.
///
/// Access-denied details are logged at debug level; the client only sees a
/// generic message so resource existence is not leaked.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotLoggedIn | Self::InstructorNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "An account with this email already exists".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(instructor_id, reason) => {
                tracing::debug!(
                    "Instructor {} denied access: {}",
                    instructor_id,
                    reason
                );
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have access to this resource".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::PasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
