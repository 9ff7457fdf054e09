use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{DomainErrorDto, FieldErrorDto, ValidationErrorDto};

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Domain errors of the invitation, claim, and identity form lifecycle.
///
/// Every variant maps to a stable machine code (see [`ClaimError::code`]) so
/// clients can branch on failures without parsing messages. None of these
/// leave partial state behind; the claim transaction rolls back before any of
/// them surface.
#[derive(Error, Debug)]
pub enum ClaimError {
    /// The referenced seat does not exist.
    #[error("Seat {0} not found")]
    SeatNotFound(i32),

    /// No invitation carries the presented code.
    #[error("Invitation code not found")]
    InvitationNotFound,

    /// The invitation's deadline has passed. A code expiring at exactly the
    /// current instant counts as expired.
    #[error("Invitation code has expired")]
    InvitationExpired,

    /// The invitation was already redeemed, by this caller (replay) or by a
    /// concurrent claim that won the race.
    #[error("Invitation code has already been claimed")]
    InvitationAlreadyClaimed,

    /// Confirm was requested for a seat that is not in claimed state with a
    /// submitted form. Also raised for a second confirm on the same seat.
    #[error("Seat {0} has no claim to confirm")]
    SeatNotClaimed(i32),

    /// A lesson analysis was requested for a seat that is not confirmed.
    #[error("Seat {0} is not confirmed")]
    SeatNotConfirmed(i32),

    /// The identity form is confirmed and can no longer be edited.
    #[error("Identity form for seat {0} is locked")]
    FormLocked(i32),

    /// The identity payload failed field-level validation.
    #[error("Identity payload failed validation")]
    Validation(Vec<FieldError>),

    /// Code generation collided with existing codes on every retry. Treated
    /// as fatal: collisions this persistent mean the alphabet is exhausted or
    /// the randomness source is broken.
    #[error("Could not generate a unique invitation code")]
    CodeGenerationExhausted,

    /// The claim transaction failed to commit. Safe for the caller to retry.
    #[error("Transaction failed, please retry")]
    TransactionFailed,
}

impl ClaimError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ClaimError::SeatNotFound(_) => "seat_not_found",
            ClaimError::InvitationNotFound => "invitation_not_found",
            ClaimError::InvitationExpired => "invitation_expired",
            ClaimError::InvitationAlreadyClaimed => "invitation_already_claimed",
            ClaimError::SeatNotClaimed(_) => "seat_not_claimed",
            ClaimError::SeatNotConfirmed(_) => "seat_not_confirmed",
            ClaimError::FormLocked(_) => "form_locked",
            ClaimError::Validation(_) => "validation_failed",
            ClaimError::CodeGenerationExhausted => "code_generation_exhausted",
            ClaimError::TransactionFailed => "transaction_failed",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ClaimError::SeatNotFound(_) | ClaimError::InvitationNotFound => StatusCode::NOT_FOUND,
            ClaimError::InvitationExpired => StatusCode::GONE,
            ClaimError::InvitationAlreadyClaimed
            | ClaimError::SeatNotClaimed(_)
            | ClaimError::SeatNotConfirmed(_) => StatusCode::CONFLICT,
            ClaimError::FormLocked(_) => StatusCode::LOCKED,
            ClaimError::Validation(_) => StatusCode::BAD_REQUEST,
            ClaimError::CodeGenerationExhausted | ClaimError::TransactionFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Converts claim lifecycle errors into HTTP responses.
///
/// All responses carry `{code, error}`; validation failures additionally list
/// the offending fields. Fatal infrastructure variants are logged server-side
/// before responding.
impl IntoResponse for ClaimError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            ClaimError::CodeGenerationExhausted | ClaimError::TransactionFailed
        ) {
            tracing::error!("{}", self);
        }

        let status = self.status();
        let code = self.code().to_string();

        match self {
            ClaimError::Validation(fields) => {
                let dto = ValidationErrorDto {
                    code,
                    error: "Identity payload failed validation".to_string(),
                    fields: fields
                        .into_iter()
                        .map(|f| FieldErrorDto {
                            field: f.field.to_string(),
                            message: f.message,
                        })
                        .collect(),
                };
                (status, Json(dto)).into_response()
            }
            err => {
                let dto = DomainErrorDto {
                    code,
                    error: err.to_string(),
                };
                (status, Json(dto)).into_response()
            }
        }
    }
}
