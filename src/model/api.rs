use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic error response body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Error response carrying a stable machine code alongside the message.
///
/// Used by the claim lifecycle so clients can branch on `code` instead of
/// parsing `error`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DomainErrorDto {
    pub code: String,
    pub error: String,
}

/// One field-level validation failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Validation error response listing every offending field.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ValidationErrorDto {
    pub code: String,
    pub error: String,
    pub fields: Vec<FieldErrorDto>,
}
