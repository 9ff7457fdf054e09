use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::seat::{IdentityFormDto, SeatDto};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct CreateInvitationDto {
    /// Days until the invitation expires. Falls back to the configured
    /// default when absent.
    pub expires_in_days: Option<i64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct InvitationDto {
    pub code: String,
    pub seat_id: i32,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub claimed_at: Option<DateTime<Utc>>,
    pub claimed_student_id: Option<i32>,
    /// Computed at read time, never stored.
    pub is_expired: bool,
    /// Computed at read time, never stored.
    pub is_claimed: bool,
}

impl InvitationDto {
    /// Builds the response shape from a stored invitation.
    ///
    /// `is_expired` and `is_claimed` are derived against the passed clock and
    /// never persisted, so they are always current relative to the read. A
    /// code expiring at exactly `now` counts as expired.
    pub fn from_model(invitation: entity::seat_invitation::Model, now: DateTime<Utc>) -> Self {
        Self {
            is_expired: now >= invitation.expires_at,
            is_claimed: invitation.claimed_at.is_some(),
            code: invitation.code,
            seat_id: invitation.seat_id,
            expires_at: invitation.expires_at,
            claimed_at: invitation.claimed_at,
            claimed_student_id: invitation.claimed_student_id,
        }
    }
}

/// Claim request: the invitation code plus the student identity payload.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimDto {
    pub code: String,
    pub student_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_minor: bool,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClaimResultDto {
    pub seat: SeatDto,
    pub form: IdentityFormDto,
}
