use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SeatDto {
    pub id: i32,
    pub lesson_id: i32,
    pub seat_number: i32,
    /// "open", "claimed" or "confirmed".
    pub status: String,
    pub claimed_student_id: Option<i32>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub claimed_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IdentityFormDto {
    pub id: i32,
    pub seat_id: i32,
    /// "draft", "submitted" or "confirmed".
    pub status: String,
    pub student_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_minor: bool,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_seconds_option")]
    pub confirmed_at: Option<DateTime<Utc>>,
}

impl From<entity::order_seat::Model> for SeatDto {
    fn from(seat: entity::order_seat::Model) -> Self {
        Self {
            id: seat.id,
            lesson_id: seat.lesson_id,
            seat_number: seat.seat_number,
            status: seat.status,
            claimed_student_id: seat.claimed_student_id,
            claimed_at: seat.claimed_at,
        }
    }
}

impl From<entity::seat_identity_form::Model> for IdentityFormDto {
    fn from(form: entity::seat_identity_form::Model) -> Self {
        Self {
            id: form.id,
            seat_id: form.seat_id,
            status: form.status,
            student_name: form.student_name,
            phone: form.phone,
            email: form.email,
            is_minor: form.is_minor,
            guardian_name: form.guardian_name,
            guardian_phone: form.guardian_phone,
            guardian_email: form.guardian_email,
            insurance_provider: form.insurance_provider,
            insurance_policy_number: form.insurance_policy_number,
            submitted_at: form.submitted_at,
            confirmed_at: form.confirmed_at,
        }
    }
}

/// Partial identity form update. Absent fields keep their stored values.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
pub struct UpdateIdentityFormDto {
    pub student_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_minor: Option<bool>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
}
