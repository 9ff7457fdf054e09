use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::seat::IdentityFormDto,
    server::{
        data::{identity_form::IdentityFormRepository, seat::SeatRepository},
        error::{claim::ClaimError, AppError},
        model::{
            claim::{IdentityFormParams, UpdateIdentityFormParams},
            status::FormStatus,
        },
        service::audit::AuditLogger,
        util::validate::validate_identity_payload,
    },
};

pub struct IdentityFormService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> IdentityFormService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the identity form of a seat.
    ///
    /// An unclaimed seat has no form; that is a `None`, not an error.
    ///
    /// # Returns
    /// - `Ok(Some(IdentityFormDto))`: The form
    /// - `Ok(None)`: Seat exists but has no form yet
    /// - `Err(AppError)`: Seat missing or database error
    pub async fn get(&self, seat_id: i32) -> Result<Option<IdentityFormDto>, AppError> {
        if SeatRepository::new(self.db).get_by_id(seat_id).await?.is_none() {
            return Err(ClaimError::SeatNotFound(seat_id).into());
        }

        let form = IdentityFormRepository::new(self.db)
            .find_by_seat(seat_id)
            .await?;

        Ok(form.map(IdentityFormDto::from))
    }

    /// Applies a partial update to the form of a claimed seat.
    ///
    /// The merged result (stored values overlaid with the update) is
    /// validated as a whole, so an update cannot move a valid form into an
    /// invalid state. Once the form is confirmed every update is rejected
    /// with `FormLocked` and the stored form stays untouched; downstream
    /// consumers rely on confirmed forms never changing.
    ///
    /// # Arguments
    /// - `seat_id`: Seat whose form is updated
    /// - `params`: Partial update; absent fields keep their stored values
    ///
    /// # Returns
    /// - `Ok(IdentityFormDto)`: The updated form, back in submitted status
    /// - `Err(AppError)`: Lifecycle, validation, or database error
    pub async fn update(
        &self,
        seat_id: i32,
        params: UpdateIdentityFormParams,
    ) -> Result<IdentityFormDto, AppError> {
        if SeatRepository::new(self.db).get_by_id(seat_id).await?.is_none() {
            return Err(ClaimError::SeatNotFound(seat_id).into());
        }

        let form_repo = IdentityFormRepository::new(self.db);
        let form = form_repo
            .find_by_seat(seat_id)
            .await?
            .ok_or(ClaimError::SeatNotClaimed(seat_id))?;

        if FormStatus::parse(&form.status) == Some(FormStatus::Confirmed) {
            return Err(ClaimError::FormLocked(seat_id).into());
        }

        let merged = merge_params(&form, &params);
        let errors = validate_identity_payload(&merged);
        if !errors.is_empty() {
            return Err(ClaimError::Validation(errors).into());
        }

        let updated = form_repo.update_fields(form, params, Utc::now()).await?;

        AuditLogger::new(self.db)
            .log(
                "student",
                "identity_form.updated",
                "seat_identity_form",
                updated.id,
                json!({ "seat_id": seat_id }),
            )
            .await;

        Ok(updated.into())
    }
}

/// Overlays a partial update onto the stored form for whole-payload validation.
fn merge_params(
    form: &entity::seat_identity_form::Model,
    params: &UpdateIdentityFormParams,
) -> IdentityFormParams {
    IdentityFormParams {
        student_name: params
            .student_name
            .clone()
            .unwrap_or_else(|| form.student_name.clone()),
        phone: params.phone.clone().or_else(|| form.phone.clone()),
        email: params.email.clone().or_else(|| form.email.clone()),
        is_minor: params.is_minor.unwrap_or(form.is_minor),
        guardian_name: params
            .guardian_name
            .clone()
            .or_else(|| form.guardian_name.clone()),
        guardian_phone: params
            .guardian_phone
            .clone()
            .or_else(|| form.guardian_phone.clone()),
        guardian_email: params
            .guardian_email
            .clone()
            .or_else(|| form.guardian_email.clone()),
        insurance_provider: params
            .insurance_provider
            .clone()
            .or_else(|| form.insurance_provider.clone()),
        insurance_policy_number: params
            .insurance_policy_number
            .clone()
            .or_else(|| form.insurance_policy_number.clone()),
    }
}
