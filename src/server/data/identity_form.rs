use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::{
    claim::{IdentityFormParams, UpdateIdentityFormParams},
    status::FormStatus,
};

pub struct IdentityFormRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> IdentityFormRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates an identity form in `submitted` status for a claimed seat.
    ///
    /// # Arguments
    /// - `seat_id`: The claimed seat the form belongs to
    /// - `params`: Identity data from the claim payload
    /// - `submitted_at`: Submission timestamp (the claim time)
    ///
    /// # Returns
    /// - `Ok(Model)`: The created form
    /// - `Err(DbErr)`: Database error, including unique violations when a form
    ///   for the seat already exists
    pub async fn create_submitted(
        &self,
        seat_id: i32,
        params: &IdentityFormParams,
        submitted_at: DateTime<Utc>,
    ) -> Result<entity::seat_identity_form::Model, DbErr> {
        entity::seat_identity_form::ActiveModel {
            id: ActiveValue::NotSet,
            seat_id: ActiveValue::Set(seat_id),
            status: ActiveValue::Set(FormStatus::Submitted.as_str().to_string()),
            student_name: ActiveValue::Set(params.student_name.clone()),
            phone: ActiveValue::Set(params.phone.clone()),
            email: ActiveValue::Set(params.email.clone()),
            is_minor: ActiveValue::Set(params.is_minor),
            guardian_name: ActiveValue::Set(params.guardian_name.clone()),
            guardian_phone: ActiveValue::Set(params.guardian_phone.clone()),
            guardian_email: ActiveValue::Set(params.guardian_email.clone()),
            insurance_provider: ActiveValue::Set(params.insurance_provider.clone()),
            insurance_policy_number: ActiveValue::Set(params.insurance_policy_number.clone()),
            submitted_at: ActiveValue::Set(Some(submitted_at)),
            confirmed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(submitted_at),
            updated_at: ActiveValue::Set(submitted_at),
        }
        .insert(self.conn)
        .await
    }

    /// Gets the identity form of a seat.
    pub async fn find_by_seat(
        &self,
        seat_id: i32,
    ) -> Result<Option<entity::seat_identity_form::Model>, DbErr> {
        entity::prelude::SeatIdentityForm::find()
            .filter(entity::seat_identity_form::Column::SeatId.eq(seat_id))
            .one(self.conn)
            .await
    }

    /// Applies a partial update to an unconfirmed form.
    ///
    /// Fields left as `None` in `params` keep their stored value. Callers are
    /// responsible for checking the form is not confirmed before updating.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated form
    /// - `Err(DbErr)`: Database error
    pub async fn update_fields(
        &self,
        form: entity::seat_identity_form::Model,
        params: UpdateIdentityFormParams,
        now: DateTime<Utc>,
    ) -> Result<entity::seat_identity_form::Model, DbErr> {
        let submitted_at = form.submitted_at;
        let mut active_model: entity::seat_identity_form::ActiveModel = form.into();

        if let Some(student_name) = params.student_name {
            active_model.student_name = ActiveValue::Set(student_name);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(Some(email));
        }
        if let Some(is_minor) = params.is_minor {
            active_model.is_minor = ActiveValue::Set(is_minor);
        }
        if let Some(guardian_name) = params.guardian_name {
            active_model.guardian_name = ActiveValue::Set(Some(guardian_name));
        }
        if let Some(guardian_phone) = params.guardian_phone {
            active_model.guardian_phone = ActiveValue::Set(Some(guardian_phone));
        }
        if let Some(guardian_email) = params.guardian_email {
            active_model.guardian_email = ActiveValue::Set(Some(guardian_email));
        }
        if let Some(insurance_provider) = params.insurance_provider {
            active_model.insurance_provider = ActiveValue::Set(Some(insurance_provider));
        }
        if let Some(insurance_policy_number) = params.insurance_policy_number {
            active_model.insurance_policy_number = ActiveValue::Set(Some(insurance_policy_number));
        }

        active_model.status = ActiveValue::Set(FormStatus::Submitted.as_str().to_string());
        active_model.submitted_at = ActiveValue::Set(Some(submitted_at.unwrap_or(now)));
        active_model.updated_at = ActiveValue::Set(now);

        active_model.update(self.conn).await
    }

    /// Transitions a form from submitted to confirmed, guarded by
    /// `status = 'submitted'`.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: 1 when the transition happened, 0 otherwise
    /// - `Err(DbErr)`: Database error
    pub async fn mark_confirmed(
        &self,
        seat_id: i32,
        confirmed_at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::SeatIdentityForm::update_many()
            .col_expr(
                entity::seat_identity_form::Column::Status,
                Expr::value(FormStatus::Confirmed.as_str()),
            )
            .col_expr(
                entity::seat_identity_form::Column::ConfirmedAt,
                Expr::value(confirmed_at),
            )
            .col_expr(
                entity::seat_identity_form::Column::UpdatedAt,
                Expr::value(confirmed_at),
            )
            .filter(entity::seat_identity_form::Column::SeatId.eq(seat_id))
            .filter(
                entity::seat_identity_form::Column::Status.eq(FormStatus::Submitted.as_str()),
            )
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
