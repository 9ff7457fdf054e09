use crate::server::{
    data::identity_form::IdentityFormRepository,
    model::claim::{IdentityFormParams, UpdateIdentityFormParams},
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_submitted;
mod mark_confirmed;
mod update_fields;

fn sample_params() -> IdentityFormParams {
    IdentityFormParams {
        student_name: "Anna Berg".to_string(),
        phone: Some("+46700001111".to_string()),
        email: None,
        is_minor: false,
        guardian_name: None,
        guardian_phone: None,
        guardian_email: None,
        insurance_provider: None,
        insurance_policy_number: None,
    }
}
