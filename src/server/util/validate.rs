//! Field-level validation of identity payloads.
//!
//! Validation is an explicit function over the service-layer params rather
//! than an annotation on the DTOs, so it can run anywhere (claim, form update,
//! tests) without involving the web framework.

use crate::server::{error::claim::FieldError, model::claim::IdentityFormParams};

const MAX_NAME_LENGTH: usize = 64;
const MAX_CONTACT_LENGTH: usize = 128;

/// Validates a full identity payload.
///
/// Rules:
/// - `student_name` is required, non-blank, at most 64 characters
/// - `phone`, when present, is 7-20 characters of digits, spaces, `+` or `-`
/// - `email` and `guardian_email`, when present, must contain a single `@`
///   with text on both sides
/// - a minor must have at least one guardian contact (phone or email)
/// - an insurance policy number requires an insurance provider
///
/// # Returns
/// - Empty vector when the payload is valid
/// - One `FieldError` per offending field otherwise
pub fn validate_identity_payload(params: &IdentityFormParams) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if params.student_name.trim().is_empty() {
        errors.push(FieldError::new("student_name", "Student name is required"));
    } else if params.student_name.chars().count() > MAX_NAME_LENGTH {
        errors.push(FieldError::new(
            "student_name",
            format!("Student name must be at most {} characters", MAX_NAME_LENGTH),
        ));
    }

    if let Some(phone) = params.phone.as_deref() {
        if let Some(message) = phone_error(phone) {
            errors.push(FieldError::new("phone", message));
        }
    }

    if let Some(email) = params.email.as_deref() {
        if !is_plausible_email(email) {
            errors.push(FieldError::new("email", "Invalid email address"));
        }
    }

    if let Some(guardian_phone) = params.guardian_phone.as_deref() {
        if let Some(message) = phone_error(guardian_phone) {
            errors.push(FieldError::new("guardian_phone", message));
        }
    }

    if let Some(guardian_email) = params.guardian_email.as_deref() {
        if !is_plausible_email(guardian_email) {
            errors.push(FieldError::new("guardian_email", "Invalid email address"));
        }
    }

    if params.is_minor
        && params.guardian_phone.as_deref().is_none_or(str::is_empty)
        && params.guardian_email.as_deref().is_none_or(str::is_empty)
    {
        errors.push(FieldError::new(
            "guardian_phone",
            "A guardian phone or email is required for minors",
        ));
    }

    if params.insurance_policy_number.is_some() && params.insurance_provider.is_none() {
        errors.push(FieldError::new(
            "insurance_provider",
            "Insurance provider is required when a policy number is given",
        ));
    }

    errors
}

fn phone_error(phone: &str) -> Option<String> {
    let length = phone.chars().count();
    if !(7..=20).contains(&length) {
        return Some("Phone number must be 7-20 characters".to_string());
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))
    {
        return Some("Phone number may only contain digits, spaces, '+' and '-'".to_string());
    }

    None
}

fn is_plausible_email(email: &str) -> bool {
    if email.chars().count() > MAX_CONTACT_LENGTH {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::claim::IdentityFormParams;

    fn valid_params() -> IdentityFormParams {
        IdentityFormParams {
            student_name: "王小明".to_string(),
            phone: Some("+46 70 000 0000".to_string()),
            email: Some("student@example.com".to_string()),
            is_minor: false,
            guardian_name: None,
            guardian_phone: None,
            guardian_email: None,
            insurance_provider: None,
            insurance_policy_number: None,
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(validate_identity_payload(&valid_params()).is_empty());
    }

    #[test]
    fn rejects_blank_student_name() {
        let mut params = valid_params();
        params.student_name = "   ".to_string();

        let errors = validate_identity_payload(&params);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "student_name");
    }

    #[test]
    fn rejects_overlong_student_name() {
        let mut params = valid_params();
        params.student_name = "x".repeat(65);

        let errors = validate_identity_payload(&params);
        assert_eq!(errors[0].field, "student_name");
    }

    #[test]
    fn rejects_malformed_phone() {
        let mut params = valid_params();
        params.phone = Some("call-me-maybe".to_string());

        let errors = validate_identity_payload(&params);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
    }

    #[test]
    fn rejects_malformed_email() {
        let mut params = valid_params();
        params.email = Some("not-an-email".to_string());

        let errors = validate_identity_payload(&params);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
    }

    #[test]
    fn minor_requires_guardian_contact() {
        let mut params = valid_params();
        params.is_minor = true;

        let errors = validate_identity_payload(&params);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "guardian_phone");

        params.guardian_email = Some("g@example.com".to_string());
        assert!(validate_identity_payload(&params).is_empty());
    }

    #[test]
    fn policy_number_requires_provider() {
        let mut params = valid_params();
        params.insurance_policy_number = Some("POL-123".to_string());

        let errors = validate_identity_payload(&params);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "insurance_provider");
    }

    #[test]
    fn collects_multiple_field_errors() {
        let mut params = valid_params();
        params.student_name = String::new();
        params.phone = Some("123".to_string());
        params.email = Some("@".to_string());

        let errors = validate_identity_payload(&params);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["student_name", "phone", "email"]);
    }
}
