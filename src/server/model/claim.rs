use crate::model::{invitation::ClaimDto, seat::UpdateIdentityFormDto};

/// Identity data submitted together with a claim.
///
/// This is the service-layer shape of the claim payload, detached from the
/// HTTP DTO so validation can run without the web framework.
#[derive(Debug, Clone)]
pub struct IdentityFormParams {
    pub student_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_minor: bool,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_email: Option<String>,
    pub insurance_provider: Option<String>,
    pub insurance_policy_number: Option<String>,
}

impl From<ClaimDto> for IdentityFormParams {
    fn from(dto: ClaimDto) -> Self {
        Self {
            student_name: dto.student_name,
            phone: dto.phone,
            email: dto.email,
            is_minor: dto.is_minor,
            guardian_name: dto.guardian_name,
            guardian_phone: dto.guardian_phone,
            guardian_email: dto.guardian_email,
            insurance_provider: dto.insurance_provider,
            insurance_policy_number: dto.insurance_policy_number,
        }
    }
}

/// Partial identity form update. Absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateIdentityFormParams {
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

impl From<UpdateIdentityFormDto> for UpdateIdentityFormParams {
    fn from(dto: UpdateIdentityFormDto) -> Self {
        Self {
            student_name: dto.student_name,
            phone: dto.phone,
            email: dto.email,
            is_minor: dto.is_minor,
            guardian_name: dto.guardian_name,
            guardian_phone: dto.guardian_phone,
            guardian_email: dto.guardian_email,
            insurance_provider: dto.insurance_provider,
            insurance_policy_number: dto.insurance_policy_number,
        }
    }
}
