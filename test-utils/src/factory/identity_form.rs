use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seat identity forms with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::identity_form::IdentityFormFactory;
///
/// let form = IdentityFormFactory::new(&db, seat.id)
///     .status("confirmed")
///     .confirmed_at(Utc::now())
///     .build()
///     .await?;
/// ```
pub struct IdentityFormFactory<'a> {
    db: &'a DatabaseConnection,
    seat_id: i32,
    status: String,
    student_name: String,
    phone: Option<String>,
    email: Option<String>,
    is_minor: bool,
    guardian_name: Option<String>,
    guardian_phone: Option<String>,
    guardian_email: Option<String>,
    insurance_provider: Option<String>,
    insurance_policy_number: Option<String>,
    submitted_at: Option<chrono::DateTime<Utc>>,
    confirmed_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> IdentityFormFactory<'a> {
    /// Creates a new IdentityFormFactory with default values.
    ///
    /// Defaults:
    /// - status: `"submitted"` with submitted_at set to now
    /// - student_name: `"Student {id}"` where id is auto-incremented
    /// - is_minor: `false`
    /// - all optional contact/guardian/insurance fields: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `seat_id` - Claimed seat the form belongs to
    pub fn new(db: &'a DatabaseConnection, seat_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            seat_id,
            status: "submitted".to_string(),
            student_name: format!("Student {}", id),
            phone: None,
            email: None,
            is_minor: false,
            guardian_name: None,
            guardian_phone: None,
            guardian_email: None,
            insurance_provider: None,
            insurance_policy_number: None,
            submitted_at: Some(Utc::now()),
            confirmed_at: None,
        }
    }

    /// Sets the form status ("draft", "submitted" or "confirmed").
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the student name on the form.
    pub fn student_name(mut self, student_name: impl Into<String>) -> Self {
        self.student_name = student_name.into();
        self
    }

    /// Sets the student phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the minor flag.
    pub fn is_minor(mut self, is_minor: bool) -> Self {
        self.is_minor = is_minor;
        self
    }

    /// Sets the guardian email.
    pub fn guardian_email(mut self, guardian_email: Option<String>) -> Self {
        self.guardian_email = guardian_email;
        self
    }

    /// Sets the submission timestamp.
    pub fn submitted_at(mut self, submitted_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.submitted_at = submitted_at;
        self
    }

    /// Sets the confirmation timestamp.
    pub fn confirmed_at(mut self, confirmed_at: Option<chrono::DateTime<Utc>>) -> Self {
        self.confirmed_at = confirmed_at;
        self
    }

    /// Builds and inserts the identity form entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::seat_identity_form::Model)` - Created form entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::seat_identity_form::Model, DbErr> {
        let now = Utc::now();
        entity::seat_identity_form::ActiveModel {
            id: ActiveValue::NotSet,
            seat_id: ActiveValue::Set(self.seat_id),
            status: ActiveValue::Set(self.status),
            student_name: ActiveValue::Set(self.student_name),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            is_minor: ActiveValue::Set(self.is_minor),
            guardian_name: ActiveValue::Set(self.guardian_name),
            guardian_phone: ActiveValue::Set(self.guardian_phone),
            guardian_email: ActiveValue::Set(self.guardian_email),
            insurance_provider: ActiveValue::Set(self.insurance_provider),
            insurance_policy_number: ActiveValue::Set(self.insurance_policy_number),
            submitted_at: ActiveValue::Set(self.submitted_at),
            confirmed_at: ActiveValue::Set(self.confirmed_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a submitted identity form with default values for the specified seat.
///
/// Shorthand for `IdentityFormFactory::new(db, seat_id).build().await`.
pub async fn create_identity_form(
    db: &DatabaseConnection,
    seat_id: i32,
) -> Result<entity::seat_identity_form::Model, DbErr> {
    IdentityFormFactory::new(db, seat_id).build().await
}
