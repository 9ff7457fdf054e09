use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    phone: Option<String>,
    email: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - phone: `Some("+4670000{id}")`
    /// - email: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            phone: Some(format!("+4670000{:04}", id)),
            email: None,
        }
    }

    /// Sets the student name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the email address.
    pub fn email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
