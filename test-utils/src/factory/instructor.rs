use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test instructors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::instructor::InstructorFactory;
///
/// let instructor = InstructorFactory::new(&db)
///     .name("Anna Berg")
///     .email("anna@example.com")
///     .build()
///     .await?;
/// ```
pub struct InstructorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    email: String,
    password_hash: String,
}

impl<'a> InstructorFactory<'a> {
    /// Creates a new InstructorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Instructor {id}"` where id is auto-incremented
    /// - email: `"instructor{id}@example.com"`
    /// - password_hash: a fixed placeholder string (not a real argon2 hash)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Instructor {}", id),
            email: format!("instructor{}@example.com", id),
            password_hash: "$test$not-a-real-hash".to_string(),
        }
    }

    /// Sets the instructor name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the instructor email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash.
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    /// Builds and inserts the instructor entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::instructor::Model)` - Created instructor entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an instructor with default values.
///
/// Shorthand for `InstructorFactory::new(db).build().await`.
pub async fn create_instructor(
    db: &DatabaseConnection,
) -> Result<entity::instructor::Model, DbErr> {
    InstructorFactory::new(db).build().await
}
