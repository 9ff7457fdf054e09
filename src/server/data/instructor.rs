use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct InstructorRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> InstructorRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates an instructor account.
    ///
    /// # Arguments
    /// - `name`: Display name
    /// - `email`: Login email, unique
    /// - `password_hash`: argon2 hash of the password
    ///
    /// # Returns
    /// - `Ok(Model)`: The created instructor
    /// - `Err(DbErr)`: Database error, including unique violations on email
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<entity::instructor::Model, DbErr> {
        entity::instructor::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }

    /// Gets an instructor by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::instructor::Model>, DbErr> {
        entity::prelude::Instructor::find_by_id(id)
            .one(self.conn)
            .await
    }

    /// Gets an instructor by login email.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::instructor::Model>, DbErr> {
        entity::prelude::Instructor::find()
            .filter(entity::instructor::Column::Email.eq(email))
            .one(self.conn)
            .await
    }
}
