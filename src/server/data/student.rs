use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct StudentRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets a student by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.conn).await
    }

    /// Finds an existing student by name and phone, or creates a new one.
    ///
    /// A claim binds a seat to a student record. Students have no accounts, so
    /// the only identity available is the submitted name plus phone number: when
    /// both match an existing record it is reused, otherwise a fresh record is
    /// created. Claims without a phone number always create a new record.
    ///
    /// # Arguments
    /// - `name`: Student name as submitted on the identity form
    /// - `phone`: Optional phone number
    /// - `email`: Optional email, stored on newly created records only
    ///
    /// # Returns
    /// - `Ok(Model)`: The existing or newly created student
    /// - `Err(DbErr)`: Database error
    pub async fn find_or_create(
        &self,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> Result<entity::student::Model, DbErr> {
        if let Some(phone) = phone {
            let existing = entity::prelude::Student::find()
                .filter(entity::student::Column::Name.eq(name))
                .filter(entity::student::Column::Phone.eq(phone))
                .one(self.conn)
                .await?;

            if let Some(student) = existing {
                return Ok(student);
            }
        }

        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name.to_string()),
            phone: ActiveValue::Set(phone.map(str::to_string)),
            email: ActiveValue::Set(email.map(str::to_string)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }
}
