use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct LessonRepository<'a, C> {
    conn: &'a C,
}

/// Parameters for creating a lesson.
pub struct CreateLessonParams {
    pub instructor_id: i32,
    pub title: String,
    pub resort: String,
    pub discipline: String,
    pub lesson_time: DateTime<Utc>,
    pub seat_count: i32,
}

impl<'a, C: ConnectionTrait> LessonRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new lesson.
    ///
    /// Only the lesson row is inserted here; the service layer creates the
    /// seats alongside inside the same transaction.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created lesson
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreateLessonParams,
    ) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            id: ActiveValue::NotSet,
            instructor_id: ActiveValue::Set(params.instructor_id),
            title: ActiveValue::Set(params.title),
            resort: ActiveValue::Set(params.resort),
            discipline: ActiveValue::Set(params.discipline),
            lesson_time: ActiveValue::Set(params.lesson_time),
            seat_count: ActiveValue::Set(params.seat_count),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }

    /// Gets a lesson by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find_by_id(id).one(self.conn).await
    }

    /// Gets all lessons of an instructor, upcoming first.
    pub async fn get_by_instructor(
        &self,
        instructor_id: i32,
    ) -> Result<Vec<entity::lesson::Model>, DbErr> {
        entity::prelude::Lesson::find()
            .filter(entity::lesson::Column::InstructorId.eq(instructor_id))
            .order_by_asc(entity::lesson::Column::LessonTime)
            .all(self.conn)
            .await
    }
}
