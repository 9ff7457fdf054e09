use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::lesson::LessonFactory;
///
/// let lesson = LessonFactory::new(&db, instructor.id)
///     .title("Powder basics")
///     .discipline("snowboard")
///     .build()
///     .await?;
/// ```
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    instructor_id: i32,
    title: String,
    resort: String,
    discipline: String,
    lesson_time: chrono::DateTime<Utc>,
    seat_count: i32,
}

impl<'a> LessonFactory<'a> {
    /// Creates a new LessonFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Lesson {id}"` where id is auto-incremented
    /// - resort: `"Niseko"`
    /// - discipline: `"ski"`
    /// - lesson_time: 3 days from now
    /// - seat_count: 4
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `instructor_id` - Instructor who owns the lesson
    pub fn new(db: &'a DatabaseConnection, instructor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            instructor_id,
            title: format!("Lesson {}", id),
            resort: "Niseko".to_string(),
            discipline: "ski".to_string(),
            lesson_time: Utc::now() + chrono::Duration::days(3),
            seat_count: 4,
        }
    }

    /// Sets the lesson title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the resort name.
    pub fn resort(mut self, resort: impl Into<String>) -> Self {
        self.resort = resort.into();
        self
    }

    /// Sets the discipline ("ski" or "snowboard").
    pub fn discipline(mut self, discipline: impl Into<String>) -> Self {
        self.discipline = discipline.into();
        self
    }

    /// Sets the scheduled lesson time.
    pub fn lesson_time(mut self, lesson_time: chrono::DateTime<Utc>) -> Self {
        self.lesson_time = lesson_time;
        self
    }

    /// Sets the number of seats the lesson offers.
    pub fn seat_count(mut self, seat_count: i32) -> Self {
        self.seat_count = seat_count;
        self
    }

    /// Builds and inserts the lesson entity into the database.
    ///
    /// Only the lesson row is inserted; seats are not created here. Use the
    /// seat factory for individual seats.
    ///
    /// # Returns
    /// - `Ok(entity::lesson::Model)` - Created lesson entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::lesson::Model, DbErr> {
        entity::lesson::ActiveModel {
            id: ActiveValue::NotSet,
            instructor_id: ActiveValue::Set(self.instructor_id),
            title: ActiveValue::Set(self.title),
            resort: ActiveValue::Set(self.resort),
            discipline: ActiveValue::Set(self.discipline),
            lesson_time: ActiveValue::Set(self.lesson_time),
            seat_count: ActiveValue::Set(self.seat_count),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a lesson with default values for the specified instructor.
///
/// Shorthand for `LessonFactory::new(db, instructor_id).build().await`.
pub async fn create_lesson(
    db: &DatabaseConnection,
    instructor_id: i32,
) -> Result<entity::lesson::Model, DbErr> {
    LessonFactory::new(db, instructor_id).build().await
}
