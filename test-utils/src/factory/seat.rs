use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test order seats with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::seat::SeatFactory;
///
/// let seat = SeatFactory::new(&db, lesson.id)
///     .status("claimed")
///     .claimed_by(student.id, Utc::now())
///     .build()
///     .await?;
/// ```
pub struct SeatFactory<'a> {
    db: &'a DatabaseConnection,
    lesson_id: i32,
    seat_number: i32,
    status: String,
    claimed_student_id: Option<i32>,
    claimed_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> SeatFactory<'a> {
    /// Creates a new SeatFactory with default values.
    ///
    /// Defaults:
    /// - seat_number: auto-incremented
    /// - status: `"open"`
    /// - claimed_student_id / claimed_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `lesson_id` - Lesson the seat belongs to
    pub fn new(db: &'a DatabaseConnection, lesson_id: i32) -> Self {
        Self {
            db,
            lesson_id,
            seat_number: next_id() as i32,
            status: "open".to_string(),
            claimed_student_id: None,
            claimed_at: None,
        }
    }

    /// Sets the seat number.
    pub fn seat_number(mut self, seat_number: i32) -> Self {
        self.seat_number = seat_number;
        self
    }

    /// Sets the seat status ("open", "claimed" or "confirmed").
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Marks the seat as claimed by the given student at the given time.
    pub fn claimed_by(mut self, student_id: i32, claimed_at: chrono::DateTime<Utc>) -> Self {
        self.claimed_student_id = Some(student_id);
        self.claimed_at = Some(claimed_at);
        self
    }

    /// Builds and inserts the order seat entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order_seat::Model)` - Created seat entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order_seat::Model, DbErr> {
        entity::order_seat::ActiveModel {
            id: ActiveValue::NotSet,
            lesson_id: ActiveValue::Set(self.lesson_id),
            seat_number: ActiveValue::Set(self.seat_number),
            status: ActiveValue::Set(self.status),
            claimed_student_id: ActiveValue::Set(self.claimed_student_id),
            claimed_at: ActiveValue::Set(self.claimed_at),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open seat with default values for the specified lesson.
///
/// Shorthand for `SeatFactory::new(db, lesson_id).build().await`.
pub async fn create_seat(
    db: &DatabaseConnection,
    lesson_id: i32,
) -> Result<entity::order_seat::Model, DbErr> {
    SeatFactory::new(db, lesson_id).build().await
}
