use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::lesson::{CreateLessonDto, LessonDto, LessonListItemDto},
    server::{
        data::{
            lesson::{CreateLessonParams, LessonRepository},
            seat::SeatRepository,
        },
        error::AppError,
    },
};

const MAX_SEATS_PER_LESSON: i32 = 30;

pub struct LessonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LessonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a lesson with its open seats.
    ///
    /// The lesson row and all seats are inserted in one transaction, so a
    /// lesson can never exist with a partial seat set.
    ///
    /// # Arguments
    /// - `instructor_id`: Owning instructor
    /// - `dto`: Lesson creation data
    ///
    /// # Returns
    /// - `Ok(LessonDto)`: The created lesson with its seats
    /// - `Err(AppError)`: Validation or database error
    pub async fn create(
        &self,
        instructor_id: i32,
        dto: CreateLessonDto,
    ) -> Result<LessonDto, AppError> {
        let lesson_time = Self::parse_lesson_time(&dto.lesson_time)?;

        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required".to_string()));
        }
        if !matches!(dto.discipline.as_str(), "ski" | "snowboard") {
            return Err(AppError::BadRequest(
                "Discipline must be 'ski' or 'snowboard'".to_string(),
            ));
        }
        if !(1..=MAX_SEATS_PER_LESSON).contains(&dto.seat_count) {
            return Err(AppError::BadRequest(format!(
                "Seat count must be between 1 and {}",
                MAX_SEATS_PER_LESSON
            )));
        }

        let txn = self.db.begin().await?;

        let lesson = LessonRepository::new(&txn)
            .create(CreateLessonParams {
                instructor_id,
                title: dto.title,
                resort: dto.resort,
                discipline: dto.discipline,
                lesson_time,
                seat_count: dto.seat_count,
            })
            .await?;
        let seats = SeatRepository::new(&txn)
            .create_for_lesson(lesson.id, dto.seat_count)
            .await?;

        txn.commit().await?;

        Ok(Self::lesson_dto(lesson, seats))
    }

    /// Gets a lesson with its seats.
    ///
    /// Lessons are only visible to their owning instructor; a lesson owned by
    /// someone else reads as absent rather than forbidden.
    ///
    /// # Returns
    /// - `Ok(Some(LessonDto))`: The lesson with seats
    /// - `Ok(None)`: Lesson not found or owned by another instructor
    /// - `Err(AppError)`: Database error
    pub async fn get_by_id(
        &self,
        id: i32,
        instructor_id: i32,
    ) -> Result<Option<LessonDto>, AppError> {
        let Some(lesson) = LessonRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        if lesson.instructor_id != instructor_id {
            return Ok(None);
        }

        let seats = SeatRepository::new(self.db).get_by_lesson(lesson.id).await?;

        Ok(Some(Self::lesson_dto(lesson, seats)))
    }

    /// Lists an instructor's lessons, upcoming first.
    pub async fn list(&self, instructor_id: i32) -> Result<Vec<LessonListItemDto>, AppError> {
        let lessons = LessonRepository::new(self.db)
            .get_by_instructor(instructor_id)
            .await?;

        Ok(lessons.into_iter().map(LessonListItemDto::from).collect())
    }

    fn lesson_dto(
        lesson: entity::lesson::Model,
        seats: Vec<entity::order_seat::Model>,
    ) -> LessonDto {
        LessonDto {
            id: lesson.id,
            instructor_id: lesson.instructor_id,
            title: lesson.title,
            resort: lesson.resort,
            discipline: lesson.discipline,
            lesson_time: lesson.lesson_time,
            seat_count: lesson.seat_count,
            seats: seats.into_iter().map(Into::into).collect(),
            created_at: lesson.created_at,
        }
    }

    /// Parses lesson time from "YYYY-MM-DD HH:MM" format to DateTime<Utc>.
    ///
    /// Validates that the lesson time is not in the past.
    ///
    /// # Returns
    /// - `Ok(DateTime<Utc>)`: Parsed datetime
    /// - `Err(AppError)`: Invalid format or time is in the past
    fn parse_lesson_time(time_str: &str) -> Result<DateTime<Utc>, AppError> {
        let lesson_time = NaiveDateTime::parse_from_str(time_str, "%Y-%m-%d %H:%M")
            .map(|naive| naive.and_utc())
            .map_err(|e| {
                AppError::BadRequest(format!(
                    "Invalid lesson time format. Expected 'YYYY-MM-DD HH:MM', got '{}': {}",
                    time_str, e
                ))
            })?;

        if lesson_time < Utc::now() {
            return Err(AppError::BadRequest(
                "Lesson time cannot be in the past".to_string(),
            ));
        }

        Ok(lesson_time)
    }
}
