use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::seat::SeatDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateLessonDto {
    pub title: String,
    pub resort: String,
    /// "ski" or "snowboard".
    pub discipline: String,
    pub lesson_time: String, // Format: "YYYY-MM-DD HH:MM" in UTC
    pub seat_count: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LessonDto {
    pub id: i32,
    pub instructor_id: i32,
    pub title: String,
    pub resort: String,
    pub discipline: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub lesson_time: DateTime<Utc>,
    pub seat_count: i32,
    pub seats: Vec<SeatDto>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LessonListItemDto {
    pub id: i32,
    pub title: String,
    pub resort: String,
    pub discipline: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub lesson_time: DateTime<Utc>,
    pub seat_count: i32,
}

impl From<entity::lesson::Model> for LessonListItemDto {
    fn from(lesson: entity::lesson::Model) -> Self {
        Self {
            id: lesson.id,
            title: lesson.title,
            resort: lesson.resort,
            discipline: lesson.discipline,
            lesson_time: lesson.lesson_time,
            seat_count: lesson.seat_count,
        }
    }
}
