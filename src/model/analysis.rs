use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecordAnalysisDto {
    /// Rating from 1 to 5.
    pub rating: i32,
    pub notes: String,
    /// When true, the analysis is visible to other instructors.
    #[serde(default)]
    pub shared: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AnalysisDto {
    pub id: i32,
    pub seat_id: i32,
    pub instructor_id: i32,
    pub rating: i32,
    pub notes: String,
    pub shared: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
}

impl From<entity::lesson_analysis::Model> for AnalysisDto {
    fn from(analysis: entity::lesson_analysis::Model) -> Self {
        Self {
            id: analysis.id,
            seat_id: analysis.seat_id,
            instructor_id: analysis.instructor_id,
            rating: analysis.rating,
            notes: analysis.notes,
            shared: analysis.shared,
            created_at: analysis.created_at,
            updated_at: analysis.updated_at,
        }
    }
}
