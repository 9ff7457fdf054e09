use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct AnalysisRepository<'a, C> {
    conn: &'a C,
}

/// Parameters for recording a lesson analysis.
pub struct RecordAnalysisParams {
    pub seat_id: i32,
    pub instructor_id: i32,
    pub rating: i32,
    pub notes: String,
    pub shared: bool,
}

impl<'a, C: ConnectionTrait> AnalysisRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates or replaces the analysis of a seat.
    ///
    /// A seat carries at most one analysis; recording again overwrites the
    /// rating, notes and shared flag while keeping the original created_at.
    ///
    /// # Returns
    /// - `Ok(Model)`: The stored analysis
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        params: RecordAnalysisParams,
    ) -> Result<entity::lesson_analysis::Model, DbErr> {
        let now = Utc::now();
        let existing = self.find_by_seat(params.seat_id).await?;

        if let Some(analysis) = existing {
            let mut active_model: entity::lesson_analysis::ActiveModel = analysis.into();
            active_model.rating = ActiveValue::Set(params.rating);
            active_model.notes = ActiveValue::Set(params.notes);
            active_model.shared = ActiveValue::Set(params.shared);
            active_model.updated_at = ActiveValue::Set(now);

            active_model.update(self.conn).await
        } else {
            entity::lesson_analysis::ActiveModel {
                id: ActiveValue::NotSet,
                seat_id: ActiveValue::Set(params.seat_id),
                instructor_id: ActiveValue::Set(params.instructor_id),
                rating: ActiveValue::Set(params.rating),
                notes: ActiveValue::Set(params.notes),
                shared: ActiveValue::Set(params.shared),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            }
            .insert(self.conn)
            .await
        }
    }

    /// Gets the analysis recorded for a seat.
    pub async fn find_by_seat(
        &self,
        seat_id: i32,
    ) -> Result<Option<entity::lesson_analysis::Model>, DbErr> {
        entity::prelude::LessonAnalysis::find()
            .filter(entity::lesson_analysis::Column::SeatId.eq(seat_id))
            .one(self.conn)
            .await
    }

    /// Gets the analyses visible to an instructor for a set of seats.
    ///
    /// Visible means authored by the instructor or marked shared.
    ///
    /// # Returns
    /// - `Ok(analyses)`: Matching analyses, newest first
    /// - `Err(DbErr)`: Database error
    pub async fn find_visible_for_seats(
        &self,
        seat_ids: Vec<i32>,
        instructor_id: i32,
    ) -> Result<Vec<entity::lesson_analysis::Model>, DbErr> {
        if seat_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LessonAnalysis::find()
            .filter(entity::lesson_analysis::Column::SeatId.is_in(seat_ids))
            .filter(
                Condition::any()
                    .add(entity::lesson_analysis::Column::Shared.eq(true))
                    .add(entity::lesson_analysis::Column::InstructorId.eq(instructor_id)),
            )
            .order_by_desc(entity::lesson_analysis::Column::CreatedAt)
            .all(self.conn)
            .await
    }
}
