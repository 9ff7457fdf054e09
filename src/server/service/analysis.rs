use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::analysis::{AnalysisDto, RecordAnalysisDto},
    server::{
        data::{
            analysis::{AnalysisRepository, RecordAnalysisParams},
            seat::SeatRepository,
            student::StudentRepository,
        },
        error::{auth::AuthError, claim::ClaimError, AppError},
        model::status::SeatStatus,
        service::audit::AuditLogger,
    },
};

pub struct AnalysisService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AnalysisService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records (or re-records) the analysis of a confirmed seat.
    ///
    /// Only the instructor owning the seat's lesson may record, and only once
    /// the seat is confirmed; an analysis refers to a lesson that actually
    /// took place with a locked identity form behind it.
    ///
    /// # Arguments
    /// - `instructor_id`: The authenticated instructor
    /// - `seat_id`: The confirmed seat being analyzed
    /// - `dto`: Rating, notes, and sharing flag
    ///
    /// # Returns
    /// - `Ok(AnalysisDto)`: The stored analysis
    /// - `Err(AppError)`: Ownership, lifecycle, validation, or database error
    pub async fn record(
        &self,
        instructor_id: i32,
        seat_id: i32,
        dto: RecordAnalysisDto,
    ) -> Result<AnalysisDto, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let (seat, lesson) = SeatRepository::new(self.db)
            .get_with_lesson(seat_id)
            .await?
            .ok_or(ClaimError::SeatNotFound(seat_id))?;

        if lesson.instructor_id != instructor_id {
            return Err(AuthError::AccessDenied(
                instructor_id,
                "Instructor attempted to record an analysis for another instructor's lesson"
                    .to_string(),
            )
            .into());
        }
        if SeatStatus::parse(&seat.status) != Some(SeatStatus::Confirmed) {
            return Err(ClaimError::SeatNotConfirmed(seat_id).into());
        }

        let analysis = AnalysisRepository::new(self.db)
            .upsert(RecordAnalysisParams {
                seat_id,
                instructor_id,
                rating: dto.rating,
                notes: dto.notes,
                shared: dto.shared,
            })
            .await?;

        AuditLogger::new(self.db)
            .log(
                &format!("instructor:{}", instructor_id),
                "analysis.recorded",
                "lesson_analysis",
                analysis.id,
                json!({ "seat_id": seat_id, "rating": analysis.rating }),
            )
            .await;

        Ok(analysis.into())
    }

    /// Gets the analysis of a seat.
    ///
    /// Visible to the authoring instructor always, to others only when the
    /// analysis is shared.
    ///
    /// # Returns
    /// - `Ok(Some(AnalysisDto))`: The visible analysis
    /// - `Ok(None)`: No analysis recorded yet
    /// - `Err(AppError)`: Seat missing, access denied, or database error
    pub async fn get_for_seat(
        &self,
        instructor_id: i32,
        seat_id: i32,
    ) -> Result<Option<AnalysisDto>, AppError> {
        if SeatRepository::new(self.db).get_by_id(seat_id).await?.is_none() {
            return Err(ClaimError::SeatNotFound(seat_id).into());
        }

        let Some(analysis) = AnalysisRepository::new(self.db).find_by_seat(seat_id).await? else {
            return Ok(None);
        };

        if !analysis.shared && analysis.instructor_id != instructor_id {
            return Err(AuthError::AccessDenied(
                instructor_id,
                "Instructor attempted to read an unshared analysis".to_string(),
            )
            .into());
        }

        Ok(Some(analysis.into()))
    }

    /// Lists a student's analyses visible to the calling instructor.
    ///
    /// This is the record-sharing surface: an instructor taking over a
    /// student sees the analyses other instructors chose to share, plus
    /// everything they authored themselves.
    ///
    /// # Returns
    /// - `Ok(analyses)`: Own and shared analyses across the student's seats
    /// - `Err(AppError)`: Student missing or database error
    pub async fn list_for_student(
        &self,
        instructor_id: i32,
        student_id: i32,
    ) -> Result<Vec<AnalysisDto>, AppError> {
        if StudentRepository::new(self.db)
            .get_by_id(student_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        let seat_ids = SeatRepository::new(self.db)
            .get_by_claimed_student(student_id)
            .await?
            .into_iter()
            .map(|seat| seat.id)
            .collect();

        let analyses = AnalysisRepository::new(self.db)
            .find_visible_for_seats(seat_ids, instructor_id)
            .await?;

        Ok(analyses.into_iter().map(Into::into).collect())
    }
}
