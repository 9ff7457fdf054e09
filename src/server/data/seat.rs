use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::status::SeatStatus;

pub struct SeatRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> SeatRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates `count` open seats for a lesson, numbered from 1.
    ///
    /// # Returns
    /// - `Ok(seats)`: The created seats in seat-number order
    /// - `Err(DbErr)`: Database error
    pub async fn create_for_lesson(
        &self,
        lesson_id: i32,
        count: i32,
    ) -> Result<Vec<entity::order_seat::Model>, DbErr> {
        let mut seats = Vec::with_capacity(count as usize);

        for seat_number in 1..=count {
            let seat = entity::order_seat::ActiveModel {
                id: ActiveValue::NotSet,
                lesson_id: ActiveValue::Set(lesson_id),
                seat_number: ActiveValue::Set(seat_number),
                status: ActiveValue::Set(SeatStatus::Open.as_str().to_string()),
                claimed_student_id: ActiveValue::Set(None),
                claimed_at: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now()),
            }
            .insert(self.conn)
            .await?;

            seats.push(seat);
        }

        Ok(seats)
    }

    /// Gets a seat by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::order_seat::Model>, DbErr> {
        entity::prelude::OrderSeat::find_by_id(id)
            .one(self.conn)
            .await
    }

    /// Gets all seats of a lesson in seat-number order.
    pub async fn get_by_lesson(
        &self,
        lesson_id: i32,
    ) -> Result<Vec<entity::order_seat::Model>, DbErr> {
        entity::prelude::OrderSeat::find()
            .filter(entity::order_seat::Column::LessonId.eq(lesson_id))
            .order_by_asc(entity::order_seat::Column::SeatNumber)
            .all(self.conn)
            .await
    }

    /// Gets a seat together with the lesson it belongs to.
    ///
    /// # Returns
    /// - `Ok(Some((seat, lesson)))`: Seat and its lesson
    /// - `Ok(None)`: Seat not found, or the lesson row is gone
    /// - `Err(DbErr)`: Database error
    pub async fn get_with_lesson(
        &self,
        id: i32,
    ) -> Result<Option<(entity::order_seat::Model, entity::lesson::Model)>, DbErr> {
        let Some(seat) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let lesson = entity::prelude::Lesson::find_by_id(seat.lesson_id)
            .one(self.conn)
            .await?;

        Ok(lesson.map(|lesson| (seat, lesson)))
    }

    /// Gets all seats claimed by a student.
    pub async fn get_by_claimed_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::order_seat::Model>, DbErr> {
        entity::prelude::OrderSeat::find()
            .filter(entity::order_seat::Column::ClaimedStudentId.eq(student_id))
            .all(self.conn)
            .await
    }

    /// Transitions a seat from open to claimed, guarded by `status = 'open'`.
    ///
    /// The guard keeps the transition monotonic under concurrency: a second
    /// claim against the same seat observes zero affected rows.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: 1 when the transition happened, 0 otherwise
    /// - `Err(DbErr)`: Database error
    pub async fn mark_claimed(
        &self,
        id: i32,
        student_id: i32,
        claimed_at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderSeat::update_many()
            .col_expr(
                entity::order_seat::Column::Status,
                Expr::value(SeatStatus::Claimed.as_str()),
            )
            .col_expr(
                entity::order_seat::Column::ClaimedStudentId,
                Expr::value(student_id),
            )
            .col_expr(
                entity::order_seat::Column::ClaimedAt,
                Expr::value(claimed_at),
            )
            .filter(entity::order_seat::Column::Id.eq(id))
            .filter(entity::order_seat::Column::Status.eq(SeatStatus::Open.as_str()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Transitions a seat from claimed to confirmed, guarded by `status = 'claimed'`.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: 1 when the transition happened, 0 otherwise
    /// - `Err(DbErr)`: Database error
    pub async fn mark_confirmed(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OrderSeat::update_many()
            .col_expr(
                entity::order_seat::Column::Status,
                Expr::value(SeatStatus::Confirmed.as_str()),
            )
            .filter(entity::order_seat::Column::Id.eq(id))
            .filter(entity::order_seat::Column::Status.eq(SeatStatus::Claimed.as_str()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
