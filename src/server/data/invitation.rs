use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct InvitationRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> InvitationRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Persists a new invitation for a seat.
    ///
    /// The code must already be unique; the column carries a unique index, so
    /// a duplicate insert surfaces as a database error.
    ///
    /// # Arguments
    /// - `code`: Invitation code
    /// - `seat_id`: Seat the invitation grants access to
    /// - `expires_at`: Deadline after which the code can no longer be claimed
    ///
    /// # Returns
    /// - `Ok(Model)`: The created invitation
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        code: String,
        seat_id: i32,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::seat_invitation::Model, DbErr> {
        entity::seat_invitation::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(code),
            seat_id: ActiveValue::Set(seat_id),
            expires_at: ActiveValue::Set(expires_at),
            claimed_at: ActiveValue::Set(None),
            claimed_student_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }

    /// Looks up an invitation by its code.
    pub async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<entity::seat_invitation::Model>, DbErr> {
        entity::prelude::SeatInvitation::find()
            .filter(entity::seat_invitation::Column::Code.eq(code))
            .one(self.conn)
            .await
    }

    /// Checks whether a code is already taken.
    ///
    /// Used as the uniqueness probe for code generation.
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::SeatInvitation::find()
            .filter(entity::seat_invitation::Column::Code.eq(code))
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }

    /// Gets all invitations ever issued for a seat, newest first.
    pub async fn find_by_seat(
        &self,
        seat_id: i32,
    ) -> Result<Vec<entity::seat_invitation::Model>, DbErr> {
        entity::prelude::SeatInvitation::find()
            .filter(entity::seat_invitation::Column::SeatId.eq(seat_id))
            .order_by_desc(entity::seat_invitation::Column::CreatedAt)
            .all(self.conn)
            .await
    }

    /// Marks an invitation claimed, guarded by `claimed_at IS NULL`.
    ///
    /// The guard makes the update a compare-and-swap: of two concurrent
    /// claims for the same code, exactly one observes a row change.
    ///
    /// # Arguments
    /// - `id`: Invitation id
    /// - `student_id`: Student the claim binds the invitation to
    /// - `claimed_at`: Claim timestamp
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: 1 when this call performed the claim, 0 when the
    ///   invitation was already claimed
    /// - `Err(DbErr)`: Database error
    pub async fn mark_claimed(
        &self,
        id: i32,
        student_id: i32,
        claimed_at: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::SeatInvitation::update_many()
            .col_expr(
                entity::seat_invitation::Column::ClaimedAt,
                Expr::value(claimed_at),
            )
            .col_expr(
                entity::seat_invitation::Column::ClaimedStudentId,
                Expr::value(student_id),
            )
            .filter(entity::seat_invitation::Column::Id.eq(id))
            .filter(entity::seat_invitation::Column::ClaimedAt.is_null())
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Expires all still-live, unclaimed invitations for a seat.
    ///
    /// Sets `expires_at` to `now` instead of deleting, so the rows stay
    /// available for audit. Used by the re-issue revocation policy.
    ///
    /// # Returns
    /// - `Ok(rows_affected)`: Number of invitations that were revoked
    /// - `Err(DbErr)`: Database error
    pub async fn expire_open_for_seat(
        &self,
        seat_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::SeatInvitation::update_many()
            .col_expr(entity::seat_invitation::Column::ExpiresAt, Expr::value(now))
            .filter(entity::seat_invitation::Column::SeatId.eq(seat_id))
            .filter(entity::seat_invitation::Column::ClaimedAt.is_null())
            .filter(entity::seat_invitation::Column::ExpiresAt.gt(now))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}
