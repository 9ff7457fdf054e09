use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seat invitations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::invitation::InvitationFactory;
///
/// let invitation = InvitationFactory::new(&db, seat.id)
///     .expires_at(Utc::now() - chrono::Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct InvitationFactory<'a> {
    db: &'a DatabaseConnection,
    seat_id: i32,
    code: String,
    expires_at: chrono::DateTime<Utc>,
    claimed_at: Option<chrono::DateTime<Utc>>,
    claimed_student_id: Option<i32>,
}

impl<'a> InvitationFactory<'a> {
    /// Creates a new InvitationFactory with default values.
    ///
    /// Defaults:
    /// - code: unique 8-character code derived from an auto-incremented counter
    /// - expires_at: 7 days from now
    /// - claimed_at / claimed_student_id: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `seat_id` - Seat the invitation grants access to
    pub fn new(db: &'a DatabaseConnection, seat_id: i32) -> Self {
        Self {
            db,
            seat_id,
            code: format!("TST{:05}", next_id()),
            expires_at: Utc::now() + chrono::Duration::days(7),
            claimed_at: None,
            claimed_student_id: None,
        }
    }

    /// Sets the invitation code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the expiry timestamp.
    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Marks the invitation as claimed by the given student at the given time.
    pub fn claimed_by(mut self, student_id: i32, claimed_at: chrono::DateTime<Utc>) -> Self {
        self.claimed_student_id = Some(student_id);
        self.claimed_at = Some(claimed_at);
        self
    }

    /// Builds and inserts the invitation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::seat_invitation::Model)` - Created invitation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::seat_invitation::Model, DbErr> {
        entity::seat_invitation::ActiveModel {
            id: ActiveValue::NotSet,
            code: ActiveValue::Set(self.code),
            seat_id: ActiveValue::Set(self.seat_id),
            expires_at: ActiveValue::Set(self.expires_at),
            claimed_at: ActiveValue::Set(self.claimed_at),
            claimed_student_id: ActiveValue::Set(self.claimed_student_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unclaimed invitation with default values for the specified seat.
///
/// Shorthand for `InvitationFactory::new(db, seat_id).build().await`.
pub async fn create_invitation(
    db: &DatabaseConnection,
    seat_id: i32,
) -> Result<entity::seat_invitation::Model, DbErr> {
    InvitationFactory::new(db, seat_id).build().await
}
